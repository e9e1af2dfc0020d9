use boardcore::interact::keyboard::navigate;
use boardcore::interact::Key;
use boardcore::{Orientation, Square};

const W: Orientation = Orientation::White;
const B: Orientation = Orientation::Black;

#[test]
fn arrows_follow_orientation() {
    assert_eq!(navigate(Square::E2, Key::ArrowUp, false, W), Some(Square::E3));
    assert_eq!(navigate(Square::E2, Key::ArrowDown, false, W), Some(Square::E1));
    assert_eq!(navigate(Square::E2, Key::ArrowLeft, false, W), Some(Square::D2));
    assert_eq!(navigate(Square::E2, Key::ArrowRight, false, W), Some(Square::F2));

    assert_eq!(navigate(Square::E2, Key::ArrowUp, false, B), Some(Square::E1));
    assert_eq!(navigate(Square::E2, Key::ArrowLeft, false, B), Some(Square::F2));
}

#[test]
fn arrows_clamp_at_edges() {
    assert_eq!(navigate(Square::A8, Key::ArrowUp, false, W), Some(Square::A8));
    assert_eq!(navigate(Square::A8, Key::ArrowLeft, false, W), Some(Square::A8));
    assert_eq!(navigate(Square::H1, Key::ArrowDown, false, W), Some(Square::H1));
    assert_eq!(navigate(Square::H1, Key::ArrowRight, false, W), Some(Square::H1));
    assert_eq!(navigate(Square::H1, Key::ArrowUp, false, B), Some(Square::H1));
}

#[test]
fn home_end_and_pages() {
    assert_eq!(navigate(Square::E2, Key::Home, false, W), Some(Square::A2));
    assert_eq!(navigate(Square::E2, Key::End, false, W), Some(Square::H2));
    assert_eq!(navigate(Square::E2, Key::Home, true, W), Some(Square::A8));
    assert_eq!(navigate(Square::E2, Key::End, true, W), Some(Square::H1));
    assert_eq!(navigate(Square::E2, Key::PageUp, false, W), Some(Square::E8));
    assert_eq!(navigate(Square::E2, Key::PageDown, false, W), Some(Square::E1));

    assert_eq!(navigate(Square::E2, Key::Home, true, B), Some(Square::H1));
    assert_eq!(navigate(Square::E2, Key::PageUp, false, B), Some(Square::E1));
    assert_eq!(navigate(Square::E2, Key::Home, false, B), Some(Square::H2));
}

#[test]
fn non_navigation_keys_do_not_move_focus() {
    for key in [Key::Enter, Key::Space, Key::Escape, Key::Other] {
        assert_eq!(navigate(Square::E2, key, false, W), None);
    }
}
