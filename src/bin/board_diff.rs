use anyhow::Result;
use boardcore::{diff, Position};

#[derive(clap::Parser, Debug)]
#[command(name = "board-diff", about = "Show how pieces slide between two positions")]
struct Args {
    /// Old position: FEN, placement field, or "startpos"
    #[arg(value_name = "OLD")]
    old: String,
    /// New position
    #[arg(value_name = "NEW")]
    new: String,
    /// Print the resulting boards as well
    #[arg(long, default_value_t = false)]
    boards: bool,
}

fn load(s: &str) -> Result<Position> {
    if s == "startpos" { return Ok(Position::startpos()); }
    Position::from_fen(s).map_err(|e| anyhow::anyhow!("{s}: {e}"))
}

fn main() -> Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let old = load(&args.old)?;
    let new = load(&args.new)?;

    let d = diff(&old, &new);
    if d.is_empty() { println!("(no changes)"); } else { print!("{d}"); }
    if args.boards {
        println!("\nold:\n{old}\nnew:\n{new}");
    }
    Ok(())
}
