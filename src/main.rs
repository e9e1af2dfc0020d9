use anyhow::{Context, Result};
use boardcore::interact::{parse_script, InteractionConfig, InteractionMachine, StaticBoard};
use boardcore::{Effect, Position, Side};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a pointer/keyboard event script against a board", long_about = None)]
struct Args {
    /// JSON-lines event script
    #[arg(long)]
    script: PathBuf,

    /// Starting FEN (or just its placement field)
    #[arg(long)]
    fen: Option<String>,

    /// Only pieces of this side may move: 'w' or 'b'
    #[arg(long)]
    turn: Option<String>,

    /// Interaction config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rendered square width in pixels
    #[arg(long, default_value_t = 60.0)]
    square_width: f32,

    /// Apply finished moves to the position as the script runs
    #[arg(long)]
    play: bool,
}

fn parse_side(s: &str) -> Result<Side> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid side: use 'w' or 'b'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InteractionConfig::load(path).with_context(|| format!("load config {}", path.display()))?,
        None => InteractionConfig::default(),
    };
    let position = match &args.fen {
        Some(fen) => Position::from_fen(fen).map_err(|e| anyhow::anyhow!("Invalid FEN string: {e}"))?,
        None => Position::startpos(),
    };
    let mut board = StaticBoard::new(position);
    board.turn = args.turn.as_deref().map(parse_side).transpose()?;
    board.square_width = args.square_width;

    let file = File::open(&args.script).with_context(|| format!("open script {}", args.script.display()))?;
    let events = parse_script(BufReader::new(file)).context("parse script")?;
    info!("replaying {} events", events.len());

    let mut machine = InteractionMachine::new(config);
    println!("{:>4}  {:<14} {:<24} state", "#", "event", "");
    for (i, ev) in events.iter().enumerate() {
        let effects = machine.handle(ev, &board);
        println!("{:>4}  {:<14} {:<24} {}", i + 1, ev.kind(), format!("tab={}", machine.tabbable()), machine.state_id());
        for eff in &effects {
            println!("      -> {eff}");
            if let (true, Effect::MoveFinish { from, to, piece }) = (args.play, eff) {
                board.position.remove(*from);
                board.position.put(*to, *piece);
            }
        }
    }
    if args.play {
        println!("\n{}", board.position);
    }
    Ok(())
}
