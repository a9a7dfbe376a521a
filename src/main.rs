use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use broadside::{
    init_logging, AttackCommand, DeployCommand, GameConfig, GameService, InMemoryRepository,
    Orientation, ShipType,
};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship rules engine", long_about = None)]
struct Cli {
    #[arg(long, help = "Path to a JSON config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Board width override (max 26)")]
    width: Option<usize>,
    #[arg(long, help = "Board height override (max 26)")]
    height: Option<usize>,
}

fn parse_orientation(word: &str) -> Option<Orientation> {
    match word.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  deploy <type> <h|v> <coordinate>   e.g. deploy Cruiser h B2");
    println!("  attack <coordinate>                e.g. attack B2");
    println!("  status");
    println!("  reset");
    println!("  quit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::from_path(&path)?,
        None => GameConfig::default(),
    };
    if let Some(w) = cli.width {
        config.board_width = w;
    }
    if let Some(h) = cli.height {
        config.board_height = h;
    }

    let service = GameService::new(InMemoryRepository::new(), config);
    let game_id = service.reset().await?;
    println!("Started game {game_id} on a {}x{} board.", config.board_width, config.board_height);
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["deploy", ship, orientation, coordinate] => {
                let ship_type = ShipType::from_name(ship);
                let orientation = parse_orientation(orientation);
                match (ship_type, orientation) {
                    (Some(ship_type), Some(orientation)) => {
                        let cmd = DeployCommand {
                            ship_type,
                            orientation,
                            coordinate: coordinate.to_uppercase(),
                        };
                        match service.deploy(&cmd).await {
                            Ok(placement) => println!("Deployed at {:?}", placement.cells),
                            Err(e) => println!("{} ({})", e, e.code()),
                        }
                    }
                    _ => println!("Unknown ship type or orientation"),
                }
            }
            ["attack", coordinate] => {
                let cmd = AttackCommand {
                    coordinate: coordinate.to_uppercase(),
                };
                match service.attack(&cmd).await {
                    Ok(outcome) => match outcome.message {
                        Some(msg) => println!("{:?} - {}", outcome.result, msg),
                        None => println!("{:?}", outcome.result),
                    },
                    Err(e) => println!("{} ({})", e, e.code()),
                }
            }
            ["status"] => match service.status().await {
                Ok(view) => {
                    println!("Game {} - {:?}", view.game_id, view.state);
                    for ship in &view.ships {
                        println!("  {} health {} at {:?}", ship.ship_type, ship.health, ship.cells);
                    }
                    println!("{}", view.board_text);
                }
                Err(e) => println!("{} ({})", e, e.code()),
            },
            ["reset"] => match service.reset().await {
                Ok(id) => println!("Started game {id}"),
                Err(e) => println!("{} ({})", e, e.code()),
            },
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => print_help(),
        }
    }
    Ok(())
}
