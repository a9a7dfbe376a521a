//! Self-play simulation: deploy a random legal fleet, then fire at random
//! cells until the game is over. Prints a JSON summary line.

use broadside::{
    flatten, AttackCommand, AttackResult, DeploymentValidator, GameConfig, GameService,
    GameState, InMemoryRepository, ShipType,
};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let service = GameService::new(InMemoryRepository::new(), config);
    let validator = DeploymentValidator::new(config);
    // Random placement can dead-end when buffers crowd the board; retire
    // the attempt and redraw on a fresh board.
    let game_id = 'fleet: loop {
        let game_id = service.reset().await?;
        for ship_type in ShipType::ALL {
            for _ in 0..config.fleet.max_count(ship_type) {
                let game = service.current_game().await?;
                match validator.random_placement(&mut rng, &game, ship_type) {
                    Ok(cmd) => {
                        service.deploy(&cmd).await?;
                    }
                    Err(_) => continue 'fleet,
                }
            }
        }
        break game_id;
    };

    let game = service.current_game().await?;
    let mut targets = flatten(&game.board);
    targets.shuffle(&mut rng);

    let mut shots = 0;
    let mut hits = 0;
    let mut sinks = 0;
    for coordinate in targets {
        let outcome = service.attack(&AttackCommand { coordinate }).await?;
        shots += 1;
        match outcome.result {
            AttackResult::Hit => hits += 1,
            AttackResult::Sink => {
                hits += 1;
                sinks += 1;
            }
            AttackResult::Miss => {}
        }
        if service.current_game().await?.state == GameState::GameOver {
            break;
        }
    }

    let result = json!({
        "game_id": game_id,
        "seed": seed,
        "shots": shots,
        "hits": hits,
        "sinks": sinks,
        "state": format!("{:?}", service.current_game().await?.state),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
