use std::sync::Mutex;

use broadside::{
    generate, DeployCommand, DeploymentValidator, Game, GameConfig, Orientation, ShipType,
};
use log::{Level, LevelFilter, Metadata, Record};

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn levels_since(mark: usize) -> Vec<Level> {
    RECORDS.lock().unwrap()[mark..].iter().map(|(l, _)| *l).collect()
}

#[test]
fn probe_rejections_log_below_warn() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Debug);

    let mut game = Game::new(1, generate(10, 10).unwrap());
    let v = DeploymentValidator::new(GameConfig::default());
    let off_board = DeployCommand {
        ship_type: ShipType::BattleShip,
        orientation: Orientation::Horizontal,
        coordinate: "H10".to_string(),
    };

    // The random-placement probe validates speculatively; its rejections
    // must not surface as warnings.
    let mark = RECORDS.lock().unwrap().len();
    assert!(v.placement_for(&game, &off_board).is_err());
    assert!(levels_since(mark).iter().all(|l| *l > Level::Warn));

    // A rejected deploy command is a real event and does warn.
    let mark = RECORDS.lock().unwrap().len();
    assert!(v.deploy(&mut game, &off_board).is_err());
    assert!(levels_since(mark).contains(&Level::Warn));
}
