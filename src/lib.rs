mod attack;
mod board;
mod catalog;
mod common;
mod config;
pub mod coords;
mod deploy;
mod game;
mod lifecycle;
mod logging;
pub mod repo;

pub use attack::*;
pub use board::{flatten, generate, render, reshape};
pub use catalog::*;
pub use common::*;
pub use config::*;
pub use coords::Orientation;
pub use deploy::*;
pub use game::*;
pub use lifecycle::*;
pub use logging::init_logging;
pub use repo::{GameRepository, InMemoryRepository};
