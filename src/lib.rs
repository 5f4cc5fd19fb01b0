pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{
    cli::{DiceEntropy, SystemClock},
    CliConfig,
};
pub use core::tour::TourEngine;
pub use domain::model::{Section, TourReport, Transcript};
pub use utils::error::{Result, TourError};
