pub mod sections;
pub mod tour;

pub use crate::domain::model::{Section, TourReport, Transcript};
pub use crate::domain::ports::{Clock, ConfigProvider, Entropy};
pub use crate::utils::error::Result;
