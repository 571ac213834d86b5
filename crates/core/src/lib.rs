pub mod config;
pub mod error;
pub mod schedule;

pub use config::Config;
pub use error::*;
pub use schedule::*;
