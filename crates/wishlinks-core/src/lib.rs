pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod finder;
pub mod gacha;
pub mod wish_link;

pub use error::{Error, Result};
