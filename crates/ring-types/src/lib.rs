pub mod config;
pub mod error;
pub mod pair;

pub use config::*;
pub use error::*;
pub use pair::*;
