pub mod bill;
pub mod config;
pub mod describe;
pub mod error;
pub mod events;
pub mod io;
pub mod paths;
pub mod predict;
pub mod related;
pub mod status;
pub mod term;
pub mod types;

pub use error::{LegisError, Result};
