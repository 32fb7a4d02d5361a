pub mod config;
pub mod details;
pub mod error;
pub mod gemini;
pub mod logging;
pub mod server;

pub use error::{Error, Result};
