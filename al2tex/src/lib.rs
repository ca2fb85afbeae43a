pub mod cli;
pub mod config;
pub mod diagram;
pub mod error;
pub mod options;

#[macro_use]
extern crate log;

pub use config::Config;
pub use diagram::{DiagramType, InputFormat};
pub use error::{ErrorKind, OptionsError};
pub use options::parse_options;
