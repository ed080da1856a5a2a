// Swaggregate CLI Library

pub mod error;
pub mod output;
pub mod router;

pub use error::{CliError, CliResult};
pub use router::{run, Cli};
