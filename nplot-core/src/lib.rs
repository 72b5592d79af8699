pub mod access_log;
pub mod error;
pub mod logging;
pub mod render;
mod run;
pub mod series;

pub use error::RunError;
pub use run::{ingest, run, try_run};
