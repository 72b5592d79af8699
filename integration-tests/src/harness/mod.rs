pub mod capture;
pub mod fixtures;

pub use capture::{CapturedEvent, EventLog};
pub use fixtures::{LogFile, access_line};
