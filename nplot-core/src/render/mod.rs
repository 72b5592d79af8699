//! Turns a finalized [`SeriesReport`](crate::series::SeriesReport) into output.
//!
//! The text renderer draws one sparkline row per endpoint for the terminal;
//! the JSON renderer emits the whole report for charting elsewhere.

mod json;
#[cfg(test)]
mod tests;
mod text;

use crate::series::SeriesReport;
use std::io::{self, Write};

pub use json::JsonRenderer;
pub use text::TextRenderer;

pub trait Renderer {
    fn render(&self, report: &SeriesReport, out: &mut dyn Write) -> io::Result<()>;
}

/// `1234567` -> `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
