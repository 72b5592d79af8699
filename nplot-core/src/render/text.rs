use crate::render::{Renderer, thousands};
use crate::series::SeriesReport;
use owo_colors::OwoColorize;
use std::io::{self, Write};

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub color: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl TextRenderer {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn title(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn endpoint(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &SeriesReport, out: &mut dyn Write) -> io::Result<()> {
        let title = format!(
            "Access Log Endpoint Hits - {} hits",
            thousands(report.total_hits)
        );
        writeln!(out, "{}", self.title(&title))?;
        writeln!(out, "{}", "=".repeat(title.chars().count()))?;

        if report.skipped.total() > 0 {
            writeln!(
                out,
                "skipped {} malformed lines",
                thousands(report.skipped.total())
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Buckets ({}s each):", report.interval)?;
        for (i, label) in report.labels.iter().enumerate() {
            writeln!(out, "  {i:>2}  {label}")?;
        }
        writeln!(out)?;

        // Shared scale so rows are comparable.
        let peak = report
            .series
            .values()
            .flat_map(|counts| counts.iter().copied())
            .max()
            .unwrap_or(0);

        let width = report
            .series
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        for (endpoint, counts) in &report.series {
            let total: u64 = counts.iter().sum();
            let counts_col = counts
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            // pad before coloring, escape codes would skew the width
            let name = format!("{endpoint:<width$}");
            writeln!(
                out,
                "  {}  {}  {:>8}  [{}]",
                self.endpoint(&name),
                sparkline(counts, peak),
                thousands(total),
                counts_col
            )?;
        }

        Ok(())
    }
}

pub(crate) fn sparkline(counts: &[u64], peak: u64) -> String {
    counts
        .iter()
        .map(|&c| {
            if c == 0 || peak == 0 {
                ' '
            } else {
                let idx = ((c * (SPARK.len() as u64 - 1)) / peak) as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}
