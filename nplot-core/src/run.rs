use crate::error::RunError;
use crate::render::Renderer;
use crate::series::{IngestOutcome, SeriesAggregator, SeriesReport};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{error, info};

/// Plots the access log at `path`: ingest, bucket, then hand the report to
/// `renderer`.
///
/// Returns `false` after telling the user what went wrong when the file cannot
/// be opened, holds no usable lines, or the output cannot be written.
pub fn run(
    path: &Path,
    max_endpoints: NonZeroUsize,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> bool {
    match try_run(path, max_endpoints, renderer, out) {
        Ok(report) => {
            info!(
                path = %path.display(),
                total_hits = report.total_hits,
                endpoints = report.series.len(),
                "access log plotted"
            );
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to plot access log");
            report_error(&err);
            false
        }
    }
}

pub fn try_run(
    path: &Path,
    max_endpoints: NonZeroUsize,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<SeriesReport, RunError> {
    let file = File::open(path).map_err(|e| RunError::file_unreadable(path, e))?;

    let mut agg = SeriesAggregator::new(max_endpoints);
    ingest(BufReader::new(file), &mut agg).map_err(|e| RunError::read(path, e))?;

    let report = agg.finalize()?;

    renderer
        .render(&report, out)
        .and_then(|_| out.flush())
        .map_err(RunError::Render)?;

    Ok(report)
}

/// Feeds `reader` line by line until it runs dry or the endpoint cap is hit.
///
/// Lines that are not valid UTF-8 are decoded lossily and then usually
/// skipped as malformed.
pub fn ingest<R: BufRead>(mut reader: R, agg: &mut SeriesAggregator) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if agg.ingest_line(line) == IngestOutcome::CapReached {
            break;
        }
    }

    Ok(())
}

fn report_error(err: &RunError) {
    eprintln!();
    match err.user_hint() {
        Some(hint) => eprintln!("{hint}"),
        None => eprintln!("{err}"),
    }
    eprintln!();
}
