use chrono::{TimeZone, Utc};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// One request line in the combined Nginx log format.
pub fn access_line(endpoint: &str, timestamp: i64) -> String {
    let date = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .expect("timestamp out of range")
        .format("%d/%b/%Y:%H:%M:%S %z");

    format!(
        "203.0.113.9 - - [{date}] \"GET {endpoint} HTTP/1.1\" 200 1024 \"-\" \"Mozilla/5.0\""
    )
}

/// An access log written to a temp dir that lives as long as this value.
pub struct LogFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl LogFile {
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");

        let mut body = String::new();
        for line in lines {
            body.push_str(line.as_ref());
            body.push('\n');
        }
        fs::write(&path, body).expect("failed to write access log");

        Self { _dir: dir, path }
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("access.log");
        fs::write(&path, bytes).expect("failed to write access log");

        Self { _dir: dir, path }
    }
}
