use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const BANNER: &str = r"
    _   __      ____  __      __
   / | / /     / __ \/ /___  / /_
  /  |/ /_____/ /_/ / / __ \/ __/
 / /|  /_____/ ____/ / /_/ / /_
/_/ |_/     /_/   /_/\____/\__/
";

const PROMPT: &str = "This program helps you plot Nginx URL hits by parsing your access log file.\n\n\
                      What's the path to the Nginx access logs? (e.g. access.log) ";

pub fn print_banner(color: bool) {
    if color {
        println!("{}", BANNER.blue());
    } else {
        println!("{BANNER}");
    }
}

pub fn prompt_path() -> Result<PathBuf> {
    print!("{PROMPT}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    let path = line.trim();
    if path.is_empty() {
        bail!("no path entered");
    }

    Ok(PathBuf::from(path))
}
