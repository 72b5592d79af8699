mod banner;
mod cli;

use crate::cli::Cli;
use clap::Parser;
use nplot_core::logging::init_logging;
use nplot_core::render::{JsonRenderer, Renderer, TextRenderer};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging("warn");

    let path = match cli.path {
        Some(path) => path,
        None => {
            banner::print_banner(!cli.no_color);
            match banner::prompt_path() {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("failed to read path: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
    };

    let renderer: Box<dyn Renderer> = if cli.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(TextRenderer {
            color: !cli.no_color,
        })
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if nplot_core::run(&path, cli.max_endpoints, renderer.as_ref(), &mut out) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
