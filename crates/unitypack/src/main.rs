use std::process::ExitCode;

use clap::Parser;

mod cli;
mod ui;

fn main() -> ExitCode {
    let app = cli::App::parse();
    cli::logging::init(app.verbose);

    match cli::unpack::run(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
