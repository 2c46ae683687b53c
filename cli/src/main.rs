mod changes;
mod cli;
mod error;
mod source;
mod ui;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = changes::execute(cli.file);

    if let Err(err) = result {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
