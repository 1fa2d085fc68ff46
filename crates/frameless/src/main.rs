mod args;
mod run;

use clap::Parser;

use frameless_core::{config, log, log_info};

use crate::args::Cli;

fn main() {
    let cli = Cli::parse_from(args::normalize(std::env::args_os()));

    let config = config::load();
    log::init(&config.logging);
    log_info!("frameless {} started", env!("CARGO_PKG_VERSION"));

    let code = match cli.into_target() {
        Ok(target) => run::execute(&target, &config),
        Err(e) => run::report(&e),
    };

    std::process::exit(code);
}
