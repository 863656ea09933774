// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

mod cli;

use std::process;

use clap::Parser;

use crate::cli::args::{Cli, Commands};
use crate::cli::classify::run_classify;
use crate::cli::logging::set_verbose;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify(args) => {
            set_verbose(args.verbose);
            if let Err(e) = run_classify(&args) {
                crate::error!("{e}");
                process::exit(1);
            }
        }
    }
}
