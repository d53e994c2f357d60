use clap::Parser;
use moma_rdf::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Usage and missing-file errors are plain diagnostics, everything else is prefixed
            match &error {
                moma_rdf::Error::Usage { .. } => {
                    eprintln!("{}", error);
                    eprintln!("Usage: moma-rdf <INPUT> [OPTIONS]  (see --help)");
                }
                moma_rdf::Error::FileNotFound { .. } => eprintln!("{}", error),
                _ => eprintln!("Error: {:#}", error),
            }
            process::exit(error.exit_code());
        }
    }
}
