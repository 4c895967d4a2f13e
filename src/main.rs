use clap::Parser;

use surestake::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(&cli) {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
