use std::process;

use clap::Parser;

use toplist::args::Args;
use toplist::config::Config;

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not build configuration: {err}");
        process::exit(1);
    });

    if let Err(e) = toplist::run(config) {
        eprintln!("Fatal Error: {e}");
        process::exit(1);
    }
}
