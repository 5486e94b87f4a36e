//! `kamel` - Camel K command-line client.
//!
//! This build carries the `config` subcommand, which manages the persisted
//! settings file, and the pieces of `install` that read from it.

use kamel::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
