//! The `statdex` binary is intentionally thin: all terminal concerns live in
//! `cli/`, and this file only invokes `cli::run()` and handles process
//! termination.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
