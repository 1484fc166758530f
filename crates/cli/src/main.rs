//! dbench2benchstat entry point.

fn main() {
    if let Err(e) = dbench2benchstat_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
