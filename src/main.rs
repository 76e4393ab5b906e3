// src/main.rs
use sheet_scrape::cli;

fn main() {
    if let Err(e) = cli::run() {
        sheet_scrape::loge!("run failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
