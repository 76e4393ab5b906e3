// src/params.rs
use std::env;
use std::path::PathBuf;

// Net config
/// Built-in source URL. Left empty on purpose: a fresh checkout takes the
/// "no source configured" no-op path instead of fetching somebody's sheet.
/// Paste your published-sheet CSV URL here, or set the env override.
pub const DEFAULT_SHEET_URL: &str = "";
pub const SHEET_URL_ENV: &str = "GOOGLE_SHEET_CSV_URL";
pub const USER_AGENT: &str = "sheet_scrape/0.1";
pub const MAX_REDIRECT_HOPS: usize = 10;
pub const FETCH_DEADLINE_SECS: u64 = 30; // spans the whole redirect chain

// Export
pub const DEFAULT_OUT_PATH: &str = "data/projects.json";

#[derive(Clone, Debug)]
pub struct Params {
    pub url: Option<String>, // source CSV URL; None → no-op run
    pub out: PathBuf,        // output file path
}

impl Params {
    pub fn new() -> Self {
        let url = env::var(SHEET_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| {
                let d = DEFAULT_SHEET_URL.trim();
                (!d.is_empty()).then(|| s!(d))
            });
        Self {
            url,
            out: PathBuf::from(DEFAULT_OUT_PATH),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
