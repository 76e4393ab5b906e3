// src/runner.rs
use std::path::PathBuf;

use crate::error::Error;
use crate::params::Params;
use crate::{csv, net, sheet, store};

/// What one run did. The two skip variants are deliberate no-ops:
/// whatever was written before stays untouched and the process reports
/// success.
#[derive(Debug)]
pub enum RunOutcome {
    Written { path: PathBuf, projects: usize },
    SkippedNoSource,
    SkippedEmptySheet,
}

/// Top-level pipeline: fetch → tokenize → map → write.
pub fn run(params: &Params) -> Result<RunOutcome, Error> {
    let Some(url) = params.url.as_deref() else {
        logf!("no sheet url configured; leaving {} alone", params.out.display());
        return Ok(RunOutcome::SkippedNoSource);
    };

    println!("Fetching sheet CSV...");
    logf!("fetching sheet csv from {url}");
    let text = net::fetch_text(url)?;

    let grid = csv::parse_rows(&text);
    logf!("tokenized {} row(s)", grid.len());

    let export = match sheet::build_export(&grid) {
        Err(Error::EmptySheet) => {
            logf!("sheet has no data rows; leaving {} alone", params.out.display());
            return Ok(RunOutcome::SkippedEmptySheet);
        }
        other => other?,
    };
    println!("Found {} project(s) in sheet.", grid.len() - 1);

    store::write_export(&export, &params.out)?;
    logf!(
        "wrote {} project(s) to {}",
        export.projects.len(),
        params.out.display()
    );

    Ok(RunOutcome::Written {
        path: params.out.clone(),
        projects: export.projects.len(),
    })
}
