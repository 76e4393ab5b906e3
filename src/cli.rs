// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{Params, SHEET_URL_ENV};
use crate::runner::{self, RunOutcome};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    match runner::run(&params)? {
        RunOutcome::Written { path, projects } => {
            println!("Wrote {} project(s) to {}", projects, path.display());
        }
        RunOutcome::SkippedNoSource => {
            println!("No sheet URL configured.");
            println!("Set {SHEET_URL_ENV} or pass --url <URL>.");
            println!("Keeping existing {} unchanged.", params.out.display());
        }
        RunOutcome::SkippedEmptySheet => {
            println!("Sheet appears empty (no data rows).");
            println!("Keeping existing {} unchanged.", params.out.display());
        }
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                let v = v.trim();
                if v.is_empty() {
                    return Err("Empty value for --url".into());
                }
                params.url = Some(s!(v));
            }
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing output path")?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    Ok(())
}
