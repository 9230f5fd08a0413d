//! # Carbon Ripples CLI
//!
//! Terminal front-end for the emissions measurement form: inspect the field
//! catalog, preview layouts, or fill in a form interactively.

mod cli;
mod report;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ripple_core::{Field, FormConfig, FormLayout, MeasurementForm, ScopeSet};

use cli::{Cli, Cmd};
use session::Session;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match FormConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    match run(cli.cmd, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cmd: Cmd, config: FormConfig) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cmd {
        Cmd::Fields { json } => {
            if json {
                let fields: Vec<_> = Field::all().map(report::field_json).collect();
                writeln!(out, "{}", to_json(&fields)?)?;
            } else {
                report::print_catalog(&mut out)?;
            }
        }
        Cmd::Layout {
            industry,
            scopes,
            no_scopes,
            json,
        } => {
            let scopes = if no_scopes {
                ScopeSet::empty()
            } else if scopes.is_empty() {
                ScopeSet::all()
            } else {
                scopes.into_iter().collect()
            };
            let layout = FormLayout::compute(industry, &scopes);
            if json {
                writeln!(out, "{}", to_json(&layout)?)?;
            } else {
                report::print_layout(&mut out, &layout, None)?;
            }
        }
        Cmd::Session => {
            let stdin = io::stdin();
            Session::new(MeasurementForm::new(config), stdin.lock(), out).run()?;
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
