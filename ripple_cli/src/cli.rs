use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ripple_core::{Industry, Scope};

#[derive(Parser, Debug)]
#[command(name = "ripple", version, about = "Carbon Ripples emissions measurement form")]
pub struct Cli {
    /// JSON file with form settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// List every field of the form
    Fields {
        #[arg(long)]
        json: bool,
    },
    /// Show which fields an industry/scope selection displays
    Layout {
        /// apparel, solar or plastics
        #[arg(long, value_parser = parse_industry)]
        industry: Option<Industry>,
        /// Selected scope (1, 2 or 3); repeat for several. Defaults to all
        #[arg(long = "scope", value_parser = parse_scope)]
        scopes: Vec<Scope>,
        /// Select no scope at all
        #[arg(long, conflicts_with = "scopes")]
        no_scopes: bool,
        #[arg(long)]
        json: bool,
    },
    /// Fill in the form interactively
    Session,
}

fn parse_industry(value: &str) -> Result<Industry, String> {
    Industry::from_str_flexible(value).map_err(|e| e.to_string())
}

fn parse_scope(value: &str) -> Result<Scope, String> {
    Scope::from_str_flexible(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_arguments() {
        let cli = Cli::try_parse_from([
            "ripple", "layout", "--industry", "solar", "--scope", "1", "--scope", "3",
        ])
        .unwrap();
        match cli.cmd {
            Cmd::Layout { industry, scopes, no_scopes, json } => {
                assert_eq!(industry, Some(Industry::SolarPanelManufacturing));
                assert_eq!(scopes, vec![Scope::Scope1, Scope::Scope3]);
                assert!(!no_scopes);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_industry_is_rejected() {
        assert!(Cli::try_parse_from(["ripple", "layout", "--industry", "mining"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["ripple", "session", "--config", "form.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("form.json")));
    }
}
