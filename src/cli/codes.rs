use clap::Parser;
use extrude::{Catalog, Config};
use tracing::instrument;

use super::terminal::{Colorize, rule};

#[derive(Debug, Parser)]
#[command(about = "List the alteration codes in the catalog")]
pub struct Codes {
    /// Only show categories matching this filter (case-insensitive substring)
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Codes {
    #[instrument(level = "debug", skip(self, _config))]
    pub fn run(self, _config: &Config) -> anyhow::Result<()> {
        let filter = self.category.as_deref().map(str::to_lowercase);
        let rules: Vec<_> = Catalog::global()
            .rules()
            .filter(|candidate| {
                filter.as_ref().is_none_or(|filter| {
                    candidate
                        .category()
                        .label()
                        .to_lowercase()
                        .contains(filter)
                })
            })
            .collect();

        if rules.is_empty() {
            println!("No alteration codes match the filter.");
            return Ok(());
        }

        match self.output {
            OutputFormat::Json => {
                use serde_json::json;

                let entries: Vec<_> = rules
                    .iter()
                    .map(|rule| {
                        json!({
                            "code": rule.pattern(),
                            "category": rule.category().label(),
                            "suffix_required": rule.suffix().is_required(),
                            "description": rule.description(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Table => {
                println!("{:<10} {:<34} DESCRIPTION", "CODE", "CATEGORY");
                println!("{}", rule().dim());

                for entry in &rules {
                    // A trailing <N> marks codes that take a numeric suffix.
                    let code = if entry.suffix().is_required() {
                        format!("{}<N>", entry.pattern())
                    } else {
                        entry.pattern().to_string()
                    };
                    println!(
                        "{code:<10} {:<34} {}",
                        entry.category().label(),
                        entry.description()
                    );
                }

                println!();
                println!("{}", format!("{} codes", rules.len()).dim());
            }
        }

        Ok(())
    }
}
