use clap::Parser;
use extrude::{Config, Decoded};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Decode a part number into a human-readable description")]
pub struct Decode {
    /// The part number to decode (e.g. HFSB5-2020-500-LCP-RCP-AV360)
    part_number: String,

    /// Output format (pretty, json)
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Fail on the first unrecognised alteration code
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Decode {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        // CLI boundary: accept lowercase input and normalize before decoding.
        let raw = self.part_number.trim().to_uppercase();

        let result = if self.strict || config.strict {
            extrude::decode_strict(&raw)
        } else {
            extrude::decode(&raw)
        };
        let decoded = result.map_err(|e| anyhow::anyhow!("{e}"))?;

        match self.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decoded)?),
            OutputFormat::Pretty => print_decoded(&decoded, ""),
        }

        Ok(())
    }
}

/// Render the multi-line description block, indenting every line by
/// `indent`. Shared with the BOM listing.
pub fn print_decoded(decoded: &Decoded, indent: &str) {
    println!("{indent}{}", decoded.raw());
    println!("{indent}  {} {}", "Series:".dim(), decoded.series());
    println!("{indent}  {}   {}", "Size:".dim(), decoded.size_display());
    println!("{indent}  {} {}mm", "Length:".dim(), decoded.length());

    if decoded.alterations().is_empty() {
        println!("{indent}  {} None", "Alterations:".dim());
    } else {
        println!("{indent}  {}", "Alterations:".dim());
        for alteration in decoded.alterations() {
            println!("{indent}    • {}", alteration.description);
        }
    }
}
