use std::path::PathBuf;

use clap::Parser;
use extrude::printer::{BuildVolume, Printer};
use extrude::{Config, DecodeError, Decoded, bom, printer};
use tracing::instrument;

use super::terminal::{Colorize, rule};

#[derive(Debug, Parser)]
#[command(about = "Extract and decode part numbers from a BOM spreadsheet")]
pub struct Bom {
    /// Path to the BOM CSV file
    file: PathBuf,

    /// Annotate rows with frame letter designations for a printer profile
    #[arg(long, value_name = "PRINTER")]
    printer: Option<String>,

    /// Output format (pretty, json)
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,

    /// Fail rows on the first unrecognised alteration code
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Bom {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let profile = self
            .printer
            .as_deref()
            .map(|name| {
                printer::get(name).ok_or_else(|| {
                    anyhow::anyhow!(
                        "unknown printer profile '{name}' (available: {})",
                        printer::names().join(", ")
                    )
                })
            })
            .transpose()?;

        let entries = bom::extract(&self.file, config)?;
        if entries.is_empty() {
            println!("No {} parts found in BOM.", config.marker);
            return Ok(());
        }

        let decoded = bom::decode_entries(&entries, self.strict || config.strict);

        // One row failing to decode must not hide the rest, so errors ride
        // along with the successes.
        let volume = profile.and_then(|profile| {
            let parts: Vec<&Decoded> = decoded.iter().filter_map(|row| row.as_ref().ok()).collect();
            profile.detect_volume(&parts)
        });

        match self.output {
            OutputFormat::Json => output_json(&entries, &decoded, profile, volume)?,
            OutputFormat::Pretty => {
                output_pretty(&entries, &decoded, profile, volume, &config.marker);
            }
        }

        Ok(())
    }
}

fn output_pretty(
    entries: &[bom::Entry],
    decoded: &[Result<Decoded, DecodeError>],
    profile: Option<&dyn Printer>,
    volume: Option<BuildVolume>,
    marker: &str,
) {
    println!("{}", rule().dim());
    println!("{} parts from BOM", marker.to_uppercase());
    if let (Some(profile), Some(volume)) = (profile, volume) {
        println!("Build volume: {volume} ({})", profile.display_name());
    }
    println!("{}", rule().dim());
    println!();

    for (index, (entry, result)) in entries.iter().zip(decoded).enumerate() {
        println!("[{}] Qty: {}", index + 1, entry.quantity);
        match result {
            Ok(part) => {
                if let Some(letter) =
                    profile.and_then(|p| p.designation(part, entry.quantity, volume))
                {
                    println!("    Designation: {letter} Extrusion");
                }
                super::decode::print_decoded(part, "    ");
            }
            Err(e) => {
                println!("    {}", entry.part_number);
                println!("    {}", format!("Error: {e}").warning());
            }
        }
        println!();
    }
}

fn output_json(
    entries: &[bom::Entry],
    decoded: &[Result<Decoded, DecodeError>],
    profile: Option<&dyn Printer>,
    volume: Option<BuildVolume>,
) -> anyhow::Result<()> {
    use serde_json::json;

    let rows: Vec<_> = entries
        .iter()
        .zip(decoded)
        .map(|(entry, result)| match result {
            Ok(part) => {
                let designation = profile
                    .and_then(|p| p.designation(part, entry.quantity, volume))
                    .map(String::from);
                json!({
                    "part_number": entry.part_number,
                    "quantity": entry.quantity,
                    "designation": designation,
                    "decoded": part,
                })
            }
            Err(e) => json!({
                "part_number": entry.part_number,
                "quantity": entry.quantity,
                "error": e.to_string(),
            }),
        })
        .collect();

    let output = json!({
        "build_volume": volume,
        "parts": rows,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
