use clap::Parser;
use extrude::printer::{self, BuildVolume};
use extrude::{Config, domain};
use tracing::instrument;

use super::terminal::{Colorize, rule};

#[derive(Debug, Parser)]
#[command(about = "Generate the extrusion order list for a printer frame")]
pub struct Frame {
    /// Printer profile name (e.g. trident)
    printer: String,

    /// Build volume as XxYxZ (e.g. 350x350x250)
    volume: BuildVolume,

    /// Extrusion series for the generated part numbers
    #[arg(long, default_value = "HFSB5")]
    series: String,

    /// Cross-section size code for the generated part numbers
    #[arg(long, default_value = "2020")]
    size: String,
}

impl Frame {
    #[instrument(level = "debug", skip(self, _config))]
    pub fn run(self, _config: &Config) -> anyhow::Result<()> {
        let profile = printer::get(&self.printer).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown printer profile '{}' (available: {})",
                self.printer,
                printer::names().join(", ")
            )
        })?;

        if !profile.supports(self.volume) {
            println!(
                "{}",
                format!(
                    "Warning: {} is not a standard {} build volume",
                    self.volume,
                    profile.display_name()
                )
                .warning()
            );
            println!("Standard volumes:");
            for volume in profile.build_volumes() {
                println!("  - {volume}");
            }
            println!();
        }

        println!("{}", rule().dim());
        println!("{} - {} build volume", profile.display_name(), self.volume);
        println!("{}", rule().dim());
        println!();

        let mut total = 0;
        for spec in profile.frame_specs(self.volume) {
            let part_number = domain::encode(&self.series, &self.size, spec.length, &spec.alterations);

            println!("{} Extrusion (x{})", spec.designation, spec.quantity);
            println!("  Role:        {}", spec.role);
            println!("  Length:      {}mm", spec.length);
            println!("  Part number: {part_number}");
            println!();

            total += spec.quantity;
        }

        println!("Total extrusions: {total}");
        Ok(())
    }
}
