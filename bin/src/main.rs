//! coatcalc CLI - Coating product and coverage estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use coatcalc_lib::{Area, BufferPercent, Coats, RecommendationPolicy, Units};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use commands::Overrides;
use display::Format;

#[derive(Parser)]
#[command(name = "coatcalc")]
#[command(about = "Coating product and coverage estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no coverage note)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate product needed to coat an area
    Area {
        /// Surface area in square meters (missing or non-positive values are treated as 1)
        #[arg(default_value = "1", allow_negative_numbers = true)]
        area: Area,

        /// Number of coats (1, 2 or 3)
        #[arg(short, long)]
        coats: Option<Coats>,

        /// Safety buffer percentage added to the quantity (0-20)
        #[arg(short, long)]
        buffer: Option<BufferPercent>,

        /// Container recommendation policy (leftover-minimizing, unit-minimizing, area-threshold)
        #[arg(short, long)]
        policy: Option<RecommendationPolicy>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the area a purchase will cover
    Volume {
        /// Container label (22L), capacity in liters (22), or catalog position.
        /// A label or capacity match wins over a position, so 1 is the 1L
        /// container. Defaults to the first container in the catalog.
        #[arg(short, long)]
        sku: Option<String>,

        /// Number of containers (values below 1 are treated as 1)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        units: Units,

        /// Number of coats (1, 2 or 3)
        #[arg(short, long)]
        coats: Option<Coats>,

        /// Safety buffer percentage taken off the coverage (0-20)
        #[arg(short, long)]
        buffer: Option<BufferPercent>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List available container sizes
    Catalog {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Prompt for inputs and print reports until cancelled
    Interactive,

    /// Show or create the defaults file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the defaults file.
#[derive(Subcommand)]
enum ConfigAction {
    /// Print the defaults file path
    Path,

    /// Print the effective defaults
    Show,

    /// Write a defaults file with built-in values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Area {
            area,
            coats,
            buffer,
            policy,
            format,
            output,
        } => {
            let overrides = Overrides {
                coats,
                buffer,
                policy,
                format,
            };
            commands::area::area(area, overrides, output.as_deref(), cli.quiet)
        }
        Commands::Volume {
            sku,
            units,
            coats,
            buffer,
            format,
            output,
        } => {
            let overrides = Overrides {
                coats,
                buffer,
                policy: None,
                format,
            };
            commands::volume::volume(
                sku.as_deref(),
                units,
                overrides,
                output.as_deref(),
                cli.quiet,
            )
        }
        Commands::Catalog { format } => commands::catalog::list_catalog(format),
        Commands::Interactive => commands::interactive::interactive(cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Show => commands::config::show_settings(),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_area() {
        let cli = Cli::try_parse_from([
            "coatcalc", "area", "100", "--coats", "2", "--buffer", "10%", "--policy", "units",
        ])
        .unwrap();

        let Some(Commands::Area {
            area,
            coats,
            buffer,
            policy,
            ..
        }) = cli.command
        else {
            panic!("expected area command");
        };
        assert_eq!(area.square_meters(), 100.0);
        assert_eq!(coats, Some(Coats::TWO));
        assert_eq!(buffer.map(BufferPercent::percent), Some(10.0));
        assert_eq!(policy, Some(RecommendationPolicy::UnitMinimizing));
    }

    #[test]
    fn test_parse_negative_area_clamps() {
        let cli = Cli::try_parse_from(["coatcalc", "area", "-5"]).unwrap();
        let Some(Commands::Area { area, .. }) = cli.command else {
            panic!("expected area command");
        };
        assert_eq!(area.square_meters(), 1.0);
    }

    #[test]
    fn test_parse_missing_area_clamps() {
        let cli = Cli::try_parse_from(["coatcalc", "area"]).unwrap();
        let Some(Commands::Area { area, .. }) = cli.command else {
            panic!("expected area command");
        };
        assert_eq!(area, Area::FALLBACK);
    }

    #[test]
    fn test_sku_help_describes_precedence() {
        let mut command = Cli::command();
        let volume = command.find_subcommand_mut("volume").unwrap();
        let sku = volume
            .get_arguments()
            .find(|arg| arg.get_id() == "sku")
            .unwrap();
        let help = sku.get_long_help().or(sku.get_help()).unwrap().to_string();
        assert!(help.contains("so 1 is the 1L container"));
    }

    #[test]
    fn test_rejects_invalid_coats() {
        assert!(Cli::try_parse_from(["coatcalc", "area", "10", "--coats", "4"]).is_err());
        assert!(Cli::try_parse_from(["coatcalc", "area", "10", "--buffer", "25"]).is_err());
    }

    #[test]
    fn test_parse_volume_defaults() {
        let cli = Cli::try_parse_from(["coatcalc", "volume"]).unwrap();
        let Some(Commands::Volume { sku, units, .. }) = cli.command else {
            panic!("expected volume command");
        };
        assert!(sku.is_none());
        assert_eq!(units.get(), 1);
    }
}
