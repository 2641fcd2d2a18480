//! Command line interface.
//!
//! Paths default to the environment (and `.env`), so a service account can run
//! the tool with just the export file as argument.

use crate::input::{read_denylist, read_export, read_lookup_table};
use crate::output::{print_denylist, print_summary, write_report};
use crate::processing::{process_with, ReportOptions, DEFAULT_ADDRESS_PREFIX};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zone-summary")]
#[command(about = "Condense a panel configuration export into a zone summary and inventory list.")]
pub struct CommandLine {
    /// Configuration export (.csv, Latin-1)
    #[arg(required_unless_present = "list_invalid_types")]
    pub input: Option<PathBuf>,

    /// Device types to leave out, one per line
    #[arg(long, env = "INVALID_TYPES_FILE", default_value = "invalid_types.txt")]
    pub invalid_types: PathBuf,

    /// deviceType;articleNumber;objectCode per line
    #[arg(long, env = "LOOKUP_FILE", default_value = "lookup.txt")]
    pub lookup: PathBuf,

    #[arg(long, env = "OUTPUT_DIR", default_value = "processed_files")]
    pub output_dir: PathBuf,

    /// Prefix of the inventory address code
    #[arg(long, env = "ADDRESS_PREFIX", default_value = DEFAULT_ADDRESS_PREFIX)]
    pub prefix: String,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print the invalid device types and exit
    #[arg(long)]
    pub list_invalid_types: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Run one export through the pipeline and write the output files.
pub fn run(args: &CommandLine) -> Result<(), Box<dyn Error>> {
    let denylist = read_denylist(&args.invalid_types)?;
    if args.list_invalid_types {
        print_denylist(&denylist);
        return Ok(());
    }

    let input = args.input.as_deref().ok_or("No input file given")?;
    let lookup = read_lookup_table(&args.lookup)?;
    let raw = read_export(input)?;

    let options = ReportOptions {
        address_prefix: args.prefix.clone(),
    };
    let report = process_with(&raw, &denylist, &lookup, &options)?;

    let today = chrono::Local::now().date_naive();
    let (summary_path, inventory_path) = write_report(&report, &args.output_dir, today)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
        println!("Summary:   {}", summary_path.display());
        println!("Inventory: {}", inventory_path.display());
    }
    Ok(())
}
