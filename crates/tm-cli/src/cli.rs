//! CLI argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use tm_types::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tm-tracker",
    about = "Warehouse pallet inventory and FIFO shipping analysis",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Group inventory rows into pallet summaries and classify them
    Analyze {
        /// Inventory CSV export to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Only records in this storage location
        #[arg(long)]
        location: Option<String>,

        /// Only records with this part number
        #[arg(long)]
        part_no: Option<String>,

        /// Only records with this hold flag value
        #[arg(long)]
        hold_whether: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Build a FIFO shipping plan and export it to Excel
    Plan {
        /// Inventory CSV export to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Shipment size in pallets (module target = pallets x 8);
        /// defaults to the configured value
        #[arg(short, long)]
        pallets: Option<u32>,

        /// Output workbook path
        #[arg(short, long)]
        output: PathBuf,

        /// Only records in this storage location
        #[arg(long)]
        location: Option<String>,

        /// Only records with this part number
        #[arg(long)]
        part_no: Option<String>,

        /// Only records with this hold flag value
        #[arg(long)]
        hold_whether: Option<String>,
    },

    /// Count units before and after packaging per part number
    Packaging {
        /// Inventory CSV export to analyze
        #[arg(short, long)]
        input: PathBuf,

        /// Only records in this storage location
        #[arg(long)]
        location: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List inventory rows with filters, optionally export them
    List {
        /// Inventory CSV export to read
        #[arg(short, long)]
        input: PathBuf,

        /// Substring match on pallet number
        #[arg(long)]
        pallet_no: Option<String>,

        /// Exact match on storage location
        #[arg(long)]
        location: Option<String>,

        /// Substring match on rack number
        #[arg(long)]
        rack_no: Option<String>,

        /// Substring match on TM number
        #[arg(long)]
        tm_no: Option<String>,

        /// Substring match on part number
        #[arg(long)]
        part_no: Option<String>,

        /// Exact match on hold flag
        #[arg(long)]
        hold_whether: Option<String>,

        /// Write the filtered rows to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Write the rows of one pallet to an Excel file
        #[arg(long, requires = "pallet_no")]
        export_xlsx: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Manage the truck dispatch schedule
    Trucks {
        #[command(subcommand)]
        command: TruckCommands,
    },

    /// Show configuration
    Config,
}

#[derive(Subcommand)]
pub enum TruckCommands {
    /// Add a dispatch to a day's schedule
    Add {
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Estimated departure time (HH:MM)
        #[arg(long)]
        time: String,

        #[arg(long)]
        delivery_no: String,

        /// Destination: "VW US", "VW MX", "KMX", or "VX US"
        #[arg(long)]
        destination: String,

        #[arg(long)]
        truck_id: String,

        /// Forza/Brown carrier id
        #[arg(long)]
        forza_id: String,

        /// Loaded parts description (e.g. "PartA(5) + PartB(3)")
        #[arg(long, default_value = "")]
        parts: String,

        /// Pager handed to the driver; setting it marks the truck on site
        #[arg(long)]
        pager: Option<String>,

        /// Initial status: "Scheduled", "On Site", "Shipped", "Delayed",
        /// "Cancelled", or "Arrived" (default "Scheduled")
        #[arg(long)]
        status: Option<String>,
    },

    /// Show a day's status board
    List {
        /// Departure date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
