//! Command handlers

use tm_app::app::{analyze_pallets, build_shipping_plan, AnalysisOptions, RecordFilter};
use tm_app::config::Config;
use tm_app::export::{export_pallet_detail, export_records_csv, export_shipping_plan};
use tm_app::repository::open_dispatch_store;
use tm_domain::model::{Destination, DispatchStatus, TruckDispatch};
use tm_domain::repository::DispatchRepository;
use tm_domain::service::dispatch_board::{sort_dispatch_board, validate_dispatches};
use tm_domain::service::packaging::{analyze_packaging, packaging_totals};
use tm_domain::service::classify;
use tm_infra::inventory_csv::load_inventory_records;
use tm_types::{Error, Result};

use crate::cli::{Cli, Commands, TruckCommands};
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            location,
            part_no,
            hold_whether,
            format,
        } => {
            let records = load_inventory_records(&input)?;
            let mut options = AnalysisOptions::new();
            options.location = location;
            options.part_no = part_no;
            options.hold_whether = hold_whether;

            let pallets = analyze_pallets(&records, &options);
            let partition = classify(pallets.clone());

            output::output_pallets(format, &pallets)?;
            output::output_classification_summary(&partition);
            Ok(())
        }

        Commands::Plan {
            input,
            pallets,
            output: output_path,
            location,
            part_no,
            hold_whether,
        } => {
            let config = Config::load()?;
            let records = load_inventory_records(&input)?;

            let mut options =
                AnalysisOptions::new().with_pallet_count(pallets.unwrap_or(config.default_pallet_count));
            options.location = location;
            options.part_no = part_no;
            options.hold_whether = hold_whether;

            let plan = build_shipping_plan(&records, &options);
            export_shipping_plan(&plan, &options.filter_banner(), &output_path)?;

            output::output_plan_summary(&plan);
            println!("\nShipping plan written to {}", output_path.display());
            Ok(())
        }

        Commands::Packaging {
            input,
            location,
            format,
        } => {
            let records = load_inventory_records(&input)?;
            let filter = RecordFilter {
                location,
                ..Default::default()
            };
            let filtered = filter.apply(&records);

            let summaries = analyze_packaging(&filtered);
            let totals = packaging_totals(&summaries);
            output::output_packaging(format, &summaries, totals)
        }

        Commands::List {
            input,
            pallet_no,
            location,
            rack_no,
            tm_no,
            part_no,
            hold_whether,
            export,
            export_xlsx,
            format,
        } => {
            let records = load_inventory_records(&input)?;
            let filter = RecordFilter {
                pallet_no: pallet_no.clone(),
                location,
                rack_no,
                tm_no,
                part_no,
                hold_whether,
            };
            let filtered = filter.apply(&records);

            output::output_records(format, &filtered)?;

            if let Some(path) = export {
                export_records_csv(&filtered, &path)?;
                println!("\nExported {} rows to {}", filtered.len(), path.display());
            }

            if let Some(path) = export_xlsx {
                // clap guarantees pallet_no is present alongside export_xlsx
                let pallet_no = pallet_no.unwrap_or_default();
                export_pallet_detail(&pallet_no, &filtered, &path)?;
                println!(
                    "\nExported pallet {} detail to {}",
                    pallet_no,
                    path.display()
                );
            }

            Ok(())
        }

        Commands::Trucks { command } => execute_trucks(command),

        Commands::Config => {
            let config = Config::load()?;
            println!("{}", config);
            Ok(())
        }
    }
}

fn execute_trucks(command: TruckCommands) -> Result<()> {
    let config = Config::load()?;
    let store = open_dispatch_store(&config)?;

    match command {
        TruckCommands::Add {
            date,
            time,
            delivery_no,
            destination,
            truck_id,
            forza_id,
            parts,
            pager,
            status,
        } => {
            let destination = Destination::parse(&destination).ok_or_else(|| {
                Error::InvalidDispatch(format!(
                    "unknown destination \"{}\" (expected VW US, VW MX, KMX, or VX US)",
                    destination
                ))
            })?;

            let status = match status {
                Some(ref s) => DispatchStatus::parse(s).ok_or_else(|| {
                    Error::InvalidDispatch(format!("unknown status \"{}\"", s))
                })?,
                None => DispatchStatus::Scheduled,
            };

            let mut dispatch = TruckDispatch {
                departure_date: date,
                departure_time: time,
                delivery_no,
                destination,
                truck_id,
                forza_id,
                parts,
                pager_no: None,
                status,
            };
            if let Some(pager) = pager {
                dispatch.assign_pager(pager);
            }

            let validation = validate_dispatches(vec![dispatch]);
            if validation.valid.is_empty() {
                return Err(Error::InvalidDispatch(
                    "departure time, delivery no, truck id, and forza id are required".to_string(),
                ));
            }

            let mut schedule = store.find_by_date(date)?;
            schedule.extend(validation.valid);
            store.save_schedule(date, &schedule)?;

            println!("Dispatch added: {} trucks scheduled for {}", schedule.len(), date);
            Ok(())
        }

        TruckCommands::List { date, format } => {
            let schedule = store.find_by_date(date)?;
            let board = sort_dispatch_board(&schedule);
            output::output_dispatches(format, date, &board)
        }
    }
}
