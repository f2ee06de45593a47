//! CSV loader for inventory list exports
//!
//! Handles both UTF-8 and EUC-KR encoded files; the source system's export
//! screens produce either depending on the workstation locale.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use encoding_rs::EUC_KR;
use thiserror::Error;

use tm_domain::model::InventoryRecord;
use tm_domain::repository::InventoryRepository;
use tm_types::Error as CoreError;

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvLoaderError> for CoreError {
    fn from(err: CsvLoaderError) -> Self {
        CoreError::CsvLoader(err.to_string())
    }
}

/// Column positions resolved from the header row
struct ColumnMap {
    pallet_no: usize,
    rack_no: usize,
    tm_no: usize,
    part_no: usize,
    location: Option<usize>,
    hold_whether: Option<usize>,
    prod_date: Option<usize>,
    upload_time: Option<usize>,
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, CsvLoaderError> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let require = |name: &str| {
            find(name).ok_or_else(|| CsvLoaderError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            pallet_no: require("pallet_no")?,
            rack_no: require("rack_no")?,
            tm_no: require("tm_no")?,
            part_no: require("part_no")?,
            location: find("location"),
            hold_whether: find("hold_whether"),
            prod_date: find("prod_date"),
            upload_time: find("upload_time"),
        })
    }
}

/// Load inventory rows from a CSV export
///
/// Expected header (column order free, extra columns ignored):
/// pallet_no,location,rack_no,tm_no,part_no,hold_whether,prod_date,upload_time
pub fn load_inventory_records<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<InventoryRecord>, CsvLoaderError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    // UTF-8 first; fall back to EUC-KR for legacy workstation exports
    let decoded = match std::str::from_utf8(&bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = EUC_KR.decode(&bytes);
            if had_errors {
                eprintln!("Warning: Some characters could not be decoded from EUC-KR");
            }
            decoded.into_owned()
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        records.push(parse_record(&row, &columns));
    }

    Ok(records)
}

fn parse_record(row: &csv::StringRecord, columns: &ColumnMap) -> InventoryRecord {
    let get = |idx: usize| row.get(idx).unwrap_or("").to_string();
    let get_opt = |idx: Option<usize>| idx.map(&get).unwrap_or_default();

    InventoryRecord {
        pallet_no: get(columns.pallet_no),
        rack_no: get(columns.rack_no),
        tm_no: get(columns.tm_no),
        part_no: get(columns.part_no),
        location: get_opt(columns.location),
        hold_whether: get_opt(columns.hold_whether),
        prod_date: get_opt(columns.prod_date),
        upload_time: get_opt(columns.upload_time),
    }
}

/// CSV-file-backed inventory repository
///
/// Loads the whole export once; the query methods filter the in-memory
/// snapshot, mirroring how the source screens work on a loaded page.
pub struct CsvInventoryRepository {
    records: Vec<InventoryRecord>,
}

impl CsvInventoryRepository {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CsvLoaderError> {
        Ok(Self {
            records: load_inventory_records(path)?,
        })
    }
}

impl InventoryRepository for CsvInventoryRepository {
    fn find_all(&self) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self.records.clone())
    }

    fn find_by_location(&self, location: &str) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.location == location)
            .cloned()
            .collect())
    }

    fn find_by_part(&self, part_no: &str) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.part_no == part_no)
            .cloned()
            .collect())
    }

    fn find_by_pallet(&self, pallet_no: &str) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.pallet_no == pallet_no)
            .cloned()
            .collect())
    }
}
