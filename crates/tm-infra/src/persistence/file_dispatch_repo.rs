//! File-based truck dispatch repository
//!
//! Stores the dispatch schedule in a JSON file on disk. Saving a day's
//! schedule replaces everything previously stored for that departure date;
//! the entry screen always writes a whole day at once.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use chrono::NaiveDate;

use tm_domain::model::TruckDispatch;
use tm_domain::repository::DispatchRepository;
use tm_types::{Error, Result};

/// File-based implementation of DispatchRepository
pub struct FileDispatchRepository {
    store_path: PathBuf,
    dispatches: RefCell<Vec<TruckDispatch>>,
}

impl FileDispatchRepository {
    /// Create or load a dispatch store under the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("trucks.json");

        let dispatches = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).unwrap_or_default()
        } else {
            Vec::new()
        };

        Ok(Self {
            store_path,
            dispatches: RefCell::new(dispatches),
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &*self.dispatches.borrow())?;
        Ok(())
    }

    /// All dispatches of one date, in stored order
    pub fn schedule_for(&self, date: NaiveDate) -> Vec<TruckDispatch> {
        self.dispatches
            .borrow()
            .iter()
            .filter(|d| d.departure_date == date)
            .cloned()
            .collect()
    }

    /// Distinct departure dates with at least one dispatch, ascending
    pub fn scheduled_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .dispatches
            .borrow()
            .iter()
            .map(|d| d.departure_date)
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}

impl DispatchRepository for FileDispatchRepository {
    fn save_schedule(&self, date: NaiveDate, new_dispatches: &[TruckDispatch]) -> std::result::Result<(), Error> {
        {
            let mut dispatches = self.dispatches.borrow_mut();
            dispatches.retain(|d| d.departure_date != date);
            dispatches.extend(new_dispatches.iter().cloned());
        }
        self.persist()
    }

    fn find_by_date(&self, date: NaiveDate) -> std::result::Result<Vec<TruckDispatch>, Error> {
        Ok(self.schedule_for(date))
    }

    fn find_all(&self) -> std::result::Result<Vec<TruckDispatch>, Error> {
        Ok(self.dispatches.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_domain::model::{Destination, DispatchStatus};

    fn dispatch(date: NaiveDate, delivery_no: &str) -> TruckDispatch {
        TruckDispatch {
            departure_date: date,
            departure_time: "07:00".to_string(),
            delivery_no: delivery_no.to_string(),
            destination: Destination::VwUs,
            truck_id: "T-1".to_string(),
            forza_id: "F-1".to_string(),
            parts: String::new(),
            pager_no: None,
            status: DispatchStatus::Scheduled,
        }
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        {
            let repo = FileDispatchRepository::open(dir.path().to_path_buf()).unwrap();
            repo.save_schedule(date, &[dispatch(date, "D-1"), dispatch(date, "D-2")])
                .unwrap();
        }

        let reopened = FileDispatchRepository::open(dir.path().to_path_buf()).unwrap();
        let loaded = reopened.find_by_date(date).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].delivery_no, "D-1");
    }

    #[test]
    fn test_save_replaces_one_date_only() {
        let dir = tempfile::tempdir().unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        let repo = FileDispatchRepository::open(dir.path().to_path_buf()).unwrap();
        repo.save_schedule(first, &[dispatch(first, "D-1")]).unwrap();
        repo.save_schedule(second, &[dispatch(second, "D-2")]).unwrap();
        repo.save_schedule(first, &[dispatch(first, "D-3")]).unwrap();

        assert_eq!(repo.find_by_date(first).unwrap().len(), 1);
        assert_eq!(repo.find_by_date(first).unwrap()[0].delivery_no, "D-3");
        assert_eq!(repo.find_by_date(second).unwrap().len(), 1);
        assert_eq!(repo.scheduled_dates(), vec![first, second]);
    }
}
