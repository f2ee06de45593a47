//! Dispatch status board ordering and schedule validation

use std::cmp::Ordering;

use chrono::NaiveTime;

use crate::model::TruckDispatch;

/// Rows that pass validation plus a count of the rows that did not
#[derive(Debug, Clone, Default)]
pub struct DispatchValidation {
    pub valid: Vec<TruckDispatch>,
    pub skipped: usize,
}

/// Drop schedule rows missing a required field. Mirrors the entry grid:
/// bad rows are skipped and counted, the rest of the day still saves.
pub fn validate_dispatches(rows: Vec<TruckDispatch>) -> DispatchValidation {
    let mut result = DispatchValidation::default();

    for row in rows {
        let complete = !row.departure_time.trim().is_empty()
            && !row.delivery_no.trim().is_empty()
            && !row.truck_id.trim().is_empty()
            && !row.forza_id.trim().is_empty();
        if complete {
            result.valid.push(row);
        } else {
            result.skipped += 1;
        }
    }

    result
}

/// Order dispatches for the status board: active trucks first, earliest
/// departure time on top; shipped and arrived trucks sink to the bottom,
/// most recent departure first. Unparseable times sort last within their
/// band; the sort is stable.
pub fn sort_dispatch_board(dispatches: &[TruckDispatch]) -> Vec<TruckDispatch> {
    let mut active: Vec<TruckDispatch> = Vec::new();
    let mut terminal: Vec<TruckDispatch> = Vec::new();

    for dispatch in dispatches {
        if dispatch.status.is_terminal() {
            terminal.push(dispatch.clone());
        } else {
            active.push(dispatch.clone());
        }
    }

    active.sort_by(|a, b| cmp_time(a.parsed_departure_time(), b.parsed_departure_time()));
    terminal.sort_by(|a, b| cmp_time(b.parsed_departure_time(), a.parsed_departure_time()));

    active.extend(terminal);
    active
}

fn cmp_time(a: Option<NaiveTime>, b: Option<NaiveTime>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
