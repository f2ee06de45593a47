//! Pallet consolidation analysis
//!
//! Folds raw inventory rows into per-pallet summaries, classifies them
//! against the shipping threshold, orders them oldest-first for FIFO
//! shipping, and greedily merges under-threshold pallets into synthetic
//! combined pallets.
//!
//! The combination step is deliberately greedy and local: a single
//! left-to-right pass with no backtracking, so the result depends on input
//! order and is not a globally optimal packing. Changing that is a product
//! decision, not a bug fix.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::model::{InventoryRecord, PalletSummary};

/// A pallet ships when it carries at least this many distinct transport
/// modules. Business constant.
pub const SHIP_THRESHOLD: usize = 8;

/// Summaries split by shipping eligibility
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub ready_to_ship: Vec<PalletSummary>,
    pub needs_transfer: Vec<PalletSummary>,
}

/// Result of the greedy transfer-pallet combination
#[derive(Debug, Clone, Default)]
pub struct CombineOutcome {
    pub combined: Vec<PalletSummary>,
    pub remaining: Vec<PalletSummary>,
}

struct PalletAccumulator {
    rack_no: String,
    modules: HashSet<String>,
    part_numbers: BTreeSet<String>,
    earliest_date: Option<String>,
    records: Vec<InventoryRecord>,
}

impl PalletAccumulator {
    fn new(first: &InventoryRecord) -> Self {
        Self {
            rack_no: first.rack_no.clone(),
            modules: HashSet::new(),
            part_numbers: BTreeSet::new(),
            earliest_date: None,
            records: Vec::new(),
        }
    }

    fn fold(&mut self, record: &InventoryRecord) {
        let tm_no = record.tm_no.trim();
        if !tm_no.is_empty() {
            self.modules.insert(tm_no.to_string());
        }

        let part_no = record.part_no.trim();
        if !part_no.is_empty() {
            self.part_numbers.insert(part_no.to_string());
        }

        // Raw string comparison, matching how the source system tracks the
        // earliest date. Chronologically correct only for well-formed ISO
        // strings; the FIFO ordering step re-parses instead.
        if let Some(date) = record.prod_date() {
            match &self.earliest_date {
                Some(current) if date >= current.as_str() => {}
                _ => self.earliest_date = Some(date.to_string()),
            }
        }

        self.records.push(record.clone());
    }

    fn finish(self, pallet_no: String) -> PalletSummary {
        PalletSummary {
            pallet_no,
            rack_no: self.rack_no,
            record_count: self.records.len(),
            module_count: self.modules.len(),
            part_numbers: self.part_numbers,
            earliest_date: self.earliest_date,
            source_records: self.records,
            is_combined: false,
        }
    }
}

/// Group inventory rows into one summary per distinct non-blank pallet
/// number, returned in ascending pallet-number order (byte-wise).
///
/// Rows with a blank pallet number are dropped silently; sparse data from
/// the manual-entry source is expected, not an error.
pub fn group_by_pallet(records: &[InventoryRecord]) -> Vec<PalletSummary> {
    let mut groups: BTreeMap<String, PalletAccumulator> = BTreeMap::new();

    for record in records {
        let pallet_no = record.pallet_no.trim();
        if pallet_no.is_empty() {
            continue;
        }

        groups
            .entry(pallet_no.to_string())
            .or_insert_with(|| PalletAccumulator::new(record))
            .fold(record);
    }

    groups
        .into_iter()
        .map(|(pallet_no, acc)| acc.finish(pallet_no))
        .collect()
}

/// Partition summaries into ready-to-ship and needs-transfer. Pure filter:
/// every summary lands in exactly one side, input order preserved.
pub fn classify(summaries: Vec<PalletSummary>) -> Partition {
    let (ready_to_ship, needs_transfer) = summaries
        .into_iter()
        .partition(|s| s.module_count >= SHIP_THRESHOLD);

    Partition {
        ready_to_ship,
        needs_transfer,
    }
}

/// Order summaries oldest production date first for FIFO shipping.
///
/// Unlike the grouping step this compares parsed calendar dates, so
/// non-padded or slash-separated dates still order correctly. Summaries
/// without a parseable date sort after all dated ones; the sort is stable,
/// so undated summaries keep their relative input order.
pub fn sort_by_earliest_date(summaries: &[PalletSummary]) -> Vec<PalletSummary> {
    let mut sorted = summaries.to_vec();
    sorted.sort_by(|a, b| {
        match (a.earliest_naive_date(), b.earliest_naive_date()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

/// Greedily merge under-threshold pallets into synthetic combined pallets
/// whose module count is a multiple of [`SHIP_THRESHOLD`].
///
/// Expects its input oldest-first; earlier pallets get first claim on
/// partners, which protects old stock from starvation. Every input summary
/// appears in exactly one of the two outputs.
///
/// The scan accepts a candidate that lands the running total on an exact
/// multiple of 8 and closes the group there; a candidate that only pushes
/// the total to 8 or above is accepted too, but the scan keeps looking for
/// a multiple. A group whose final total never reaches 8 is dissolved back
/// into `remaining`.
pub fn combine_transfer_pallets(pallets: &[PalletSummary]) -> CombineOutcome {
    let mut used = vec![false; pallets.len()];
    let mut combined = Vec::new();
    let mut remaining = Vec::new();

    for i in 0..pallets.len() {
        if used[i] {
            continue;
        }
        used[i] = true;

        let mut members = vec![i];
        let mut running = pallets[i].module_count;

        for j in (i + 1)..pallets.len() {
            if used[j] {
                continue;
            }

            let sum = running + pallets[j].module_count;
            if sum % SHIP_THRESHOLD == 0 {
                running = sum;
                members.push(j);
                used[j] = true;
                break;
            } else if sum >= SHIP_THRESHOLD {
                running = sum;
                members.push(j);
                used[j] = true;
            }
        }

        if running >= SHIP_THRESHOLD {
            if members.len() >= 2 {
                let member_refs: Vec<&PalletSummary> =
                    members.iter().map(|&k| &pallets[k]).collect();
                combined.push(merge_summaries(&member_refs));
            } else {
                // Input precondition violated (a lone summary at or above
                // the threshold); pass it through untouched.
                combined.push(pallets[i].clone());
            }
        } else {
            remaining.extend(members.iter().map(|&k| pallets[k].clone()));
        }
    }

    // No pallet is ever dropped, even if the bookkeeping above changes.
    for (k, flag) in used.iter().enumerate() {
        if !flag {
            remaining.push(pallets[k].clone());
        }
    }

    CombineOutcome {
        combined,
        remaining,
    }
}

/// Build one synthetic summary from two or more members.
///
/// Module numbers are re-deduplicated across members rather than summed, so
/// a module id shared between members counts once. The earliest date is the
/// raw-string minimum over all member records, same as the grouping step.
fn merge_summaries(members: &[&PalletSummary]) -> PalletSummary {
    let mut modules: HashSet<String> = HashSet::new();
    let mut part_numbers: BTreeSet<String> = BTreeSet::new();
    let mut earliest_date: Option<String> = None;
    let mut source_records = Vec::new();
    let mut record_count = 0;

    for member in members {
        record_count += member.source_records.len();
        for record in &member.source_records {
            let tm_no = record.tm_no.trim();
            if !tm_no.is_empty() {
                modules.insert(tm_no.to_string());
            }
            let part_no = record.part_no.trim();
            if !part_no.is_empty() {
                part_numbers.insert(part_no.to_string());
            }
            if let Some(date) = record.prod_date() {
                match &earliest_date {
                    Some(current) if date >= current.as_str() => {}
                    _ => earliest_date = Some(date.to_string()),
                }
            }
            source_records.push(record.clone());
        }
    }

    let member_ids: Vec<&str> = members.iter().map(|m| m.pallet_no.as_str()).collect();

    PalletSummary {
        pallet_no: format!("COMB_{}", member_ids.join("_")),
        rack_no: members[0].rack_no.clone(),
        record_count,
        module_count: modules.len(),
        part_numbers,
        earliest_date,
        source_records,
        is_combined: true,
    }
}

/// Take the shortest prefix whose cumulative module count reaches the
/// target. The summary that crosses the threshold is included whole; no
/// summary is split. A target of zero selects nothing; a target the whole
/// input cannot reach selects everything.
pub fn select_by_quantity(
    pallets: &[PalletSummary],
    target_module_count: usize,
) -> Vec<PalletSummary> {
    let mut selected = Vec::new();
    let mut total = 0;

    for pallet in pallets {
        if total >= target_module_count {
            break;
        }
        total += pallet.module_count;
        selected.push(pallet.clone());
    }

    selected
}
