use std::path::Path;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::SummaryData;
use crate::ledger::Ledger;
use crate::store::LedgerStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryOptions<'a> {
    pub home_override: Option<&'a Path>,
}

pub fn run(from: Option<&str>, to: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(from, to, SummaryOptions::default())
}

pub fn run_with_options(
    from: Option<&str>,
    to: Option<&str>,
    options: SummaryOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let store = LedgerStore::open(options.home_override)?;
    let ledger = store.load();

    // Range bounds are inclusive date-string comparisons, the same ordering
    // the summary itself sorts by.
    let selected = ledger
        .records()
        .iter()
        .filter(|trip| within_range(&trip.date, from, to))
        .cloned()
        .collect::<Vec<_>>();
    let selected = Ledger::from_records(selected);

    success(
        "summary",
        SummaryData {
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            days: selected.daily_summary(),
            totals: selected.totals(),
        },
    )
}

fn within_range(date: &str, from: Option<&str>, to: Option<&str>) -> bool {
    if let Some(from) = from
        && date < from
    {
        return false;
    }
    if let Some(to) = to
        && date > to
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::within_range;

    #[test]
    fn range_bounds_are_inclusive_string_comparisons() {
        assert!(within_range("2024-01-05", Some("2024-01-05"), None));
        assert!(within_range("2024-01-05", None, Some("2024-01-05")));
        assert!(within_range("2024-01-05", Some("2024-01-01"), Some("2024-01-31")));
        assert!(!within_range("2024-01-05", Some("2024-01-06"), None));
        assert!(!within_range("2024-01-05", None, Some("2024-01-04")));
        assert!(within_range("2024-01-05", None, None));
    }
}
