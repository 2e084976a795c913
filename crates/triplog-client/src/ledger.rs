use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::contracts::types::{DayRow, TotalsData};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    Pickup,
    Drop,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Pickup => "Pickup",
            TripType::Drop => "Drop",
        }
    }
}

/// An amount as the user typed it. The slot format allows both JSON numbers
/// and strings; conversion to a number happens only in `coerce_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Number(f64),
    Text(String),
}

impl AmountValue {
    pub fn from_input(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => AmountValue::Number(value),
            _ => AmountValue::Text(raw.to_string()),
        }
    }

    pub fn display(&self) -> String {
        match self {
            AmountValue::Number(value) => format!("{value}"),
            AmountValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub vehicle: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "type")]
    pub trip_type: TripType,
    #[serde(default)]
    pub amount: Option<AmountValue>,
}

/// Coerces a stored amount to a number for aggregation and totals.
/// Anything non-numeric, non-finite, or missing counts as 0.
pub fn coerce_amount(amount: Option<&AmountValue>) -> f64 {
    match amount {
        Some(AmountValue::Number(value)) if value.is_finite() => *value,
        Some(AmountValue::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}

/// The full ordered set of trip records, newest first. Summary, totals, and
/// export are derived from it on demand and never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    trips: Vec<TripRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(trips: Vec<TripRecord>) -> Self {
        Self { trips }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Prepends the record so the first element is always the most recent
    /// trip. Fails without touching the ledger when the date is empty.
    pub fn add_trip(&mut self, trip: TripRecord) -> ClientResult<()> {
        if trip.date.is_empty() {
            return Err(ClientError::missing_date());
        }
        self.trips.insert(0, trip);
        Ok(())
    }

    /// Resets the ledger to empty and returns how many records were removed.
    pub fn clear_all(&mut self) -> usize {
        let cleared = self.trips.len();
        self.trips.clear();
        cleared
    }

    /// Per-date trip count and earnings, in descending date-string order.
    pub fn daily_summary(&self) -> Vec<DayRow> {
        let mut days: BTreeMap<String, (i64, f64)> = BTreeMap::new();
        for trip in &self.trips {
            let entry = days.entry(trip.date.clone()).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += coerce_amount(trip.amount.as_ref());
        }

        days.into_iter()
            .rev()
            .map(|(date, (count, earnings))| DayRow {
                date,
                count,
                earnings,
            })
            .collect()
    }

    pub fn totals(&self) -> TotalsData {
        TotalsData {
            total_trips: self.trips.len() as i64,
            total_earnings: self
                .trips
                .iter()
                .map(|trip| coerce_amount(trip.amount.as_ref()))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AmountValue, Ledger, TripRecord, TripType, coerce_amount};

    fn trip(date: &str, amount: Option<AmountValue>) -> TripRecord {
        TripRecord {
            date: date.to_string(),
            company: String::new(),
            vehicle: String::new(),
            customer: String::new(),
            mobile: String::new(),
            location: String::new(),
            trip_type: TripType::Pickup,
            amount,
        }
    }

    #[test]
    fn add_trip_prepends_newest_first() {
        let mut ledger = Ledger::new();
        for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            let added = ledger.add_trip(trip(date, None));
            assert!(added.is_ok());
        }

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.records()[0].date, "2024-01-03");
        assert_eq!(ledger.records()[2].date, "2024-01-01");
    }

    #[test]
    fn add_trip_with_empty_date_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        let added = ledger.add_trip(trip("", Some(AmountValue::Number(100.0))));

        assert!(added.is_err());
        if let Err(error) = added {
            assert_eq!(error.code, "missing_date");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn coerce_amount_handles_numbers_strings_and_garbage() {
        assert_eq!(coerce_amount(Some(&AmountValue::Number(150.5))), 150.5);
        assert_eq!(
            coerce_amount(Some(&AmountValue::Text("200".to_string()))),
            200.0
        );
        assert_eq!(
            coerce_amount(Some(&AmountValue::Text(" 75.25 ".to_string()))),
            75.25
        );
        assert_eq!(
            coerce_amount(Some(&AmountValue::Text("abc".to_string()))),
            0.0
        );
        assert_eq!(coerce_amount(Some(&AmountValue::Text(String::new()))), 0.0);
        assert_eq!(coerce_amount(None), 0.0);
    }

    #[test]
    fn amount_from_input_keeps_non_numeric_text_as_typed() {
        assert_eq!(AmountValue::from_input("200"), AmountValue::Number(200.0));
        assert_eq!(
            AmountValue::from_input("two hundred"),
            AmountValue::Text("two hundred".to_string())
        );
        assert_eq!(AmountValue::from_input("inf"), AmountValue::Text("inf".to_string()));
    }

    #[test]
    fn daily_summary_groups_and_orders_descending() {
        let mut ledger = Ledger::new();
        let trips = [
            trip("2024-01-01", Some(AmountValue::Number(100.0))),
            trip("2024-01-01", Some(AmountValue::Number(50.0))),
            trip("2024-01-02", Some(AmountValue::Number(75.0))),
        ];
        for record in trips {
            let added = ledger.add_trip(record);
            assert!(added.is_ok());
        }

        let days = ledger.daily_summary();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2024-01-02");
        assert_eq!(days[0].count, 1);
        assert_eq!(days[0].earnings, 75.0);
        assert_eq!(days[1].date, "2024-01-01");
        assert_eq!(days[1].count, 2);
        assert_eq!(days[1].earnings, 150.0);

        let totals = ledger.totals();
        assert_eq!(totals.total_trips, 3);
        assert_eq!(totals.total_earnings, 225.0);
    }

    #[test]
    fn summary_fold_survives_non_numeric_amounts() {
        let mut ledger = Ledger::new();
        let records = [
            trip("2024-02-01", Some(AmountValue::Text("oops".to_string()))),
            trip("2024-02-01", None),
            trip("2024-02-01", Some(AmountValue::Number(40.0))),
        ];
        for record in records {
            let added = ledger.add_trip(record);
            assert!(added.is_ok());
        }

        let days = ledger.daily_summary();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].count, 3);
        assert_eq!(days[0].earnings, 40.0);
    }

    #[test]
    fn slot_format_round_trips_typed_amounts() {
        let raw = r#"[
            {"date":"2024-03-01","company":"Acme","vehicle":"KA-01","customer":"Ravi",
             "mobile":"98","location":"Airport","type":"Drop","amount":"150"},
            {"date":"2024-03-02","company":"","vehicle":"","customer":"",
             "mobile":"","location":"","type":"Pickup","amount":200}
        ]"#;

        let parsed: Result<Ledger, _> = serde_json::from_str(raw);
        assert!(parsed.is_ok());
        if let Ok(ledger) = parsed {
            assert_eq!(ledger.len(), 2);
            assert_eq!(
                ledger.records()[0].amount,
                Some(AmountValue::Text("150".to_string()))
            );
            assert_eq!(ledger.records()[0].trip_type, TripType::Drop);
            assert_eq!(ledger.records()[1].amount, Some(AmountValue::Number(200.0)));

            let serialized = serde_json::to_string(&ledger);
            assert!(serialized.is_ok());
            if let Ok(text) = serialized {
                assert!(text.contains("\"amount\":\"150\""));
                assert!(text.contains("\"amount\":200.0"));
            }
        }
    }

    #[test]
    fn missing_type_and_amount_fields_use_defaults() {
        let raw = r#"[{"date":"2024-03-05"}]"#;

        let parsed: Result<Ledger, _> = serde_json::from_str(raw);
        assert!(parsed.is_ok());
        if let Ok(ledger) = parsed {
            assert_eq!(ledger.records()[0].trip_type, TripType::Pickup);
            assert_eq!(ledger.records()[0].amount, None);
            assert_eq!(ledger.totals().total_earnings, 0.0);
        }
    }
}
