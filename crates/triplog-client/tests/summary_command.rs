use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::tempdir;

use triplog_client::commands::summary;
use triplog_client::commands::summary::SummaryOptions;
use triplog_client::commands::trip;
use triplog_client::commands::trip::{NewTrip, TripOptions};

fn temp_home() -> std::io::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempdir()?;
    let home = dir.path().join("triplog-home");
    Ok((dir, home))
}

fn seed(home: &Path, date: &str, amount: &str) {
    let added = trip::add_with_options(
        NewTrip {
            date: date.to_string(),
            amount: Some(amount.to_string()),
            ..NewTrip::default()
        },
        TripOptions {
            home_override: Some(home),
        },
    );
    assert!(added.is_ok());
}

fn run_summary(
    home: &Path,
    from: Option<&str>,
    to: Option<&str>,
) -> triplog_client::ClientResult<triplog_client::SuccessEnvelope> {
    summary::run_with_options(
        from,
        to,
        SummaryOptions {
            home_override: Some(home),
        },
    )
}

fn day_rows(payload: &Value) -> Vec<Value> {
    payload
        .get("days")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[test]
fn summary_groups_by_date_in_descending_order() {
    let home = temp_home();
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        seed(&home, "2024-01-01", "100");
        seed(&home, "2024-01-01", "50");
        seed(&home, "2024-01-02", "75");

        let result = run_summary(&home, None, None);
        assert!(result.is_ok());
        if let Ok(success) = result {
            let days = day_rows(&success.data);
            assert_eq!(days.len(), 2);
            assert_eq!(days[0]["date"], Value::String("2024-01-02".to_string()));
            assert_eq!(days[0]["count"], Value::from(1));
            assert_eq!(days[0]["earnings"], Value::from(75.0));
            assert_eq!(days[1]["date"], Value::String("2024-01-01".to_string()));
            assert_eq!(days[1]["count"], Value::from(2));
            assert_eq!(days[1]["earnings"], Value::from(150.0));
            assert_eq!(success.data["totals"]["total_trips"], Value::from(3));
            assert_eq!(success.data["totals"]["total_earnings"], Value::from(225.0));
        }
    }
}

#[test]
fn summary_range_filters_are_inclusive() {
    let home = temp_home();
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        seed(&home, "2024-01-01", "10");
        seed(&home, "2024-01-15", "20");
        seed(&home, "2024-02-01", "30");

        let result = run_summary(&home, Some("2024-01-15"), Some("2024-02-01"));
        assert!(result.is_ok());
        if let Ok(success) = result {
            let days = day_rows(&success.data);
            assert_eq!(days.len(), 2);
            assert_eq!(days[0]["date"], Value::String("2024-02-01".to_string()));
            assert_eq!(days[1]["date"], Value::String("2024-01-15".to_string()));
            assert_eq!(success.data["totals"]["total_earnings"], Value::from(50.0));
            assert_eq!(success.data["from"], Value::String("2024-01-15".to_string()));
        }
    }
}

#[test]
fn summary_of_an_empty_ledger_is_empty_not_an_error() {
    let home = temp_home();
    assert!(home.is_ok());
    if let Ok((_dir, home)) = home {
        let result = run_summary(&home, None, None);
        assert!(result.is_ok());
        if let Ok(success) = result {
            assert!(day_rows(&success.data).is_empty());
            assert_eq!(success.data["totals"]["total_trips"], Value::from(0));
        }
    }
}
