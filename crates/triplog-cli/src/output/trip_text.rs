use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_earnings, key_value_rows, render_table};

pub fn render_trip_add(data: &Value) -> io::Result<String> {
    let trip = data
        .get("trip")
        .and_then(Value::as_object)
        .ok_or_else(|| io::Error::other("trip add output requires a trip"))?;

    let mut lines = vec!["Trip logged.".to_string(), String::new()];
    lines.extend(key_value_rows(
        &[
            ("Date:", field_text(trip.get("date"))),
            ("Company:", field_text(trip.get("company"))),
            ("Vehicle:", field_text(trip.get("vehicle"))),
            ("Customer:", field_text(trip.get("customer"))),
            ("Mobile:", field_text(trip.get("mobile"))),
            ("Location:", field_text(trip.get("location"))),
            ("Type:", field_text(trip.get("type"))),
            ("Amount:", field_text(trip.get("amount"))),
        ],
        2,
    ));
    lines.push(String::new());
    lines.push(totals_line(data));

    Ok(lines.join("\n"))
}

pub fn render_trip_list(data: &Value) -> io::Result<String> {
    let trips = data
        .get("trips")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("trip list output requires trips"))?;

    if trips.is_empty() {
        return Ok([
            "No trips yet.".to_string(),
            String::new(),
            "Log one first:".to_string(),
            "  triplog trip add --date 2024-01-01 --amount 200".to_string(),
        ]
        .join("\n"));
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Pickup/Drop",
            align: Align::Left,
        },
        Column {
            name: "Company",
            align: Align::Left,
        },
        Column {
            name: "Vehicle",
            align: Align::Left,
        },
        Column {
            name: "Customer",
            align: Align::Left,
        },
        Column {
            name: "Location",
            align: Align::Left,
        },
        Column {
            name: "Amount",
            align: Align::Right,
        },
    ];
    let rows = trips
        .iter()
        .map(|trip| {
            vec![
                field_text(trip.get("date")),
                field_text(trip.get("type")),
                field_text(trip.get("company")),
                field_text(trip.get("vehicle")),
                field_text(trip.get("customer")),
                field_text(trip.get("location")),
                field_text(trip.get("amount")),
            ]
        })
        .collect::<Vec<_>>();

    let mut lines = vec![format!("All trips ({}):", trips.len()), String::new()];
    lines.extend(render_table(&columns, &rows));
    lines.push(String::new());
    lines.push(totals_line(data));

    Ok(lines.join("\n"))
}

pub fn render_trip_clear(data: &Value) -> io::Result<String> {
    let cleared = data.get("cleared").and_then(Value::as_i64).unwrap_or(0);
    Ok(format!("Cleared {cleared} saved trips."))
}

pub(crate) fn totals_line(data: &Value) -> String {
    let trips = data
        .pointer("/totals/total_trips")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let earnings = data
        .pointer("/totals/total_earnings")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    format!("Totals: {trips} trips, {}", format_earnings(earnings))
}

pub(crate) fn field_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        // f64 formatting drops the trailing `.0` that serde_json keeps.
        Some(Value::Number(number)) => match number.as_f64() {
            Some(float) => format!("{float}"),
            None => number.to_string(),
        },
        _ => String::new(),
    }
}
