use std::io;

use serde_json::Value;

use super::format::{Align, Column, format_earnings, render_table};
use super::trip_text::{field_text, totals_line};

pub fn render_summary(data: &Value) -> io::Result<String> {
    let days = data
        .get("days")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("summary output requires days"))?;

    let mut lines = vec!["Daily summary:".to_string()];
    if let Some(range) = range_line(data) {
        lines.push(range);
    }
    lines.push(String::new());

    if days.is_empty() {
        lines.push("No trips yet.".to_string());
        return Ok(lines.join("\n"));
    }

    let columns = [
        Column {
            name: "Date",
            align: Align::Left,
        },
        Column {
            name: "Trips",
            align: Align::Right,
        },
        Column {
            name: "Earnings",
            align: Align::Right,
        },
    ];
    let rows = days
        .iter()
        .map(|day| {
            let earnings = day.get("earnings").and_then(Value::as_f64).unwrap_or(0.0);
            vec![
                field_text(day.get("date")),
                field_text(day.get("count")),
                format_earnings(earnings),
            ]
        })
        .collect::<Vec<_>>();

    lines.extend(render_table(&columns, &rows));
    lines.push(String::new());
    lines.push(totals_line(data));

    Ok(lines.join("\n"))
}

fn range_line(data: &Value) -> Option<String> {
    let from = data.get("from").and_then(Value::as_str);
    let to = data.get("to").and_then(Value::as_str);

    match (from, to) {
        (None, None) => None,
        (Some(from), None) => Some(format!("  (from {from})")),
        (None, Some(to)) => Some(format!("  (through {to})")),
        (Some(from), Some(to)) => Some(format!("  ({from} through {to})")),
    }
}
