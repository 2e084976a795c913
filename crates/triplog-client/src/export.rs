use csv::{QuoteStyle, WriterBuilder};

use crate::ledger::Ledger;
use crate::{ClientError, ClientResult};

pub const EXPORT_FILE_NAME: &str = "Driving_Trips.csv";

const CSV_HEADERS: [&str; 8] = [
    "Date",
    "Company",
    "Vehicle",
    "Customer",
    "Mobile",
    "Location",
    "Pickup/Drop",
    "Amount",
];

/// Serializes the ledger as CSV bytes: every field double-quoted with
/// internal quotes doubled, rows in ledger order (newest first), joined by
/// `\n` with no trailing newline.
pub fn export_csv(ledger: &Ledger) -> ClientResult<Vec<u8>> {
    if ledger.is_empty() {
        return Err(ClientError::empty_export());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(CSV_HEADERS)
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;

    for trip in ledger.records() {
        let amount = trip
            .amount
            .as_ref()
            .map(|value| value.display())
            .unwrap_or_default();
        writer
            .write_record([
                trip.date.as_str(),
                trip.company.as_str(),
                trip.vehicle.as_str(),
                trip.customer.as_str(),
                trip.mobile.as_str(),
                trip.location.as_str(),
                trip.trip_type.as_str(),
                amount.as_str(),
            ])
            .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|error| ClientError::internal_serialization(&error.to_string()))?;

    // Rows are joined by newline, not terminated by one.
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }

    Ok(bytes)
}
