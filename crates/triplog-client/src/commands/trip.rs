use std::path::Path;

use crate::ClientResult;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{ClearData, TripAddData, TripListData};
use crate::ledger::{AmountValue, TripRecord, TripType};
use crate::store::LedgerStore;

/// Field values collected by the presentation layer for one new trip.
#[derive(Debug, Clone, Default)]
pub struct NewTrip {
    pub date: String,
    pub company: String,
    pub vehicle: String,
    pub customer: String,
    pub mobile: String,
    pub location: String,
    pub trip_type: TripType,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TripOptions<'a> {
    pub home_override: Option<&'a Path>,
}

pub fn add(new_trip: NewTrip) -> ClientResult<SuccessEnvelope> {
    add_with_options(new_trip, TripOptions::default())
}

pub fn add_with_options(
    new_trip: NewTrip,
    options: TripOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let store = LedgerStore::open(options.home_override)?;
    let mut ledger = store.load();

    let record = TripRecord {
        date: new_trip.date,
        company: new_trip.company,
        vehicle: new_trip.vehicle,
        customer: new_trip.customer,
        mobile: new_trip.mobile,
        location: new_trip.location,
        trip_type: new_trip.trip_type,
        amount: new_trip.amount.as_deref().map(AmountValue::from_input),
    };

    ledger.add_trip(record.clone())?;
    store.save(&ledger);

    success(
        "trip add",
        TripAddData {
            trip: record,
            totals: ledger.totals(),
        },
    )
}

pub fn list() -> ClientResult<SuccessEnvelope> {
    list_with_options(TripOptions::default())
}

pub fn list_with_options(options: TripOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = LedgerStore::open(options.home_override)?;
    let ledger = store.load();

    success(
        "trip list",
        TripListData {
            trips: ledger.records().to_vec(),
            totals: ledger.totals(),
        },
    )
}

/// Unconditional reset. Confirmation before the destructive call is the
/// caller's responsibility.
pub fn clear() -> ClientResult<SuccessEnvelope> {
    clear_with_options(TripOptions::default())
}

pub fn clear_with_options(options: TripOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let store = LedgerStore::open(options.home_override)?;
    let mut ledger = store.load();

    let cleared = ledger.clear_all();
    store.save(&ledger);

    success(
        "trip clear",
        ClearData {
            cleared: cleared as i64,
        },
    )
}
