use serde::Serialize;

use crate::ledger::TripRecord;

#[derive(Debug, Clone, Serialize)]
pub struct TotalsData {
    pub total_trips: i64,
    pub total_earnings: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripAddData {
    pub trip: TripRecord,
    pub totals: TotalsData,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripListData {
    pub trips: Vec<TripRecord>,
    pub totals: TotalsData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClearData {
    pub cleared: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayRow {
    pub date: String,
    pub count: i64,
    pub earnings: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub from: Option<String>,
    pub to: Option<String>,
    pub days: Vec<DayRow>,
    pub totals: TotalsData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub path: String,
    pub rows: i64,
    pub bytes: i64,
}
