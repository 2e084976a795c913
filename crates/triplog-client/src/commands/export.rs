use std::fs;
use std::path::{Path, PathBuf};

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::export::{EXPORT_FILE_NAME, export_csv};
use crate::store::LedgerStore;
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions<'a> {
    pub home_override: Option<&'a Path>,
}

pub fn run(out: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(out, ExportOptions::default())
}

pub fn run_with_options(
    out: Option<&str>,
    options: ExportOptions<'_>,
) -> ClientResult<SuccessEnvelope> {
    let store = LedgerStore::open(options.home_override)?;
    let ledger = store.load();

    let bytes = export_csv(&ledger)?;
    let path = out
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

    fs::write(&path, &bytes)
        .map_err(|error| ClientError::export_write_failed(&path, &error.to_string()))?;

    success(
        "export",
        ExportData {
            path: path.display().to_string(),
            rows: ledger.len() as i64,
            bytes: bytes.len() as i64,
        },
    )
}
