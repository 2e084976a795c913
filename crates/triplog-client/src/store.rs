use std::fs;
use std::path::{Path, PathBuf};

use crate::ClientResult;
use crate::ledger::Ledger;
use crate::state::{ensure_ledger_directory, ledger_store_path, resolve_ledger_home};

/// Owns the persisted slot for one ledger home. Commands open a store, load,
/// mutate, and save; nothing else touches the slot file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    store_path: PathBuf,
}

impl LedgerStore {
    pub fn open(home_override: Option<&Path>) -> ClientResult<Self> {
        let home = resolve_ledger_home(home_override)?;
        ensure_ledger_directory(&home)?;
        Ok(Self {
            store_path: ledger_store_path(&home),
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// A missing, unreadable, or malformed slot restores as an empty ledger.
    pub fn load(&self) -> Ledger {
        let Ok(raw) = fs::read_to_string(&self.store_path) else {
            return Ledger::new();
        };
        serde_json::from_str::<Ledger>(&raw).unwrap_or_default()
    }

    /// Rewrites the full slot. Writes are best-effort: a failed save never
    /// fails the operation that produced the new ledger state.
    pub fn save(&self, ledger: &Ledger) {
        if let Ok(serialized) = serde_json::to_string_pretty(ledger) {
            let _ = fs::write(&self.store_path, serialized);
        }
    }
}
