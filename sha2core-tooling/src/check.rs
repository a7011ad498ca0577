use std::path::Path;

use log::{debug, warn};

use crate::format::CheckEntry;
use crate::input::hash_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Failed,
    /// The named file could not be read, or was over the size limit.
    Unreadable,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub results: Vec<(String, CheckStatus)>,
}

impl CheckReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|(_, s)| *s == status).count()
    }

    pub fn ok(&self) -> usize {
        self.count(CheckStatus::Ok)
    }

    pub fn failed(&self) -> usize {
        self.count(CheckStatus::Failed)
    }

    pub fn unreadable(&self) -> usize {
        self.count(CheckStatus::Unreadable)
    }

    pub fn is_success(&self) -> bool {
        self.results.iter().all(|(_, s)| *s == CheckStatus::Ok)
    }
}

/// Hashes the file named by `entry` and compares it against the expected digest.
pub fn verify_entry(entry: &CheckEntry, limit: u64) -> CheckStatus {
    match hash_path(Path::new(&entry.name), limit) {
        Ok(digest) if digest == entry.digest => CheckStatus::Ok,
        Ok(_) => {
            debug!("digest mismatch for {}", entry.name);
            CheckStatus::Failed
        }
        Err(err) => {
            warn!("{}: {:#}", entry.name, err);
            CheckStatus::Unreadable
        }
    }
}

/// Verifies every entry; unreadable files are recorded, not fatal.
pub fn verify(entries: &[CheckEntry], limit: u64) -> CheckReport {
    let results = entries
        .iter()
        .map(|entry| (entry.name.clone(), verify_entry(entry, limit)))
        .collect();

    CheckReport { results }
}
