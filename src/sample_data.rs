//! Sample QR Records
//!
//! Read-only records shown on the dashboard, plus the summary figures
//! derived from them.

use std::sync::OnceLock;

use crate::error::{UiError, UiResult};
use crate::models::QrRecord;

const SAMPLE_RECORDS: &str = include_str!("../data/qr_codes.json");

static RECORDS: OnceLock<Vec<QrRecord>> = OnceLock::new();

pub fn parse_records(text: &str) -> UiResult<Vec<QrRecord>> {
    serde_json::from_str(text).map_err(|e| UiError::Data(e.to_string()))
}

/// Records parsed once on first use; empty if the embedded data is broken
pub fn records() -> &'static [QrRecord] {
    RECORDS.get_or_init(|| {
        parse_records(SAMPLE_RECORDS).unwrap_or_else(|err| {
            log::error!("[DATA] {}", err);
            Vec::new()
        })
    })
}

/// Figures for the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_codes: usize,
    pub total_scans: u64,
    pub active_codes: usize,
}

impl DashboardStats {
    pub fn from_records(records: &[QrRecord]) -> Self {
        Self {
            total_codes: records.len(),
            total_scans: records.iter().map(|r| r.scans).sum(),
            active_codes: records.iter().filter(|r| r.status.is_active()).count(),
        }
    }

    /// Share of the plan quota in use, clamped to 0..=100
    pub fn quota_percent(&self, quota: u32) -> u32 {
        if quota == 0 {
            return 100;
        }
        let percent = self.total_codes as u64 * 100 / quota as u64;
        percent.min(100) as u32
    }
}

/// Group digits in threes: `5190` -> `5,190`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
