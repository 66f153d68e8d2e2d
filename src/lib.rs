#![doc(test(attr(deny(warnings))))]

//! Split Ledger keeps the in-memory records of a personal expense tracker:
//! personal expenses, friend payments, group expenses split equally or by
//! custom shares, and the catalogs and summaries around them.
//!
//! ```
//! use chrono::NaiveDate;
//! use split_ledger::ledger::{SplitLedger, SplitMode};
//!
//! let ledger = SplitLedger::default();
//! let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let mut group = ledger
//!     .create_group("Team lunch", date, 2400.0, SplitMode::Equal, ["A", "B", "C"])
//!     .unwrap();
//! assert!(group.members.iter().all(|member| member.share == 800.0));
//!
//! ledger.add_member(&mut group, "D").unwrap();
//! assert!(group.members.iter().all(|member| member.share == 600.0));
//! ```

pub mod config;
pub mod currency;
pub mod errors;
pub mod fixtures;
pub mod ledger;
pub mod summary;
pub mod utils;

pub use errors::{ConfigError, LedgerError, LedgerResult};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Split Ledger tracing initialized.");
    });
}
