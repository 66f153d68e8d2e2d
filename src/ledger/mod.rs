//! Ledger records and the operations that keep them consistent.

pub mod book;
pub mod catalog;
pub mod category;
pub mod common;
pub mod expense;
pub mod friend;
pub mod group;
pub mod member;
pub mod payment;
pub mod payment_mode;
pub mod split;
pub mod tracker;

pub use book::GroupBook;
pub use catalog::{Catalog, CatalogEntry};
pub use category::Category;
pub use common::{Identifiable, NamedEntity};
pub use expense::{Expense, ExpenseBook};
pub use friend::Friend;
pub use group::{GroupExpense, SplitMode};
pub use member::Member;
pub use payment::{FriendPayment, FriendPayments, PaymentDirection};
pub use payment_mode::PaymentMode;
pub use split::{SettlementSummary, SplitLedger};
pub use tracker::ExpenseTracker;
