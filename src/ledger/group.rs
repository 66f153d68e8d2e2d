use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    common::{names_match, Identifiable},
    member::Member,
};
use crate::{
    currency::sanitize_amount,
    errors::{LedgerError, LedgerResult},
};

/// How a group expense total is divided among its members.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Equal,
    Custom,
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SplitMode::Equal => "Equal Split",
            SplitMode::Custom => "Custom Split",
        };
        f.write_str(label)
    }
}

/// A shared expense whose total is split across an ordered member list.
///
/// Fields are public for display code; membership and amounts should be
/// changed through [`crate::ledger::SplitLedger`] so equal shares stay in
/// sync with the total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupExpense {
    pub id: Uuid,
    pub description: String,
    pub date: NaiveDate,
    pub total_amount: f64,
    pub split_mode: SplitMode,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
}

impl GroupExpense {
    pub fn new(
        description: impl Into<String>,
        date: NaiveDate,
        total_amount: f64,
        split_mode: SplitMode,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            date,
            total_amount: sanitize_amount(total_amount),
            split_mode,
            members: Vec::new(),
            category: None,
            payment_mode: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_payment_mode(mut self, payment_mode: impl Into<String>) -> Self {
        self.payment_mode = Some(payment_mode.into());
        self
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub(crate) fn member_mut(&mut self, id: Uuid) -> LedgerResult<&mut Member> {
        self.members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or(LedgerError::MemberNotFound(id))
    }

    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| names_match(&member.name, name))
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn settled_count(&self) -> usize {
        self.members.iter().filter(|member| member.settled).count()
    }

    /// Sum of all member shares, which may differ from the total in custom mode.
    pub fn allocated_total(&self) -> f64 {
        self.members.iter().map(|member| member.share).sum()
    }
}

impl Identifiable for GroupExpense {
    fn id(&self) -> Uuid {
        self.id
    }
}
