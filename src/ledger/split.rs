use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    common::{clean_name, ensure_unique_name},
    group::{GroupExpense, SplitMode},
    member::Member,
};
use crate::{
    config::Config,
    currency::{
        allocate_evenly, from_minor_units, round_to_minor_units, sanitize_amount, to_minor_units,
        MAX_MINOR_UNITS,
    },
    errors::{LedgerError, LedgerResult},
};

const MEMBER_KIND: &str = "Member";

/// Settlement totals for one group expense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlementSummary {
    pub member_count: usize,
    pub settled_count: usize,
    pub settled_amount: f64,
    pub outstanding_amount: f64,
    /// Total minus the sum of shares. Zero under an equal split, up to float
    /// error for totals too large to count in minor units.
    pub unallocated: f64,
}

impl SettlementSummary {
    pub fn is_fully_settled(&self) -> bool {
        self.member_count > 0 && self.settled_count == self.member_count
    }
}

/// Maintains member shares and settlement flags of a caller-owned
/// [`GroupExpense`].
///
/// The ledger itself only carries the rounding precision. Equal splits are
/// allocated in minor units with leftover units going to the earliest
/// members, so shares always add up to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLedger {
    minor_units: u8,
}

impl Default for SplitLedger {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SplitLedger {
    /// Precision above [`MAX_MINOR_UNITS`] is clamped.
    pub fn new(minor_units: u8) -> Self {
        if minor_units > MAX_MINOR_UNITS {
            warn!(
                requested = minor_units,
                max = MAX_MINOR_UNITS,
                "clamping share precision"
            );
        }
        Self {
            minor_units: minor_units.min(MAX_MINOR_UNITS),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.minor_units)
    }

    pub fn minor_units(&self) -> u8 {
        self.minor_units
    }

    /// Builds a group from its initial member names.
    pub fn create_group<I, S>(
        &self,
        description: impl Into<String>,
        date: NaiveDate,
        total_amount: f64,
        split_mode: SplitMode,
        names: I,
    ) -> LedgerResult<GroupExpense>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = GroupExpense::new(description, date, total_amount, split_mode);
        for name in names {
            Self::push_member(&mut group, name.into())?;
        }
        self.apply_split(&mut group);
        info!(
            group = %group.id,
            members = group.member_count(),
            mode = %group.split_mode,
            "created group expense"
        );
        Ok(group)
    }

    /// Appends a new unsettled member, rejecting case-insensitive duplicates.
    pub fn add_member(
        &self,
        group: &mut GroupExpense,
        name: impl Into<String>,
    ) -> LedgerResult<Member> {
        let id = Self::push_member(group, name.into())?;
        self.apply_split(group);
        debug!(group = %group.id, member = %id, "added member");
        group
            .member(id)
            .cloned()
            .ok_or(LedgerError::MemberNotFound(id))
    }

    pub fn remove_member<'a>(
        &self,
        group: &'a mut GroupExpense,
        member_id: Uuid,
    ) -> LedgerResult<&'a [Member]> {
        let Some(index) = group
            .members
            .iter()
            .position(|member| member.id == member_id)
        else {
            warn!(group = %group.id, member = %member_id, "cannot remove unknown member");
            return Err(LedgerError::MemberNotFound(member_id));
        };
        let removed = group.members.remove(index);
        self.apply_split(group);
        debug!(group = %group.id, member = %removed.id, remaining = group.member_count(), "removed member");
        Ok(&group.members)
    }

    /// Overwrites a member's share without reconciling against the total.
    ///
    /// Under an equal split the value holds only until the next recompute.
    pub fn set_member_share<'a>(
        &self,
        group: &'a mut GroupExpense,
        member_id: Uuid,
        amount: f64,
    ) -> LedgerResult<&'a Member> {
        let mode = group.split_mode;
        let member = group.member_mut(member_id)?;
        member.share = sanitize_amount(amount);
        if mode == SplitMode::Equal {
            debug!(member = %member_id, "share edited while split is equal");
        }
        Ok(&*member)
    }

    pub fn toggle_settled<'a>(
        &self,
        group: &'a mut GroupExpense,
        member_id: Uuid,
    ) -> LedgerResult<&'a Member> {
        let member = group.member_mut(member_id)?;
        member.settled = !member.settled;
        debug!(member = %member_id, settled = member.settled, "toggled settlement");
        Ok(&*member)
    }

    pub fn rename_member<'a>(
        &self,
        group: &'a mut GroupExpense,
        member_id: Uuid,
        name: &str,
    ) -> LedgerResult<&'a Member> {
        let name = clean_name(MEMBER_KIND, name)?;
        if group.member(member_id).is_none() {
            return Err(LedgerError::MemberNotFound(member_id));
        }
        ensure_unique_name(MEMBER_KIND, &group.members, Some(member_id), &name)?;
        let member = group.member_mut(member_id)?;
        member.name = name;
        Ok(&*member)
    }

    /// Switching to equal recomputes every share; switching to custom keeps
    /// the current shares as the editable starting point.
    pub fn set_split_mode<'a>(
        &self,
        group: &'a mut GroupExpense,
        mode: SplitMode,
    ) -> &'a [Member] {
        group.split_mode = mode;
        self.apply_split(group);
        debug!(group = %group.id, mode = %mode, "changed split mode");
        &group.members
    }

    pub fn set_total_amount<'a>(&self, group: &'a mut GroupExpense, amount: f64) -> &'a [Member] {
        group.total_amount = sanitize_amount(amount);
        self.apply_split(group);
        debug!(group = %group.id, total = group.total_amount, "changed total amount");
        &group.members
    }

    /// Rounds the total to minor units, then recomputes equal shares. Shares
    /// are left alone under a custom split or with no members.
    pub fn apply_split(&self, group: &mut GroupExpense) {
        group.total_amount = round_to_minor_units(group.total_amount, self.minor_units);
        if group.split_mode != SplitMode::Equal || group.members.is_empty() {
            return;
        }
        let shares = allocate_evenly(group.total_amount, group.members.len(), self.minor_units);
        for (member, share) in group.members.iter_mut().zip(shares) {
            member.share = share;
        }
    }

    pub fn settlement(&self, group: &GroupExpense) -> SettlementSummary {
        let settled_amount: f64 = group
            .members
            .iter()
            .filter(|member| member.settled)
            .map(|member| member.share)
            .sum();
        let outstanding_amount: f64 = group.members.iter().map(Member::outstanding).sum();
        let total = to_minor_units(group.total_amount, self.minor_units);
        let allocated = to_minor_units(group.allocated_total(), self.minor_units);
        let unallocated = match (total, allocated) {
            (Some(total), Some(allocated)) => from_minor_units(total - allocated, self.minor_units),
            _ => group.total_amount - group.allocated_total(),
        };
        SettlementSummary {
            member_count: group.member_count(),
            settled_count: group.settled_count(),
            settled_amount,
            outstanding_amount,
            unallocated,
        }
    }

    fn push_member(group: &mut GroupExpense, name: String) -> LedgerResult<Uuid> {
        let name = clean_name(MEMBER_KIND, &name)?;
        ensure_unique_name(MEMBER_KIND, &group.members, None, &name)?;
        let member = Member::new(name);
        let id = member.id;
        group.members.push(member);
        Ok(id)
    }
}
