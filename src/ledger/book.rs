use std::collections::HashSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    common::clean_name,
    group::GroupExpense,
    member::Member,
    split::{SettlementSummary, SplitLedger},
};
use crate::{
    currency::sanitize_amount,
    errors::{LedgerError, LedgerResult},
};

/// The list of group expenses shown on the groups screen.
#[derive(Debug, Clone, Default)]
pub struct GroupBook {
    groups: Vec<GroupExpense>,
    splitter: SplitLedger,
}

impl GroupBook {
    /// Seeds the book; equal splits are reapplied so every group starts
    /// consistent with its total.
    pub fn new(splitter: SplitLedger, groups: Vec<GroupExpense>) -> Self {
        let mut groups = groups;
        for group in &mut groups {
            splitter.apply_split(group);
        }
        Self { groups, splitter }
    }

    pub fn splitter(&self) -> SplitLedger {
        self.splitter
    }

    pub fn groups(&self) -> &[GroupExpense] {
        &self.groups
    }

    pub fn group(&self, id: Uuid) -> Option<&GroupExpense> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn add_group(&mut self, group: GroupExpense) -> Uuid {
        let id = group.id;
        self.groups.push(group);
        info!(group = %id, "added group expense");
        id
    }

    /// Deletes a group regardless of its members' settlement state.
    pub fn remove_group(&mut self, id: Uuid) -> LedgerResult<GroupExpense> {
        let index = self.position(id)?;
        let removed = self.groups.remove(index);
        info!(group = %id, "removed group expense");
        Ok(removed)
    }

    /// Edits a copy of the group and commits it only when member names and
    /// ids are still unique. The split is reapplied afterwards.
    pub fn update_group<F>(&mut self, id: Uuid, update: F) -> LedgerResult<&GroupExpense>
    where
        F: FnOnce(&mut GroupExpense),
    {
        let index = self.position(id)?;
        let mut draft = self.groups[index].clone();
        update(&mut draft);
        draft.id = id;
        draft.total_amount = sanitize_amount(draft.total_amount);
        validate_members(&draft.members)?;
        for member in &mut draft.members {
            member.share = sanitize_amount(member.share);
        }
        self.splitter.apply_split(&mut draft);
        self.groups[index] = draft;
        debug!(group = %id, "updated group expense");
        Ok(&self.groups[index])
    }

    pub fn add_member(&mut self, group_id: Uuid, name: &str) -> LedgerResult<Member> {
        let splitter = self.splitter;
        let group = self.group_mut(group_id)?;
        splitter.add_member(group, name)
    }

    pub fn remove_member(&mut self, group_id: Uuid, member_id: Uuid) -> LedgerResult<&[Member]> {
        let splitter = self.splitter;
        let group = self.group_mut(group_id)?;
        splitter.remove_member(group, member_id)
    }

    /// Flips a member's settled flag.
    pub fn settle_member(&mut self, group_id: Uuid, member_id: Uuid) -> LedgerResult<&Member> {
        let splitter = self.splitter;
        let group = self.group_mut(group_id)?;
        splitter.toggle_settled(group, member_id)
    }

    pub fn settlement(&self, group_id: Uuid) -> LedgerResult<SettlementSummary> {
        self.group(group_id)
            .map(|group| self.splitter.settlement(group))
            .ok_or(LedgerError::GroupNotFound(group_id))
    }

    /// Share of the member representing the device owner, `0` when they are
    /// not part of the group.
    pub fn my_share(&self, group_id: Uuid, self_name: &str) -> LedgerResult<f64> {
        let group = self
            .group(group_id)
            .ok_or(LedgerError::GroupNotFound(group_id))?;
        Ok(group
            .member_by_name(self_name)
            .map(|member| member.share)
            .unwrap_or(0.0))
    }

    pub fn total_amount(&self) -> f64 {
        self.groups.iter().map(|group| group.total_amount).sum()
    }

    fn group_mut(&mut self, id: Uuid) -> LedgerResult<&mut GroupExpense> {
        self.groups
            .iter_mut()
            .find(|group| group.id == id)
            .ok_or(LedgerError::GroupNotFound(id))
    }

    fn position(&self, id: Uuid) -> LedgerResult<usize> {
        match self.groups.iter().position(|group| group.id == id) {
            Some(index) => Ok(index),
            None => {
                warn!(group = %id, "group expense not found");
                Err(LedgerError::GroupNotFound(id))
            }
        }
    }
}

fn validate_members(members: &[Member]) -> LedgerResult<()> {
    let mut seen = HashSet::new();
    let mut ids = HashSet::new();
    for member in members {
        if !ids.insert(member.id) {
            warn!(member = %member.id, "rejected group edit with repeated member id");
            return Err(LedgerError::Validation(format!(
                "member id {} appears more than once",
                member.id
            )));
        }
        let name = clean_name("Member", &member.name)?;
        if !seen.insert(name.to_lowercase()) {
            warn!(name = %name, "rejected group edit with duplicate member");
            return Err(LedgerError::duplicate("Member", name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::ledger::SplitMode;

    fn book() -> (GroupBook, Uuid) {
        let splitter = SplitLedger::default();
        let group = splitter
            .create_group(
                "Movie night",
                NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
                1800.0,
                SplitMode::Equal,
                ["Emma", "David", "Lisa", "Me"],
            )
            .unwrap();
        let id = group.id;
        (GroupBook::new(splitter, vec![group]), id)
    }

    #[test]
    fn update_rejects_duplicate_members_without_change() {
        let (mut book, id) = book();
        let before = book.group(id).unwrap().clone();

        let err = book
            .update_group(id, |group| {
                group.description = "Changed".into();
                group.members[1].name = "emma".into();
            })
            .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(book.group(id).unwrap(), &before);
    }

    #[test]
    fn update_rejects_reused_member_id() {
        let (mut book, id) = book();
        let before = book.group(id).unwrap().clone();

        let err = book
            .update_group(id, |group| {
                let mut copy = group.members[0].clone();
                copy.name = "Emma's twin".into();
                group.members.push(copy);
            })
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));
        assert_eq!(book.group(id).unwrap(), &before);
    }

    #[test]
    fn update_rounds_total_before_splitting() {
        let (mut book, id) = book();
        let updated = book
            .update_group(id, |group| group.total_amount = 1000.004)
            .unwrap();
        assert_eq!(updated.total_amount, 1000.0);
        assert!(updated.members.iter().all(|member| member.share == 250.0));
        assert_eq!(book.settlement(id).unwrap().unallocated, 0.0);
    }

    #[test]
    fn update_reapplies_equal_split_for_new_total() {
        let (mut book, id) = book();
        let updated = book
            .update_group(id, |group| group.total_amount = 2000.0)
            .unwrap();
        assert!(updated.members.iter().all(|member| member.share == 500.0));
    }

    #[test]
    fn my_share_matches_self_name_case_insensitively() {
        let (mut book, id) = book();
        assert_eq!(book.my_share(id, "me").unwrap(), 450.0);

        let me = book.group(id).unwrap().member_by_name("Me").unwrap().id;
        book.remove_member(id, me).unwrap();
        assert_eq!(book.my_share(id, "Me").unwrap(), 0.0);
        assert_eq!(book.group(id).unwrap().members[0].share, 600.0);
    }

    #[test]
    fn remove_group_is_independent_of_settlement() {
        let (mut book, id) = book();
        let emma = book.group(id).unwrap().members[0].id;
        book.settle_member(id, emma).unwrap();
        book.remove_group(id).unwrap();
        assert!(book.is_empty());
        assert_eq!(
            book.remove_group(id).unwrap_err(),
            LedgerError::GroupNotFound(id)
        );
    }
}
