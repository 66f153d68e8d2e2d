use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::common::Identifiable;
use crate::{
    currency::sanitize_amount,
    errors::{LedgerError, LedgerResult},
};

const EXPENSE_KIND: &str = "Expense";

/// A personal expense logged by the device owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount: sanitize_amount(amount),
            category: category.into(),
            payment_mode: None,
            date,
        }
    }

    pub fn with_payment_mode(mut self, payment_mode: impl Into<String>) -> Self {
        self.payment_mode = Some(payment_mode.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ExpenseBook {
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn add(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        debug!(expense = %id, amount = expense.amount, "added expense");
        self.expenses.push(expense);
        id
    }

    /// Applies `update` to a copy of the expense; the id is preserved and the
    /// amount re-sanitized before the copy replaces the original.
    pub fn update<F>(&mut self, id: Uuid, update: F) -> LedgerResult<&Expense>
    where
        F: FnOnce(&mut Expense),
    {
        let index = self.position(id)?;
        let mut draft = self.expenses[index].clone();
        update(&mut draft);
        draft.id = id;
        draft.amount = sanitize_amount(draft.amount);
        self.expenses[index] = draft;
        Ok(&self.expenses[index])
    }

    pub fn remove(&mut self, id: Uuid) -> LedgerResult<Expense> {
        let index = self.position(id)?;
        Ok(self.expenses.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Newest first; ties keep insertion order.
    pub fn recent(&self, limit: usize) -> Vec<&Expense> {
        let mut sorted: Vec<&Expense> = self.expenses.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    fn position(&self, id: Uuid) -> LedgerResult<usize> {
        self.expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(LedgerError::EntryNotFound {
                kind: EXPENSE_KIND,
                id,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn update_keeps_id_and_coerces_amount() {
        let mut book = ExpenseBook::default();
        let id = book.add(Expense::new("Fuel", 800.0, "Transportation", day(2)));

        let updated = book
            .update(id, |expense| {
                expense.id = Uuid::new_v4();
                expense.amount = f64::NAN;
                expense.description = "Fuel refill".into();
            })
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.amount, 0.0);
        assert_eq!(updated.description, "Fuel refill");
    }

    #[test]
    fn recent_orders_newest_first() {
        let book = ExpenseBook::new(vec![
            Expense::new("Coffee", 120.0, "Food", day(1)),
            Expense::new("Bill", 2400.0, "Bills", day(5)),
            Expense::new("Movie", 600.0, "Entertainment", day(3)),
        ]);
        let recent: Vec<&str> = book
            .recent(2)
            .into_iter()
            .map(|expense| expense.description.as_str())
            .collect();
        assert_eq!(recent, vec!["Bill", "Movie"]);
        assert_eq!(book.total(), 3120.0);
    }
}
