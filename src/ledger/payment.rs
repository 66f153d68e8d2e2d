use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::common::Identifiable;
use crate::{
    currency::sanitize_amount,
    errors::{LedgerError, LedgerResult},
};

const PAYMENT_KIND: &str = "Friend payment";

/// Which side of a friend payment the device owner is on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentDirection {
    IOwe,
    OwedToMe,
}

impl fmt::Display for PaymentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentDirection::IOwe => "Money I Owe",
            PaymentDirection::OwedToMe => "Money Owed to Me",
        };
        f.write_str(label)
    }
}

/// Money exchanged with a single friend, outside any group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendPayment {
    pub id: Uuid,
    pub friend: String,
    pub amount: f64,
    pub direction: PaymentDirection,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_mode: Option<String>,
    #[serde(default)]
    pub settled: bool,
}

impl FriendPayment {
    pub fn new(
        friend: impl Into<String>,
        amount: f64,
        direction: PaymentDirection,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            friend: friend.into(),
            amount: sanitize_amount(amount),
            direction,
            date,
            description: String::new(),
            category: String::new(),
            payment_mode: None,
            settled: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_payment_mode(mut self, payment_mode: impl Into<String>) -> Self {
        self.payment_mode = Some(payment_mode.into());
        self
    }

    pub fn with_settled(mut self, settled: bool) -> Self {
        self.settled = settled;
        self
    }
}

impl Identifiable for FriendPayment {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FriendPayments {
    payments: Vec<FriendPayment>,
}

impl FriendPayments {
    pub fn new(payments: Vec<FriendPayment>) -> Self {
        Self { payments }
    }

    pub fn add(&mut self, payment: FriendPayment) -> Uuid {
        let id = payment.id;
        debug!(payment = %id, direction = %payment.direction, "added friend payment");
        self.payments.push(payment);
        id
    }

    pub fn update<F>(&mut self, id: Uuid, update: F) -> LedgerResult<&FriendPayment>
    where
        F: FnOnce(&mut FriendPayment),
    {
        let index = self.position(id)?;
        let mut draft = self.payments[index].clone();
        update(&mut draft);
        draft.id = id;
        draft.amount = sanitize_amount(draft.amount);
        self.payments[index] = draft;
        Ok(&self.payments[index])
    }

    pub fn remove(&mut self, id: Uuid) -> LedgerResult<FriendPayment> {
        let index = self.position(id)?;
        Ok(self.payments.remove(index))
    }

    pub fn toggle_settled(&mut self, id: Uuid) -> LedgerResult<&FriendPayment> {
        let index = self.position(id)?;
        let payment = &mut self.payments[index];
        payment.settled = !payment.settled;
        debug!(payment = %id, settled = payment.settled, "toggled friend payment");
        Ok(&*payment)
    }

    pub fn get(&self, id: Uuid) -> Option<&FriendPayment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn payments(&self) -> &[FriendPayment] {
        &self.payments
    }

    pub fn by_direction(&self, direction: PaymentDirection) -> Vec<&FriendPayment> {
        self.payments
            .iter()
            .filter(|payment| payment.direction == direction)
            .collect()
    }

    /// Splits one direction into `(settled, outstanding)` lists.
    pub fn partition(
        &self,
        direction: PaymentDirection,
    ) -> (Vec<&FriendPayment>, Vec<&FriendPayment>) {
        self.by_direction(direction)
            .into_iter()
            .partition(|payment| payment.settled)
    }

    pub fn outstanding_total(&self, direction: PaymentDirection) -> f64 {
        self.payments
            .iter()
            .filter(|payment| payment.direction == direction && !payment.settled)
            .map(|payment| payment.amount)
            .sum()
    }

    fn position(&self, id: Uuid) -> LedgerResult<usize> {
        self.payments
            .iter()
            .position(|payment| payment.id == id)
            .ok_or(LedgerError::EntryNotFound {
                kind: PAYMENT_KIND,
                id,
            })
    }
}
