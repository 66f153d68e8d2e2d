use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    catalog::CatalogEntry,
    common::{Identifiable, NamedEntity},
};

/// How money changed hands: cash, card, UPI and so on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMode {
    pub id: Uuid,
    pub name: String,
}

impl PaymentMode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for PaymentMode {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for PaymentMode {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for PaymentMode {
    const KIND: &'static str = "Payment mode";

    fn create(name: String) -> Self {
        Self::new(name)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
