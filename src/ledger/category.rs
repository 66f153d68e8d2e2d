use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    catalog::CatalogEntry,
    common::{Identifiable, NamedEntity},
};

/// Spending category used to label expenses and payments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Category {
    const KIND: &'static str = "Category";

    fn create(name: String) -> Self {
        Self::new(name)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
