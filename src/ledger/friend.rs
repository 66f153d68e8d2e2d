use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    catalog::CatalogEntry,
    common::{Identifiable, NamedEntity},
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub id: Uuid,
    pub name: String,
}

impl Friend {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Friend {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Friend {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CatalogEntry for Friend {
    const KIND: &'static str = "Friend";

    fn create(name: String) -> Self {
        Self::new(name)
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
