use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::{Identifiable, NamedEntity};

/// A participant in a group expense together with the share they owe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub share: f64,
    #[serde(default)]
    pub settled: bool,
}

impl Member {
    /// Creates an unsettled member with a zero share.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            share: 0.0,
            settled: false,
        }
    }

    /// Amount still owed by this member.
    pub fn outstanding(&self) -> f64 {
        if self.settled {
            0.0
        } else {
            self.share
        }
    }
}

impl Identifiable for Member {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Member {
    fn name(&self) -> &str {
        &self.name
    }
}
