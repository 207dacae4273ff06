//! Sensu event model.
//!
//! Only the fields the handler reads are modelled; everything else in the
//! core/v2 event is ignored on deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::status::CheckStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub annotations: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    #[serde(default)]
    pub hostname: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub system: System,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: i64,
}

/// A Sensu event: one check result for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub entity: Entity,
    pub check: Check,
}

impl Event {
    /// Build an event from its flat identifying fields.
    pub fn new(
        namespace: impl Into<String>,
        entity_name: impl Into<String>,
        entity_hostname: impl Into<String>,
        check_name: impl Into<String>,
        status: i64,
    ) -> Self {
        Self {
            entity: Entity {
                metadata: ObjectMeta {
                    name: entity_name.into(),
                    namespace: namespace.into(),
                    annotations: HashMap::new(),
                },
                system: System {
                    hostname: entity_hostname.into(),
                },
            },
            check: Check {
                metadata: ObjectMeta {
                    name: check_name.into(),
                    ..Default::default()
                },
                status,
            },
        }
    }

    pub fn namespace(&self) -> &str {
        &self.entity.metadata.namespace
    }

    /// Hostname when the agent reported one, otherwise the entity name.
    pub fn resolved_entity(&self) -> &str {
        let hostname = self.entity.system.hostname.as_str();
        if hostname.is_empty() {
            &self.entity.metadata.name
        } else {
            hostname
        }
    }

    pub fn check_name(&self) -> &str {
        &self.check.metadata.name
    }

    pub fn status(&self) -> CheckStatus {
        CheckStatus::from(self.check.status)
    }

    /// Look up an annotation, check first, then entity.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.check
            .metadata
            .annotations
            .get(key)
            .or_else(|| self.entity.metadata.annotations.get(key))
            .map(String::as_str)
    }
}
