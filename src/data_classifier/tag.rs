use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::classifier::classify_entity;
use super::entities::NerEntity;
use super::error::ClassifyError;
use super::SensitivityClass;
use crate::config::{TaggerConfig, DEFAULT_CLASSIFICATION};

/// Tag attached to a detected entity before it is persisted or redacted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTag {
    pub entity: NerEntity,
    pub classification: SensitivityClass,
    pub tag_fqn: String, // e.g. PII.Sensitive
}

/// Turns detector labels into tags under a configured classification
#[derive(Debug, Clone)]
pub struct Tagger {
    classification_name: String,
}

impl Tagger {
    /// Fails if the classification name would produce malformed tag FQNs
    pub fn new(config: &TaggerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classification_name: config.classification_name.clone(),
        })
    }

    pub fn classification_name(&self) -> &str {
        &self.classification_name
    }

    pub fn tag(&self, label: &str) -> Result<EntityTag, ClassifyError> {
        let entity = match label.parse::<NerEntity>() {
            Ok(entity) => entity,
            Err(e) => {
                warn!("Detector produced an unrecognized entity label: {}", label);
                return Err(e);
            }
        };
        Ok(self.tag_entity(entity))
    }

    pub fn tag_entity(&self, entity: NerEntity) -> EntityTag {
        let classification = classify_entity(entity);
        let tag_fqn = classification.tag_fqn(&self.classification_name);
        debug!("Tagged {} as {}", entity, tag_fqn);

        EntityTag {
            entity,
            classification,
            tag_fqn,
        }
    }

    /// Tags labels in order, stopping at the first one that is not recognized
    pub fn tag_all<'a, I>(&self, labels: I) -> Result<Vec<EntityTag>, ClassifyError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels.into_iter().map(|label| self.tag(label)).collect()
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self {
            classification_name: DEFAULT_CLASSIFICATION.to_string(),
        }
    }
}
