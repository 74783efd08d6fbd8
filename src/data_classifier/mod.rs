pub mod classifier;
pub mod entities;
pub mod error;
pub mod tag;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use self::error::ClassifyError;

/// How a detected entity must be handled downstream.
///
/// `Sensitive` entities are masked or access-controlled before they are
/// persisted; `NonSensitive` ones can be stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityClass {
    Sensitive,
    NonSensitive,
}

impl SensitivityClass {
    pub const ALL: [SensitivityClass; 2] =
        [SensitivityClass::Sensitive, SensitivityClass::NonSensitive];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityClass::Sensitive => "Sensitive",
            SensitivityClass::NonSensitive => "NonSensitive",
        }
    }

    /// Fully qualified tag name under the given classification, e.g. `PII.Sensitive`
    pub fn tag_fqn(&self, classification_name: &str) -> String {
        format!("{}.{}", classification_name, self.as_str())
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, SensitivityClass::Sensitive)
    }
}

impl fmt::Display for SensitivityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensitivityClass {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensitivityClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| ClassifyError::UnknownSensitivityClass(s.to_string()))
    }
}
