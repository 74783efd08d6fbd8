use thiserror::Error;

/// Failures when mapping detector output onto the sensitivity taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The detector produced a label this table does not know about.
    /// Usually means the detector vocabulary moved ahead of the table.
    #[error("unknown entity label: {0}")]
    UnknownEntityLabel(String),

    #[error("unknown sensitivity class: {0}")]
    UnknownSensitivityClass(String),
}

impl ClassifyError {
    pub fn is_unknown_label(&self) -> bool {
        matches!(self, ClassifyError::UnknownEntityLabel(_))
    }
}
