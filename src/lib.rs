pub mod config;
pub mod data_classifier;
pub mod utils;

pub use crate::config::TaggerConfig;
pub use data_classifier::classifier::{all_labels, classify, classify_entity};
pub use data_classifier::entities::{Jurisdiction, NerEntity};
pub use data_classifier::error::ClassifyError;
pub use data_classifier::tag::{EntityTag, Tagger};
pub use data_classifier::SensitivityClass;
