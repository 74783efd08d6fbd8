use std::collections::BTreeSet;

use super::entities::{lookup, Jurisdiction, NerEntity};
use super::error::ClassifyError;
use super::SensitivityClass;

/// Returns the sensitivity class of a detector label.
///
/// Unknown labels are an error, never a default: treating an unrecognized
/// entity as non-sensitive would leak it.
pub fn classify(label: &str) -> Result<SensitivityClass, ClassifyError> {
    lookup(label)
        .map(classify_entity)
        .ok_or_else(|| ClassifyError::UnknownEntityLabel(label.to_string()))
}

pub fn classify_entity(entity: NerEntity) -> SensitivityClass {
    match entity {
        NerEntity::DateTime | NerEntity::Nrp | NerEntity::Url => SensitivityClass::NonSensitive,
        NerEntity::CreditCard
        | NerEntity::Crypto
        | NerEntity::EmailAddress
        | NerEntity::IbanCode
        | NerEntity::IpAddress
        | NerEntity::Location
        | NerEntity::Person
        | NerEntity::PhoneNumber
        | NerEntity::MedicalLicense
        | NerEntity::UsBankNumber
        | NerEntity::UsDriverLicense
        | NerEntity::UsItin
        | NerEntity::UsPassport
        | NerEntity::UsSsn
        | NerEntity::UkNhs
        | NerEntity::Nif
        | NerEntity::ItFiscalCode
        | NerEntity::ItDriverLicense
        | NerEntity::ItVatCode
        | NerEntity::ItPassport
        | NerEntity::ItIdentityCard
        | NerEntity::AuAbn
        | NerEntity::AuAcn
        | NerEntity::AuTfn
        | NerEntity::AuMedicare => SensitivityClass::Sensitive,
    }
}

/// Every label the table recognizes
pub fn all_labels() -> BTreeSet<&'static str> {
    NerEntity::ALL.iter().map(|entity| entity.label()).collect()
}

pub fn labels_in(jurisdiction: Jurisdiction) -> Vec<&'static str> {
    NerEntity::ALL
        .iter()
        .filter(|entity| entity.jurisdiction() == jurisdiction)
        .map(|entity| entity.label())
        .collect()
}

pub fn labels_with(class: SensitivityClass) -> Vec<&'static str> {
    NerEntity::ALL
        .iter()
        .filter(|entity| classify_entity(**entity) == class)
        .map(|entity| entity.label())
        .collect()
}
