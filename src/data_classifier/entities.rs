use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::ClassifyError;

/// Where an entity type applies. Global entities are recognized in any text,
/// the rest are national identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    Global,
    UnitedStates,
    UnitedKingdom,
    Spain,
    Italy,
    Australia,
}

/// Entity types emitted by the Presidio analyzer.
///
/// See <https://microsoft.github.io/presidio/supported_entities/>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NerEntity {
    // Global
    CreditCard,
    Crypto,
    DateTime,
    EmailAddress,
    IbanCode,
    IpAddress,
    Nrp,
    Location,
    Person,
    PhoneNumber,
    MedicalLicense,
    Url,

    // USA
    UsBankNumber,
    UsDriverLicense,
    UsItin,
    UsPassport,
    UsSsn,

    // UK
    UkNhs,

    // Spain
    Nif,

    // Italy
    ItFiscalCode,
    ItDriverLicense,
    ItVatCode,
    ItPassport,
    ItIdentityCard,

    // Australia
    AuAbn,
    AuAcn,
    AuTfn,
    AuMedicare,
}

impl NerEntity {
    pub const ALL: [NerEntity; 28] = [
        NerEntity::CreditCard,
        NerEntity::Crypto,
        NerEntity::DateTime,
        NerEntity::EmailAddress,
        NerEntity::IbanCode,
        NerEntity::IpAddress,
        NerEntity::Nrp,
        NerEntity::Location,
        NerEntity::Person,
        NerEntity::PhoneNumber,
        NerEntity::MedicalLicense,
        NerEntity::Url,
        NerEntity::UsBankNumber,
        NerEntity::UsDriverLicense,
        NerEntity::UsItin,
        NerEntity::UsPassport,
        NerEntity::UsSsn,
        NerEntity::UkNhs,
        NerEntity::Nif,
        NerEntity::ItFiscalCode,
        NerEntity::ItDriverLicense,
        NerEntity::ItVatCode,
        NerEntity::ItPassport,
        NerEntity::ItIdentityCard,
        NerEntity::AuAbn,
        NerEntity::AuAcn,
        NerEntity::AuTfn,
        NerEntity::AuMedicare,
    ];

    /// The label as the detector emits it
    pub fn label(&self) -> &'static str {
        match self {
            NerEntity::CreditCard => "CREDIT_CARD",
            NerEntity::Crypto => "CRYPTO",
            NerEntity::DateTime => "DATE_TIME",
            NerEntity::EmailAddress => "EMAIL_ADDRESS",
            NerEntity::IbanCode => "IBAN_CODE",
            NerEntity::IpAddress => "IP_ADDRESS",
            NerEntity::Nrp => "NRP",
            NerEntity::Location => "LOCATION",
            NerEntity::Person => "PERSON",
            NerEntity::PhoneNumber => "PHONE_NUMBER",
            NerEntity::MedicalLicense => "MEDICAL_LICENSE",
            NerEntity::Url => "URL",
            NerEntity::UsBankNumber => "US_BANK_NUMBER",
            NerEntity::UsDriverLicense => "US_DRIVER_LICENSE",
            NerEntity::UsItin => "US_ITIN",
            NerEntity::UsPassport => "US_PASSPORT",
            NerEntity::UsSsn => "US_SSN",
            NerEntity::UkNhs => "UK_NHS",
            NerEntity::Nif => "NIF",
            NerEntity::ItFiscalCode => "IT_FISCAL_CODE",
            NerEntity::ItDriverLicense => "IT_DRIVER_LICENSE",
            NerEntity::ItVatCode => "IT_VAT_CODE",
            NerEntity::ItPassport => "IT_PASSPORT",
            NerEntity::ItIdentityCard => "IT_IDENTITY_CARD",
            NerEntity::AuAbn => "AU_ABN",
            NerEntity::AuAcn => "AU_ACN",
            NerEntity::AuTfn => "AU_TFN",
            NerEntity::AuMedicare => "AU_MEDICARE",
        }
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        match self {
            NerEntity::CreditCard
            | NerEntity::Crypto
            | NerEntity::DateTime
            | NerEntity::EmailAddress
            | NerEntity::IbanCode
            | NerEntity::IpAddress
            | NerEntity::Nrp
            | NerEntity::Location
            | NerEntity::Person
            | NerEntity::PhoneNumber
            | NerEntity::MedicalLicense
            | NerEntity::Url => Jurisdiction::Global,
            NerEntity::UsBankNumber
            | NerEntity::UsDriverLicense
            | NerEntity::UsItin
            | NerEntity::UsPassport
            | NerEntity::UsSsn => Jurisdiction::UnitedStates,
            NerEntity::UkNhs => Jurisdiction::UnitedKingdom,
            NerEntity::Nif => Jurisdiction::Spain,
            NerEntity::ItFiscalCode
            | NerEntity::ItDriverLicense
            | NerEntity::ItVatCode
            | NerEntity::ItPassport
            | NerEntity::ItIdentityCard => Jurisdiction::Italy,
            NerEntity::AuAbn | NerEntity::AuAcn | NerEntity::AuTfn | NerEntity::AuMedicare => {
                Jurisdiction::Australia
            }
        }
    }
}

// Label -> entity index, built once on first lookup and read-only afterwards
static LABEL_INDEX: Lazy<HashMap<&'static str, NerEntity>> = Lazy::new(|| {
    NerEntity::ALL
        .iter()
        .map(|entity| (entity.label(), *entity))
        .collect()
});

/// Exact, case-sensitive lookup of a detector label
pub fn lookup(label: &str) -> Option<NerEntity> {
    LABEL_INDEX.get(label).copied()
}

impl fmt::Display for NerEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NerEntity {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| ClassifyError::UnknownEntityLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<&str> = NerEntity::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(labels.len(), NerEntity::ALL.len());
        assert_eq!(LABEL_INDEX.len(), 28);
    }

    #[test]
    fn test_parse_own_label() {
        for entity in NerEntity::ALL {
            assert_eq!(entity.label().parse::<NerEntity>().unwrap(), entity);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("US_SSN"), Some(NerEntity::UsSsn));
        assert_eq!(lookup("us_ssn"), None);
        assert_eq!(lookup(" US_SSN"), None);
    }

    #[test]
    fn test_serde_label_matches_wire_label() {
        // serde's renaming must agree with label() for every variant
        for entity in NerEntity::ALL {
            let json = serde_json::to_string(&entity).unwrap();
            assert_eq!(json, format!("\"{}\"", entity.label()));
        }
    }

    #[test]
    fn test_jurisdiction_groups() {
        let count = |j: Jurisdiction| {
            NerEntity::ALL
                .iter()
                .filter(|e| e.jurisdiction() == j)
                .count()
        };
        assert_eq!(count(Jurisdiction::Global), 12);
        assert_eq!(count(Jurisdiction::UnitedStates), 5);
        assert_eq!(count(Jurisdiction::UnitedKingdom), 1);
        assert_eq!(count(Jurisdiction::Spain), 1);
        assert_eq!(count(Jurisdiction::Italy), 5);
        assert_eq!(count(Jurisdiction::Australia), 4);
    }

    #[test]
    fn test_unknown_label_error() {
        let err = "NOT_A_REAL_LABEL".parse::<NerEntity>().unwrap_err();
        assert!(err.is_unknown_label());
        assert_eq!(err.to_string(), "unknown entity label: NOT_A_REAL_LABEL");
    }
}
