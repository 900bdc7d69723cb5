//! Element types shared by the camt families

use crate::documents::Validate;
use crate::error::{AccessError, ValidationError, ValidationErrors};
use crate::value::{self, Leaf, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

text_type!(
    /// Text of 1 to 35 characters
    Max35Text, 1, 35
);
text_type!(
    /// Text of 1 to 34 characters
    Max34Text, 1, 34
);
text_type!(
    /// Text of 1 to 16 characters
    Max16Text, 1, 16
);
text_type!(
    /// Text of 1 to 70 characters
    Max70Text, 1, 70
);
text_type!(
    /// Text of 1 to 105 characters
    Max105Text, 1, 105
);
text_type!(
    /// Text of 1 to 140 characters
    Max140Text, 1, 140
);
text_type!(
    /// Up to 15 digits
    Max15NumericText, 1, 15, pattern = "[0-9]{1,15}" => is_numeric
);
text_type!(
    /// Up to 5 digits
    Max5NumericText, 1, 5, pattern = "[0-9]{1,5}" => is_numeric
);
text_type!(
    /// ISO 4217 currency code
    ActiveOrHistoricCurrencyCode, 3, 3, pattern = "[A-Z]{3,3}" => is_upper_alpha
);
text_type!(
    /// ISO 3166 country code
    CountryCode, 2, 2, pattern = "[A-Z]{2,2}" => is_upper_alpha
);
text_type!(
    /// Clearing system code from the external code list
    ExternalClearingSystemIdentification1Code, 1, 5
);
text_type!(
    /// Version 4 UUID, as used for the UETR
    UuidV4Identifier, 36, 36, pattern = "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}" => is_uuid_v4
);

fn is_numeric(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn is_upper_alpha(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_uuid_v4(text: &str) -> bool {
    match uuid::Uuid::parse_str(text) {
        Ok(uuid) => {
            uuid.get_version_num() == 4
                && matches!(uuid.get_variant(), uuid::Variant::RFC4122)
                && text.bytes().all(|b| !b.is_ascii_uppercase())
        }
        Err(_) => false,
    }
}

code_type!(
    /// Credit or debit indicator
    CreditDebitCode ["CRDT", "DBIT"]
);

/// ISO date-time element
///
/// Serialized with its offset, `Z` for UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsoDateTime(pub DateTime<FixedOffset>);

impl Default for IsoDateTime {
    fn default() -> Self {
        Self(DateTime::<Utc>::default().into())
    }
}

impl Leaf for IsoDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(self.0)
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        value.into_datetime().map(Self)
    }
}

impl Serialize for IsoDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value::format_datetime(&self.0))
    }
}

impl<'de> Deserialize<'de> for IsoDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        value::parse_datetime(&text)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// ISO date element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsoDate(pub NaiveDate);

impl Leaf for IsoDate {
    fn to_value(&self) -> Value {
        Value::Date(self.0)
    }

    fn from_value(value: Value) -> Result<Self, AccessError> {
        value.into_date().map(Self)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value::format_date(&self.0))
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        value::parse_date(&text)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

leaf_node!(IsoDateTime, IsoDate);

impl Validate for IsoDateTime {
    fn validate_into(&self, _path: &str, _errors: &mut ValidationErrors) {}
}

impl Validate for IsoDate {
    fn validate_into(&self, _path: &str, _errors: &mut ValidationErrors) {}
}

/// Amount with its currency attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveOrHistoricCurrencyAndAmount {
    /// Currency
    #[serde(rename = "@Ccy")]
    pub ccy: ActiveOrHistoricCurrencyCode,

    /// Amount
    #[serde(rename = "$text")]
    pub value: Decimal,
}

path_node!(ActiveOrHistoricCurrencyAndAmount { "Ccy" => ccy, "Value" => value });

impl Validate for ActiveOrHistoricCurrencyAndAmount {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        self.ccy.validate_into(&format!("{path}.Ccy"), errors);
        if self.value.is_sign_negative() {
            errors.push(ValidationError::invalid(
                path,
                format!("{} fails validation with minInclusive 0", self.value),
            ));
        }
    }
}

/// Clearing system identification choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearingSystemIdentification2Choice {
    /// External code
    #[serde(rename = "Cd", skip_serializing_if = "Option::is_none")]
    pub cd: Option<ExternalClearingSystemIdentification1Code>,
}

schema_element!(ClearingSystemIdentification2Choice { "Cd" => cd });

/// Clearing system member identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClearingSystemMemberIdentification2 {
    /// Clearing system
    #[serde(rename = "ClrSysId", skip_serializing_if = "Option::is_none")]
    pub clr_sys_id: Option<ClearingSystemIdentification2Choice>,

    /// Member identification
    #[serde(rename = "MmbId")]
    pub mmb_id: Max35Text,
}

schema_element!(ClearingSystemMemberIdentification2 {
    "ClrSysId" => clr_sys_id,
    "MmbId" => mmb_id,
});

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress24 {
    /// Street name
    #[serde(rename = "StrtNm", skip_serializing_if = "Option::is_none")]
    pub strt_nm: Option<Max70Text>,

    /// Building number
    #[serde(rename = "BldgNb", skip_serializing_if = "Option::is_none")]
    pub bldg_nb: Option<Max16Text>,

    /// Building name
    #[serde(rename = "BldgNm", skip_serializing_if = "Option::is_none")]
    pub bldg_nm: Option<Max35Text>,

    /// Floor
    #[serde(rename = "Flr", skip_serializing_if = "Option::is_none")]
    pub flr: Option<Max70Text>,

    /// Room
    #[serde(rename = "Room", skip_serializing_if = "Option::is_none")]
    pub room: Option<Max70Text>,

    /// Post code
    #[serde(rename = "PstCd", skip_serializing_if = "Option::is_none")]
    pub pst_cd: Option<Max16Text>,

    /// Town name
    #[serde(rename = "TwnNm", skip_serializing_if = "Option::is_none")]
    pub twn_nm: Option<Max35Text>,

    /// Country subdivision
    #[serde(rename = "CtrySubDvsn", skip_serializing_if = "Option::is_none")]
    pub ctry_sub_dvsn: Option<Max35Text>,

    /// Country
    #[serde(rename = "Ctry", skip_serializing_if = "Option::is_none")]
    pub ctry: Option<CountryCode>,
}

schema_element!(PostalAddress24 {
    "StrtNm" => strt_nm,
    "BldgNb" => bldg_nb,
    "BldgNm" => bldg_nm,
    "Flr" => flr,
    "Room" => room,
    "PstCd" => pst_cd,
    "TwnNm" => twn_nm,
    "CtrySubDvsn" => ctry_sub_dvsn,
    "Ctry" => ctry,
});

/// Generic identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericFinancialIdentification1 {
    /// Identification
    #[serde(rename = "Id")]
    pub id: Max35Text,
}

schema_element!(GenericFinancialIdentification1 { "Id" => id });

/// Financial institution identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialInstitutionIdentification18 {
    /// BIC
    #[serde(rename = "BICFI", skip_serializing_if = "Option::is_none")]
    pub bicfi: Option<Max35Text>,

    /// Clearing system member
    #[serde(rename = "ClrSysMmbId", skip_serializing_if = "Option::is_none")]
    pub clr_sys_mmb_id: Option<ClearingSystemMemberIdentification2>,

    /// Name
    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,

    /// Postal address
    #[serde(rename = "PstlAdr", skip_serializing_if = "Option::is_none")]
    pub pstl_adr: Option<PostalAddress24>,

    /// Other identification
    #[serde(rename = "Othr", skip_serializing_if = "Option::is_none")]
    pub othr: Option<GenericFinancialIdentification1>,
}

schema_element!(FinancialInstitutionIdentification18 {
    "BICFI" => bicfi,
    "ClrSysMmbId" => clr_sys_mmb_id,
    "Nm" => nm,
    "PstlAdr" => pstl_adr,
    "Othr" => othr,
});

/// Branch and financial institution identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchAndFinancialInstitutionIdentification6 {
    /// Financial institution
    #[serde(rename = "FinInstnId")]
    pub fin_instn_id: FinancialInstitutionIdentification18,
}

schema_element!(BranchAndFinancialInstitutionIdentification6 { "FinInstnId" => fin_instn_id });

/// Party that is an agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Party40Choice {
    /// Agent
    #[serde(rename = "Agt", skip_serializing_if = "Option::is_none")]
    pub agt: Option<BranchAndFinancialInstitutionIdentification6>,
}

schema_element!(Party40Choice { "Agt" => agt });

/// Other account identification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericAccountIdentification1 {
    /// Identification
    #[serde(rename = "Id")]
    pub id: Max34Text,
}

schema_element!(GenericAccountIdentification1 { "Id" => id });

/// Account identification choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountIdentification4Choice {
    /// Other identification
    #[serde(rename = "Othr", skip_serializing_if = "Option::is_none")]
    pub othr: Option<GenericAccountIdentification1>,
}

schema_element!(AccountIdentification4Choice { "Othr" => othr });

/// Account type choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashAccountType2Choice {
    /// Proprietary type
    #[serde(rename = "Prtry", skip_serializing_if = "Option::is_none")]
    pub prtry: Option<Max35Text>,
}

schema_element!(CashAccountType2Choice { "Prtry" => prtry });

/// Cash account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashAccount38 {
    /// Identification
    #[serde(rename = "Id")]
    pub id: AccountIdentification4Choice,

    /// Type
    #[serde(rename = "Tp", skip_serializing_if = "Option::is_none")]
    pub tp: Option<CashAccountType2Choice>,
}

schema_element!(CashAccount38 { "Id" => id, "Tp" => tp });

/// Original business query reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginalBusinessQuery1 {
    /// Message identification
    #[serde(rename = "MsgId")]
    pub msg_id: Max35Text,

    /// Message name identification
    #[serde(rename = "MsgNmId", skip_serializing_if = "Option::is_none")]
    pub msg_nm_id: Option<Max35Text>,

    /// Creation date-time
    #[serde(rename = "CreDtTm", skip_serializing_if = "Option::is_none")]
    pub cre_dt_tm: Option<IsoDateTime>,
}

schema_element!(OriginalBusinessQuery1 {
    "MsgId" => msg_id,
    "MsgNmId" => msg_nm_id,
    "CreDtTm" => cre_dt_tm,
});

/// Inclusive sequence range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceRange1 {
    /// From sequence
    #[serde(rename = "FrSeq")]
    pub fr_seq: Max35Text,

    /// To sequence
    #[serde(rename = "ToSeq")]
    pub to_seq: Max35Text,
}

schema_element!(SequenceRange1 { "FrSeq" => fr_seq, "ToSeq" => to_seq });

/// Sequence range choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceRange1Choice {
    /// From-to ranges
    #[serde(rename = "FrToSeq", default, skip_serializing_if = "Vec::is_empty")]
    pub fr_to_seq: Vec<SequenceRange1>,
}

schema_element!(SequenceRange1Choice { "FrToSeq" => fr_to_seq });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{get_value, set_value};
    use crate::path::Path;

    #[test]
    fn test_max35_rejects_long_text() {
        let err = Max35Text::new("x".repeat(45)).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("fails validation with length 45 <= required maxLength 35"));
        assert!(Max35Text::new("20250311231981435ABARMMrequest1").is_ok());
    }

    #[test]
    fn test_pattern_validation() {
        let mut errors = ValidationErrors::new();
        CountryCode("us".to_string()).validate_into("Ctry", &mut errors);
        Max15NumericText("12a".to_string()).validate_into("NbOfNtries", &mut errors);
        CountryCode("US".to_string()).validate_into("Ctry", &mut errors);

        assert_eq!(errors.fields(), vec!["Ctry", "NbOfNtries"]);
    }

    #[test]
    fn test_uuid_v4_check() {
        assert!(is_uuid_v4("8a562c67-ca16-48ba-b074-65581be6f011"));
        assert!(!is_uuid_v4("8A562C67-CA16-48BA-B074-65581BE6F011"));
        assert!(!is_uuid_v4("8a562c67-ca16-18ba-b074-65581be6f011"));
        assert!(!is_uuid_v4("not-a-uuid"));
    }

    #[test]
    fn test_code_type_accepts_then_validates() {
        let code = CreditDebitCode::from_value(Value::Text("XXXX".to_string())).unwrap();
        let mut errors = ValidationErrors::new();
        code.validate_into("CdtDbtInd", &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(errors.to_string().contains("XXXX is not a valid CreditDebitCode"));
    }

    #[test]
    fn test_amount_paths() {
        let mut amount = Some(ActiveOrHistoricCurrencyAndAmount::default());
        set_value(&mut amount, &Path::parse("Ccy").unwrap(), Value::Text("USD".into())).unwrap();
        set_value(
            &mut amount,
            &Path::parse("Value").unwrap(),
            Value::Text("510000.74".into()),
        )
        .unwrap();

        assert_eq!(
            get_value(&amount, &Path::parse("Value").unwrap()).unwrap(),
            Some(Value::Decimal("510000.74".parse().unwrap()))
        );
    }

    #[test]
    fn test_iso_datetime_serde_text() {
        let dt = IsoDateTime(value::parse_datetime("2025-03-11T23:19:00-05:00").unwrap());
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2025-03-11T23:19:00-05:00\"");
        let back: IsoDateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
    }
}
