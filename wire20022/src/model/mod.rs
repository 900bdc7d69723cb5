//! Version-agnostic message model values
//!
//! Models carry business fields with semantic types. Shared value structs are
//! used identically by every message type; field names are the model-side path
//! segments (`AccountOwnerAgent.PaymentSysMemberId`).

pub mod codes;

pub use codes::*;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PostalAddress {
    /// Street name
    pub street_name: String,
    /// Building number
    pub building_number: String,
    /// Building name
    pub building_name: String,
    /// Floor
    pub floor: String,
    /// Room number
    pub room_number: String,
    /// Postal code
    pub postal_code: String,
    /// Town name
    pub town_name: String,
    /// Country subdivision
    pub subdivision: String,
    /// ISO country code
    pub country: String,
}

path_node!(PostalAddress {
    "StreetName" => street_name,
    "BuildingNumber" => building_number,
    "BuildingName" => building_name,
    "Floor" => floor,
    "RoomNumber" => room_number,
    "PostalCode" => postal_code,
    "TownName" => town_name,
    "Subdivision" => subdivision,
    "Country" => country,
});

/// Financial institution acting as an agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Agent {
    /// BIC
    pub business_id_code: String,
    /// Clearing system
    pub payment_sys_code: PaymentSystemType,
    /// Member identification in the clearing system
    pub payment_sys_member_id: String,
    /// Institution name
    pub bank_name: String,
    /// Institution address
    pub postal_address: PostalAddress,
    /// Other identification
    pub other_type_id: String,
}

path_node!(Agent {
    "BusinessIdCode" => business_id_code,
    "PaymentSysCode" => payment_sys_code,
    "PaymentSysMemberId" => payment_sys_member_id,
    "BankName" => bank_name,
    "PostalAddress" => postal_address,
    "OtherTypeId" => other_type_id,
});

/// Amount with currency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CurrencyAndAmount {
    /// ISO currency code
    pub currency: String,
    /// Amount
    pub amount: Decimal,
}

path_node!(CurrencyAndAmount {
    "Currency" => currency,
    "Amount" => amount,
});

/// Inclusive sequence range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SequenceRange {
    /// First sequence
    pub from_seq: String,
    /// Last sequence
    pub to_seq: String,
}

path_node!(SequenceRange {
    "FromSeq" => from_seq,
    "ToSeq" => to_seq,
});

/// Report pagination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessagePagination {
    /// Page number
    pub page_number: String,
    /// True on the last page
    pub last_page_indicator: bool,
}

path_node!(MessagePagination {
    "PageNumber" => page_number,
    "LastPageIndicator" => last_page_indicator,
});

/// Entry count and total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NumberAndSumOfTransactions {
    /// Number of entries
    pub number_of_entries: String,
    /// Sum of the entries
    pub sum: Decimal,
}

path_node!(NumberAndSumOfTransactions {
    "NumberOfEntries" => number_of_entries,
    "Sum" => sum,
});

/// Entry count for one bank transaction code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TotalsPerBankTransactionCode {
    /// Number of entries
    pub number_of_entries: String,
    /// Bank transaction code
    pub bank_transaction_code: TransactionStatusCode,
}

path_node!(TotalsPerBankTransactionCode {
    "NumberOfEntries" => number_of_entries,
    "BankTransactionCode" => bank_transaction_code,
});

/// One report entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Entry {
    /// Amount
    pub amount: CurrencyAndAmount,
    /// Credit or debit
    pub credit_debit_indicator: CdtDbtInd,
    /// Status
    pub status: ReportStatus,
    /// Bank transaction code
    pub bank_transaction_code: TransactionStatusCode,
    /// Message name of the underlying message
    pub message_name_id: String,
    /// Transaction details
    pub entry_details: EntryDetail,
}

path_node!(Entry {
    "Amount" => amount,
    "CreditDebitIndicator" => credit_debit_indicator,
    "Status" => status,
    "BankTransactionCode" => bank_transaction_code,
    "MessageNameId" => message_name_id,
    "EntryDetails" => entry_details,
});

/// Transaction details of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EntryDetail {
    /// Message identification
    pub message_id: String,
    /// Instruction identification
    pub instruction_id: String,
    /// UETR
    pub unique_transaction_reference: String,
    /// Clearing system reference
    pub clearing_system_ref: String,
    /// Instructing agent
    pub instructing_agent: Agent,
    /// Instructed agent
    pub instructed_agent: Agent,
    /// Local instrument
    pub local_instrument_choice: InstrumentPropCodeType,
    /// Related date type
    pub related_dates_proprietary: WorkingDayType,
    /// Related date-time
    pub related_date_time: Option<DateTime<Utc>>,
}

path_node!(EntryDetail {
    "MessageId" => message_id,
    "InstructionId" => instruction_id,
    "UniqueTransactionReference" => unique_transaction_reference,
    "ClearingSystemRef" => clearing_system_ref,
    "InstructingAgent" => instructing_agent,
    "InstructedAgent" => instructed_agent,
    "LocalInstrumentChoice" => local_instrument_choice,
    "RelatedDatesProprietary" => related_dates_proprietary,
    "RelatedDateTime" => related_date_time,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{get_value, is_blank_at, set_value};
    use crate::path::Path;
    use crate::value::Value;
    use rust_decimal_macros::dec;

    #[test]
    fn test_agent_blank_until_any_field_set() {
        let mut entry = Entry::default();
        let agent = Path::parse("EntryDetails.InstructingAgent").unwrap();
        assert!(is_blank_at(&entry, &agent).unwrap());

        set_value(
            &mut entry,
            &Path::parse("EntryDetails.InstructingAgent.PaymentSysCode").unwrap(),
            Value::Text("USABA".to_string()),
        )
        .unwrap();

        assert!(!is_blank_at(&entry, &agent).unwrap());
        assert_eq!(entry.entry_details.instructing_agent.payment_sys_code, PaymentSystemType::USABA);
    }

    #[test]
    fn test_amount_accepts_decimal_text() {
        let mut amount = CurrencyAndAmount::default();
        set_value(&mut amount, &Path::parse("Amount").unwrap(), Value::Text("18423923492.15".into())).unwrap();
        assert_eq!(amount.amount, dec!(18423923492.15));
    }

    #[test]
    fn test_datetime_leaf_from_text() {
        let mut detail = EntryDetail::default();
        let path = Path::parse("RelatedDateTime").unwrap();
        assert_eq!(get_value(&detail, &path).unwrap(), None);

        set_value(&mut detail, &path, Value::Text("2025-02-01T18:00:00Z".into())).unwrap();
        assert_eq!(
            detail.related_date_time.map(|dt| dt.to_rfc3339()),
            Some("2025-02-01T18:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_model_json_field_names() {
        let agent = Agent {
            payment_sys_code: PaymentSystemType::USABA,
            payment_sys_member_id: "231981435".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&agent).unwrap();
        assert_eq!(json["PaymentSysCode"], "USABA");
        assert_eq!(json["PaymentSysMemberId"], "231981435");
    }
}
