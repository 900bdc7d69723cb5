//! camt.052 BankToCustomerAccountReport, versions 02 to 12
//!
//! The report skeleton is shared by the whole family. The entry subtree comes
//! in two shapes:
//!
//! - [`ReportEntry2`] (02 to 06): plain status code, intermediary and
//!   receiving agents;
//! - [`ReportEntry10`] (07 to 12): status choice, instructing and instructed
//!   agents, local instrument and UETR.

use super::types::*;
use crate::access::Node;
use crate::documents::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry subtree of one camt.052 shape
pub trait ReportEntry:
    Node + Validate + Default + Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl ReportEntry for ReportEntry2 {}
impl ReportEntry for ReportEntry10 {}

/// Documents for camt.052.001.02 to .06
pub type Camt052V2Document = Camt052Document<ReportEntry2>;

/// Documents for camt.052.001.07 to .12
pub type Camt052V7Document = Camt052Document<ReportEntry10>;

/// camt.052 document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document", bound = "E: ReportEntry")]
pub struct Camt052Document<E> {
    /// Default namespace
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,

    /// Account report
    #[serde(rename = "BkToCstmrAcctRpt")]
    pub bk_to_cstmr_acct_rpt: BankToCustomerAccountReport<E>,
}

iso_document!(impl<E: ReportEntry> Camt052Document<E> { "BkToCstmrAcctRpt" => bk_to_cstmr_acct_rpt });

/// Message body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound = "E: ReportEntry")]
pub struct BankToCustomerAccountReport<E> {
    /// Group header
    #[serde(rename = "GrpHdr")]
    pub grp_hdr: GroupHeader81,

    /// Reports
    #[serde(rename = "Rpt", default, skip_serializing_if = "Vec::is_empty")]
    pub rpt: Vec<AccountReport<E>>,
}

schema_element!(impl<E: ReportEntry> BankToCustomerAccountReport<E> {
    "GrpHdr" => grp_hdr,
    "Rpt" => rpt,
});

/// Group header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupHeader81 {
    /// Message identification
    #[serde(rename = "MsgId")]
    pub msg_id: Max35Text,

    /// Creation date-time
    #[serde(rename = "CreDtTm", skip_serializing_if = "Option::is_none")]
    pub cre_dt_tm: Option<IsoDateTime>,

    /// Pagination
    #[serde(rename = "MsgPgntn", skip_serializing_if = "Option::is_none")]
    pub msg_pgntn: Option<Pagination1>,

    /// Query this report answers (03+)
    #[serde(rename = "OrgnlBizQry", skip_serializing_if = "Option::is_none")]
    pub orgnl_biz_qry: Option<OriginalBusinessQuery1>,
}

schema_element!(GroupHeader81 {
    "MsgId" => msg_id,
    "CreDtTm" => cre_dt_tm,
    "MsgPgntn" => msg_pgntn,
    "OrgnlBizQry" => orgnl_biz_qry,
});

/// Message pagination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination1 {
    /// Page number
    #[serde(rename = "PgNb")]
    pub pg_nb: Max5NumericText,

    /// Last page indicator
    #[serde(rename = "LastPgInd")]
    pub last_pg_ind: bool,
}

schema_element!(Pagination1 {
    "PgNb" => pg_nb,
    "LastPgInd" => last_pg_ind,
});

/// One account report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound = "E: ReportEntry")]
pub struct AccountReport<E> {
    /// Report identification
    #[serde(rename = "Id")]
    pub id: Max35Text,

    /// Reporting sequence (07+)
    #[serde(rename = "RptgSeq", skip_serializing_if = "Option::is_none")]
    pub rptg_seq: Option<SequenceRange1Choice>,

    /// Creation date-time
    #[serde(rename = "CreDtTm", skip_serializing_if = "Option::is_none")]
    pub cre_dt_tm: Option<IsoDateTime>,

    /// Account
    #[serde(rename = "Acct", skip_serializing_if = "Option::is_none")]
    pub acct: Option<CashAccount38>,

    /// Transactions summary
    #[serde(rename = "TxsSummry", skip_serializing_if = "Option::is_none")]
    pub txs_summry: Option<TotalTransactions6>,

    /// Entries
    #[serde(rename = "Ntry", default, skip_serializing_if = "Vec::is_empty")]
    pub ntry: Vec<E>,
}

schema_element!(impl<E: ReportEntry> AccountReport<E> {
    "Id" => id,
    "RptgSeq" => rptg_seq,
    "CreDtTm" => cre_dt_tm,
    "Acct" => acct,
    "TxsSummry" => txs_summry,
    "Ntry" => ntry,
});

/// Transactions summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalTransactions6 {
    /// Credit entries
    #[serde(rename = "TtlCdtNtries", skip_serializing_if = "Option::is_none")]
    pub ttl_cdt_ntries: Option<NumberAndSumOfTransactions1>,

    /// Debit entries
    #[serde(rename = "TtlDbtNtries", skip_serializing_if = "Option::is_none")]
    pub ttl_dbt_ntries: Option<NumberAndSumOfTransactions1>,

    /// Totals per bank transaction code
    #[serde(rename = "TtlNtriesPerBkTxCd", default, skip_serializing_if = "Vec::is_empty")]
    pub ttl_ntries_per_bk_tx_cd: Vec<TotalsPerBankTransactionCode5>,
}

schema_element!(TotalTransactions6 {
    "TtlCdtNtries" => ttl_cdt_ntries,
    "TtlDbtNtries" => ttl_dbt_ntries,
    "TtlNtriesPerBkTxCd" => ttl_ntries_per_bk_tx_cd,
});

/// Number and sum of entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberAndSumOfTransactions1 {
    /// Number of entries
    #[serde(rename = "NbOfNtries", skip_serializing_if = "Option::is_none")]
    pub nb_of_ntries: Option<Max15NumericText>,

    /// Sum of entries
    #[serde(
        rename = "Sum",
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub sum: Option<rust_decimal::Decimal>,
}

schema_element!(NumberAndSumOfTransactions1 {
    "NbOfNtries" => nb_of_ntries,
    "Sum" => sum,
});

/// Totals for one bank transaction code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalsPerBankTransactionCode5 {
    /// Number of entries
    #[serde(rename = "NbOfNtries", skip_serializing_if = "Option::is_none")]
    pub nb_of_ntries: Option<Max15NumericText>,

    /// Bank transaction code
    #[serde(rename = "BkTxCd")]
    pub bk_tx_cd: BankTransactionCodeStructure4,
}

schema_element!(TotalsPerBankTransactionCode5 {
    "NbOfNtries" => nb_of_ntries,
    "BkTxCd" => bk_tx_cd,
});

/// Bank transaction code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTransactionCodeStructure4 {
    /// Proprietary code
    #[serde(rename = "Prtry", skip_serializing_if = "Option::is_none")]
    pub prtry: Option<ProprietaryBankTransactionCodeStructure1>,
}

schema_element!(BankTransactionCodeStructure4 { "Prtry" => prtry });

/// Proprietary bank transaction code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProprietaryBankTransactionCodeStructure1 {
    /// Code
    #[serde(rename = "Cd")]
    pub cd: Max35Text,
}

schema_element!(ProprietaryBankTransactionCodeStructure1 { "Cd" => cd });

/// Message name of the underlying entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageIdentification2 {
    /// Message name identification
    #[serde(rename = "MsgNmId", skip_serializing_if = "Option::is_none")]
    pub msg_nm_id: Option<Max35Text>,
}

schema_element!(MessageIdentification2 { "MsgNmId" => msg_nm_id });

code_type!(
    /// Entry status (02 to 06)
    EntryStatus2Code ["BOOK", "PDNG", "INFO"]
);

text_type!(
    /// Entry status code from the external list (07+)
    ExternalEntryStatus1Code, 1, 4
);

/// Entry status choice (07+)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryStatus1Choice {
    /// Code
    #[serde(rename = "Cd", skip_serializing_if = "Option::is_none")]
    pub cd: Option<ExternalEntryStatus1Code>,
}

schema_element!(EntryStatus1Choice { "Cd" => cd });

/// Entry, versions 02 to 06
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportEntry2 {
    /// Amount
    #[serde(rename = "Amt", skip_serializing_if = "Option::is_none")]
    pub amt: Option<ActiveOrHistoricCurrencyAndAmount>,

    /// Credit or debit
    #[serde(rename = "CdtDbtInd", skip_serializing_if = "Option::is_none")]
    pub cdt_dbt_ind: Option<CreditDebitCode>,

    /// Status
    #[serde(rename = "Sts", skip_serializing_if = "Option::is_none")]
    pub sts: Option<EntryStatus2Code>,

    /// Bank transaction code
    #[serde(rename = "BkTxCd", skip_serializing_if = "Option::is_none")]
    pub bk_tx_cd: Option<BankTransactionCodeStructure4>,

    /// Additional information indicator
    #[serde(rename = "AddtlInfInd", skip_serializing_if = "Option::is_none")]
    pub addtl_inf_ind: Option<MessageIdentification2>,

    /// Entry details
    #[serde(rename = "NtryDtls", default, skip_serializing_if = "Vec::is_empty")]
    pub ntry_dtls: Vec<EntryDetails1>,
}

schema_element!(ReportEntry2 {
    "Amt" => amt,
    "CdtDbtInd" => cdt_dbt_ind,
    "Sts" => sts,
    "BkTxCd" => bk_tx_cd,
    "AddtlInfInd" => addtl_inf_ind,
    "NtryDtls" => ntry_dtls,
});

/// Entry details, versions 02 to 06
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDetails1 {
    /// Transaction details
    #[serde(rename = "TxDtls", default, skip_serializing_if = "Vec::is_empty")]
    pub tx_dtls: Vec<EntryTransaction2>,
}

schema_element!(EntryDetails1 { "TxDtls" => tx_dtls });

/// Transaction details, versions 02 to 06
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryTransaction2 {
    /// References
    #[serde(rename = "Refs", skip_serializing_if = "Option::is_none")]
    pub refs: Option<TransactionReferences2>,

    /// Amount
    #[serde(rename = "Amt", skip_serializing_if = "Option::is_none")]
    pub amt: Option<ActiveOrHistoricCurrencyAndAmount>,

    /// Credit or debit
    #[serde(rename = "CdtDbtInd", skip_serializing_if = "Option::is_none")]
    pub cdt_dbt_ind: Option<CreditDebitCode>,

    /// Related agents
    #[serde(rename = "RltdAgts", skip_serializing_if = "Option::is_none")]
    pub rltd_agts: Option<TransactionAgents2>,

    /// Related dates
    #[serde(rename = "RltdDts", skip_serializing_if = "Option::is_none")]
    pub rltd_dts: Option<TransactionDates3>,
}

schema_element!(EntryTransaction2 {
    "Refs" => refs,
    "Amt" => amt,
    "CdtDbtInd" => cdt_dbt_ind,
    "RltdAgts" => rltd_agts,
    "RltdDts" => rltd_dts,
});

/// Transaction references, versions 02 to 06
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionReferences2 {
    /// Message identification
    #[serde(rename = "MsgId", skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<Max35Text>,

    /// Instruction identification
    #[serde(rename = "InstrId", skip_serializing_if = "Option::is_none")]
    pub instr_id: Option<Max35Text>,

    /// Clearing system reference
    #[serde(rename = "ClrSysRef", skip_serializing_if = "Option::is_none")]
    pub clr_sys_ref: Option<Max35Text>,
}

schema_element!(TransactionReferences2 {
    "MsgId" => msg_id,
    "InstrId" => instr_id,
    "ClrSysRef" => clr_sys_ref,
});

/// Related agents, versions 02 to 06
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAgents2 {
    /// First intermediary agent
    #[serde(rename = "IntrmyAgt1", skip_serializing_if = "Option::is_none")]
    pub intrmy_agt1: Option<BranchAndFinancialInstitutionIdentification6>,

    /// Receiving agent
    #[serde(rename = "RcvgAgt", skip_serializing_if = "Option::is_none")]
    pub rcvg_agt: Option<BranchAndFinancialInstitutionIdentification6>,
}

schema_element!(TransactionAgents2 {
    "IntrmyAgt1" => intrmy_agt1,
    "RcvgAgt" => rcvg_agt,
});

/// Entry, versions 07 to 12
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportEntry10 {
    /// Amount
    #[serde(rename = "Amt", skip_serializing_if = "Option::is_none")]
    pub amt: Option<ActiveOrHistoricCurrencyAndAmount>,

    /// Credit or debit
    #[serde(rename = "CdtDbtInd", skip_serializing_if = "Option::is_none")]
    pub cdt_dbt_ind: Option<CreditDebitCode>,

    /// Status
    #[serde(rename = "Sts", skip_serializing_if = "Option::is_none")]
    pub sts: Option<EntryStatus1Choice>,

    /// Bank transaction code
    #[serde(rename = "BkTxCd", skip_serializing_if = "Option::is_none")]
    pub bk_tx_cd: Option<BankTransactionCodeStructure4>,

    /// Additional information indicator
    #[serde(rename = "AddtlInfInd", skip_serializing_if = "Option::is_none")]
    pub addtl_inf_ind: Option<MessageIdentification2>,

    /// Entry details
    #[serde(rename = "NtryDtls", default, skip_serializing_if = "Vec::is_empty")]
    pub ntry_dtls: Vec<EntryDetails9>,
}

schema_element!(ReportEntry10 {
    "Amt" => amt,
    "CdtDbtInd" => cdt_dbt_ind,
    "Sts" => sts,
    "BkTxCd" => bk_tx_cd,
    "AddtlInfInd" => addtl_inf_ind,
    "NtryDtls" => ntry_dtls,
});

/// Entry details, versions 07 to 12
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryDetails9 {
    /// Transaction details
    #[serde(rename = "TxDtls", default, skip_serializing_if = "Vec::is_empty")]
    pub tx_dtls: Vec<EntryTransaction10>,
}

schema_element!(EntryDetails9 { "TxDtls" => tx_dtls });

/// Transaction details, versions 07 to 12
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryTransaction10 {
    /// References
    #[serde(rename = "Refs", skip_serializing_if = "Option::is_none")]
    pub refs: Option<TransactionReferences6>,

    /// Related agents
    #[serde(rename = "RltdAgts", skip_serializing_if = "Option::is_none")]
    pub rltd_agts: Option<TransactionAgents5>,

    /// Local instrument
    #[serde(rename = "LclInstrm", skip_serializing_if = "Option::is_none")]
    pub lcl_instrm: Option<LocalInstrument2Choice>,

    /// Related dates
    #[serde(rename = "RltdDts", skip_serializing_if = "Option::is_none")]
    pub rltd_dts: Option<TransactionDates3>,
}

schema_element!(EntryTransaction10 {
    "Refs" => refs,
    "RltdAgts" => rltd_agts,
    "LclInstrm" => lcl_instrm,
    "RltdDts" => rltd_dts,
});

/// Transaction references, versions 07 to 12
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionReferences6 {
    /// Message identification
    #[serde(rename = "MsgId", skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<Max35Text>,

    /// Instruction identification
    #[serde(rename = "InstrId", skip_serializing_if = "Option::is_none")]
    pub instr_id: Option<Max35Text>,

    /// UETR (08+)
    #[serde(rename = "UETR", skip_serializing_if = "Option::is_none")]
    pub uetr: Option<UuidV4Identifier>,

    /// Clearing system reference
    #[serde(rename = "ClrSysRef", skip_serializing_if = "Option::is_none")]
    pub clr_sys_ref: Option<Max35Text>,
}

schema_element!(TransactionReferences6 {
    "MsgId" => msg_id,
    "InstrId" => instr_id,
    "UETR" => uetr,
    "ClrSysRef" => clr_sys_ref,
});

/// Related agents, versions 07 to 12
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionAgents5 {
    /// Instructing agent
    #[serde(rename = "InstgAgt", skip_serializing_if = "Option::is_none")]
    pub instg_agt: Option<BranchAndFinancialInstitutionIdentification6>,

    /// Instructed agent
    #[serde(rename = "InstdAgt", skip_serializing_if = "Option::is_none")]
    pub instd_agt: Option<BranchAndFinancialInstitutionIdentification6>,
}

schema_element!(TransactionAgents5 {
    "InstgAgt" => instg_agt,
    "InstdAgt" => instd_agt,
});

/// Local instrument choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalInstrument2Choice {
    /// Proprietary instrument
    #[serde(rename = "Prtry", skip_serializing_if = "Option::is_none")]
    pub prtry: Option<Max35Text>,
}

schema_element!(LocalInstrument2Choice { "Prtry" => prtry });

/// Related dates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionDates3 {
    /// Proprietary dates
    #[serde(rename = "Prtry", default, skip_serializing_if = "Vec::is_empty")]
    pub prtry: Vec<ProprietaryDate3>,
}

schema_element!(TransactionDates3 { "Prtry" => prtry });

/// Proprietary date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProprietaryDate3 {
    /// Date type
    #[serde(rename = "Tp")]
    pub tp: Max35Text,

    /// Date
    #[serde(rename = "Dt")]
    pub dt: DateAndDateTime2Choice,
}

schema_element!(ProprietaryDate3 { "Tp" => tp, "Dt" => dt });

/// Date or date-time choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateAndDateTime2Choice {
    /// Date-time
    #[serde(rename = "DtTm", skip_serializing_if = "Option::is_none")]
    pub dt_tm: Option<IsoDateTime>,
}

schema_element!(DateAndDateTime2Choice { "DtTm" => dt_tm });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{element_count, get_value, Shape};
    use crate::documents::Document;
    use crate::path::Path;
    use crate::value::Value;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.052.001.08">
  <BkToCstmrAcctRpt>
    <GrpHdr>
      <MsgId>DTLR20250201</MsgId>
      <CreDtTm>2025-02-01T18:00:00Z</CreDtTm>
      <MsgPgntn>
        <PgNb>1</PgNb>
        <LastPgInd>true</LastPgInd>
      </MsgPgntn>
    </GrpHdr>
    <Rpt>
      <Id>EDAY</Id>
      <CreDtTm>2025-02-01T18:00:00Z</CreDtTm>
      <Acct>
        <Id>
          <Othr>
            <Id>B1QDRCQR</Id>
          </Othr>
        </Id>
      </Acct>
      <TxsSummry>
        <TtlCdtNtries>
          <NbOfNtries>1</NbOfNtries>
          <Sum>18423923492.15</Sum>
        </TtlCdtNtries>
        <TtlDbtNtries>
          <NbOfNtries>1</NbOfNtries>
          <Sum>510000.74</Sum>
        </TtlDbtNtries>
      </TxsSummry>
      <Ntry>
        <Amt Ccy="USD">510000.74</Amt>
        <CdtDbtInd>DBIT</CdtDbtInd>
        <Sts>
          <Cd>BOOK</Cd>
        </Sts>
      </Ntry>
      <Ntry>
        <Amt Ccy="USD">18423923492.15</Amt>
        <CdtDbtInd>CRDT</CdtDbtInd>
      </Ntry>
    </Rpt>
  </BkToCstmrAcctRpt>
</Document>"#;

    #[test]
    fn test_parse_v7_shape() {
        let doc: Camt052V7Document = crate::xml::from_xml(SAMPLE).unwrap();
        let entries = Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry").unwrap();

        assert_eq!(element_count(&doc, &entries).unwrap(), 2);
        assert_eq!(
            get_value(&doc, &Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry[1].Amt.Value").unwrap()).unwrap(),
            Some(Value::Decimal("18423923492.15".parse().unwrap()))
        );
        assert_eq!(
            get_value(&doc, &Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry[0].Sts.Cd").unwrap()).unwrap(),
            Some(Value::Text("BOOK".to_string()))
        );
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_summary_sums_decode() {
        let doc: Camt052V7Document = crate::xml::from_xml(SAMPLE).unwrap();
        let summary = doc.bk_to_cstmr_acct_rpt.rpt[0].txs_summry.as_ref().unwrap();

        assert_eq!(
            summary.ttl_cdt_ntries.as_ref().and_then(|t| t.sum),
            Some("18423923492.15".parse().unwrap())
        );
        assert_eq!(
            get_value(&doc, &Path::parse("BkToCstmrAcctRpt.Rpt[0].TxsSummry.TtlDbtNtries.Sum").unwrap()).unwrap(),
            Some(Value::Decimal("510000.74".parse().unwrap()))
        );
    }

    #[test]
    fn test_encoded_summary_and_amounts() {
        let doc: Camt052V7Document = crate::xml::from_xml(SAMPLE).unwrap();
        let xml = doc.to_xml().unwrap();

        assert!(xml.contains("<Sum>18423923492.15</Sum>"));
        assert!(xml.contains("<Amt Ccy=\"USD\">18423923492.15</Amt>"));
        assert_eq!(crate::xml::from_xml::<Camt052V7Document>(&xml).unwrap(), doc);
    }

    #[test]
    fn test_report_without_account_omits_acct() {
        let mut doc = Camt052V7Document::default();
        doc.bk_to_cstmr_acct_rpt.rpt.push(AccountReport {
            id: Max35Text("EDAY".to_string()),
            ..Default::default()
        });

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<Id>EDAY</Id>"));
        assert!(!xml.contains("<Acct"));
    }

    #[test]
    fn test_status_shape_differs_between_eras() {
        let v2 = Camt052V2Document::default();
        let v7 = Camt052V7Document::default();
        let status = Path::parse("BkToCstmrAcctRpt.Rpt[0].Ntry[0].Sts").unwrap();

        assert_eq!(v2.shape(status.steps()), Ok(Shape::Leaf));
        assert_eq!(v7.shape(status.steps()), Ok(Shape::Composite));
    }

    #[test]
    fn test_invalid_status_code_fails_validation() {
        let mut doc = Camt052V2Document::default();
        doc.bk_to_cstmr_acct_rpt.grp_hdr.msg_id = Max35Text("DTLR20250201".to_string());
        doc.bk_to_cstmr_acct_rpt.rpt.push(AccountReport {
            id: Max35Text("EDAY".to_string()),
            ntry: vec![ReportEntry2 {
                sts: Some(EntryStatus2Code("SETTLED".to_string())),
                ..Default::default()
            }],
            ..Default::default()
        });

        let err = doc.validate().unwrap_err();
        assert!(err.to_string().contains("BkToCstmrAcctRpt.Rpt[0].Ntry[0].Sts"));
        assert!(err.to_string().contains("SETTLED is not a valid EntryStatus2Code"));
    }
}
