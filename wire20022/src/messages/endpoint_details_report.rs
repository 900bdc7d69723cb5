//! EndpointDetailsReport (camt.052)
//!
//! Path maps come in four eras:
//!
//! | Versions | Document | Adds |
//! |----------|----------|------|
//! | 02 | [`Camt052V2Document`] | base report and entries |
//! | 03 to 06 | [`Camt052V2Document`] | original business query, transaction amounts |
//! | 07 | [`Camt052V7Document`] | reporting sequence, status choice, instructing agents, local instrument |
//! | 08 to 12 | [`Camt052V7Document`] | UETR |

use crate::documents::camt_052::{Camt052V2Document, Camt052V7Document};
use crate::documents::DocumentFactory;
use crate::model::{
    Entry, MessagePagination, NumberAndSumOfTransactions, ReportType, SequenceRange,
    TotalsPerBankTransactionCode,
};
use crate::processor::MessageKind;
use crate::registry::VersionRegistry;
use crate::table::{ElementsBuilder, PathMap, PathMapBuilder};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

crate::schema_versions!(
    /// camt.052.001 schema versions
    Camt052Version {
        /// camt.052.001.02
        V02 = "camt.052.001.02",
        /// camt.052.001.03
        V03 = "camt.052.001.03",
        /// camt.052.001.04
        V04 = "camt.052.001.04",
        /// camt.052.001.05
        V05 = "camt.052.001.05",
        /// camt.052.001.06
        V06 = "camt.052.001.06",
        /// camt.052.001.07
        V07 = "camt.052.001.07",
        /// camt.052.001.08
        V08 = "camt.052.001.08",
        /// camt.052.001.09
        V09 = "camt.052.001.09",
        /// camt.052.001.10
        V10 = "camt.052.001.10",
        /// camt.052.001.11
        V11 = "camt.052.001.11",
        /// camt.052.001.12
        V12 = "camt.052.001.12",
    }
);

/// Endpoint details report model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageModel {
    /// Message identification
    pub message_id: String,
    /// Creation date-time
    pub created_date_time: Option<DateTime<Utc>>,
    /// Pagination
    pub pagination: MessagePagination,
    /// Query this report answers (03+)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_query: Option<BusinessQueryFields>,
    /// Report identification
    pub report_id: ReportType,
    /// Reporting sequence (07+)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<ReportingFields>,
    /// Report creation date-time
    pub report_create_date_time: Option<DateTime<Utc>>,
    /// Account identification
    pub account_other_id: String,
    /// Credit totals
    pub total_credit_entries: NumberAndSumOfTransactions,
    /// Debit totals
    pub total_debit_entries: NumberAndSumOfTransactions,
    /// Totals per bank transaction code
    pub total_entries_per_bank_transaction_code: Vec<TotalsPerBankTransactionCode>,
    /// Entries
    pub entry_details: Vec<Entry>,
}

path_node!(MessageModel {
    "MessageId" => message_id,
    "CreatedDateTime" => created_date_time,
    "Pagination" => pagination,
    "BusinessQuery" => business_query,
    "ReportId" => report_id,
    "Reporting" => reporting,
    "ReportCreateDateTime" => report_create_date_time,
    "AccountOtherId" => account_other_id,
    "TotalCreditEntries" => total_credit_entries,
    "TotalDebitEntries" => total_debit_entries,
    "TotalEntriesPerBankTransactionCode" => total_entries_per_bank_transaction_code,
    "EntryDetails" => entry_details,
});

/// Original business query group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusinessQueryFields {
    /// Message identification of the query
    pub business_query_msg_id: String,
    /// Message name of the query
    pub business_query_msg_name_id: String,
    /// Creation date-time of the query
    pub business_query_create_datetime: Option<DateTime<Utc>>,
}

path_node!(BusinessQueryFields {
    "BusinessQueryMsgId" => business_query_msg_id,
    "BusinessQueryMsgNameId" => business_query_msg_name_id,
    "BusinessQueryCreateDatetime" => business_query_create_datetime,
});

/// Reporting sequence group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReportingFields {
    /// Sequence range covered by the report
    pub reporting_sequence: SequenceRange,
}

path_node!(ReportingFields { "ReportingSequence" => reporting_sequence });

/// EndpointDetailsReport message type
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointDetailsReport;

impl MessageKind for EndpointDetailsReport {
    type Version = Camt052Version;
    type Model = MessageModel;

    const NAME: &'static str = "EndpointDetailsReport";

    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "MessageId",
        "CreatedDateTime",
        "Pagination",
        "ReportId",
        "ReportCreateDateTime",
    ];

    fn registry() -> Result<VersionRegistry<Camt052Version>> {
        let v02 = Arc::new(path_map_v02()?);
        let v06 = Arc::new(path_map_v06()?);
        let v07 = Arc::new(path_map_v07()?);
        let v08 = Arc::new(path_map_v08()?);
        let early = DocumentFactory::of::<Camt052V2Document>();
        let late = DocumentFactory::of::<Camt052V7Document>();

        let mut builder = VersionRegistry::builder().register(Camt052Version::V02, v02, early);
        for version in [Camt052Version::V03, Camt052Version::V04, Camt052Version::V05, Camt052Version::V06] {
            builder = builder.register(version, v06.clone(), early);
        }
        builder = builder.register(Camt052Version::V07, v07, late);
        for version in [
            Camt052Version::V08,
            Camt052Version::V09,
            Camt052Version::V10,
            Camt052Version::V11,
            Camt052Version::V12,
        ] {
            builder = builder.register(version, v08.clone(), late);
        }
        builder.build::<MessageModel>()
    }
}

const REPORT: &str = "BkToCstmrAcctRpt.Rpt[0]";

const ENTRIES: &str = "BkToCstmrAcctRpt.Rpt[0].Ntry : EntryDetails";

fn report(path: &str) -> String {
    format!("{}.{}", REPORT, path)
}

fn group_header(builder: PathMapBuilder) -> PathMapBuilder {
    builder
        .field("BkToCstmrAcctRpt.GrpHdr.MsgId", "MessageId")
        .field("BkToCstmrAcctRpt.GrpHdr.CreDtTm", "CreatedDateTime")
        .field("BkToCstmrAcctRpt.GrpHdr.MsgPgntn.PgNb", "Pagination.PageNumber")
        .field("BkToCstmrAcctRpt.GrpHdr.MsgPgntn.LastPgInd", "Pagination.LastPageIndicator")
}

fn business_query(builder: PathMapBuilder) -> PathMapBuilder {
    builder
        .field("BkToCstmrAcctRpt.GrpHdr.OrgnlBizQry.MsgId", "BusinessQuery.BusinessQueryMsgId")
        .field("BkToCstmrAcctRpt.GrpHdr.OrgnlBizQry.MsgNmId", "BusinessQuery.BusinessQueryMsgNameId")
        .field(
            "BkToCstmrAcctRpt.GrpHdr.OrgnlBizQry.CreDtTm",
            "BusinessQuery.BusinessQueryCreateDatetime",
        )
}

fn report_summary(builder: PathMapBuilder) -> PathMapBuilder {
    builder
        .field(&report("Id"), "ReportId")
        .field(&report("CreDtTm"), "ReportCreateDateTime")
        .field(&report("Acct.Id.Othr.Id"), "AccountOtherId")
        .field(&report("TxsSummry.TtlCdtNtries.NbOfNtries"), "TotalCreditEntries.NumberOfEntries")
        .field(&report("TxsSummry.TtlCdtNtries.Sum"), "TotalCreditEntries.Sum")
        .field(&report("TxsSummry.TtlDbtNtries.NbOfNtries"), "TotalDebitEntries.NumberOfEntries")
        .field(&report("TxsSummry.TtlDbtNtries.Sum"), "TotalDebitEntries.Sum")
        .repeated(
            &format!("{} : TotalEntriesPerBankTransactionCode", report("TxsSummry.TtlNtriesPerBkTxCd")),
            |e| {
                e.field("NbOfNtries", "NumberOfEntries")
                    .field("BkTxCd.Prtry.Cd", "BankTransactionCode")
            },
        )
}

fn reporting_sequence(builder: PathMapBuilder) -> PathMapBuilder {
    builder
        .field(&report("RptgSeq.FrToSeq[0].FrSeq"), "Reporting.ReportingSequence.FromSeq")
        .field(&report("RptgSeq.FrToSeq[0].ToSeq"), "Reporting.ReportingSequence.ToSeq")
}

fn clearing_member(e: ElementsBuilder, agent: &str, model: &str) -> ElementsBuilder {
    let base = format!("NtryDtls[0].TxDtls[0].RltdAgts.{}.FinInstnId.ClrSysMmbId", agent);
    e.field(&format!("{}.ClrSysId.Cd", base), &format!("EntryDetails.{}.PaymentSysCode", model))
        .field(&format!("{}.MmbId", base), &format!("EntryDetails.{}.PaymentSysMemberId", model))
}

fn entry_common(e: ElementsBuilder) -> ElementsBuilder {
    e.field("Amt.Value", "Amount.Amount")
        .field("Amt.Ccy", "Amount.Currency")
        .field("CdtDbtInd", "CreditDebitIndicator")
        .field("BkTxCd.Prtry.Cd", "BankTransactionCode")
        .field("AddtlInfInd.MsgNmId", "MessageNameId")
        .field("NtryDtls[0].TxDtls[0].Refs.MsgId", "EntryDetails.MessageId")
        .field("NtryDtls[0].TxDtls[0].Refs.InstrId", "EntryDetails.InstructionId")
        .field("NtryDtls[0].TxDtls[0].Refs.ClrSysRef", "EntryDetails.ClearingSystemRef")
        .field(
            "NtryDtls[0].TxDtls[0].RltdDts.Prtry[0].Tp",
            "EntryDetails.RelatedDatesProprietary",
        )
        .field(
            "NtryDtls[0].TxDtls[0].RltdDts.Prtry[0].Dt.DtTm",
            "EntryDetails.RelatedDateTime",
        )
}

fn entry_v02(e: ElementsBuilder) -> ElementsBuilder {
    let e = entry_common(e).field("Sts", "Status");
    let e = clearing_member(e, "IntrmyAgt1", "InstructingAgent");
    clearing_member(e, "RcvgAgt", "InstructedAgent")
}

// Transaction-level amounts come first so the entry amount wins on decode.
fn entry_v06(e: ElementsBuilder) -> ElementsBuilder {
    entry_v02(
        e.field("NtryDtls[0].TxDtls[0].Amt.Value", "Amount.Amount")
            .field("NtryDtls[0].TxDtls[0].Amt.Ccy", "Amount.Currency")
            .field("NtryDtls[0].TxDtls[0].CdtDbtInd", "CreditDebitIndicator"),
    )
}

fn entry_v07(e: ElementsBuilder) -> ElementsBuilder {
    let e = entry_common(e)
        .field("Sts.Cd", "Status")
        .field("NtryDtls[0].TxDtls[0].LclInstrm.Prtry", "EntryDetails.LocalInstrumentChoice");
    let e = clearing_member(e, "InstgAgt", "InstructingAgent");
    clearing_member(e, "InstdAgt", "InstructedAgent")
}

fn entry_v08(e: ElementsBuilder) -> ElementsBuilder {
    entry_v07(e).field(
        "NtryDtls[0].TxDtls[0].Refs.UETR",
        "EntryDetails.UniqueTransactionReference",
    )
}

fn path_map_v02() -> Result<PathMap> {
    Ok(report_summary(group_header(PathMap::builder()))
        .repeated(ENTRIES, entry_v02)
        .build()?)
}

fn path_map_v06() -> Result<PathMap> {
    Ok(report_summary(business_query(group_header(PathMap::builder())))
        .repeated(ENTRIES, entry_v06)
        .build()?)
}

fn path_map_v07() -> Result<PathMap> {
    Ok(reporting_sequence(report_summary(business_query(group_header(PathMap::builder()))))
        .repeated(ENTRIES, entry_v07)
        .build()?)
}

fn path_map_v08() -> Result<PathMap> {
    Ok(reporting_sequence(report_summary(business_query(group_header(PathMap::builder()))))
        .repeated(ENTRIES, entry_v08)
        .build()?)
}
