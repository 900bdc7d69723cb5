//! AccountReportingRequest (camt.060)
//!
//! A participant asks the service for an account or endpoint report.

use crate::documents::camt_060::Camt060Document;
use crate::documents::DocumentFactory;
use crate::model::{Agent, AccountTypeFrs, CamtReportType, SequenceRange};
use crate::processor::MessageKind;
use crate::registry::VersionRegistry;
use crate::table::PathMap;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

crate::schema_versions!(
    /// camt.060.001 schema versions
    Camt060Version {
        /// camt.060.001.02
        V02 = "camt.060.001.02",
        /// camt.060.001.03
        V03 = "camt.060.001.03",
        /// camt.060.001.04
        V04 = "camt.060.001.04",
        /// camt.060.001.05
        V05 = "camt.060.001.05",
        /// camt.060.001.06
        V06 = "camt.060.001.06",
        /// camt.060.001.07
        V07 = "camt.060.001.07",
    }
);

/// Account reporting request model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageModel {
    /// Message identification
    pub message_id: String,
    /// Creation date-time
    pub created_date_time: Option<DateTime<Utc>>,
    /// Requested report
    pub report_request_id: CamtReportType,
    /// Message name of the requested report, e.g. `camt.052.001.08`
    pub requested_msg_name_id: String,
    /// Account identification
    pub account_other_id: String,
    /// Account type
    pub account_property: AccountTypeFrs,
    /// Account owner
    pub account_owner_agent: Agent,
    /// Reporting sequence (04+)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting_sequence: Option<ReportingSequenceFields>,
}

path_node!(MessageModel {
    "MessageId" => message_id,
    "CreatedDateTime" => created_date_time,
    "ReportRequestId" => report_request_id,
    "RequestedMsgNameId" => requested_msg_name_id,
    "AccountOtherId" => account_other_id,
    "AccountProperty" => account_property,
    "AccountOwnerAgent" => account_owner_agent,
    "ReportingSequence" => reporting_sequence,
});

/// Reporting sequence group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReportingSequenceFields {
    /// Requested range
    pub from_to_sequence: SequenceRange,
}

path_node!(ReportingSequenceFields { "FromToSequence" => from_to_sequence });

/// AccountReportingRequest message type
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountReportingRequest;

impl MessageKind for AccountReportingRequest {
    type Version = Camt060Version;
    type Model = MessageModel;

    const NAME: &'static str = "AccountReportingRequest";

    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "MessageId",
        "CreatedDateTime",
        "ReportRequestId",
        "RequestedMsgNameId",
        "AccountOwnerAgent",
    ];

    fn registry() -> Result<VersionRegistry<Camt060Version>> {
        let v02 = Arc::new(path_map_v02()?);
        let v04 = Arc::new(path_map_v04(&v02)?);
        let factory = DocumentFactory::of::<Camt060Document>();

        VersionRegistry::builder()
            .register(Camt060Version::V02, v02.clone(), factory)
            .register(Camt060Version::V03, v02, factory)
            .register(Camt060Version::V04, v04.clone(), factory)
            .register(Camt060Version::V05, v04.clone(), factory)
            .register(Camt060Version::V06, v04.clone(), factory)
            .register(Camt060Version::V07, v04, factory)
            .build::<MessageModel>()
    }
}

fn path_map_v02() -> Result<PathMap> {
    Ok(PathMap::builder()
        .field("AcctRptgReq.GrpHdr.MsgId", "MessageId")
        .field("AcctRptgReq.GrpHdr.CreDtTm", "CreatedDateTime")
        .field("AcctRptgReq.RptgReq[0].Id", "ReportRequestId")
        .field("AcctRptgReq.RptgReq[0].ReqdMsgNmId", "RequestedMsgNameId")
        .field("AcctRptgReq.RptgReq[0].Acct.Id.Othr.Id", "AccountOtherId")
        .field("AcctRptgReq.RptgReq[0].Acct.Tp.Prtry", "AccountProperty")
        .field(
            "AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.ClrSysId.Cd",
            "AccountOwnerAgent.PaymentSysCode",
        )
        .field(
            "AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.MmbId",
            "AccountOwnerAgent.PaymentSysMemberId",
        )
        .field(
            "AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.Othr.Id",
            "AccountOwnerAgent.OtherTypeId",
        )
        .build()?)
}

fn path_map_v04(base: &PathMap) -> Result<PathMap> {
    Ok(PathMap::builder()
        .inherit(base)
        .field(
            "AcctRptgReq.RptgReq[0].RptgSeq.FrToSeq[0].FrSeq",
            "ReportingSequence.FromToSequence.FromSeq",
        )
        .field(
            "AcctRptgReq.RptgReq[0].RptgSeq.FrToSeq[0].ToSeq",
            "ReportingSequence.FromToSequence.ToSeq",
        )
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::PaymentSystemType;
    use crate::processor::MessageProcessor;
    use crate::registry::SchemaVersion;
    use chrono::TimeZone;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
  <AcctRptgReq>
    <GrpHdr>
      <MsgId>20250311231981435ABARMMrequest1</MsgId>
      <CreDtTm>2025-03-11T23:19:00Z</CreDtTm>
    </GrpHdr>
    <RptgReq>
      <Id>ABAR</Id>
      <ReqdMsgNmId>camt.052.001.08</ReqdMsgNmId>
      <Acct>
        <Id>
          <Othr>
            <Id>231981435</Id>
          </Othr>
        </Id>
      </Acct>
      <AcctOwnr>
        <Agt>
          <FinInstnId>
            <ClrSysMmbId>
              <ClrSysId>
                <Cd>USABA</Cd>
              </ClrSysId>
              <MmbId>231981435</MmbId>
            </ClrSysMmbId>
          </FinInstnId>
        </Agt>
      </AcctOwnr>
      <RptgSeq>
        <FrToSeq>
          <FrSeq>000001</FrSeq>
          <ToSeq>000100</ToSeq>
        </FrToSeq>
      </RptgSeq>
    </RptgReq>
  </AcctRptgReq>
</Document>"#;

    fn processor() -> MessageProcessor<AccountReportingRequest> {
        MessageProcessor::new().unwrap()
    }

    fn model() -> MessageModel {
        MessageModel {
            message_id: "20250311231981435ABARMMrequest1".to_string(),
            created_date_time: Some(Utc.with_ymd_and_hms(2025, 3, 11, 23, 19, 0).unwrap()),
            report_request_id: CamtReportType::ACCOUNT_BALANCE_REPORT,
            requested_msg_name_id: "camt.052.001.08".to_string(),
            account_other_id: "231981435".to_string(),
            account_property: AccountTypeFrs::default(),
            account_owner_agent: Agent {
                payment_sys_code: PaymentSystemType::USABA,
                payment_sys_member_id: "231981435".to_string(),
                ..Default::default()
            },
            reporting_sequence: Some(ReportingSequenceFields {
                from_to_sequence: SequenceRange {
                    from_seq: "000001".to_string(),
                    to_seq: "000100".to_string(),
                },
            }),
        }
    }

    #[test]
    fn test_message_with_sample() {
        let decoded = processor().message_with(SAMPLE).unwrap();
        assert_eq!(decoded, model());
    }

    #[test]
    fn test_document_with_every_version() {
        let processor = processor();
        for &version in Camt060Version::ALL {
            let doc = processor.document_with(&model(), version).unwrap();
            assert_eq!(doc.namespace(), version.namespace());
            doc.validate().unwrap();

            let typed = doc.as_any().downcast_ref::<Camt060Document>().unwrap();
            assert_eq!(typed.acct_rptg_req.grp_hdr.msg_id.as_str(), "20250311231981435ABARMMrequest1");
            assert_eq!(
                typed.acct_rptg_req.rptg_req[0].rptg_seq.is_some(),
                version >= Camt060Version::V04
            );
        }
    }

    #[test]
    fn test_early_versions_drop_reporting_sequence() {
        let processor = processor();
        let doc = processor.document_with(&model(), Camt060Version::V03).unwrap();
        let back = processor.message_with(&doc.to_xml().unwrap()).unwrap();

        assert_eq!(back.reporting_sequence, None);
        assert_eq!(back.message_id, model().message_id);
    }

    #[test]
    fn test_required_fields_reported_together() {
        let model = MessageModel {
            report_request_id: CamtReportType::ACCOUNT_BALANCE_REPORT,
            ..Default::default()
        };
        let err = processor().document_with(&model, Camt060Version::V07).unwrap_err();
        assert!(err.is(ErrorKind::RequiredField));

        match err {
            crate::Error::Validation(errors) => assert_eq!(
                errors.fields(),
                vec!["MessageId", "CreatedDateTime", "RequestedMsgNameId", "AccountOwnerAgent"]
            ),
            other => panic!("expected validation errors, got {other}"),
        }
    }

    #[test]
    fn test_long_message_id_names_the_path() {
        let model = MessageModel {
            message_id: "x".repeat(45),
            ..model()
        };
        let err = processor().document_with(&model, Camt060Version::V05).unwrap_err();
        let text = err.to_string();
        assert!(text.starts_with("field copy AcctRptgReq.GrpHdr.MsgId failed: failed to set MessageId: "));
        assert!(text.contains("fails validation with length 45 <= required maxLength 35"));
        assert!(err.is(ErrorKind::InvalidField));
    }
}
