//! ReturnRequest (camt.056)
//!
//! A participant asks the receiver of a payment to return it.

use crate::documents::camt_056::Camt056Document;
use crate::documents::DocumentFactory;
use crate::model::{Agent, CurrencyAndAmount};
use crate::processor::MessageKind;
use crate::registry::VersionRegistry;
use crate::table::PathMap;
use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

crate::schema_versions!(
    /// camt.056.001 schema versions
    Camt056Version {
        /// camt.056.001.08
        V08 = "camt.056.001.08",
    }
);

/// Return request model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageModel {
    /// Assignment identification
    pub assignment_id: String,
    /// Party assigning the case
    pub assigner: Agent,
    /// Party the case is assigned to
    pub assignee: Agent,
    /// Assignment creation date-time
    pub assignment_create_time: Option<DateTime<Utc>>,
    /// Case identification
    pub case_id: String,
    /// Case creator
    pub creator: Agent,
    /// Message identification of the payment
    pub original_message_id: String,
    /// Message name of the payment, e.g. `pacs.008.001.08`
    pub original_message_name_id: String,
    /// Creation date-time of the payment message
    pub original_message_create_time: Option<DateTime<Utc>>,
    /// Instruction identification of the payment
    pub original_instruction_id: String,
    /// End-to-end identification of the payment
    pub original_end_to_end_id: String,
    /// UETR of the payment
    #[serde(rename = "OriginalUETR")]
    pub original_uetr: String,
    /// Settled amount of the payment
    pub original_interbank_settlement_amount: CurrencyAndAmount,
    /// Settlement date of the payment
    pub original_interbank_settlement_date: Option<NaiveDate>,
    /// Why the return is requested
    pub cancellation_reason: Reason,
}

path_node!(MessageModel {
    "AssignmentId" => assignment_id,
    "Assigner" => assigner,
    "Assignee" => assignee,
    "AssignmentCreateTime" => assignment_create_time,
    "CaseId" => case_id,
    "Creator" => creator,
    "OriginalMessageId" => original_message_id,
    "OriginalMessageNameId" => original_message_name_id,
    "OriginalMessageCreateTime" => original_message_create_time,
    "OriginalInstructionId" => original_instruction_id,
    "OriginalEndToEndId" => original_end_to_end_id,
    "OriginalUETR" => original_uetr,
    "OriginalInterbankSettlementAmount" => original_interbank_settlement_amount,
    "OriginalInterbankSettlementDate" => original_interbank_settlement_date,
    "CancellationReason" => cancellation_reason,
});

/// Cancellation reason
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Reason {
    /// Name of the party asking for the return
    pub originator: String,
    /// Reason code, e.g. `DUPL`
    pub reason: String,
    /// Free-form explanation
    pub additional_info: String,
}

path_node!(Reason {
    "Originator" => originator,
    "Reason" => reason,
    "AdditionalInfo" => additional_info,
});

/// ReturnRequest message type
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnRequest;

impl MessageKind for ReturnRequest {
    type Version = Camt056Version;
    type Model = MessageModel;

    const NAME: &'static str = "ReturnRequest";

    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "AssignmentId",
        "Assigner",
        "Assignee",
        "AssignmentCreateTime",
        "CaseId",
        "Creator",
        "OriginalMessageId",
        "OriginalMessageNameId",
        "OriginalMessageCreateTime",
        "OriginalUETR",
        "OriginalInterbankSettlementAmount",
        "OriginalInterbankSettlementDate",
        "CancellationReason.Reason",
    ];

    fn registry() -> Result<VersionRegistry<Camt056Version>> {
        VersionRegistry::builder()
            .register(
                Camt056Version::V08,
                Arc::new(path_map_v08()?),
                DocumentFactory::of::<Camt056Document>(),
            )
            .build::<MessageModel>()
    }
}

const TX: &str = "FIToFIPmtCxlReq.Undrlyg.TxInf";

fn path_map_v08() -> Result<PathMap> {
    let mut builder = PathMap::builder()
        .field("FIToFIPmtCxlReq.Assgnmt.Id", "AssignmentId")
        .field("FIToFIPmtCxlReq.Assgnmt.CreDtTm", "AssignmentCreateTime")
        .field("FIToFIPmtCxlReq.Case.Id", "CaseId");

    for (party, model) in [
        ("FIToFIPmtCxlReq.Assgnmt.Assgnr", "Assigner"),
        ("FIToFIPmtCxlReq.Assgnmt.Assgne", "Assignee"),
        ("FIToFIPmtCxlReq.Case.Cretr", "Creator"),
    ] {
        let fi = format!("{}.Agt.FinInstnId", party);
        builder = builder
            .field(&format!("{}.ClrSysMmbId.ClrSysId.Cd", fi), &format!("{}.PaymentSysCode", model))
            .field(&format!("{}.ClrSysMmbId.MmbId", fi), &format!("{}.PaymentSysMemberId", model));
    }

    let creator = "FIToFIPmtCxlReq.Case.Cretr.Agt.FinInstnId";
    builder = builder.field(&format!("{}.Nm", creator), "Creator.BankName");
    for (element, field) in [
        ("StrtNm", "StreetName"),
        ("BldgNb", "BuildingNumber"),
        ("BldgNm", "BuildingName"),
        ("Flr", "Floor"),
        ("Room", "RoomNumber"),
        ("PstCd", "PostalCode"),
        ("TwnNm", "TownName"),
        ("CtrySubDvsn", "Subdivision"),
        ("Ctry", "Country"),
    ] {
        builder = builder.field(
            &format!("{}.PstlAdr.{}", creator, element),
            &format!("Creator.PostalAddress.{}", field),
        );
    }

    let tx = |path: &str| format!("{}.{}", TX, path);
    Ok(builder
        .field(&tx("OrgnlGrpInf.OrgnlMsgId"), "OriginalMessageId")
        .field(&tx("OrgnlGrpInf.OrgnlMsgNmId"), "OriginalMessageNameId")
        .field(&tx("OrgnlGrpInf.OrgnlCreDtTm"), "OriginalMessageCreateTime")
        .field(&tx("OrgnlInstrId"), "OriginalInstructionId")
        .field(&tx("OrgnlEndToEndId"), "OriginalEndToEndId")
        .field(&tx("OrgnlUETR"), "OriginalUETR")
        .field(&tx("OrgnlIntrBkSttlmAmt.Value"), "OriginalInterbankSettlementAmount.Amount")
        .field(&tx("OrgnlIntrBkSttlmAmt.Ccy"), "OriginalInterbankSettlementAmount.Currency")
        .field(&tx("OrgnlIntrBkSttlmDt"), "OriginalInterbankSettlementDate")
        .field(&tx("CxlRsnInf.Orgtr.Nm"), "CancellationReason.Originator")
        .field(&tx("CxlRsnInf.Rsn.Cd"), "CancellationReason.Reason")
        .field(&tx("CxlRsnInf.AddtlInf[0]"), "CancellationReason.AdditionalInfo")
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::{PaymentSystemType, PostalAddress};
    use crate::processor::MessageProcessor;
    use crate::registry::SchemaVersion;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.056.001.08">
  <FIToFIPmtCxlReq>
    <Assgnmt>
      <Id>20250310B1QDRCQR000722</Id>
      <Assgnr>
        <Agt>
          <FinInstnId>
            <ClrSysMmbId>
              <ClrSysId>
                <Cd>USABA</Cd>
              </ClrSysId>
              <MmbId>011104238</MmbId>
            </ClrSysMmbId>
          </FinInstnId>
        </Agt>
      </Assgnr>
      <Assgne>
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
      </Assgne>
      <CreDtTm>2025-03-10T10:02:00Z</CreDtTm>
    </Assgnmt>
    <Case>
      <Id>ab4</Id>
      <Cretr>
        <Agt>
          <FinInstnId>
            <ClrSysMmbId>
              <ClrSysId>
                <Cd>USABA</Cd>
              </ClrSysId>
              <MmbId>011104238</MmbId>
            </ClrSysMmbId>
            <Nm>Bank A</Nm>
            <PstlAdr>
              <StrtNm>Avenue A</StrtNm>
              <BldgNb>66</BldgNb>
              <PstCd>60532</PstCd>
              <TwnNm>Lisle</TwnNm>
              <CtrySubDvsn>IL</CtrySubDvsn>
              <Ctry>US</Ctry>
            </PstlAdr>
          </FinInstnId>
        </Agt>
      </Cretr>
    </Case>
    <Undrlyg>
      <TxInf>
        <OrgnlGrpInf>
          <OrgnlMsgId>20250310B1QDRCQR000721</OrgnlMsgId>
          <OrgnlMsgNmId>pacs.008.001.08</OrgnlMsgNmId>
          <OrgnlCreDtTm>2025-03-10T10:00:00Z</OrgnlCreDtTm>
        </OrgnlGrpInf>
        <OrgnlInstrId>Scenario01InstrId001</OrgnlInstrId>
        <OrgnlEndToEndId>Scenario01EtoEId001</OrgnlEndToEndId>
        <OrgnlUETR>8a562c67-ca16-48ba-b074-65581be6f011</OrgnlUETR>
        <OrgnlIntrBkSttlmAmt Ccy="USD">151235.88</OrgnlIntrBkSttlmAmt>
        <OrgnlIntrBkSttlmDt>2025-03-10</OrgnlIntrBkSttlmDt>
        <CxlRsnInf>
          <Orgtr>
            <Nm>Corporation A</Nm>
          </Orgtr>
          <Rsn>
            <Cd>DUPL</Cd>
          </Rsn>
          <AddtlInf>Payment is a duplicate. Please consider reversing it.</AddtlInf>
        </CxlRsnInf>
      </TxInf>
    </Undrlyg>
  </FIToFIPmtCxlReq>
</Document>"#;

    fn processor() -> MessageProcessor<ReturnRequest> {
        MessageProcessor::new().unwrap()
    }

    fn usaba(member: &str) -> Agent {
        Agent {
            payment_sys_code: PaymentSystemType::USABA,
            payment_sys_member_id: member.to_string(),
            ..Default::default()
        }
    }

    fn model() -> MessageModel {
        MessageModel {
            assignment_id: "20250310B1QDRCQR000722".to_string(),
            assigner: usaba("011104238"),
            assignee: usaba("231981435"),
            assignment_create_time: Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 2, 0).unwrap()),
            case_id: "ab4".to_string(),
            creator: Agent {
                bank_name: "Bank A".to_string(),
                postal_address: PostalAddress {
                    street_name: "Avenue A".to_string(),
                    building_number: "66".to_string(),
                    postal_code: "60532".to_string(),
                    town_name: "Lisle".to_string(),
                    subdivision: "IL".to_string(),
                    country: "US".to_string(),
                    ..Default::default()
                },
                ..usaba("011104238")
            },
            original_message_id: "20250310B1QDRCQR000721".to_string(),
            original_message_name_id: "pacs.008.001.08".to_string(),
            original_message_create_time: Some(Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap()),
            original_instruction_id: "Scenario01InstrId001".to_string(),
            original_end_to_end_id: "Scenario01EtoEId001".to_string(),
            original_uetr: "8a562c67-ca16-48ba-b074-65581be6f011".to_string(),
            original_interbank_settlement_amount: CurrencyAndAmount {
                currency: "USD".to_string(),
                amount: dec!(151235.88),
            },
            original_interbank_settlement_date: NaiveDate::from_ymd_opt(2025, 3, 10),
            cancellation_reason: Reason {
                originator: "Corporation A".to_string(),
                reason: "DUPL".to_string(),
                additional_info: "Payment is a duplicate. Please consider reversing it.".to_string(),
            },
        }
    }

    #[test]
    fn test_message_with_sample() {
        let decoded = processor().message_with(SAMPLE).unwrap();
        assert_eq!(decoded, model());
    }

    #[test]
    fn test_round_trip() {
        let processor = processor();
        let doc = processor.document_with(&model(), Camt056Version::V08).unwrap();
        assert_eq!(doc.namespace(), Camt056Version::V08.namespace());
        doc.validate().unwrap();

        let back = processor.message_with(&doc.to_xml().unwrap()).unwrap();
        assert_eq!(back, model());
    }

    #[test]
    fn test_model_json_uses_field_names() {
        let json = serde_json::to_value(model()).unwrap();
        assert_eq!(json["OriginalUETR"], "8a562c67-ca16-48ba-b074-65581be6f011");
        assert_eq!(json["OriginalInterbankSettlementDate"], "2025-03-10");
        assert_eq!(json["CancellationReason"]["Reason"], "DUPL");
    }

    #[test]
    fn test_missing_reason_code() {
        let mut model = model();
        model.cancellation_reason.reason.clear();
        model.original_uetr.clear();

        let err = processor().document_with(&model, Camt056Version::V08).unwrap_err();
        assert!(err.is(ErrorKind::RequiredField));
        match err {
            crate::Error::Validation(errors) => {
                assert_eq!(errors.fields(), vec!["OriginalUETR", "CancellationReason.Reason"])
            }
            other => panic!("expected validation errors, got {other}"),
        }
    }

    #[test]
    fn test_malformed_uetr_fails_validation() {
        let mut model = model();
        model.original_uetr = "8A562C67-CA16-48BA-B074-65581BE6F011".to_string();

        let doc = processor().document_with(&model, Camt056Version::V08).unwrap();
        let err = doc.validate().unwrap_err();
        assert!(err.to_string().contains("FIToFIPmtCxlReq.Undrlyg.TxInf.OrgnlUETR"));

        model.original_uetr = "not-a-uuid".to_string();
        let err = processor().document_with(&model, Camt056Version::V08).unwrap_err();
        assert!(err.is(ErrorKind::InvalidField));
        assert!(err.to_string().starts_with("field copy FIToFIPmtCxlReq.Undrlyg.TxInf.OrgnlUETR failed"));
    }
}
