//! camt.060 AccountReportingRequest, versions 02 to 07
//!
//! The mapped element tree is identical across the family; versions 04 and
//! later add `RptgSeq`, which the earlier path maps never reference.

use super::types::*;
use serde::{Deserialize, Serialize};

/// camt.060 document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Camt060Document {
    /// Default namespace
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,

    /// Account reporting request
    #[serde(rename = "AcctRptgReq")]
    pub acct_rptg_req: AccountReportingRequest,
}

iso_document!(Camt060Document { "AcctRptgReq" => acct_rptg_req });

/// AccountReportingRequest message body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountReportingRequest {
    /// Group header
    #[serde(rename = "GrpHdr")]
    pub grp_hdr: GroupHeader59,

    /// Reporting requests
    #[serde(rename = "RptgReq", default, skip_serializing_if = "Vec::is_empty")]
    pub rptg_req: Vec<ReportingRequest>,
}

schema_element!(AccountReportingRequest {
    "GrpHdr" => grp_hdr,
    "RptgReq" => rptg_req,
});

/// Group header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupHeader59 {
    /// Message identification
    #[serde(rename = "MsgId")]
    pub msg_id: Max35Text,

    /// Creation date-time
    #[serde(rename = "CreDtTm", skip_serializing_if = "Option::is_none")]
    pub cre_dt_tm: Option<IsoDateTime>,
}

schema_element!(GroupHeader59 {
    "MsgId" => msg_id,
    "CreDtTm" => cre_dt_tm,
});

/// One reporting request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingRequest {
    /// Request identification
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Max35Text>,

    /// Requested message name
    #[serde(rename = "ReqdMsgNmId")]
    pub reqd_msg_nm_id: Max35Text,

    /// Account
    #[serde(rename = "Acct", skip_serializing_if = "Option::is_none")]
    pub acct: Option<CashAccount38>,

    /// Account owner
    #[serde(rename = "AcctOwnr")]
    pub acct_ownr: Party40Choice,

    /// Reporting sequence (04+)
    #[serde(rename = "RptgSeq", skip_serializing_if = "Option::is_none")]
    pub rptg_seq: Option<SequenceRange1Choice>,
}

schema_element!(ReportingRequest {
    "Id" => id,
    "ReqdMsgNmId" => reqd_msg_nm_id,
    "Acct" => acct,
    "AcctOwnr" => acct_ownr,
    "RptgSeq" => rptg_seq,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{get_value, set_value};
    use crate::documents::Document;
    use crate::path::Path;
    use crate::value::Value;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
  <AcctRptgReq>
    <GrpHdr>
      <MsgId>20250311231981435ABARMMrequest1</MsgId>
      <CreDtTm>2025-03-11T23:19:00-05:00</CreDtTm>
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

    #[test]
    fn test_parse_sample() {
        let doc: Camt060Document = crate::xml::from_xml(SAMPLE).unwrap();
        let req = &doc.acct_rptg_req.rptg_req[0];

        assert_eq!(doc.acct_rptg_req.grp_hdr.msg_id.as_str(), "20250311231981435ABARMMrequest1");
        assert_eq!(req.reqd_msg_nm_id.as_str(), "camt.052.001.08");
        assert_eq!(
            get_value(&doc, &Path::parse("AcctRptgReq.RptgReq[0].RptgSeq.FrToSeq[0].ToSeq").unwrap()).unwrap(),
            Some(Value::Text("000100".to_string()))
        );
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_set_path_builds_tree() {
        let mut doc = Camt060Document::default();
        set_value(
            &mut doc,
            &Path::parse("AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.MmbId").unwrap(),
            Value::Text("231981435".into()),
        )
        .unwrap();

        let agent = doc.acct_rptg_req.rptg_req[0].acct_ownr.agt.as_ref().unwrap();
        let member = agent.fin_instn_id.clr_sys_mmb_id.as_ref().unwrap();
        assert_eq!(member.mmb_id.as_str(), "231981435");
    }

    #[test]
    fn test_validate_reports_paths() {
        let mut doc = Camt060Document::default();
        doc.acct_rptg_req.grp_hdr.msg_id = Max35Text("x".repeat(45));
        doc.acct_rptg_req.rptg_req.push(ReportingRequest {
            reqd_msg_nm_id: Max35Text("camt.052.001.08".to_string()),
            ..Default::default()
        });

        let err = doc.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("\"AcctRptgReq.GrpHdr.MsgId\": xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx fails validation with length 45 <= required maxLength 35"));
    }
}
