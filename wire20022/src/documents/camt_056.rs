//! camt.056.001.08 FIToFIPaymentCancellationRequest

use super::types::*;
use serde::{Deserialize, Serialize};

/// camt.056 document root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct Camt056Document {
    /// Default namespace
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,

    /// Cancellation request
    #[serde(rename = "FIToFIPmtCxlReq")]
    pub fi_to_fi_pmt_cxl_req: FIToFIPaymentCancellationRequestV08,
}

iso_document!(Camt056Document { "FIToFIPmtCxlReq" => fi_to_fi_pmt_cxl_req });

/// Message body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FIToFIPaymentCancellationRequestV08 {
    /// Assignment
    #[serde(rename = "Assgnmt")]
    pub assgnmt: CaseAssignment5,

    /// Case
    #[serde(rename = "Case", skip_serializing_if = "Option::is_none")]
    pub case: Option<Case5>,

    /// Underlying transaction
    #[serde(rename = "Undrlyg")]
    pub undrlyg: UnderlyingTransaction23,
}

schema_element!(FIToFIPaymentCancellationRequestV08 {
    "Assgnmt" => assgnmt,
    "Case" => case,
    "Undrlyg" => undrlyg,
});

/// Case assignment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseAssignment5 {
    /// Assignment identification
    #[serde(rename = "Id")]
    pub id: Max35Text,

    /// Assigner
    #[serde(rename = "Assgnr")]
    pub assgnr: Party40Choice,

    /// Assignee
    #[serde(rename = "Assgne")]
    pub assgne: Party40Choice,

    /// Creation date-time
    #[serde(rename = "CreDtTm", skip_serializing_if = "Option::is_none")]
    pub cre_dt_tm: Option<IsoDateTime>,
}

schema_element!(CaseAssignment5 {
    "Id" => id,
    "Assgnr" => assgnr,
    "Assgne" => assgne,
    "CreDtTm" => cre_dt_tm,
});

/// Case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Case5 {
    /// Case identification
    #[serde(rename = "Id")]
    pub id: Max35Text,

    /// Case creator
    #[serde(rename = "Cretr")]
    pub cretr: Party40Choice,
}

schema_element!(Case5 { "Id" => id, "Cretr" => cretr });

/// Underlying transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderlyingTransaction23 {
    /// Transaction information
    #[serde(rename = "TxInf", skip_serializing_if = "Option::is_none")]
    pub tx_inf: Option<PaymentTransaction106>,
}

schema_element!(UnderlyingTransaction23 { "TxInf" => tx_inf });

/// Original group information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OriginalGroupInformation29 {
    /// Original message identification
    #[serde(rename = "OrgnlMsgId")]
    pub orgnl_msg_id: Max35Text,

    /// Original message name
    #[serde(rename = "OrgnlMsgNmId")]
    pub orgnl_msg_nm_id: Max35Text,

    /// Original creation date-time
    #[serde(rename = "OrgnlCreDtTm", skip_serializing_if = "Option::is_none")]
    pub orgnl_cre_dt_tm: Option<IsoDateTime>,
}

schema_element!(OriginalGroupInformation29 {
    "OrgnlMsgId" => orgnl_msg_id,
    "OrgnlMsgNmId" => orgnl_msg_nm_id,
    "OrgnlCreDtTm" => orgnl_cre_dt_tm,
});

/// Transaction to cancel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentTransaction106 {
    /// Original group information
    #[serde(rename = "OrgnlGrpInf", skip_serializing_if = "Option::is_none")]
    pub orgnl_grp_inf: Option<OriginalGroupInformation29>,

    /// Original instruction identification
    #[serde(rename = "OrgnlInstrId", skip_serializing_if = "Option::is_none")]
    pub orgnl_instr_id: Option<Max35Text>,

    /// Original end-to-end identification
    #[serde(rename = "OrgnlEndToEndId", skip_serializing_if = "Option::is_none")]
    pub orgnl_end_to_end_id: Option<Max35Text>,

    /// Original UETR
    #[serde(rename = "OrgnlUETR", skip_serializing_if = "Option::is_none")]
    pub orgnl_uetr: Option<UuidV4Identifier>,

    /// Original settlement amount
    #[serde(rename = "OrgnlIntrBkSttlmAmt", skip_serializing_if = "Option::is_none")]
    pub orgnl_intr_bk_sttlm_amt: Option<ActiveOrHistoricCurrencyAndAmount>,

    /// Original settlement date
    #[serde(rename = "OrgnlIntrBkSttlmDt", skip_serializing_if = "Option::is_none")]
    pub orgnl_intr_bk_sttlm_dt: Option<IsoDate>,

    /// Cancellation reason
    #[serde(rename = "CxlRsnInf", skip_serializing_if = "Option::is_none")]
    pub cxl_rsn_inf: Option<PaymentCancellationReason5>,
}

schema_element!(PaymentTransaction106 {
    "OrgnlGrpInf" => orgnl_grp_inf,
    "OrgnlInstrId" => orgnl_instr_id,
    "OrgnlEndToEndId" => orgnl_end_to_end_id,
    "OrgnlUETR" => orgnl_uetr,
    "OrgnlIntrBkSttlmAmt" => orgnl_intr_bk_sttlm_amt,
    "OrgnlIntrBkSttlmDt" => orgnl_intr_bk_sttlm_dt,
    "CxlRsnInf" => cxl_rsn_inf,
});

/// Party identified by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyIdentification135 {
    /// Name
    #[serde(rename = "Nm", skip_serializing_if = "Option::is_none")]
    pub nm: Option<Max140Text>,
}

schema_element!(PartyIdentification135 { "Nm" => nm });

text_type!(
    /// Cancellation reason code from the external list
    ExternalCancellationReason1Code, 1, 4
);

/// Cancellation reason choice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationReason33Choice {
    /// Code
    #[serde(rename = "Cd", skip_serializing_if = "Option::is_none")]
    pub cd: Option<ExternalCancellationReason1Code>,
}

schema_element!(CancellationReason33Choice { "Cd" => cd });

/// Cancellation reason information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCancellationReason5 {
    /// Originator
    #[serde(rename = "Orgtr", skip_serializing_if = "Option::is_none")]
    pub orgtr: Option<PartyIdentification135>,

    /// Reason
    #[serde(rename = "Rsn", skip_serializing_if = "Option::is_none")]
    pub rsn: Option<CancellationReason33Choice>,

    /// Additional information lines
    #[serde(rename = "AddtlInf", default, skip_serializing_if = "Vec::is_empty")]
    pub addtl_inf: Vec<Max105Text>,
}

schema_element!(PaymentCancellationReason5 {
    "Orgtr" => orgtr,
    "Rsn" => rsn,
    "AddtlInf" => addtl_inf,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{get_value, set_value};
    use crate::documents::Document;
    use crate::path::Path;
    use crate::value::Value;

    #[test]
    fn test_uetr_and_amount_paths() {
        let mut doc = Camt056Document::default();
        let tx = "FIToFIPmtCxlReq.Undrlyg.TxInf";

        set_value(
            &mut doc,
            &Path::parse(&format!("{tx}.OrgnlUETR")).unwrap(),
            Value::Text("8a562c67-ca16-48ba-b074-65581be6f011".into()),
        )
        .unwrap();
        set_value(
            &mut doc,
            &Path::parse(&format!("{tx}.OrgnlIntrBkSttlmAmt.Value")).unwrap(),
            Value::Decimal("151235.88".parse().unwrap()),
        )
        .unwrap();
        set_value(
            &mut doc,
            &Path::parse(&format!("{tx}.CxlRsnInf.AddtlInf[0]")).unwrap(),
            Value::Text("Corrupted file".into()),
        )
        .unwrap();

        assert_eq!(
            get_value(&doc, &Path::parse(&format!("{tx}.CxlRsnInf.AddtlInf[0]")).unwrap()).unwrap(),
            Some(Value::Text("Corrupted file".to_string()))
        );

        let err = doc.validate().unwrap_err();
        // currency never set
        assert!(err.to_string().contains("OrgnlIntrBkSttlmAmt.Ccy"));
    }

    #[test]
    fn test_bad_uetr_fails_validation() {
        let mut doc = Camt056Document::default();
        doc.fi_to_fi_pmt_cxl_req.assgnmt.id = Max35Text("20250310B1QDRCQR000722".to_string());
        doc.fi_to_fi_pmt_cxl_req.undrlyg.tx_inf = Some(PaymentTransaction106 {
            orgnl_uetr: Some(UuidV4Identifier("X".repeat(36))),
            ..Default::default()
        });

        let err = doc.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("\"FIToFIPmtCxlReq.Undrlyg.TxInf.OrgnlUETR\""));
    }
}
