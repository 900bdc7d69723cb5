//! Single-value copies across the model/document boundary

use crate::access::{get_value, set_value, Node};
use crate::error::{AccessError, CopyError};
use crate::path::Path;

/// Copy one document value into the model
///
/// Absent values, including a missing repeated element, are skipped and
/// reported as `Ok(false)`.
pub fn copy_document_value_to_model(
    document: &dyn Node,
    document_path: &Path,
    model: &mut dyn Node,
    model_path: &Path,
) -> Result<bool, CopyError> {
    let value = match get_value(document, document_path) {
        Ok(Some(value)) => value,
        Ok(None) | Err(AccessError::IndexOutOfBounds { .. }) => return Ok(false),
        Err(source) => {
            return Err(CopyError::Get {
                path: document_path.to_string(),
                source,
            })
        }
    };

    set_value(model, model_path, value).map_err(|source| CopyError::Set {
        path: model_path.to_string(),
        source,
    })?;
    Ok(true)
}

/// Copy one model value into the document
///
/// Blank values (absent, empty text, zero, `false`) are skipped so optional
/// elements stay out of the output.
pub fn copy_model_value_to_document(
    model: &dyn Node,
    model_path: &Path,
    document: &mut dyn Node,
    document_path: &Path,
) -> Result<bool, CopyError> {
    let value = match get_value(model, model_path) {
        Ok(Some(value)) if !value.is_blank() => value,
        Ok(_) | Err(AccessError::IndexOutOfBounds { .. }) => return Ok(false),
        Err(source) => {
            return Err(CopyError::Get {
                path: model_path.to_string(),
                source,
            })
        }
    };

    set_value(document, document_path, value).map_err(|source| CopyError::Set {
        path: model_path.to_string(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::camt_060::Camt060Document;
    use crate::model::Agent;

    fn path(text: &str) -> Path {
        Path::parse(text).unwrap()
    }

    #[test]
    fn test_model_to_document_and_back() {
        let agent = Agent {
            payment_sys_member_id: "231981435".to_string(),
            ..Default::default()
        };
        let mut doc = Camt060Document::default();
        let doc_path = path("AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.MmbId");

        assert!(copy_model_value_to_document(&agent, &path("PaymentSysMemberId"), &mut doc, &doc_path).unwrap());
        assert!(!copy_model_value_to_document(&agent, &path("BankName"), &mut doc, &path("AcctRptgReq.GrpHdr.MsgId")).unwrap());

        let mut back = Agent::default();
        assert!(copy_document_value_to_model(&doc, &doc_path, &mut back, &path("PaymentSysMemberId")).unwrap());
        assert_eq!(back.payment_sys_member_id, "231981435");
    }

    #[test]
    fn test_missing_element_is_absent() {
        let doc = Camt060Document::default();
        let mut agent = Agent::default();
        let copied = copy_document_value_to_model(
            &doc,
            &path("AcctRptgReq.RptgReq[3].ReqdMsgNmId"),
            &mut agent,
            &path("BankName"),
        )
        .unwrap();
        assert!(!copied);
    }

    #[test]
    fn test_set_error_names_model_path() {
        let agent = Agent {
            bank_name: "x".repeat(45),
            ..Default::default()
        };
        let mut doc = Camt060Document::default();
        let err = copy_model_value_to_document(
            &agent,
            &path("BankName"),
            &mut doc,
            &path("AcctRptgReq.GrpHdr.MsgId"),
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("failed to set BankName: "));
        assert!(err
            .to_string()
            .ends_with("fails validation with length 45 <= required maxLength 35"));
    }

    #[test]
    fn test_get_error_for_unknown_field() {
        let agent = Agent::default();
        let mut doc = Camt060Document::default();
        let err = copy_model_value_to_document(&agent, &path("Nope"), &mut doc, &path("AcctRptgReq.GrpHdr.MsgId"))
            .unwrap_err();
        assert_eq!(
            err,
            CopyError::Get {
                path: "Nope".to_string(),
                source: AccessError::FieldNotFound("Nope".to_string()),
            }
        );
    }
}
