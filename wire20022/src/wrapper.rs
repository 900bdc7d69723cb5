//! JSON-facing wrapper around [`MessageProcessor`]
//!
//! Callers hand in model JSON or XML bytes and get XML text or typed models
//! back, with errors naming the message type.

use crate::config::Config;
use crate::error::{ErrorKind, ParseError};
use crate::processor::{MessageKind, MessageProcessor};
use crate::registry::SchemaVersion;
use crate::{Error, Result};
use std::path::Path;

/// Model/XML conversions for message type `K`
#[derive(Debug)]
pub struct MessageWrapper<K: MessageKind> {
    processor: MessageProcessor<K>,
    config: Config,
}

impl<K: MessageKind> MessageWrapper<K> {
    /// Wrapper with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Wrapper with an explicit configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self {
            processor: MessageProcessor::new()?,
            config,
        })
    }

    /// Underlying processor
    pub fn processor(&self) -> &MessageProcessor<K> {
        &self.processor
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the XML document of `version` from model JSON
    pub fn create_document(&self, json: &[u8], version: K::Version) -> Result<String> {
        let model = self.parse_model(json)?;
        self.render(&model, version)
            .map_err(|e| e.context(format!("failed to create {} document", K::NAME)))
    }

    /// Build the document of `version` from model JSON and validate it
    pub fn validate_document(&self, json: &[u8], version: K::Version) -> Result<()> {
        let model = self.parse_model(json)?;
        self.processor
            .document_with(&model, version)
            .and_then(|document| document.validate())
            .map_err(|e| e.context(format!("failed to validate {} document", K::NAME)))
    }

    /// Report every blank required field of the model JSON
    pub fn check_required_fields(&self, json: &[u8]) -> Result<()> {
        let model = self.parse_model(json)?;
        self.processor.check_required_fields(&model)
    }

    /// Decode XML of any registered version into the model
    pub fn convert_xml_to_model(&self, xml: &[u8]) -> Result<K::Model> {
        std::str::from_utf8(xml)
            .map_err(|e| Error::from(ParseError::new("XML decode", None, ErrorKind::InvalidXml, e)))
            .and_then(|text| self.processor.message_with(text))
            .map_err(|e| e.context(format!("failed to convert XML to {} model", K::NAME)))
    }

    /// Render the model as XML, in the configured or latest version when
    /// `version` is `None`
    pub fn write_xml(&self, model: &K::Model, version: Option<K::Version>) -> Result<String> {
        let version = match version {
            Some(version) => version,
            None => self.default_version()?,
        };
        self.render(model, version)
            .map_err(|e| e.context(format!("failed to create {} document", K::NAME)))
    }

    /// Render the model and write it to a `.xml` file
    pub fn write_xml_file(
        &self,
        path: impl AsRef<Path>,
        model: &K::Model,
        version: Option<K::Version>,
    ) -> Result<()> {
        let xml = self.write_xml(model, version)?;
        crate::xml::write_xml_to(path, &xml)
    }

    /// Output version used when none is given
    pub fn default_version(&self) -> Result<K::Version> {
        match self.config.version_for(K::NAME) {
            Some(text) => text.parse::<K::Version>().map_err(|_| {
                Error::Config(format!("unsupported default version {:?} for {}", text, K::NAME))
            }),
            None => Ok(self.processor.latest_version()),
        }
    }

    fn parse_model(&self, json: &[u8]) -> Result<K::Model> {
        serde_json::from_slice(json).map_err(|e| {
            Error::from(ParseError::new("JSON decode", None, ErrorKind::InvalidJson, e))
                .context(format!("failed to unmarshal JSON to {} MessageModel", K::NAME))
        })
    }

    fn render(&self, model: &K::Model, version: K::Version) -> Result<String> {
        let document = self.processor.document_with(model, version)?;
        if self.config.strict_validation {
            document.validate()?;
        }
        let xml = document.to_xml_with(&self.config.xml)?;
        tracing::debug!(kind = K::NAME, version = version.as_str(), bytes = xml.len(), "document rendered");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::XmlConfig;
    use crate::messages::{AccountReportingRequest, Camt060Version};

    const MODEL: &str = r#"{
        "MessageId": "20250311231981435ABARMMrequest1",
        "CreatedDateTime": "2025-03-11T23:19:00Z",
        "ReportRequestId": "ABAR",
        "RequestedMsgNameId": "camt.052.001.08",
        "AccountOwnerAgent": {
            "PaymentSysCode": "USABA",
            "PaymentSysMemberId": "231981435"
        },
        "ReportingSequence": {
            "FromToSequence": { "FromSeq": "000001", "ToSeq": "000100" }
        }
    }"#;

    fn wrapper() -> MessageWrapper<AccountReportingRequest> {
        MessageWrapper::new().unwrap()
    }

    #[test]
    fn test_create_document() {
        let xml = wrapper().create_document(MODEL.as_bytes(), Camt060Version::V05).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:camt.060.001.05"));
        assert!(xml.contains("<MsgId>20250311231981435ABARMMrequest1</MsgId>"));
        assert!(xml.contains("<FrSeq>000001</FrSeq>"));
    }

    #[test]
    fn test_bad_json_names_the_message() {
        let err = wrapper().create_document(b"{not json", Camt060Version::V05).unwrap_err();
        assert!(err.is(ErrorKind::InvalidJson));
        assert!(err
            .to_string()
            .starts_with("failed to unmarshal JSON to AccountReportingRequest MessageModel: JSON decode failed"));
    }

    #[test]
    fn test_required_fields_from_json() {
        let err = wrapper()
            .check_required_fields(br#"{"MessageId": "M1"}"#)
            .unwrap_err();
        assert!(err.is(ErrorKind::RequiredField));
        assert!(err.to_string().contains("validation failed for field \"CreatedDateTime\""));

        wrapper().check_required_fields(MODEL.as_bytes()).unwrap();
        wrapper().validate_document(MODEL.as_bytes(), Camt060Version::V07).unwrap();
    }

    #[test]
    fn test_convert_xml_to_model() {
        let wrapper = wrapper();
        let xml = wrapper.create_document(MODEL.as_bytes(), Camt060Version::V07).unwrap();
        let model = wrapper.convert_xml_to_model(xml.as_bytes()).unwrap();
        assert_eq!(model.message_id, "20250311231981435ABARMMrequest1");

        let err = wrapper.convert_xml_to_model(b"<Document/>").unwrap_err();
        assert!(err.is(ErrorKind::MissingNamespace));
        assert!(err
            .to_string()
            .starts_with("failed to convert XML to AccountReportingRequest model: "));
    }

    #[test]
    fn test_write_xml_defaults() {
        let wrapper = wrapper();
        let model = serde_json::from_str(MODEL).unwrap();
        let xml = wrapper.write_xml(&model, None).unwrap();
        assert!(xml.contains("camt.060.001.07"));

        let mut config = Config {
            xml: XmlConfig {
                indent: false,
                ..Default::default()
            },
            ..Default::default()
        };
        config
            .versions
            .insert("AccountReportingRequest".to_string(), "camt.060.001.03".to_string());
        let wrapper = MessageWrapper::<AccountReportingRequest>::with_config(config).unwrap();
        assert_eq!(wrapper.default_version().unwrap(), Camt060Version::V03);

        let xml = wrapper.write_xml(&model, None).unwrap();
        assert!(xml.contains("camt.060.001.03"));
        assert!(!xml.contains("RptgSeq"));
        assert!(!xml.contains("\n  <"));
    }

    #[test]
    fn test_bad_configured_version() {
        let mut config = Config::default();
        config
            .versions
            .insert("AccountReportingRequest".to_string(), "camt.060.001.99".to_string());
        let wrapper = MessageWrapper::<AccountReportingRequest>::with_config(config).unwrap();
        let err = wrapper.default_version().unwrap_err();
        assert!(err.to_string().contains("camt.060.001.99"));
    }

    #[test]
    fn test_write_xml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.xml");
        let model = serde_json::from_str(MODEL).unwrap();

        wrapper().write_xml_file(&path, &model, Some(Camt060Version::V06)).unwrap();
        let xml = crate::xml::read_xml_file(&path).unwrap();
        assert!(xml.contains("camt.060.001.06"));
    }
}
