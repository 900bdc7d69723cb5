//! Reads any supported message without knowing its type up front
//!
//! The message type and version come from the root element's default
//! namespace; the body is then decoded by that type's processor.

use crate::error::{ErrorKind, ParseError};
use crate::messages::{
    account_reporting_request, endpoint_details_report, return_request, AccountReportingRequest,
    Camt052Version, Camt056Version, Camt060Version, EndpointDetailsReport, ReturnRequest,
};
use crate::processor::MessageProcessor;
use crate::registry::SchemaVersion;
use crate::Result;
use serde::Serialize;
use std::fmt;

/// Supported message types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageType {
    /// camt.060
    AccountReportingRequest,
    /// camt.052
    EndpointDetailsReport,
    /// camt.056
    ReturnRequest,
}

impl MessageType {
    /// Every supported type
    pub const ALL: &'static [MessageType] = &[
        MessageType::AccountReportingRequest,
        MessageType::EndpointDetailsReport,
        MessageType::ReturnRequest,
    ];

    /// Type name
    pub fn name(&self) -> &'static str {
        match self {
            MessageType::AccountReportingRequest => "AccountReportingRequest",
            MessageType::EndpointDetailsReport => "EndpointDetailsReport",
            MessageType::ReturnRequest => "ReturnRequest",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of namespace detection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Detection {
    /// Detected type
    pub message_type: MessageType,
    /// Root namespace
    pub namespace: String,
    /// Message identifier, e.g. `camt.052.001.08`
    pub version: &'static str,
}

/// A decoded message of any supported type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "MessageType")]
pub enum ParsedMessage {
    /// camt.060
    AccountReportingRequest {
        /// Schema version
        #[serde(rename = "Version")]
        version: Camt060Version,
        /// Decoded model
        #[serde(rename = "Message")]
        model: account_reporting_request::MessageModel,
    },
    /// camt.052
    EndpointDetailsReport {
        /// Schema version
        #[serde(rename = "Version")]
        version: Camt052Version,
        /// Decoded model
        #[serde(rename = "Message")]
        model: endpoint_details_report::MessageModel,
    },
    /// camt.056
    ReturnRequest {
        /// Schema version
        #[serde(rename = "Version")]
        version: Camt056Version,
        /// Decoded model
        #[serde(rename = "Message")]
        model: return_request::MessageModel,
    },
}

impl ParsedMessage {
    /// Message type
    pub fn message_type(&self) -> MessageType {
        match self {
            ParsedMessage::AccountReportingRequest { .. } => MessageType::AccountReportingRequest,
            ParsedMessage::EndpointDetailsReport { .. } => MessageType::EndpointDetailsReport,
            ParsedMessage::ReturnRequest { .. } => MessageType::ReturnRequest,
        }
    }

    /// Message identifier of the schema version
    pub fn version(&self) -> &'static str {
        match self {
            ParsedMessage::AccountReportingRequest { version, .. } => version.as_str(),
            ParsedMessage::EndpointDetailsReport { version, .. } => version.as_str(),
            ParsedMessage::ReturnRequest { version, .. } => version.as_str(),
        }
    }
}

/// Dispatches XML to the processor registered for its namespace
#[derive(Debug)]
pub struct UniversalReader {
    account_reporting_request: MessageProcessor<AccountReportingRequest>,
    endpoint_details_report: MessageProcessor<EndpointDetailsReport>,
    return_request: MessageProcessor<ReturnRequest>,
}

impl UniversalReader {
    /// Build every processor
    pub fn new() -> Result<Self> {
        Ok(Self {
            account_reporting_request: MessageProcessor::new()?,
            endpoint_details_report: MessageProcessor::new()?,
            return_request: MessageProcessor::new()?,
        })
    }

    /// Message type and version of `xml`, from its root namespace
    pub fn detect(&self, xml: &str) -> Result<Detection> {
        let namespace = crate::xml::namespace_of(xml)?;

        let found = if let Ok(v) = self.account_reporting_request.registry().version_for(&namespace) {
            Some((MessageType::AccountReportingRequest, v.as_str()))
        } else if let Ok(v) = self.endpoint_details_report.registry().version_for(&namespace) {
            Some((MessageType::EndpointDetailsReport, v.as_str()))
        } else if let Ok(v) = self.return_request.registry().version_for(&namespace) {
            Some((MessageType::ReturnRequest, v.as_str()))
        } else {
            None
        };

        match found {
            Some((message_type, version)) => {
                tracing::debug!(%message_type, version, "message type detected");
                Ok(Detection {
                    message_type,
                    namespace,
                    version,
                })
            }
            None => Err(ParseError::new(
                "message type detection",
                Some(namespace),
                ErrorKind::UnsupportedNamespace,
                ErrorKind::UnsupportedNamespace,
            )
            .into()),
        }
    }

    /// Detect and decode `xml`
    pub fn read(&self, xml: &str) -> Result<ParsedMessage> {
        let detection = self.detect(xml)?;
        let parsed = match detection.message_type {
            MessageType::AccountReportingRequest => ParsedMessage::AccountReportingRequest {
                version: detection.version.parse()?,
                model: self.account_reporting_request.message_with(xml)?,
            },
            MessageType::EndpointDetailsReport => ParsedMessage::EndpointDetailsReport {
                version: detection.version.parse()?,
                model: self.endpoint_details_report.message_with(xml)?,
            },
            MessageType::ReturnRequest => ParsedMessage::ReturnRequest {
                version: detection.version.parse()?,
                model: self.return_request.message_with(xml)?,
            },
        };
        Ok(parsed)
    }

    /// Report every blank required field of a parsed message
    pub fn validate_message(&self, message: &ParsedMessage) -> Result<()> {
        match message {
            ParsedMessage::AccountReportingRequest { model, .. } => {
                self.account_reporting_request.check_required_fields(model)
            }
            ParsedMessage::EndpointDetailsReport { model, .. } => {
                self.endpoint_details_report.check_required_fields(model)
            }
            ParsedMessage::ReturnRequest { model, .. } => self.return_request.check_required_fields(model),
        }
    }
}
