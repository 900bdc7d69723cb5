//! Message facade: XML to model and model to document for one message type

use crate::access::{is_blank_at, Node};
use crate::copy::{copy_document_value_to_model, copy_model_value_to_document};
use crate::documents::Document;
use crate::error::{FieldError, ValidationError, ValidationErrors};
use crate::path::Path;
use crate::registry::{SchemaVersion, VersionRegistry};
use crate::remap::{remake_mapping, Direction};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// One supported message type
pub trait MessageKind: Send + Sync + 'static {
    /// Schema version enum of the family
    type Version: SchemaVersion;

    /// Version-agnostic model
    type Model: Node + Default + Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync;

    /// Message type name, e.g. `EndpointDetailsReport`
    const NAME: &'static str;

    /// Model paths that must not be blank, in reporting order
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Build the version table
    fn registry() -> Result<VersionRegistry<Self::Version>>;
}

/// Converts between XML documents and the model of message type `K`
pub struct MessageProcessor<K: MessageKind> {
    registry: VersionRegistry<K::Version>,
}

impl<K: MessageKind> fmt::Debug for MessageProcessor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageProcessor")
            .field("message", &K::NAME)
            .field("registry", &self.registry)
            .finish()
    }
}

impl<K: MessageKind> MessageProcessor<K> {
    /// Build the processor and its checked registry
    pub fn new() -> Result<Self> {
        let registry = K::registry()?;
        Ok(Self { registry })
    }

    /// Version table
    pub fn registry(&self) -> &VersionRegistry<K::Version> {
        &self.registry
    }

    /// Parse XML of any registered version into the model
    pub fn message_with(&self, xml: &str) -> Result<K::Model> {
        let (version, document) = self.registry.parse_document(xml)?;
        let entry = self.registry.entry(version)?;
        let source = document.node();
        let mappings = remake_mapping(&entry.path_map, source, Direction::DocumentToModel)?;

        let mut model = K::Model::default();
        let mut copied = 0usize;
        for mapping in &mappings {
            let done = copy_document_value_to_model(source, &mapping.document, &mut model, &mapping.model)
                .map_err(|e| {
                    tracing::warn!(kind = K::NAME, %version, path = %mapping.document, "copy failed: {}", e);
                    FieldError::new("copy", mapping.document.to_string(), e)
                })?;
            copied += usize::from(done);
        }

        tracing::debug!(kind = K::NAME, %version, mappings = mappings.len(), copied, "message decoded");
        self.check_required_fields(&model)?;
        Ok(model)
    }

    /// Build the document of `version` from the model
    pub fn document_with(&self, model: &K::Model, version: K::Version) -> Result<Box<dyn Document>> {
        self.check_required_fields(model)?;
        let mut document = self.registry.new_document(version)?;
        self.fill_document(model, version, document.as_mut())?;
        Ok(document)
    }

    /// Copy the model into an existing document
    ///
    /// On error, `document` keeps every value copied before the failure.
    pub fn fill_document(
        &self,
        model: &K::Model,
        version: K::Version,
        document: &mut dyn Document,
    ) -> Result<()> {
        let entry = self.registry.entry(version)?;
        let mappings = remake_mapping(&entry.path_map, model, Direction::ModelToDocument)?;

        let target = document.node_mut();
        for mapping in &mappings {
            copy_model_value_to_document(model, &mapping.model, target, &mapping.document).map_err(|e| {
                tracing::warn!(kind = K::NAME, %version, path = %mapping.document, "copy failed: {}", e);
                FieldError::new("copy", mapping.document.to_string(), e)
            })?;
        }

        tracing::debug!(kind = K::NAME, %version, mappings = mappings.len(), "document built");
        Ok(())
    }

    /// Report every blank required field, in declaration order
    pub fn check_required_fields(&self, model: &K::Model) -> Result<()> {
        let mut errors = ValidationErrors::new();
        for field in K::REQUIRED_FIELDS {
            let path = Path::parse(field).map_err(|e| FieldError::new("parse", *field, e))?;
            let blank = is_blank_at(model, &path).map_err(|e| FieldError::new("get", *field, e))?;
            if blank {
                errors.push(ValidationError::required(*field));
            }
        }
        errors.into_result()
    }

    /// Newest registered version
    pub fn latest_version(&self) -> K::Version {
        self.registry.latest().unwrap_or_else(<K::Version as SchemaVersion>::latest)
    }
}
