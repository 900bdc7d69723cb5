//! Version registries
//!
//! One registry per message type maps each schema version to its namespace,
//! its path map and the factory for its document type. Registries are built
//! once, checked against the document and model types, and read-only after.

use crate::access::Node;
use crate::documents::{Document, DocumentFactory};
use crate::error::{ErrorKind, FieldError, ParseError, ValidationError};
use crate::table::PathMap;
use crate::Result;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::Arc;

/// Namespace prefix shared by every ISO 20022 schema
pub const NAMESPACE_PREFIX: &str = "urn:iso:std:iso:20022:tech:xsd:";

/// Schema version enum of one message family
pub trait SchemaVersion:
    Copy + Eq + Hash + Ord + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static
{
    /// Every version, oldest first
    const ALL: &'static [Self];

    /// Message identifier, e.g. `camt.052.001.08`
    fn as_str(&self) -> &'static str;

    /// Namespace URI of the version
    fn namespace(&self) -> String {
        format!("{}{}", NAMESPACE_PREFIX, self.as_str())
    }

    /// Newest version
    fn latest() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

/// Declare a schema version enum
///
/// Versions render and parse as their message identifier and serialize as a
/// string.
#[macro_export]
macro_rules! schema_versions {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $id:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::registry::SchemaVersion for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $id),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::registry::SchemaVersion::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let id = s.trim();
                let id = id.strip_prefix($crate::registry::NAMESPACE_PREFIX).unwrap_or(id);
                match id {
                    $($id => Ok(Self::$variant),)+
                    _ => Err($crate::error::ValidationError::version(s)),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::registry::SchemaVersion::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let text = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Everything needed to read or write one schema version
#[derive(Debug, Clone)]
pub struct VersionEntry<V> {
    /// Version
    pub version: V,
    /// Namespace URI
    pub namespace: String,
    /// Path map, possibly shared with other versions
    pub path_map: Arc<PathMap>,
    /// Document type factory
    pub factory: DocumentFactory,
}

/// Version table of one message type
#[derive(Debug, Clone)]
pub struct VersionRegistry<V> {
    entries: Vec<VersionEntry<V>>,
}

impl<V: SchemaVersion> VersionRegistry<V> {
    /// Start building a registry
    pub fn builder() -> VersionRegistryBuilder<V> {
        VersionRegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// Entry for a version
    pub fn entry(&self, version: V) -> Result<&VersionEntry<V>> {
        self.entries
            .iter()
            .find(|e| e.version == version)
            .ok_or_else(|| ValidationError::version(version).into())
    }

    /// Version registered for a namespace URI
    pub fn version_for(&self, namespace: &str) -> Result<V> {
        self.entries
            .iter()
            .find(|e| e.namespace == namespace)
            .map(|e| e.version)
            .ok_or_else(|| {
                ParseError::new(
                    "version lookup",
                    Some(namespace.to_string()),
                    ErrorKind::UnsupportedNamespace,
                    ErrorKind::UnsupportedNamespace,
                )
                .into()
            })
    }

    /// Namespace URI of a version
    pub fn namespace(&self, version: V) -> Result<&str> {
        Ok(self.entry(version)?.namespace.as_str())
    }

    /// Path map of a version
    pub fn path_map(&self, version: V) -> Result<&Arc<PathMap>> {
        Ok(&self.entry(version)?.path_map)
    }

    /// Empty document of a version, carrying its namespace
    pub fn new_document(&self, version: V) -> Result<Box<dyn Document>> {
        let entry = self.entry(version)?;
        Ok(entry.factory.create(&entry.namespace))
    }

    /// Sniff the namespace of `xml` and decode it with the matching document type
    pub fn parse_document(&self, xml: &str) -> Result<(V, Box<dyn Document>)> {
        let namespace = crate::xml::namespace_of(xml)?;
        let version = self.version_for(&namespace)?;
        let entry = self.entry(version)?;
        let mut document = entry.factory.parse(xml)?;
        document.set_namespace(&entry.namespace);
        Ok((version, document))
    }

    /// Newest registered version
    pub fn latest(&self) -> Option<V> {
        self.entries.iter().map(|e| e.version).max()
    }

    /// Registered versions, in registration order
    pub fn versions(&self) -> impl Iterator<Item = V> + '_ {
        self.entries.iter().map(|e| e.version)
    }
}

/// Builder for [`VersionRegistry`]
#[derive(Debug)]
pub struct VersionRegistryBuilder<V> {
    entries: Vec<VersionEntry<V>>,
}

impl<V: SchemaVersion> VersionRegistryBuilder<V> {
    /// Register a version with its path map and document type
    pub fn register(mut self, version: V, path_map: Arc<PathMap>, factory: DocumentFactory) -> Self {
        self.entries.push(VersionEntry {
            namespace: version.namespace(),
            version,
            path_map,
            factory,
        });
        self
    }

    /// Check every path map against its document type and the model type `M`
    pub fn build<M: Node + Default>(self) -> Result<VersionRegistry<V>> {
        let model = M::default();
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.version == entry.version) {
                return Err(crate::Error::Config(format!(
                    "version {} registered twice",
                    entry.version
                )));
            }
            let document = entry.factory.create(&entry.namespace);
            entry
                .path_map
                .check(document.node(), &model)
                .map_err(|e: FieldError| {
                    crate::Error::from(e).context(format!("invalid path map for {}", entry.version))
                })?;
        }

        tracing::debug!(versions = self.entries.len(), "version registry built");
        Ok(VersionRegistry {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::camt_060::Camt060Document;
    use crate::model::Agent;

    schema_versions!(
        /// Test versions
        TestVersion {
            /// First
            V05 = "camt.060.001.05",
            /// Second
            V06 = "camt.060.001.06",
        }
    );

    #[derive(Debug, Default)]
    struct Model {
        message_id: String,
        owner: Agent,
    }

    path_node!(Model { "MessageId" => message_id, "Owner" => owner });

    fn map() -> Arc<PathMap> {
        Arc::new(
            PathMap::builder()
                .field("AcctRptgReq.GrpHdr.MsgId", "MessageId")
                .field(
                    "AcctRptgReq.RptgReq[0].AcctOwnr.Agt.FinInstnId.ClrSysMmbId.MmbId",
                    "Owner.PaymentSysMemberId",
                )
                .build()
                .unwrap(),
        )
    }

    fn registry() -> VersionRegistry<TestVersion> {
        let map = map();
        VersionRegistry::builder()
            .register(TestVersion::V05, map.clone(), DocumentFactory::of::<Camt060Document>())
            .register(TestVersion::V06, map, DocumentFactory::of::<Camt060Document>())
            .build::<Model>()
            .unwrap()
    }

    #[test]
    fn test_version_text() {
        assert_eq!(TestVersion::V06.to_string(), "camt.060.001.06");
        assert_eq!("camt.060.001.05".parse::<TestVersion>().unwrap(), TestVersion::V05);
        assert_eq!(
            "urn:iso:std:iso:20022:tech:xsd:camt.060.001.06".parse::<TestVersion>().unwrap(),
            TestVersion::V06
        );
        assert!("camt.060.001.99".parse::<TestVersion>().is_err());
        assert_eq!(TestVersion::latest(), TestVersion::V06);
        assert_eq!(serde_json::to_string(&TestVersion::V05).unwrap(), "\"camt.060.001.05\"");
    }

    #[test]
    fn test_lookup_both_ways() {
        let registry = registry();
        let ns = registry.namespace(TestVersion::V05).unwrap();
        assert_eq!(ns, "urn:iso:std:iso:20022:tech:xsd:camt.060.001.05");
        assert_eq!(registry.version_for(ns).unwrap(), TestVersion::V05);
        assert!(Arc::ptr_eq(
            registry.path_map(TestVersion::V05).unwrap(),
            registry.path_map(TestVersion::V06).unwrap()
        ));
        assert_eq!(registry.latest(), Some(TestVersion::V06));
        assert_eq!(registry.versions().count(), 2);

        let doc = registry.new_document(TestVersion::V06).unwrap();
        assert_eq!(doc.namespace(), "urn:iso:std:iso:20022:tech:xsd:camt.060.001.06");
    }

    #[test]
    fn test_unknown_namespace() {
        let err = registry().version_for("urn:iso:std:iso:20022:tech:xsd:camt.060.001.99").unwrap_err();
        assert!(err.is(ErrorKind::UnsupportedNamespace));
        assert_eq!(
            err.to_string(),
            "version lookup failed for urn:iso:std:iso:20022:tech:xsd:camt.060.001.99: unsupported namespace"
        );
    }

    #[test]
    fn test_misspelled_path_fails_build() {
        let bad = Arc::new(
            PathMap::builder()
                .field("AcctRptgReq.GrpHdr.MsgIdd", "MessageId")
                .build()
                .unwrap(),
        );
        let err = VersionRegistry::builder()
            .register(TestVersion::V05, bad, DocumentFactory::of::<Camt060Document>())
            .build::<Model>()
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid path map for camt.060.001.05: field resolve"));
        assert!(err.is(ErrorKind::FieldNotFound));
    }

    #[test]
    fn test_parse_document() {
        let xml = r#"<Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.06">
  <AcctRptgReq><GrpHdr><MsgId>M1</MsgId></GrpHdr></AcctRptgReq>
</Document>"#;
        let (version, doc) = registry().parse_document(xml).unwrap();
        assert_eq!(version, TestVersion::V06);
        let doc = doc.as_any().downcast_ref::<Camt060Document>().unwrap();
        assert_eq!(doc.acct_rptg_req.grp_hdr.msg_id.as_str(), "M1");
    }
}
