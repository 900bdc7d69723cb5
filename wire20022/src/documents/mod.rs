//! ISO 20022 document types
//!
//! One module per message family. Each document type mirrors the element tree
//! of one or more schema versions and derives its XML form through serde:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <Document xmlns="urn:iso:std:iso:20022:tech:xsd:camt.060.001.05">
//!   <AcctRptgReq>
//!     <GrpHdr>
//!       <MsgId>20250311231981435ABARMMrequest1</MsgId>
//!       <CreDtTm>2025-03-11T23:19:00Z</CreDtTm>
//!     </GrpHdr>
//!     <RptgReq>...</RptgReq>
//!   </AcctRptgReq>
//! </Document>
//! ```
//!
//! Constrained text types reject out-of-range values when assigned through a
//! path. Deserialized documents are checked in full by [`Document::validate`].

use crate::access::Node;
use crate::error::{AccessError, ValidationErrors};
use crate::Result;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::fmt;

/// Collect constraint violations under an element path
pub trait Validate {
    /// Append every violation found below `path` to `errors`
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors);
}

impl<T: Validate> Validate for Option<T> {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        if let Some(inner) = self {
            inner.validate_into(path, errors);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        for (i, element) in self.iter().enumerate() {
            element.validate_into(&format!("{path}[{i}]"), errors);
        }
    }
}

macro_rules! unconstrained {
    ($($ty:ty),+) => {$(
        impl Validate for $ty {
            fn validate_into(&self, _path: &str, _errors: &mut ValidationErrors) {}
        }
    )+};
}

unconstrained!(String, bool, Decimal);

/// Element path of a child
pub fn child_path(parent: &str, tag: &str) -> String {
    if parent.is_empty() {
        tag.to_string()
    } else {
        format!("{parent}.{tag}")
    }
}

/// Character-length check shared by every constrained text type
pub fn check_length(value: &str, min: usize, max: usize) -> std::result::Result<(), AccessError> {
    let len = value.chars().count();
    if len > max {
        return Err(AccessError::MaxLength {
            value: value.to_string(),
            len,
            max,
        });
    }
    if len < min {
        return Err(AccessError::MinLength {
            value: value.to_string(),
            len,
            min,
        });
    }
    Ok(())
}

/// Composite schema element: path access plus recursive validation
macro_rules! schema_element {
    (impl<$gen:ident : $bound:path> $ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        $crate::path_node!(impl<$gen: $bound> $ty { $($tag => $field),* });

        impl<$gen: $bound> $crate::documents::Validate for $ty {
            fn validate_into(&self, path: &str, errors: &mut $crate::error::ValidationErrors) {
                $(
                    $crate::documents::Validate::validate_into(
                        &self.$field,
                        &$crate::documents::child_path(path, $tag),
                        errors,
                    );
                )*
            }
        }
    };
    ($ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        $crate::path_node!($ty { $($tag => $field),* });

        impl $crate::documents::Validate for $ty {
            fn validate_into(&self, path: &str, errors: &mut $crate::error::ValidationErrors) {
                $(
                    $crate::documents::Validate::validate_into(
                        &self.$field,
                        &$crate::documents::child_path(path, $tag),
                        errors,
                    );
                )*
            }
        }
    };
}

/// Length-constrained text element, optionally with a pattern check
macro_rules! text_type {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr $(, pattern = $pattern:literal => $check:path)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create, rejecting text outside the length bounds
            pub fn new(value: impl Into<String>) -> std::result::Result<Self, $crate::error::AccessError> {
                let value = value.into();
                $crate::documents::check_length(&value, $min, $max)?;
                Ok(Self(value))
            }

            /// Text value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::value::Leaf for $name {
            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Text(self.0.clone())
            }

            fn from_value(value: $crate::value::Value) -> std::result::Result<Self, $crate::error::AccessError> {
                Self::new(value.into_text())
            }

            fn is_zero(&self) -> bool {
                self.0.is_empty()
            }
        }

        $crate::leaf_node!($name);

        impl $crate::documents::Validate for $name {
            fn validate_into(&self, path: &str, errors: &mut $crate::error::ValidationErrors) {
                if let Err(e) = $crate::documents::check_length(&self.0, $min, $max) {
                    errors.push($crate::error::ValidationError::invalid(path, e.to_string()));
                }
                $(
                    else if !$check(&self.0) {
                        errors.push($crate::error::ValidationError::invalid(
                            path,
                            format!("{} fails validation with pattern {}", self.0, $pattern),
                        ));
                    }
                )?
            }
        }
    };
}

/// Code-list element. Any text is accepted on assignment; membership is
/// checked by validation.
macro_rules! code_type {
    ($(#[$meta:meta])* $name:ident [$($code:literal),+ $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Codes in the list
            pub const CODES: &'static [&'static str] = &[$($code),+];

            /// Text value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::value::Leaf for $name {
            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::Text(self.0.clone())
            }

            fn from_value(value: $crate::value::Value) -> std::result::Result<Self, $crate::error::AccessError> {
                Ok(Self(value.into_text()))
            }

            fn is_zero(&self) -> bool {
                self.0.is_empty()
            }
        }

        $crate::leaf_node!($name);

        impl $crate::documents::Validate for $name {
            fn validate_into(&self, path: &str, errors: &mut $crate::error::ValidationErrors) {
                if !Self::CODES.contains(&self.0.as_str()) {
                    errors.push($crate::error::ValidationError::invalid(
                        path,
                        format!("{} is not a valid {}", self.0, stringify!($name)),
                    ));
                }
            }
        }
    };
}

/// Root `Document` element of one schema family
macro_rules! iso_document {
    (@methods) => {
        fn namespace(&self) -> &str {
            &self.xmlns
        }

        fn set_namespace(&mut self, namespace: &str) {
            self.xmlns = namespace.to_string();
        }

        fn validate(&self) -> $crate::Result<()> {
            let mut errors = $crate::error::ValidationErrors::new();
            $crate::documents::Validate::validate_into(self, "", &mut errors);
            errors.into_result()
        }

        fn to_xml_with(&self, options: &$crate::config::XmlConfig) -> $crate::Result<String> {
            $crate::xml::to_xml(self, options)
        }

        fn node(&self) -> &dyn $crate::access::Node {
            self
        }

        fn node_mut(&mut self) -> &mut dyn $crate::access::Node {
            self
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    };
    (impl<$gen:ident : $bound:path> $ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        schema_element!(impl<$gen: $bound> $ty { $($tag => $field),* });

        impl<$gen: $bound> $crate::documents::Document for $ty {
            iso_document!(@methods);
        }
    };
    ($ty:ty { $($tag:literal => $field:ident),* $(,)? }) => {
        schema_element!($ty { $($tag => $field),* });

        impl $crate::documents::Document for $ty {
            iso_document!(@methods);
        }
    };
}

pub mod camt_052;
pub mod camt_056;
pub mod camt_060;
pub mod types;

/// Typed ISO 20022 document
pub trait Document: fmt::Debug + Send + Sync {
    /// Default namespace of the root element
    fn namespace(&self) -> &str;

    /// Overwrite the root namespace
    fn set_namespace(&mut self, namespace: &str);

    /// Check every length, pattern and code-list constraint
    fn validate(&self) -> Result<()>;

    /// Serialize with explicit output options
    fn to_xml_with(&self, options: &crate::config::XmlConfig) -> Result<String>;

    /// Serialize with a declaration and two-space indentation
    fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&crate::config::XmlConfig::default())
    }

    /// Path access to the element tree
    fn node(&self) -> &dyn Node;

    /// Mutable path access to the element tree
    fn node_mut(&mut self) -> &mut dyn Node;

    /// Downcast support
    fn as_any(&self) -> &dyn Any;
}

/// Creates and parses the document type of one schema version
#[derive(Clone, Copy)]
pub struct DocumentFactory {
    create: fn(&str) -> Box<dyn Document>,
    parse: fn(&str) -> Result<Box<dyn Document>>,
}

impl DocumentFactory {
    /// Factory for document type `D`
    pub fn of<D>() -> Self
    where
        D: Document + Default + DeserializeOwned + 'static,
    {
        Self {
            create: create_document::<D>,
            parse: parse_document::<D>,
        }
    }

    /// Empty document carrying `namespace`
    pub fn create(&self, namespace: &str) -> Box<dyn Document> {
        (self.create)(namespace)
    }

    /// Decode XML into the document type
    pub fn parse(&self, xml: &str) -> Result<Box<dyn Document>> {
        (self.parse)(xml)
    }
}

impl fmt::Debug for DocumentFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentFactory").finish_non_exhaustive()
    }
}

fn create_document<D>(namespace: &str) -> Box<dyn Document>
where
    D: Document + Default + 'static,
{
    let mut document = D::default();
    document.set_namespace(namespace);
    Box::new(document)
}

fn parse_document<D>(xml: &str) -> Result<Box<dyn Document>>
where
    D: Document + DeserializeOwned + 'static,
{
    let document: D = crate::xml::from_xml(xml)?;
    Ok(Box::new(document))
}

