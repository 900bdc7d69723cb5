//! wire20022
//!
//! Converts ISO 20022 XML messages to version-agnostic models and back, using
//! per-version path maps instead of hand-written field copies.
//!
//! # Architecture
//!
//! 1. **Paths**: dotted expressions with indices (`Rpt[0].Ntry`) address one
//!    value in a document or a model
//! 2. **Path maps**: each schema version maps document paths to model paths;
//!    repeated elements carry an element sub-map
//! 3. **Remapping**: repeated entries expand to concrete indexed paths for the
//!    source at hand
//! 4. **Copying**: one get and one set per concrete mapping, through the
//!    [`Node`] trait implemented by documents and models alike
//! 5. **Registries**: per message type, version to namespace, path map and
//!    document type, checked when built
//!
//! # Example
//!
//! ```no_run
//! use wire20022::messages::{EndpointDetailsReport, Camt052Version};
//! use wire20022::MessageProcessor;
//!
//! fn main() -> wire20022::Result<()> {
//!     let processor = MessageProcessor::<EndpointDetailsReport>::new()?;
//!     let xml = wire20022::xml::read_xml_file("report.xml")?;
//!
//!     let model = processor.message_with(&xml)?;
//!     println!("{} entries", model.entry_details.len());
//!
//!     let document = processor.document_with(&model, Camt052Version::V12)?;
//!     println!("{}", document.to_xml()?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

#[macro_use]
pub mod access;
pub mod error;
pub mod path;
pub mod value;
pub mod documents;
pub mod model;
pub mod table;
pub mod remap;
pub mod copy;
#[macro_use]
pub mod registry;
pub mod processor;
pub mod xml;
pub mod config;
pub mod messages;
pub mod wrapper;
pub mod reader;

// Re-exports
pub use access::{Node, Shape};
pub use config::{Config, XmlConfig};
pub use documents::{Document, DocumentFactory};
pub use error::{Error, ErrorKind, Result};
pub use path::Path;
pub use processor::{MessageKind, MessageProcessor};
pub use reader::{MessageType, ParsedMessage, UniversalReader};
pub use registry::{SchemaVersion, VersionRegistry};
pub use table::PathMap;
pub use value::Value;
pub use wrapper::MessageWrapper;
