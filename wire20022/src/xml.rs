//! XML encoding, namespace sniffing and file helpers

use crate::config::XmlConfig;
use crate::error::{ErrorKind, ParseError};
use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Default namespace of the root element
pub fn namespace_of(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(root)) | Ok(Event::Empty(root)) => {
                for attr in root.attributes() {
                    let attr = attr.map_err(|e| {
                        ParseError::new("namespace lookup", None, ErrorKind::InvalidXml, e)
                    })?;
                    if attr.key.as_ref() == b"xmlns" {
                        let value = attr.unescape_value().map_err(|e| {
                            ParseError::new("namespace lookup", None, ErrorKind::InvalidXml, e)
                        })?;
                        return Ok(value.trim().to_string());
                    }
                }
                break;
            }
            Ok(Event::Eof) => break,
            Ok(_) => continue,
            Err(e) => {
                return Err(ParseError::new("namespace lookup", None, ErrorKind::InvalidXml, e).into())
            }
        }
    }

    Err(ParseError::new(
        "namespace lookup",
        None,
        ErrorKind::MissingNamespace,
        ErrorKind::MissingNamespace,
    )
    .into())
}

/// Decode a document
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T> {
    quick_xml::de::from_str(xml)
        .map_err(|e| ParseError::new("XML decode", None, ErrorKind::InvalidXml, e).into())
}

/// Encode a document
pub fn to_xml<T: Serialize + ?Sized>(value: &T, options: &XmlConfig) -> Result<String> {
    let mut body = String::new();
    value
        .serialize(quick_xml::se::Serializer::new(&mut body))
        .map_err(|e| Error::Serialization(format!("XML serialization failed: {}", e)))?;

    if options.indent {
        body = indent(&body, options.indent_width)?;
    }

    if options.declaration {
        Ok(format!("{}\n{}", DECLARATION, body))
    } else {
        Ok(body)
    }
}

/// Re-indent compact XML, keeping element text on the same line as its tags
fn indent(compact: &str, width: usize) -> Result<String> {
    let mut reader = Reader::from_str(compact);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', width);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| Error::Serialization(format!("XML serialization failed: {}", e)))?,
            Err(e) => return Err(Error::Serialization(format!("XML serialization failed: {}", e))),
        }
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Serialization(format!("XML serialization failed: {}", e)))
}

/// Write XML text to a `.xml` file
///
/// The file is written next to its final name and renamed into place.
pub fn write_xml_to(path: impl AsRef<Path>, xml: &str) -> Result<()> {
    let path = path.as_ref();
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if !ext.eq_ignore_ascii_case("xml") {
        return Err(Error::Other(format!(
            "invalid file extension {:?}, must be .xml",
            ext
        )));
    }

    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = std::path::PathBuf::from(temp);

    std::fs::write(&temp, xml)
        .map_err(|e| Error::from(e).context(format!("failed to write {}", temp.display())))?;
    if let Err(e) = std::fs::rename(&temp, path) {
        let _ = std::fs::remove_file(&temp);
        return Err(Error::from(e).context(format!("failed to write {}", path.display())));
    }

    tracing::info!("Generated ISO 20022 file: {}", path.display());
    Ok(())
}

/// Read XML text from a file
pub fn read_xml_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path)
        .map_err(|e| Error::from(e).context(format!("failed to read {}", path.display())))
}
