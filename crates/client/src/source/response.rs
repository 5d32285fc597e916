//! GitHub contents API response types and decoding.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;

use super::RemoteError;

/// One entry of a directory listing from the contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl ContentEntry {
    /// Whether the entry is a file. Entries without a type are treated as files.
    pub fn is_file(&self) -> bool {
        matches!(self.kind.as_deref(), None | Some("file"))
    }
}

/// A single file from the contents API.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFile {
    /// File body in the transport encoding, usually base64 wrapped at 60 columns.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl ContentFile {
    /// Decode the body to text.
    ///
    /// Line breaks inside the base64 payload are ignored. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn decode(&self) -> Result<String, RemoteError> {
        match self.encoding.as_deref() {
            None | Some("base64") => {}
            Some(other) => return Err(RemoteError::Decode(format!("unsupported encoding: {other}"))),
        }

        let compact: String = self.content.split_ascii_whitespace().collect();
        let bytes = STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
