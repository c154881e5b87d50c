//! Minimal PDF object model.
//!
//! A [`PdfObject`] is a numbered dictionary with an optional stream. The
//! dictionary preserves insertion order so serialization is deterministic:
//! the same object always produces the same bytes, which the offset
//! bookkeeping in the writer depends on.

/// A single numbered PDF object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfObject {
    pub id: u32,
    entries: Vec<(String, String)>,
    stream: Option<Vec<u8>>,
}

impl PdfObject {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            entries: Vec::new(),
            stream: None,
        }
    }

    /// Append a dictionary entry. Keys render as PDF names (`/Key value`)
    /// in insertion order.
    pub fn entry(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Attach a stream. The caller is responsible for also setting the
    /// `/Length` entry to the stream's byte count.
    pub fn stream(mut self, bytes: Vec<u8>) -> Self {
        self.stream = Some(bytes);
        self
    }

    /// An indirect reference token for the given object id.
    pub fn reference(id: u32) -> String {
        format!("{} 0 R", id)
    }

    /// Serialize to the exact bytes that appear in the output file:
    /// `<id> 0 obj`, the dictionary, the optional stream block, `endobj`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(format!("{} 0 obj\n", self.id).as_bytes());
        out.extend_from_slice(b"<<");
        for (key, value) in &self.entries {
            out.extend_from_slice(format!(" /{} {}", key, value).as_bytes());
        }
        out.extend_from_slice(b" >>\n");
        if let Some(stream) = &self.stream {
            out.extend_from_slice(b"stream\n");
            out.extend_from_slice(stream);
            out.extend_from_slice(b"\nendstream\n");
        }
        out.extend_from_slice(b"endobj\n");
        out
    }
}
