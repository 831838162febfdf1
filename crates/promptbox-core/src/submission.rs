use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;

use crate::decode::decode_lossy;

/// Fixed message returned with every acknowledgment. No request is actually
/// forwarded anywhere.
pub const GEMINI_STUB_MESSAGE: &str = "Request would be sent to Gemini API here.";

/// One uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub data: Bytes,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// The typed contents of a `/send` form: missing prompt is `""`, missing
/// files is an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub prompt: String,
    /// In the order the parts were received.
    pub attachments: Vec<Attachment>,
}

impl Submission {
    /// Build the acknowledgment payload. Attachments are decoded in received
    /// order, so when two share a filename the later one wins.
    pub fn acknowledge(self) -> SendResponse {
        let mut files = BTreeMap::new();
        for attachment in self.attachments {
            files.insert(attachment.filename, decode_lossy(&attachment.data));
        }
        SendResponse {
            prompt: self.prompt,
            files,
            message: GEMINI_STUB_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResponse {
    pub prompt: String,
    pub files: BTreeMap<String, String>,
    pub message: String,
}
