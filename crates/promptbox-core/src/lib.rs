pub mod decode;
pub mod submission;

pub use decode::decode_lossy;
pub use submission::{Attachment, SendResponse, Submission, GEMINI_STUB_MESSAGE};
