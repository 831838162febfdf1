use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    routing::post,
    Json, Router,
};
use promptbox_core::{Attachment, SendResponse, Submission};
use tracing::debug;

use super::AppState;
use crate::error::ApiError;

const PROMPT_FIELD: &str = "prompt";
const FILES_FIELD: &str = "files";

pub fn routes() -> Router<AppState> {
    Router::new().route("/send", post(send))
}

async fn send(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SendResponse>, ApiError> {
    let submission = read_submission(multipart?).await?;
    debug!(
        prompt_len = submission.prompt.len(),
        files = submission.attachments.len(),
        gemini_enabled = state.gemini.is_enabled(),
        "received submission"
    );
    Ok(Json(submission.acknowledge()))
}

/// Read the whole multipart body into a [`Submission`].
///
/// The prompt is the first `prompt` part without a filename. Attachments are
/// the `files` parts that carry a filename, in body order. Everything else is
/// skipped.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, ApiError> {
    let mut prompt: Option<String> = None;
    let mut attachments = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        let filename = field.file_name().map(|s| s.to_string());

        match (name.as_str(), filename) {
            (PROMPT_FIELD, None) if prompt.is_none() => {
                let bytes = field.bytes().await?;
                prompt = Some(String::from_utf8_lossy(&bytes).into_owned());
            }
            (FILES_FIELD, Some(filename)) => {
                let data = field.bytes().await?;
                attachments.push(Attachment::new(filename, data));
            }
            _ => {}
        }
    }

    Ok(Submission {
        prompt: prompt.unwrap_or_default(),
        attachments,
    })
}
