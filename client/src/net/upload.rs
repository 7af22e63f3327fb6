//! Multipart upload of staged files to the analysis service.
//!
//! Client-side (hydrate): one `POST {base}/upload/` carrying a `FormData`
//! body with one part per file under [`UPLOAD_FIELD`].
//! Server-side (SSR): returns [`ClientError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use super::types::{AnalysisResult, ClientError};
#[cfg(feature = "hydrate")]
use crate::config::UPLOAD_FIELD;
use crate::state::upload::FileId;

/// Upload the staged files identified by `ids` and decode the classification.
///
/// `ids` must be non-empty; callers obtain them from
/// [`UploadState::begin_upload`](crate::state::upload::UploadState::begin_upload),
/// which refuses to start an empty upload.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] when the request fails,
/// [`ClientError::Status`] on a non-OK status, and [`ClientError::Decode`]
/// when the body is not an analysis result.
pub async fn upload_images(endpoint: &str, ids: &[FileId]) -> Result<AnalysisResult, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        let files = crate::util::browser::files_for(ids);
        if files.len() != ids.len() {
            log::warn!("upload: {} of {} staged files are gone", ids.len() - files.len(), ids.len());
        }

        let form = web_sys::FormData::new().map_err(|e| ClientError::Transport(format!("{e:?}")))?;
        for file in &files {
            form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
                .map_err(|e| ClientError::Transport(format!("{e:?}")))?;
        }

        let resp = gloo_net::http::Request::post(endpoint)
            .body(form)
            .map_err(|e| ClientError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        if !resp.ok() {
            log::warn!("upload returned {}", resp.status());
            return Err(ClientError::Status(resp.status()));
        }
        let raw = resp.text().await.map_err(|e| ClientError::Decode(e.to_string()))?;
        super::types::parse_analysis(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, ids);
        Err(ClientError::Unavailable)
    }
}
