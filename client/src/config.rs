//! Client configuration: endpoints, accepted file types, and timings.
//!
//! The browser build has no environment to read from, so every value is a
//! compiled-in default. `App` provides one [`ClientConfig`] through context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::upload::StagingMode;
use crate::util::intake::AcceptList;

pub const DEFAULT_UPLOAD_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_GENERATE_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "gemma:2b";
/// Empty base resolves `/gemini/` against the page origin.
pub const DEFAULT_BACKEND_BASE_URL: &str = "";

/// Multipart field carrying each staged file.
pub const UPLOAD_FIELD: &str = "images";

pub const SKELETON_MODEL_EMBED_URL: &str = "https://sketchfab.com/models/337822a2d4bb43358c653dcf425e28ec/embed?autostart=0&transparent=1&ui_infos=0&ui_start=0&scrollwheel=1";

pub const DEFAULT_SIMULATED_DELAY_MS: u32 = 1200;
pub const DEFAULT_ANNOUNCE_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub upload_base_url: String,
    pub generate_url: String,
    pub model: String,
    pub backend_base_url: String,
    pub accept: AcceptList,
    pub staging_mode: StagingMode,
    /// Open the chat and post a bot notice after each successful upload.
    pub announce_uploads: bool,
    pub announce_delay_ms: u32,
    pub simulated_delay_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            upload_base_url: DEFAULT_UPLOAD_BASE_URL.to_owned(),
            generate_url: DEFAULT_GENERATE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_owned(),
            accept: AcceptList::images(),
            staging_mode: StagingMode::Accumulate,
            announce_uploads: true,
            announce_delay_ms: DEFAULT_ANNOUNCE_DELAY_MS,
            simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

impl ClientConfig {
    /// `{upload_base_url}/upload/`
    pub fn upload_endpoint(&self) -> String {
        join_endpoint(&self.upload_base_url, "upload/")
    }

    /// `{backend_base_url}/gemini/`
    pub fn proxy_endpoint(&self) -> String {
        join_endpoint(&self.backend_base_url, "gemini/")
    }
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}
