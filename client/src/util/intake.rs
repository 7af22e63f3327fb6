//! Allow-list screening for files entering the upload panel.
//!
//! DESIGN
//! ======
//! Screening is pure: it works on anything implementing [`FileLike`], so the
//! same rules apply to browser `File` objects (hydrate) and plain
//! [`FileMeta`] values (tests). A batch is one picker selection or one drop;
//! every batch produces at most one rejection alert.

#[cfg(test)]
#[path = "intake_test.rs"]
mod intake_test;

/// Read-only view of a user-selected file.
pub trait FileLike {
    fn file_name(&self) -> String;
    fn file_size(&self) -> u64;
    fn mime_type(&self) -> String;
}

/// Plain file metadata captured at intake time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self { name: name.into(), size, mime: mime.into() }
    }

    /// Snapshot the metadata of any file-like value.
    pub fn of(file: &impl FileLike) -> Self {
        Self { name: file.file_name(), size: file.file_size(), mime: file.mime_type() }
    }
}

impl FileLike for FileMeta {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn file_size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime.clone()
    }
}

/// Accepted extensions and MIME types, plus the phrase used in alerts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AcceptList {
    pub label: String,
    pub extensions: Vec<String>,
    pub mime_types: Vec<String>,
}

impl AcceptList {
    /// PNG and JPEG radiographs.
    pub fn images() -> Self {
        Self {
            label: "PNG or JPEG images".to_owned(),
            extensions: vec![".png".to_owned(), ".jpg".to_owned(), ".jpeg".to_owned()],
            mime_types: vec!["image/png".to_owned(), "image/jpeg".to_owned()],
        }
    }

    /// PDF exports of radiology reports.
    pub fn pdf() -> Self {
        Self {
            label: "PDF files".to_owned(),
            extensions: vec![".pdf".to_owned()],
            mime_types: vec!["application/pdf".to_owned()],
        }
    }

    /// Value for the picker's `accept` attribute, e.g. `.png,.jpg,.jpeg`.
    pub fn accept_attr(&self) -> String {
        self.extensions.join(",")
    }

    /// A file passes when its MIME type or its extension is on the list.
    ///
    /// Both comparisons are case-insensitive. Some platforms report an empty
    /// MIME type for dropped files, so the extension alone is enough.
    pub fn allows(&self, file: &impl FileLike) -> bool {
        let mime = file.mime_type().to_ascii_lowercase();
        if !mime.is_empty() && self.mime_types.iter().any(|m| m.eq_ignore_ascii_case(&mime)) {
            return true;
        }
        extension_of(&file.file_name())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
    }
}

impl Default for AcceptList {
    fn default() -> Self {
        Self::images()
    }
}

/// Result of screening one intake batch.
#[derive(Debug)]
pub struct IntakeOutcome<F> {
    /// Files that passed, in their original order.
    pub accepted: Vec<F>,
    /// Names of files that failed the allow-list.
    pub rejected: Vec<String>,
}

impl<F> IntakeOutcome<F> {
    /// The single alert to show for this batch, if anything was rejected.
    pub fn rejection_alert(&self, accept: &AcceptList) -> Option<String> {
        if self.rejected.is_empty() {
            return None;
        }
        Some(format!(
            "Please upload {} only. Skipped: {}",
            accept.label,
            self.rejected.join(", ")
        ))
    }
}

/// Split a batch into accepted and rejected files.
pub fn screen<F: FileLike>(accept: &AcceptList, candidates: Vec<F>) -> IntakeOutcome<F> {
    let mut accepted = Vec::with_capacity(candidates.len());
    let mut rejected = Vec::new();
    for file in candidates {
        if accept.allows(&file) {
            accepted.push(file);
        } else {
            rejected.push(file.file_name());
        }
    }
    IntakeOutcome { accepted, rejected }
}

/// Lower-cased extension including the dot, e.g. `.jpg`.
fn extension_of(name: &str) -> Option<String> {
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(name[idx..].to_ascii_lowercase())
}
