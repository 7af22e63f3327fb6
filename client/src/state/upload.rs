//! Upload panel state: staged files, their previews, and the latest result.
//!
//! DESIGN
//! ======
//! Browser resources (the `File` objects and their object URLs) live outside
//! this struct. Every operation that drops a staged file hands the dropped
//! [`StagedFile`] back to the caller, which revokes its preview. That keeps
//! one preview per staged file without this module touching the DOM.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::types::{AnalysisResult, ClientError};
use crate::util::intake::{self, AcceptList, FileLike, FileMeta};

/// Alert shown for any failed upload, whatever the cause.
pub const UPLOAD_FAILED_ALERT: &str = "Error uploading files";

pub type FileId = u64;

/// Revocable object URL used to render a staged file's thumbnail.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle(String);

impl PreviewHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-file progress shown next to each staged file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FileStatus {
    #[default]
    Pending,
    Uploading,
    Done,
    Failed,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Uploading => "Uploading...",
            Self::Done => "Success",
            Self::Failed => "Failed",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Uploading => "uploading",
            Self::Done => "success",
            Self::Failed => "failed",
        }
    }
}

/// Whether a new batch adds to or replaces the staged files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StagingMode {
    #[default]
    Accumulate,
    Replace,
}

/// Drag events on the drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// `dragenter`/`dragover` highlight the zone; `dragleave`/`drop` clear it.
    pub fn highlights(self) -> bool {
        matches!(self, Self::Enter | Self::Over)
    }
}

/// A file accepted by intake, paired with its freshly created preview.
#[derive(Clone, Debug)]
pub struct IncomingFile {
    pub meta: FileMeta,
    pub preview: PreviewHandle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedFile {
    pub id: FileId,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub preview: PreviewHandle,
    pub status: FileStatus,
}

/// What a [`UploadState::stage`] call changed.
#[derive(Debug, Default)]
pub struct StageReport {
    /// Ids assigned to the incoming files, in the same order.
    pub added: Vec<FileId>,
    /// Files pushed out by [`StagingMode::Replace`]; their previews must be revoked.
    pub evicted: Vec<StagedFile>,
}

/// What one intake batch (picker selection or drop) did to the state.
#[derive(Debug)]
pub struct IntakeBatch<F> {
    /// Rejection alert for the batch; at most one per batch.
    pub alert: Option<String>,
    /// Staged files with their new ids, in arrival order.
    pub staged: Vec<(FileId, F)>,
    /// Files pushed out by [`StagingMode::Replace`]; their previews must be revoked.
    pub evicted: Vec<StagedFile>,
}

/// State for the upload panel and result card.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub staged: Vec<StagedFile>,
    pub result: Option<AnalysisResult>,
    pub uploading: bool,
    pub drag_active: bool,
    next_id: FileId,
}

impl UploadState {
    /// Whether a batch in `mode` may be staged now. A replacing batch would
    /// evict the files of a running upload, so it waits.
    pub fn can_stage(&self, mode: StagingMode) -> bool {
        !(self.uploading && mode == StagingMode::Replace)
    }

    /// Stage accepted files. Ids are assigned in arrival order.
    ///
    /// A [`StagingMode::Replace`] batch while uploading is refused: nothing
    /// is staged or evicted and the report is empty.
    pub fn stage(&mut self, incoming: Vec<IncomingFile>, mode: StagingMode) -> StageReport {
        if !self.can_stage(mode) {
            return StageReport::default();
        }
        let evicted = match mode {
            StagingMode::Accumulate => Vec::new(),
            StagingMode::Replace => std::mem::take(&mut self.staged),
        };

        let mut added = Vec::with_capacity(incoming.len());
        for file in incoming {
            self.next_id += 1;
            let id = self.next_id;
            self.staged.push(StagedFile {
                id,
                name: file.meta.name,
                size: file.meta.size,
                mime: file.meta.mime,
                preview: file.preview,
                status: FileStatus::Pending,
            });
            added.push(id);
        }

        StageReport { added, evicted }
    }

    /// Screen one intake batch and stage what passes.
    ///
    /// `make_preview` runs once per accepted file and only when the batch
    /// can be staged; files whose preview fails are skipped. A batch with
    /// nothing left to stage leaves the staged set untouched, even in
    /// [`StagingMode::Replace`].
    pub fn intake<F: FileLike>(
        &mut self,
        accept: &AcceptList,
        mode: StagingMode,
        candidates: Vec<F>,
        mut make_preview: impl FnMut(&F) -> Option<PreviewHandle>,
    ) -> IntakeBatch<F> {
        let outcome = intake::screen(accept, candidates);
        let mut batch = IntakeBatch { alert: outcome.rejection_alert(accept), staged: Vec::new(), evicted: Vec::new() };
        if outcome.accepted.is_empty() || !self.can_stage(mode) {
            return batch;
        }

        let mut incoming = Vec::with_capacity(outcome.accepted.len());
        let mut files = Vec::with_capacity(outcome.accepted.len());
        for file in outcome.accepted {
            if let Some(preview) = make_preview(&file) {
                incoming.push(IncomingFile { meta: FileMeta::of(&file), preview });
                files.push(file);
            }
        }
        if incoming.is_empty() {
            return batch;
        }

        let report = self.stage(incoming, mode);
        batch.staged = report.added.into_iter().zip(files).collect();
        batch.evicted = report.evicted;
        batch
    }

    /// Drop one staged file. Refused while an upload is in flight.
    pub fn remove(&mut self, id: FileId) -> Option<StagedFile> {
        if self.uploading {
            return None;
        }
        let idx = self.staged.iter().position(|f| f.id == id)?;
        Some(self.staged.remove(idx))
    }

    /// Drop every staged file. Refused while an upload is in flight.
    pub fn clear(&mut self) -> Vec<StagedFile> {
        if self.uploading {
            return Vec::new();
        }
        std::mem::take(&mut self.staged)
    }

    /// Drop every staged file unconditionally (component unmount).
    pub fn release_all(&mut self) -> Vec<StagedFile> {
        self.uploading = false;
        std::mem::take(&mut self.staged)
    }

    pub fn previews(&self) -> Vec<&PreviewHandle> {
        self.staged.iter().map(|f| &f.preview).collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.staged.is_empty() && !self.uploading
    }

    /// Start an upload of everything staged.
    ///
    /// Returns the ids to send, or `None` when nothing is staged or an
    /// upload is already running. `None` means no request may be issued.
    pub fn begin_upload(&mut self) -> Option<Vec<FileId>> {
        if !self.can_submit() {
            return None;
        }
        self.uploading = true;
        for file in &mut self.staged {
            file.status = FileStatus::Uploading;
        }
        Some(self.staged.iter().map(|f| f.id).collect())
    }

    /// Settle the running upload.
    ///
    /// Success replaces the displayed result. Failure leaves any prior
    /// result untouched and returns the alert to show.
    pub fn finish_upload(&mut self, outcome: Result<AnalysisResult, ClientError>) -> Option<&'static str> {
        self.uploading = false;
        let (status, alert) = match outcome {
            Ok(result) => {
                self.result = Some(result);
                (FileStatus::Done, None)
            }
            Err(_) => (FileStatus::Failed, Some(UPLOAD_FAILED_ALERT)),
        };
        for file in &mut self.staged {
            if file.status == FileStatus::Uploading {
                file.status = status;
            }
        }
        alert
    }

    pub fn on_drag(&mut self, phase: DragPhase) {
        self.drag_active = phase.highlights();
    }
}
