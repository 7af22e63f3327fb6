//! Browser resources behind the upload panel.
//!
//! Holds the selected `File` objects keyed by staged-file id, creates and
//! revokes the object URLs used as previews, and shows blocking alerts.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! `web_sys::File` is not `Send`, so it cannot live inside a signal. Files
//! are kept in a thread-local registry instead (WASM is single-threaded) and
//! state refers to them by id. SSR and native test paths no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::collections::HashMap;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::upload::{FileId, PreviewHandle, StagingMode, UploadState};
use crate::state::upload::StagedFile;
#[cfg(feature = "hydrate")]
use crate::util::intake::{AcceptList, FileLike};

#[cfg(feature = "hydrate")]
thread_local! {
    static FILES: RefCell<HashMap<FileId, web_sys::File>> = RefCell::new(HashMap::new());
}

#[cfg(feature = "hydrate")]
impl FileLike for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn file_size(&self) -> u64 {
        self.size() as u64
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Revoke the previews of files that left the staged set and drop their
/// `File` objects.
pub fn release(files: Vec<StagedFile>) {
    #[cfg(feature = "hydrate")]
    {
        FILES.with(|registry| {
            let mut registry = registry.borrow_mut();
            for file in &files {
                let _ = web_sys::Url::revoke_object_url(file.preview.as_str());
                registry.remove(&file.id);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = files;
    }
}

/// The registered `File` objects for `ids`, in the same order. Unknown ids
/// are skipped.
#[cfg(feature = "hydrate")]
pub fn files_for(ids: &[FileId]) -> Vec<web_sys::File> {
    FILES.with(|registry| {
        let registry = registry.borrow();
        ids.iter().filter_map(|id| registry.get(id).cloned()).collect()
    })
}

/// Screen a picker selection or drop, stage what passes, and register the
/// accepted `File` objects. Previews are created only for files that are
/// actually staged.
#[cfg(feature = "hydrate")]
pub fn stage_file_list(upload: RwSignal<UploadState>, accept: &AcceptList, mode: StagingMode, list: &web_sys::FileList) {
    let candidates: Vec<web_sys::File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    let Some(batch) = upload.try_update(|u| {
        u.intake(accept, mode, candidates, |file| match web_sys::Url::create_object_url_with_blob(file) {
            Ok(url) => Some(PreviewHandle::new(url)),
            Err(e) => {
                log::warn!("preview for {} failed: {e:?}", file.name());
                None
            }
        })
    }) else {
        return;
    };

    if let Some(message) = &batch.alert {
        log::info!("intake rejected file(s): {message}");
        alert(message);
    }

    FILES.with(|registry| {
        let mut registry = registry.borrow_mut();
        for (id, file) in batch.staged {
            registry.insert(id, file);
        }
    });
    release(batch.evicted);
}
