//! Upload section: intake, previews, and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the upload round-trip. The state layer decides whether a request may
//! start; the network call runs in `spawn_local` and its outcome is folded
//! back into `UploadState`. Previews still alive when the panel unmounts are
//! revoked in `on_cleanup`.

use leptos::prelude::*;

use crate::components::drop_zone::DropZone;
use crate::components::preview_grid::PreviewGrid;
use crate::config::ClientConfig;
use crate::state::chat::ChatState;
use crate::state::upload::UploadState;
use crate::util::browser;

#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    on_cleanup(move || {
        if let Some(files) = upload.try_update(UploadState::release_all) {
            browser::release(files);
        }
    });

    let on_upload = move |_| {
        let Some(ids) = upload.try_update(UploadState::begin_upload).flatten() else {
            return;
        };
        let cfg = config.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let endpoint = cfg.upload_endpoint();
            log::debug!("uploading {} file(s) to {endpoint}", ids.len());
            let outcome = crate::net::upload::upload_images(&endpoint, &ids).await;
            let succeeded = outcome.is_ok();
            if let Some(message) = upload.try_update(|u| u.finish_upload(outcome)).flatten() {
                browser::alert(message);
            }
            if succeeded && cfg.announce_uploads {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(cfg.announce_delay_ms))).await;
                chat.update(ChatState::announce_upload);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ids, cfg, chat);
        }
    };

    let on_clear = move |_| {
        if let Some(files) = upload.try_update(UploadState::clear) {
            browser::release(files);
        }
    };

    let has_files = move || !upload.get().staged.is_empty();

    view! {
        <section class="upload">
            <h3>"Upload X-ray Images for Analysis"</h3>
            <DropZone/>
            <PreviewGrid/>
            <div class="upload__actions">
                <button class="btn btn--primary upload__submit" on:click=on_upload disabled=move || !upload.get().can_submit()>
                    {move || if upload.get().uploading { "Uploading..." } else { "Upload Files" }}
                </button>
                <Show when=has_files>
                    <button class="btn upload__clear" on:click=on_clear disabled=move || upload.get().uploading>
                        "Clear"
                    </button>
                </Show>
            </div>
        </section>
    }
}
