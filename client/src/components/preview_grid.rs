//! Thumbnails of the staged files with size, status, and a remove control.

use leptos::prelude::*;

use crate::state::upload::{FileId, UploadState};
use crate::util::browser;
use crate::util::format::file_size_kb;

#[component]
pub fn PreviewGrid() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();

    let on_remove = move |id: FileId| {
        if let Some(removed) = upload.try_update(|u| u.remove(id)).flatten() {
            browser::release(vec![removed]);
        }
    };

    view! {
        <Show when=move || !upload.get().staged.is_empty()>
            <div class="preview">
                <h3>"Selected Images:"</h3>
                <div class="preview__grid">
                    {move || {
                        let uploading = upload.get().uploading;
                        upload
                            .get()
                            .staged
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let id = file.id;
                                let status_class = format!("preview__status preview__status--{}", file.status.css_modifier());
                                view! {
                                    <figure class="preview__item">
                                        <img
                                            class="preview__image"
                                            src=file.preview.as_str().to_owned()
                                            alt=format!("Preview {}", index + 1)
                                        />
                                        <figcaption class="preview__meta">
                                            <span class="preview__name">{file.name}</span>
                                            <span class="preview__size">{file_size_kb(file.size)}</span>
                                            <span class=status_class>{file.status.label()}</span>
                                        </figcaption>
                                        <button
                                            class="preview__remove"
                                            title="Remove"
                                            disabled=uploading
                                            on:click=move |_| on_remove(id)
                                        >
                                            "✖"
                                        </button>
                                    </figure>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </Show>
    }
}
