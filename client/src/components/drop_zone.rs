//! Drop zone and hidden file picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both intake paths (picker `change` and zone `drop`) feed the same
//! screening and staging step in `util::browser`. All four drag events
//! suppress the browser's default file-open navigation.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::upload::{DragPhase, UploadState};

/// Clickable, droppable area that stages accepted files.
#[component]
pub fn DropZone() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let config = expect_context::<ClientConfig>();
    let accept_attr = config.accept.accept_attr();
    let accept_label = config.accept.label.clone();
    let config = StoredValue::new(config);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_drag = move |ev: leptos::ev::DragEvent, phase: DragPhase| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(|u| u.on_drag(phase));
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
                let cfg = config.get_value();
                crate::util::browser::stage_file_list(upload, &cfg.accept, cfg.staging_mode, &list);
            }
        }
        on_drag(ev, DragPhase::Drop);
    };

    let on_pick = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                if let Some(list) = input.files() {
                    let cfg = config.get_value();
                    crate::util::browser::stage_file_list(upload, &cfg.accept, cfg.staging_mode, &list);
                }
                // Allow picking the same file again.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    };

    let open_picker = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            class:drop-zone--active=move || upload.get().drag_active
            on:click=open_picker
            on:dragenter=move |ev| on_drag(ev, DragPhase::Enter)
            on:dragover=move |ev| on_drag(ev, DragPhase::Over)
            on:dragleave=move |ev| on_drag(ev, DragPhase::Leave)
            on:drop=on_drop
        >
            <div class="drop-zone__text">"Drag and drop your X-rays here"</div>
            <div class="drop-zone__hint">{format!("or click to browse ({accept_label})")}</div>
            <input
                class="drop-zone__input"
                type="file"
                multiple=true
                accept=accept_attr
                node_ref=input_ref
                on:click=move |ev| ev.stop_propagation()
                on:change=on_pick
            />
        </div>
    }
}
