use leptos::prelude::*;

use crate::config::SKELETON_MODEL_EMBED_URL;

/// Embedded interactive skeleton model. Decorative only.
#[component]
pub fn ModelViewer() -> impl IntoView {
    view! {
        <section class="model-viewer">
            <iframe
                class="model-viewer__frame"
                title="Human skeleton"
                src=SKELETON_MODEL_EMBED_URL
                allow="autoplay; fullscreen; xr-spatial-tracking"
                allowfullscreen=true
            ></iframe>
        </section>
    }
}
