use leptos::prelude::*;

use crate::state::upload::UploadState;

/// Card with the most recent classification, hidden until one exists.
#[component]
pub fn AnalysisCard() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();

    move || {
        upload.get().result.map(|result| {
            let out_of_range = !result.confidence_in_range();
            let confidence = result.confidence_label();
            view! {
                <section class="analysis">
                    <h3>"Analysis Result:"</h3>
                    <p class="analysis__row">
                        <strong>"Predicted Class: "</strong>
                        <span class="analysis__class">{result.predicted_class}</span>
                    </p>
                    <p class="analysis__row">
                        <strong>"Confidence: "</strong>
                        <span
                            class="analysis__confidence"
                            class:analysis__confidence--suspect=out_of_range
                            title=out_of_range.then_some("Reported confidence is outside 0 to 1")
                        >
                            {confidence}
                        </span>
                    </p>
                    {result.filename.map(|name| view! { <p class="analysis__file">{name}</p> })}
                    {result.message.map(|message| view! { <p class="analysis__message">{message}</p> })}
                </section>
            }
        })
    }
}
