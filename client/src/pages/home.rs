//! Landing screen: upload, model embed, result card, and chat widget.

use leptos::prelude::*;

use crate::components::analysis_card::AnalysisCard;
use crate::components::chat_widget::ChatWidget;
use crate::components::model_viewer::ModelViewer;
use crate::components::upload_panel::UploadPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="home__header">
                <h1 class="home__title">
                    "X-R"<span class="home__title-accent">"AI"</span>
                </h1>
                <p class="home__tagline">"EMPOWERING RADIOLOGISTS"</p>
            </header>
            <main class="home__body">
                <div class="home__row">
                    <UploadPanel/>
                    <ModelViewer/>
                </div>
                <AnalysisCard/>
            </main>
            <ChatWidget/>
        </div>
    }
}
