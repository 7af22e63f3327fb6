//! Floating assistant chat: launcher button plus a toggleable panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatState` owns history, the input buffer, and the in-flight flag. This
//! component only wires DOM events to it and runs the assistant call for the
//! backend currently selected in the header.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::assistant::AssistantBackend;
use crate::state::chat::{ChatState, Sender, WELCOME_TEXT};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<ClientConfig>());

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;
        let _ = state.open;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(text) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };
        let backend = chat.with_untracked(|c| c.backend);
        let cfg = config.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::assistant::ask(backend, &cfg, &text).await;
            if let Err(e) = &outcome {
                log::warn!("assistant ({}) failed: {e}", backend.key());
            }
            chat.update(|c| c.finish_send(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, backend, cfg);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_backend = move |ev: leptos::ev::Event| {
        if let Some(backend) = AssistantBackend::from_key(&event_target_value(&ev)) {
            chat.update(|c| c.backend = backend);
        }
    };

    view! {
        <div class="chat">
            <button class="chat__launcher" title="Chat with X-RAI" on:click=move |_| chat.update(ChatState::toggle)>
                "💬"
            </button>
            <Show when=move || chat.get().open>
                <div class="chat__panel">
                    <div class="chat__header">
                        <span class="chat__title">"X-RAI Assistant"</span>
                        <select class="chat__backend" on:change=on_backend>
                            {AssistantBackend::ALL
                                .into_iter()
                                .map(|backend| {
                                    view! {
                                        <option value=backend.key() selected=move || chat.get().backend == backend>
                                            {backend.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                        <button class="chat__close" title="Close" on:click=move |_| chat.update(ChatState::close)>
                            "✖"
                        </button>
                    </div>

                    <div class="chat__messages" node_ref=messages_ref>
                        {move || {
                            let messages = chat.get().messages;
                            if messages.is_empty() {
                                return view! { <div class="chat__welcome">{WELCOME_TEXT}</div> }.into_any();
                            }
                            messages
                                .into_iter()
                                .map(|msg| {
                                    view! {
                                        <div
                                            class="chat__message"
                                            class:chat__message--user=msg.sender == Sender::User
                                            class:chat__message--bot=msg.sender == Sender::Bot
                                        >
                                            {msg.text}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                        {move || chat.get().loading.then(|| view! { <div class="chat__loading">"Typing..."</div> })}
                    </div>

                    <div class="chat__input-row">
                        <input
                            class="chat__input"
                            type="text"
                            placeholder="Ask about fractures..."
                            prop:value=move || chat.get().input
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                chat.update(|c| c.input = value);
                            }
                            on:keydown=on_keydown
                        />
                        <button class="btn btn--primary chat__send" on:click=move |_| do_send() disabled=move || chat.get().loading>
                            {move || if chat.get().loading { "..." } else { "➤" }}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
