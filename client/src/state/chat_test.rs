use super::*;

fn with_input(text: &str) -> ChatState {
    ChatState { input: text.to_owned(), ..ChatState::default() }
}

// =============================================================
// Defaults and visibility
// =============================================================

#[test]
fn chat_state_default_closed_and_idle() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert!(!state.open);
    assert!(!state.loading);
    assert_eq!(state.backend, AssistantBackend::Direct);
}

#[test]
fn toggle_open_close() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
    state.open();
    state.open();
    assert!(state.open);
    state.close();
    assert!(!state.open);
}

#[test]
fn reopening_keeps_history() {
    let mut state = with_input("hi");
    state.begin_send().unwrap();
    state.finish_send(Ok("hello".to_owned()));
    state.close();
    state.open();
    assert_eq!(state.messages.len(), 2);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn whitespace_input_is_dropped() {
    let mut state = with_input("  ");
    assert!(state.begin_send().is_none());
    assert!(state.messages.is_empty());
    assert!(!state.loading);
    assert_eq!(state.input, "  ");
}

#[test]
fn empty_input_is_dropped() {
    let mut state = ChatState::default();
    assert!(state.begin_send().is_none());
    assert!(state.messages.is_empty());
}

#[test]
fn begin_send_appends_user_message_before_reply() {
    let mut state = with_input("What is a greenstick fracture?");
    let text = state.begin_send().unwrap();

    assert_eq!(text, "What is a greenstick fracture?");
    assert_eq!(
        state.messages,
        [ChatMessage { sender: Sender::User, text: "What is a greenstick fracture?".to_owned() }]
    );
    assert!(state.input.is_empty());
    assert!(state.loading);
}

#[test]
fn begin_send_trims_surrounding_whitespace() {
    let mut state = with_input("  spiral fracture?\n");
    assert_eq!(state.begin_send().as_deref(), Some("spiral fracture?"));
    assert_eq!(state.messages[0].text, "spiral fracture?");
}

#[test]
fn second_send_while_loading_is_refused() {
    let mut state = with_input("first");
    state.begin_send().unwrap();
    state.input = "second".to_owned();

    assert!(state.begin_send().is_none());
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.input, "second");
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn success_appends_one_bot_reply_and_clears_loading() {
    let mut state = with_input("What is a greenstick fracture?");
    state.begin_send().unwrap();
    state.finish_send(Ok("An incomplete fracture of a long bone.".to_owned()));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].text, "An incomplete fracture of a long bone.");
    assert!(!state.loading);
}

#[test]
fn failure_appends_fallback_and_clears_loading() {
    let mut state = with_input("What is a greenstick fracture?");
    state.begin_send().unwrap();
    state.finish_send(Err(ClientError::Status(500)));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].text, FALLBACK_REPLY);
    assert!(!state.loading);
}

#[test]
fn every_error_kind_uses_the_same_fallback() {
    let errors = [
        ClientError::Transport("refused".to_owned()),
        ClientError::Status(404),
        ClientError::Decode("eof".to_owned()),
        ClientError::EmptyReply,
        ClientError::Unavailable,
    ];
    for err in errors {
        let mut state = with_input("q");
        state.begin_send().unwrap();
        state.finish_send(Err(err));
        assert_eq!(state.messages.last().unwrap().text, FALLBACK_REPLY);
    }
}

#[test]
fn send_is_possible_again_after_settle() {
    let mut state = with_input("one");
    state.begin_send().unwrap();
    state.finish_send(Err(ClientError::EmptyReply));
    state.input = "two".to_owned();
    assert!(state.begin_send().is_some());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn full_round_trip_through_simulated_backend() {
    use crate::config::ClientConfig;
    use crate::net::assistant;

    let config = ClientConfig::default();
    let mut state = ChatState { backend: AssistantBackend::Simulated, ..with_input("What is a greenstick fracture?") };

    let text = state.begin_send().unwrap();
    assert_eq!(state.messages.len(), 1);
    let outcome = futures::executor::block_on(assistant::ask(state.backend, &config, &text));
    state.finish_send(outcome);

    assert_eq!(state.messages.len(), 2);
    assert!(state.messages[1].text.contains("What is a greenstick fracture?"));
    assert!(!state.loading);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn full_round_trip_through_unreachable_backend_falls_back() {
    use crate::config::ClientConfig;
    use crate::net::assistant;

    let config = ClientConfig::default();
    let mut state = with_input("What is a greenstick fracture?");

    let text = state.begin_send().unwrap();
    let outcome = futures::executor::block_on(assistant::ask(state.backend, &config, &text));
    state.finish_send(outcome);

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].text, FALLBACK_REPLY);
    assert!(!state.loading);
}

// =============================================================
// Upload notice
// =============================================================

#[test]
fn announce_upload_opens_and_posts_notice() {
    let mut state = ChatState::default();
    state.announce_upload();
    assert!(state.open);
    assert_eq!(state.messages, [ChatMessage { sender: Sender::Bot, text: UPLOAD_NOTICE.to_owned() }]);
}

#[test]
fn announce_upload_on_open_widget_keeps_it_open_and_history_intact() {
    let mut state = ChatState::default();
    state.open();
    state.push_bot(WELCOME_TEXT);
    state.announce_upload();
    assert!(state.open);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].text, UPLOAD_NOTICE);
}

#[test]
fn announce_upload_does_not_touch_loading() {
    let mut state = with_input("q");
    state.begin_send().unwrap();
    state.announce_upload();
    assert!(state.loading);
}

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
}
