use super::*;

// =============================================================
// AssistantBackend
// =============================================================

#[test]
fn backend_default_is_direct() {
    assert_eq!(AssistantBackend::default(), AssistantBackend::Direct);
}

#[test]
fn backend_keys_round_trip() {
    for backend in AssistantBackend::ALL {
        assert_eq!(AssistantBackend::from_key(backend.key()), Some(backend));
    }
    assert_eq!(AssistantBackend::from_key("gemini"), None);
}

// =============================================================
// Prompt template
// =============================================================

#[test]
fn prompt_embeds_raw_question() {
    let prompt = radiology_prompt("What is a greenstick fracture?");
    assert!(prompt.contains("The radiologist asks: What is a greenstick fracture?\n"));
}

#[test]
fn prompt_carries_answer_constraints() {
    let prompt = radiology_prompt("q");
    assert!(prompt.starts_with("You are working with a radiologist"));
    assert!(prompt.contains("- Is well supported with science"));
    assert!(prompt.contains("- Uses anatomical terms as much as possible"));
    assert!(prompt.contains("- Always repeats what you understood of their prompt"));
    assert!(prompt.ends_with("Keep the response limited to 7 sentences maximum."));
}

// =============================================================
// Simulator
// =============================================================

#[test]
fn canned_reply_interpolates_question() {
    for i in 0..CANNED_REPLIES.len() {
        let reply = canned_reply("Is this a Colles fracture?", i);
        assert!(reply.contains("Is this a Colles fracture?"));
        assert!(!reply.contains("{question}"));
    }
}

#[test]
fn canned_reply_index_wraps() {
    assert_eq!(canned_reply("x", CANNED_REPLIES.len()), canned_reply("x", 0));
}

#[test]
fn random_index_stays_in_table() {
    for _ in 0..200 {
        assert!(random_reply_index() < CANNED_REPLIES.len());
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn simulated_replies_come_from_canned_set() {
    let config = ClientConfig::default();
    let question = "What is a greenstick fracture?";
    let allowed: Vec<String> = (0..CANNED_REPLIES.len()).map(|i| canned_reply(question, i)).collect();

    for _ in 0..100 {
        let reply = futures::executor::block_on(ask(AssistantBackend::Simulated, &config, question)).unwrap();
        assert!(allowed.contains(&reply), "unexpected reply: {reply}");
        assert!(reply.contains(question));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn network_backends_unavailable_off_browser() {
    let config = ClientConfig::default();
    for backend in [AssistantBackend::Direct, AssistantBackend::Proxied] {
        let outcome = futures::executor::block_on(ask(backend, &config, "hello"));
        assert_eq!(outcome, Err(ClientError::Unavailable));
    }
}
