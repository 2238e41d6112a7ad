use portfoliobase::assistant::{select_reply, AssistantSession, ReplyTopic};

#[test]
fn session_opens_with_the_greeting() {
    let session = AssistantSession::new();
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 1);
    assert!(!transcript[0].from_visitor);
    assert!(transcript[0].text.contains("Maan"));
}

#[test]
fn send_appends_both_sides_of_the_exchange() {
    let mut session = AssistantSession::new();
    let reply_text = {
        let reply = session.send("show me your projects").expect("reply expected");
        assert!(!reply.from_visitor);
        reply.text.clone()
    };
    assert_eq!(reply_text, ReplyTopic::Projects.reply_text());

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3);
    assert!(transcript[1].from_visitor);
    assert_eq!(transcript[1].text, "show me your projects");
    assert!(!transcript[2].from_visitor);
}

#[test]
fn messages_get_distinct_identifiers_and_ordered_timestamps() {
    let mut session = AssistantSession::new();
    session.send("resume please");
    session.send("how do I reach you");
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 5);
    for pair in transcript.windows(2) {
        assert_ne!(pair[0].message_id, pair[1].message_id);
        assert!(pair[0].sent_at <= pair[1].sent_at);
    }
}

#[test]
fn blank_input_is_ignored() {
    let mut session = AssistantSession::new();
    assert!(session.send("").is_none());
    assert!(session.send("   \t  ").is_none());
    assert_eq!(session.transcript().len(), 1);
}

#[test]
fn typing_delay_stays_within_the_presentational_window() {
    let session = AssistantSession::new();
    for _ in 0..50 {
        let delay = session.typing_delay();
        assert!(delay.as_millis() >= 1000);
        assert!(delay.as_millis() < 3000);
    }
}

#[test]
fn transcript_export_round_trips_through_json() {
    let mut session = AssistantSession::new();
    session.send("any award so far");
    let json = session.export_transcript().expect("export should serialize");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("export should parse");
    let entries = parsed.as_array().expect("transcript is a JSON array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["text"], "any award so far");
    assert_eq!(entries[2]["text"], select_reply("any award so far"));
}
