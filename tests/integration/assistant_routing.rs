use portfoliobase::assistant::{classify, select_reply, ReplyTopic};

#[test]
fn every_trigger_group_routes_to_its_topic() {
    let cases = [
        ("where can I read your resume", ReplyTopic::Resume),
        ("do you keep a blog", ReplyTopic::Writing),
        ("can I change the color", ReplyTopic::Themes),
        ("any games to play here", ReplyTopic::Game),
        ("what technology do you use", ReplyTopic::Skills),
        ("tell me about your work", ReplyTopic::Projects),
        ("did you do an internship", ReplyTopic::Experience),
        ("where do you study", ReplyTopic::Education),
        ("how do I reach you", ReplyTopic::Contact),
        ("any award so far", ReplyTopic::Achievements),
        ("are you on telegram", ReplyTopic::Social),
    ];
    for (message, expected) in cases {
        assert_eq!(classify(message), expected, "message: {message:?}");
    }
}

#[test]
fn replies_are_always_nonempty_strings() {
    for message in ["", "resume", "zzzzz", "   ", "日本語の質問です"] {
        assert!(!select_reply(message).is_empty());
    }
}

#[test]
fn selection_is_deterministic_across_calls() {
    for message in ["resume and blog", "nothing in particular", "CONTACT ME"] {
        assert_eq!(select_reply(message), select_reply(message));
    }
}

#[test]
fn mixed_topic_messages_resolve_by_group_order() {
    // Both "resume" and "blog" appear; the resume group is evaluated first.
    assert_eq!(classify("resume or blog?"), ReplyTopic::Resume);
    // "social" loses to every earlier group present in the message.
    assert_eq!(classify("contact me on social media"), ReplyTopic::Contact);
}

#[test]
fn unmatched_messages_get_the_generic_reply() {
    assert_eq!(classify("good morning!"), ReplyTopic::General);
    assert_eq!(
        select_reply("good morning!"),
        ReplyTopic::General.reply_text()
    );
}
