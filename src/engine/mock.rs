//! Canned replies used while no live backend is available.

/// A priority-ordered keyword group and the reply it produces.
struct KeywordGroup {
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Checked in order; the first group with any matching keyword wins.
const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        keywords: &["你好", "hello", "hi"],
        reply: GREETING_REPLY,
    },
    KeywordGroup {
        keywords: &["天气", "weather"],
        reply: WEATHER_REPLY,
    },
    KeywordGroup {
        keywords: &["名字", "你是谁", "your name", "who are you"],
        reply: IDENTITY_REPLY,
    },
    KeywordGroup {
        keywords: &["帮助", "能做什么", "help"],
        reply: HELP_REPLY,
    },
];

pub const GREETING_REPLY: &str = "Hello! Nice to meet you. What can I help you with?";

pub const WEATHER_REPLY: &str =
    "Sorry, I can't look up live weather, but I hope your day is a good one!";

pub const IDENTITY_REPLY: &str = "I'm an AI chat assistant that runs on a local Ollama model.";

pub const HELP_REPLY: &str = "I can help you:\n\
    1. Answer questions\n\
    2. Chat\n\
    3. Look things up\n\
    4. Write code\n\n\
    Note: this is mock mode. Start Ollama for smarter answers.";

/// Generic replies for messages that match no keyword group.
pub const FILLER_REPLIES: [&str; 5] = [
    "Hi! Is there anything I can help you with?",
    "I got your message. This is a mock reply because the Ollama service is unavailable.",
    "Thanks for asking! With the Ollama service running I could give you a smarter answer.",
    "I'm running in mock mode. Make sure Ollama is running and I can chat through a real model.",
    "Hello! I'm the AI assistant, currently answering with mock responses.",
];

/// Stateless keyword/filler reply generator.
///
/// The reply is a pure function of the message: keyword matching is
/// case-insensitive, and the filler fallback is indexed by the message's
/// byte length.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockResponder;

impl MockResponder {
    pub fn new() -> Self {
        Self
    }

    pub fn respond(&self, message: &str) -> String {
        let lowered = message.to_lowercase();

        KEYWORD_GROUPS
            .iter()
            .find(|group| group.keywords.iter().any(|k| lowered.contains(k)))
            .map(|group| group.reply)
            .unwrap_or(FILLER_REPLIES[message.len() % FILLER_REPLIES.len()])
            .to_string()
    }
}
