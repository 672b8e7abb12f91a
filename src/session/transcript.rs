use crate::chat::{ChatMessage, ChatRole};

/// Append-only conversation history, opened by a single system message.
///
/// The system message is set once at construction and there is no API to
/// remove or edit entries, so it stays first for the transcript's lifetime.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system().content(system_prompt).build()],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages
            .push(ChatMessage::user().content(content).build());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages
            .push(ChatMessage::assistant().content(content).build());
    }

    /// Every message in insertion order, system message first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn system(&self) -> &ChatMessage {
        &self.messages[0]
    }

    pub fn last(&self) -> &ChatMessage {
        // never empty: constructed with the system message
        &self.messages[self.messages.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of user messages that never received a reply.
    pub fn unanswered(&self) -> usize {
        self.messages
            .windows(2)
            .filter(|pair| pair[0].role == ChatRole::User && pair[1].role == ChatRole::User)
            .count()
            + usize::from(self.last().role == ChatRole::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_only_system_message() {
        let transcript = Transcript::new("be kind");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.system().role, ChatRole::System);
        assert_eq!(transcript.last().content, "be kind");
        assert!(!transcript.is_empty());
    }

    #[test]
    fn counts_dangling_user_turns() {
        let mut transcript = Transcript::new("sys");
        assert_eq!(transcript.unanswered(), 0);
        transcript.push_user("a");
        transcript.push_user("b");
        assert_eq!(transcript.unanswered(), 2);
        transcript.push_assistant("reply");
        assert_eq!(transcript.unanswered(), 1);
    }
}
