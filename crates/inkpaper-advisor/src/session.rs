//! A running conversation with the advisor.

use crate::advisor::Advisor;
use crate::message::ChatMessage;
use crate::prompt::welcome_message;
use tracing::{debug, error};

/// Reply shown when the advisor cannot be reached.
pub const FALLBACK_REPLY: &str = "I'm having a little trouble flipping through my catalog right now. Could you ask me again in a moment?";

/// Id of the opening message.
pub const WELCOME_ID: &str = "welcome";

/// Conversation state: the transcript plus the advisor answering it.
///
/// Advisor failures never escape a session. They are logged and answered
/// with [`FALLBACK_REPLY`].
pub struct AdvisorSession<A: Advisor> {
    advisor: A,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl<A: Advisor> AdvisorSession<A> {
    /// Start a conversation greeted by `assistant_name`.
    pub fn new(advisor: A, assistant_name: &str) -> Self {
        Self {
            advisor,
            messages: vec![ChatMessage::model(WELCOME_ID, welcome_message(assistant_name))],
            next_id: 1,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn advisor(&self) -> &A {
        &self.advisor
    }

    /// Send `input` and return the advisor's reply.
    ///
    /// Blank input is ignored and returns `None` without calling the advisor.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        let history = self.messages.clone();
        let user = ChatMessage::user(self.allocate_id(), input);
        self.messages.push(user);

        let text = match self.advisor.reply(&history, input).await {
            Ok(text) => {
                debug!(chars = text.len(), "Advisor replied");
                text
            }
            Err(e) => {
                error!(error = %e, "Error communicating with advisor");
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = ChatMessage::model(self.allocate_id(), text);
        self.messages.push(reply);
        self.messages.last()
    }

    fn allocate_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AdvisorError, AdvisorResult};
    use crate::message::ChatRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Echoes the message and records every history it was shown.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(Vec<ChatMessage>, String)>>,
    }

    #[async_trait]
    impl Advisor for Recorder {
        async fn reply(&self, history: &[ChatMessage], message: &str) -> AdvisorResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((history.to_vec(), message.to_string()));
            Ok(format!("echo: {message}"))
        }
    }

    struct Offline;

    #[async_trait]
    impl Advisor for Offline {
        async fn reply(&self, _history: &[ChatMessage], _message: &str) -> AdvisorResult<String> {
            Err(AdvisorError::EmptyResponse)
        }
    }

    #[test]
    fn test_starts_with_welcome() {
        let session = AdvisorSession::new(Offline, "Penelope");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].id, WELCOME_ID);
        assert_eq!(session.messages()[0].role, ChatRole::Model);
        assert!(session.messages()[0].text.contains("I'm Penelope"));
    }

    #[tokio::test]
    async fn test_blank_input_makes_no_call() {
        let mut session = AdvisorSession::new(Recorder::default(), "Penelope");
        assert!(session.send("   \n").await.is_none());
        assert!(session.advisor().calls.lock().unwrap().is_empty());
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_history_excludes_new_message() {
        let mut session = AdvisorSession::new(Recorder::default(), "Penelope");
        session.send("first").await;
        let reply = session.send("second").await.unwrap().clone();
        assert_eq!(reply.text, "echo: second");

        let calls = session.advisor().calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0.len(), 1);
        assert_eq!(calls[0].0[0].id, WELCOME_ID);
        let second: Vec<&str> = calls[1].0.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(second[1..], ["first", "echo: first"]);
        assert_eq!(calls[1].1, "second");
    }

    #[tokio::test]
    async fn test_failure_becomes_fallback() {
        let mut session = AdvisorSession::new(Offline, "Penelope");
        let reply = session.send("hello?").await.unwrap();
        assert_eq!(reply.text, FALLBACK_REPLY);
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[1].text, "hello?");
    }
}
