//! The advisor seam.

use crate::error::AdvisorResult;
use crate::message::ChatMessage;
use async_trait::async_trait;

/// Something that answers a shopper's question given the conversation so far.
///
/// `history` holds every earlier message (welcome included) and never the
/// new `message` itself.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> AdvisorResult<String>;
}

#[async_trait]
impl<A: Advisor + ?Sized> Advisor for Box<A> {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> AdvisorResult<String> {
        (**self).reply(history, message).await
    }
}
