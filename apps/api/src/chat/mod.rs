//! Rule-based chat assistant.

pub mod dispatcher;
pub mod handlers;
pub mod intent;
pub mod responses;

use std::collections::HashMap;

use tokio::sync::RwLock;

pub use dispatcher::{ChatReply, ConversationContext, Dispatcher};

/// Per-user conversation contexts, keyed by email.
#[derive(Default)]
pub struct ConversationRegistry {
    contexts: RwLock<HashMap<String, ConversationContext>>,
}

impl ConversationRegistry {
    /// Runs `f` against the user's context, creating it on first use.
    pub async fn with_context<R>(
        &self,
        email: &str,
        f: impl FnOnce(&mut ConversationContext) -> R,
    ) -> R {
        let mut contexts = self.contexts.write().await;
        f(contexts.entry(email.to_string()).or_default())
    }

    pub async fn forget(&self, email: &str) {
        self.contexts.write().await.remove(email);
    }
}
