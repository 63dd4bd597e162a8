use std::sync::Arc;

use crate::advisor::Advisor;
use crate::auth::SessionRegistry;
use crate::chat::{ConversationRegistry, Dispatcher};
use crate::config::Config;
use crate::db::RecordStore;
use crate::knowledge::KnowledgeBase;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub knowledge: Arc<KnowledgeBase>,
    pub advisor: Arc<Advisor>,
    pub dispatcher: Arc<Dispatcher>,
    /// Pluggable record store. JSON files by default; swap via STORE_BACKEND.
    pub store: Arc<dyn RecordStore>,
    pub sessions: Arc<SessionRegistry>,
    pub conversations: Arc<ConversationRegistry>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let knowledge = Arc::new(KnowledgeBase::builtin());
        let advisor = Arc::new(Advisor::new(knowledge.clone()));
        let dispatcher = Arc::new(Dispatcher::new(advisor.clone()));
        Self {
            config,
            knowledge,
            advisor,
            dispatcher,
            store,
            sessions: Arc::new(SessionRegistry::default()),
            conversations: Arc::new(ConversationRegistry::default()),
        }
    }
}
