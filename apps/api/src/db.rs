//! Record storage for users, their current resume, and chat history.
//!
//! `AppState` carries an `Arc<dyn RecordStore>`; the backend is chosen at
//! startup from `STORE_BACKEND`.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::fs;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::config::{Config, StoreBackend};
use crate::models::chat::ChatMessage;
use crate::models::resume::StoredResume;
use crate::models::user::UserRecord;

const USERS_FILE: &str = "users.json";
const RESUMES_FILE: &str = "resumes.json";
const CHATS_FILE: &str = "chats.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored data is malformed: {0}")]
    Serde(#[from] serde_json::Error),
}

type Users = HashMap<String, UserRecord>;
type Resumes = HashMap<String, StoredResume>;
type Chats = HashMap<String, Vec<ChatMessage>>;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// All records are keyed by the user's (normalised) email.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a new user. Returns `false` if the email is already taken.
    async fn create_user(&self, user: UserRecord) -> Result<bool, StoreError>;

    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Replaces the user's current resume and stamps its filename on the user.
    async fn save_resume(&self, email: &str, resume: StoredResume) -> Result<(), StoreError>;

    async fn get_resume(&self, email: &str) -> Result<Option<StoredResume>, StoreError>;

    async fn append_chat_message(&self, email: &str, message: ChatMessage)
        -> Result<(), StoreError>;

    /// The last `limit` messages, oldest first.
    async fn chat_history(&self, email: &str, limit: usize)
        -> Result<Vec<ChatMessage>, StoreError>;
}

fn tail(messages: &[ChatMessage], limit: usize) -> Vec<ChatMessage> {
    messages[messages.len().saturating_sub(limit)..].to_vec()
}

pub async fn create_store(config: &Config) -> anyhow::Result<Arc<dyn RecordStore>> {
    match config.store_backend {
        StoreBackend::Json => {
            let store = JsonFileStore::open(&config.data_dir).await.with_context(|| {
                format!("Failed to open data directory '{}'", config.data_dir.display())
            })?;
            info!("JSON record store at {}", config.data_dir.display());
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("In-memory record store (data is lost on restart)");
            Ok(Arc::new(MemoryStore::default()))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON files
// ────────────────────────────────────────────────────────────────────────────

/// One JSON document per collection under `dir`. Writes go to a temp file
/// that is renamed into place; the mutex serialises read-modify-write cycles.
pub struct JsonFileStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    async fn load<T: DeserializeOwned + Default>(&self, file: &str) -> Result<T, StoreError> {
        match fs::read(self.dir.join(file)).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(T::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(value)?).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn create_user(&self, user: UserRecord) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut users: Users = self.load(USERS_FILE).await?;
        if users.contains_key(&user.email) {
            return Ok(false);
        }
        users.insert(user.email.clone(), user);
        self.persist(USERS_FILE, &users).await?;
        Ok(true)
    }

    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut users: Users = self.load(USERS_FILE).await?;
        Ok(users.remove(email))
    }

    async fn save_resume(&self, email: &str, resume: StoredResume) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;

        let mut users: Users = self.load(USERS_FILE).await?;
        if let Some(user) = users.get_mut(email) {
            user.resume = Some(resume.filename.clone());
            self.persist(USERS_FILE, &users).await?;
        }

        let mut resumes: Resumes = self.load(RESUMES_FILE).await?;
        resumes.insert(email.to_string(), resume);
        self.persist(RESUMES_FILE, &resumes).await
    }

    async fn get_resume(&self, email: &str) -> Result<Option<StoredResume>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut resumes: Resumes = self.load(RESUMES_FILE).await?;
        Ok(resumes.remove(email))
    }

    async fn append_chat_message(
        &self,
        email: &str,
        message: ChatMessage,
    ) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut chats: Chats = self.load(CHATS_FILE).await?;
        chats.entry(email.to_string()).or_default().push(message);
        self.persist(CHATS_FILE, &chats).await
    }

    async fn chat_history(
        &self,
        email: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StoreError> {
        let _guard = self.lock.lock().await;
        let chats: Chats = self.load(CHATS_FILE).await?;
        Ok(chats.get(email).map(|m| tail(m, limit)).unwrap_or_default())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    users: Users,
    resumes: Resumes,
    chats: Chats,
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_user(&self, user: UserRecord) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.users.contains_key(&user.email) {
            return Ok(false);
        }
        inner.users.insert(user.email.clone(), user);
        Ok(true)
    }

    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.inner.read().await.users.get(email).cloned())
    }

    async fn save_resume(&self, email: &str, resume: StoredResume) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        if let Some(user) = inner.users.get_mut(email) {
            user.resume = Some(resume.filename.clone());
        }
        inner.resumes.insert(email.to_string(), resume);
        Ok(())
    }

    async fn get_resume(&self, email: &str) -> Result<Option<StoredResume>, StoreError> {
        Ok(self.inner.read().await.resumes.get(email).cloned())
    }

    async fn append_chat_message(
        &self,
        email: &str,
        message: ChatMessage,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner.chats.entry(email.to_string()).or_default().push(message);
        Ok(())
    }

    async fn chat_history(
        &self,
        email: &str,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.chats.get(email).map(|m| tail(m, limit)).unwrap_or_default())
    }
}
