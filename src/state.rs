use std::sync::Arc;

use crate::assistant::{gateway::AssistantGateway, provider::CompletionClient};
use crate::auth::store::{InMemoryUserStore, UserStore};
use crate::config::AppConfig;
use crate::documents::registry::{DocumentStore, InMemoryDocumentRegistry};
use crate::messages::Messages;
use crate::storage::{DiskStorage, StorageClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub messages: &'static Messages,
    pub users: Arc<dyn UserStore>,
    pub documents: Arc<dyn DocumentStore>,
    pub storage: Arc<dyn StorageClient>,
    pub assistant: Arc<AssistantGateway>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Self::from_config(config).await
    }

    /// Wire the default backends for a given config. Tests call this with a
    /// scratch storage dir and a wiremock provider base URL.
    pub async fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let messages = Messages::for_locale(config.locale);
        let users: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::default());
        let documents: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentRegistry::default());
        let storage: Arc<dyn StorageClient> =
            Arc::new(DiskStorage::new(config.storage.dir.clone()).await?);

        let client = match &config.provider.api_key {
            Some(key) => Some(CompletionClient::new(&config.provider, key.clone())?),
            None => {
                tracing::warn!("PROVIDER_API_KEY not set; assistant will serve fallback answers");
                None
            }
        };
        let assistant = Arc::new(AssistantGateway::new(client, documents.clone(), messages));

        Ok(Self {
            config,
            messages,
            users,
            documents,
            storage,
            assistant,
        })
    }
}
