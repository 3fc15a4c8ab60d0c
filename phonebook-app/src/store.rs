use anyhow::Result;
use async_trait::async_trait;
use phonebook_types::{Contact, ContactDraft};

/// The remote contact store. Four operations, each a single fire-once
/// request: no retries, no timeouts, no batching.
#[async_trait]
pub trait ContactStore {
    async fn list_all(&self) -> Result<Vec<Contact>>;
    async fn create(&self, draft: &ContactDraft) -> Result<Contact>;
    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact>;
    async fn remove(&self, id: &str) -> Result<()>;
}

pub struct HttpContactStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContactStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn entry_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl ContactStore for HttpContactStore {
    async fn list_all(&self) -> Result<Vec<Contact>> {
        let contacts = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to decode contact list: {}", e))?;

        Ok(contacts)
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        let contact = self
            .client
            .post(&self.base_url)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to decode created contact: {}", e))?;

        Ok(contact)
    }

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact> {
        let contact = self
            .client
            .put(self.entry_url(id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to decode updated contact: {}", e))?;

        Ok(contact)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.client
            .delete(self.entry_url(id))
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
