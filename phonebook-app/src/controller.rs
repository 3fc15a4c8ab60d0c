use crate::prompt::ConfirmPrompt;
use crate::store::ContactStore;
use anyhow::Result;
use phonebook_types::{Contact, ContactDraft};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(4);

/// All mutable application state. The contact collection is a client-side
/// mirror of the store: fetched once at startup, then updated incrementally
/// after each confirmed or optimistic operation.
#[derive(Debug, Default)]
pub struct PhonebookState {
    contacts: Vec<Contact>,
    pending_name: String,
    pending_number: String,
    filter: String,
    notification: Option<String>,
    // Bumped on every notification; only the timer holding the current
    // token may clear the message.
    notification_token: u64,
}

/// Props for the stateless view renderers, derived from the current state.
#[derive(Debug, Clone)]
pub struct ViewProps {
    pub notification: Option<String>,
    pub filter: String,
    pub pending_name: String,
    pub pending_number: String,
    pub visible_contacts: Vec<Contact>,
}

/// The application controller. Owns the state, orchestrates store calls and
/// wires user events to state transitions.
pub struct Phonebook<S, C> {
    state: Arc<Mutex<PhonebookState>>,
    store: S,
    prompt: C,
}

impl<S: ContactStore, C: ConfirmPrompt> Phonebook<S, C> {
    pub fn new(store: S, prompt: C) -> Self {
        Self {
            state: Arc::new(Mutex::new(PhonebookState::default())),
            store,
            prompt,
        }
    }

    /// Fetches the full collection from the store. Called once at startup;
    /// the collection is never re-fetched in full after that.
    pub async fn load(&self) -> Result<()> {
        let contacts = self.store.list_all().await?;
        tracing::info!("Loaded {} contacts from the store", contacts.len());

        let mut state = self.state.lock().await;
        state.contacts = contacts;
        Ok(())
    }

    pub async fn set_pending_name(&self, value: &str) {
        self.state.lock().await.pending_name = value.to_string();
    }

    pub async fn set_pending_number(&self, value: &str) {
        self.state.lock().await.pending_number = value.to_string();
    }

    pub async fn set_filter(&self, value: &str) {
        self.state.lock().await.filter = value.to_string();
    }

    pub async fn notification(&self) -> Option<String> {
        self.state.lock().await.notification.clone()
    }

    /// The visible list is derived on every call: the full collection
    /// filtered by case-insensitive substring match against the name.
    pub async fn visible_contacts(&self) -> Vec<Contact> {
        let state = self.state.lock().await;
        filter_contacts(&state.contacts, &state.filter)
    }

    pub async fn view_props(&self) -> ViewProps {
        let state = self.state.lock().await;
        ViewProps {
            notification: state.notification.clone(),
            filter: state.filter.clone(),
            pending_name: state.pending_name.clone(),
            pending_number: state.pending_number.clone(),
            visible_contacts: filter_contacts(&state.contacts, &state.filter),
        }
    }

    /// Add-or-update from the pending form fields. A contact with the exact
    /// same name (case-sensitive) turns the submission into an update of
    /// that contact's number, gated on user confirmation. Store failures
    /// propagate; there is no recovery path for create or update.
    pub async fn submit(&self) -> Result<()> {
        let (draft, existing) = {
            let state = self.state.lock().await;
            let draft = ContactDraft {
                name: state.pending_name.clone(),
                number: state.pending_number.clone(),
            };
            let existing = state
                .contacts
                .iter()
                .find(|contact| contact.name == draft.name)
                .cloned();
            (draft, existing)
        };

        if let Some(existing) = existing {
            let question = format!(
                "{} already exists in the phonebook, update the number with the new one?",
                draft.name
            );
            if !self.prompt.confirm(&question).await {
                // Declined: abandon silently.
                return Ok(());
            }

            let updated = self.store.update(&existing.id, &draft).await?;
            let message = format!("{} got a new number", updated.name);

            let mut state = self.state.lock().await;
            if let Some(slot) = state
                .contacts
                .iter_mut()
                .find(|contact| contact.id == existing.id)
            {
                *slot = updated;
            }
            self.set_notification(&mut state, message);
            return Ok(());
        }

        let added = self.store.create(&draft).await?;
        let message = format!("{} added to phonebook.", added.name);

        let mut state = self.state.lock().await;
        state.contacts.push(added);
        // Only the name field is reset; the number field keeps its value.
        state.pending_name.clear();
        self.set_notification(&mut state, message);
        Ok(())
    }

    /// Confirmed deletes are optimistic: the contact leaves the local
    /// collection before the remote call. A failed remote delete is
    /// surfaced as advisory text and the local state stays corrected.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let target = {
            let state = self.state.lock().await;
            state.contacts.iter().find(|c| c.id == id).cloned()
        };
        let Some(target) = target else {
            return Ok(());
        };

        let question = format!("Are you sure you want to delete {}?", target.name);
        if !self.prompt.confirm(&question).await {
            return Ok(());
        }

        {
            let mut state = self.state.lock().await;
            state.contacts.retain(|contact| contact.id != id);
            let message = format!("{} deleted from the phonebook.", target.name);
            self.set_notification(&mut state, message);
        }

        if let Err(error) = self.store.remove(id).await {
            tracing::warn!("Remote delete of {} failed: {}", target.name, error);

            let mut state = self.state.lock().await;
            // Already absent locally, so this is a no-op in effect.
            state.contacts.retain(|contact| contact.id != id);
            let message = format!("Person {} is already deleted.", target.name);
            self.set_notification(&mut state, message);
        }

        Ok(())
    }

    fn set_notification(&self, state: &mut PhonebookState, message: String) {
        state.notification = Some(message);
        state.notification_token += 1;
        let token = state.notification_token;

        let shared = self.state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
            let mut state = shared.lock().await;
            if state.notification_token == token {
                state.notification = None;
            }
        });
    }
}

pub fn filter_contacts(contacts: &[Contact], filter: &str) -> Vec<Contact> {
    let needle = filter.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
