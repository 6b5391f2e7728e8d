use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::contact::{ContactMessage, ContactRequest, UpdateContactMessageRequest},
    services::metrics::CONTACT_MESSAGES_COUNTER,
    store::ContentStore,
};

pub struct ContactService;

impl ContactService {
    pub async fn submit(store: &ContentStore, req: ContactRequest) -> ApiResult<ContactMessage> {
        let message = store.contact_messages.create(req).await?;
        CONTACT_MESSAGES_COUNTER.inc();
        info!(id = message.id, subject = %message.subject, "Contact message received");
        Ok(message)
    }

    pub async fn list(store: &ContentStore, unread_only: bool) -> ApiResult<Vec<ContactMessage>> {
        let messages = if unread_only {
            store.contact_messages.find(&|m: &ContactMessage| !m.is_read).await?
        } else {
            store.contact_messages.list(None).await?
        };
        Ok(messages)
    }

    /// Idempotent: marking an already-read message succeeds unchanged.
    pub async fn mark_read(store: &ContentStore, id: i64) -> ApiResult<ContactMessage> {
        store
            .contact_messages
            .update(id, UpdateContactMessageRequest { is_read: Some(true) })
            .await?
            .ok_or(ApiError::NotFound("Contact message not found"))
    }
}
