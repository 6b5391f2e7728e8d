use tracing::{info, warn};

use crate::{
    error::{ApiError, ApiResult},
    models::{
        event::Event,
        registration::{EventRegistrationRequest, Registration},
    },
    services::metrics::EVENT_REGISTRATIONS_COUNTER,
    store::ContentStore,
    validation::Validate,
};

pub struct EventService;

impl EventService {
    pub async fn list(store: &ContentStore, active: Option<bool>) -> ApiResult<Vec<Event>> {
        Ok(store.events.list(active).await?)
    }

    pub async fn get(store: &ContentStore, id: i64) -> ApiResult<Event> {
        store
            .events
            .get(id)
            .await?
            .ok_or(ApiError::NotFound("Event not found"))
    }

    /// Record a participant for an existing event. Nothing is stored when the
    /// event does not exist.
    pub async fn register(
        store: &ContentStore,
        req: EventRegistrationRequest,
    ) -> ApiResult<Registration> {
        req.validate()?;
        let event = match Self::get(store, req.event_id).await {
            Ok(event) => event,
            Err(e) => {
                warn!(event_id = req.event_id, "Registration for unknown event");
                EVENT_REGISTRATIONS_COUNTER.with_label_values(&["unknown_event"]).inc();
                return Err(e);
            }
        };

        let registration = store.registrations.create(req).await?;
        EVENT_REGISTRATIONS_COUNTER.with_label_values(&["accepted"]).inc();
        info!(
            event_id = event.id,
            registration_id = registration.id,
            attendees = registration.attendees,
            "Event registration for \"{}\"",
            event.title
        );
        Ok(registration)
    }

    pub async fn registrations(
        store: &ContentStore,
        event_id: i64,
    ) -> ApiResult<Vec<Registration>> {
        Self::get(store, event_id).await?;
        Ok(store
            .registrations
            .find(&move |r: &Registration| r.event_id == event_id)
            .await?)
    }
}
