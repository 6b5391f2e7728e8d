pub mod announcements;
pub mod businesses;
pub mod contact;
pub mod donations;
pub mod events;
pub mod health;
pub mod metrics;
pub mod prayer_times;
pub mod programs;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{ApiError, ApiResult},
    AppState,
};

/// `?active=true|false` on list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ActiveQuery {
    pub active: Option<String>,
}

impl ActiveQuery {
    pub fn flag(&self) -> ApiResult<Option<bool>> {
        match self.active.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some("true") => Ok(Some(true)),
            Some("false") => Ok(Some(false)),
            Some(other) => Err(ApiError::BadRequest(format!(
                "Invalid value for 'active': '{other}', expected true or false"
            ))),
        }
    }
}

/// Path ids are integers; anything else cannot name a record, so it is
/// reported as `missing` like any unknown id.
pub fn parse_id(raw: &str, missing: &'static str) -> ApiResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| ApiError::NotFound(missing))
}

/// The site origin, or a local development server on any port.
fn is_allowed_origin(origin: &str, base: &str) -> bool {
    if origin == base {
        return true;
    }
    let Some(authority) = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
    else {
        return false;
    };
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    let port_ok = port.map_or(true, |p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
    matches!(host, "localhost" | "127.0.0.1") && port_ok
}

pub fn router(state: AppState) -> Router {
    let base = state.config.app_base_url.trim_end_matches('/').to_string();
    let cors_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _| {
        origin
            .to_str()
            .map(|o| is_allowed_origin(o, &base))
            .unwrap_or(false)
    });

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(cors_origin);

    let max_body = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        // Announcements
        .route("/api/announcements", get(announcements::list_announcements))
        .route("/api/announcements/{id}", get(announcements::get_announcement))
        // Events
        .route("/api/events", get(events::list_events))
        .route("/api/events/register", post(events::register_for_event))
        .route("/api/events/{id}", get(events::get_event))
        // Programs
        .route("/api/programs", get(programs::list_programs))
        .route("/api/programs/{id}", get(programs::get_program))
        // Forms
        .route("/api/contact", post(contact::submit_contact))
        .route("/api/donations", post(donations::create_donation))
        // Prayer schedule
        .route("/api/prayer-times", get(prayer_times::get_daily))
        .route("/api/prayer-times/week", get(prayer_times::get_week))
        // Business directory
        .route("/api/businesses", get(businesses::list_businesses))
        .route("/api/businesses/featured", get(businesses::featured_businesses))
        .route("/api/businesses/category/{category}", get(businesses::businesses_by_category))
        .route("/api/businesses/{id}", get(businesses::get_business))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}
