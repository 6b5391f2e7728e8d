use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_gauge_vec, register_int_counter, CounterVec, GaugeVec,
    IntCounter,
};
use tracing::debug;

use crate::store::ContentStore;

lazy_static! {
    // ── Event counters (increment on each event) ────────────────────────────
    pub static ref CONTACT_MESSAGES_COUNTER: IntCounter = register_int_counter!(
        "api_contact_messages_total",
        "Contact form submissions accepted"
    ).unwrap();

    pub static ref DONATIONS_COUNTER: CounterVec = register_counter_vec!(
        "api_donations_total",
        "Donations recorded by fund and type",
        &["fund", "donation_type"]
    ).unwrap();

    pub static ref DONATION_AMOUNT_COUNTER: CounterVec = register_counter_vec!(
        "api_donation_amount_cents_total",
        "Sum of recorded donation amounts in cents, by fund",
        &["fund"]
    ).unwrap();

    pub static ref EVENT_REGISTRATIONS_COUNTER: CounterVec = register_counter_vec!(
        "api_event_registrations_total",
        "Event registration attempts by outcome",
        &["outcome"]
    ).unwrap();

    // ── Content metrics ─────────────────────────────────────────────────────
    pub static ref CONTENT_GAUGE: GaugeVec = register_gauge_vec!(
        "masjid_content_items",
        "Items stored per collection",
        &["collection"]
    ).unwrap();
}

/// Publish current collection sizes; called on each scrape.
pub async fn collect(store: &ContentStore) -> anyhow::Result<()> {
    for (collection, size) in store.sizes().await? {
        CONTENT_GAUGE.with_label_values(&[collection]).set(size as f64);
    }
    debug!("Metrics: content gauges refreshed");
    Ok(())
}
