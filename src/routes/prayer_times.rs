use axum::{extract::Query, Json};
use chrono::Local;
use serde::Deserialize;

use crate::{
    error::ApiResult,
    services::prayer_times::{DailySchedule, PrayerTimeService},
};

#[derive(Debug, Deserialize)]
pub struct PrayerTimesQuery {
    /// YYYY-MM-DD; today when omitted.
    pub date: Option<String>,
}

/// GET /api/prayer-times?date=YYYY-MM-DD
pub async fn get_daily(Query(params): Query<PrayerTimesQuery>) -> ApiResult<Json<DailySchedule>> {
    let date = match params.date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => PrayerTimeService::parse_date(raw)?,
        _ => Local::now().date_naive(),
    };
    Ok(Json(PrayerTimeService::daily(date)))
}

/// GET /api/prayer-times/week: seven days starting today.
pub async fn get_week() -> Json<Vec<DailySchedule>> {
    Json(PrayerTimeService::week(Local::now().date_naive()))
}
