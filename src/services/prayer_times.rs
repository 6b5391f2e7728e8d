//! Daily prayer schedule.
//!
//! Adhan times come from a fixed table with one row per month; iqamah follows
//! each adhan by a fixed offset. Jumu'ah has its own times on Fridays.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTime {
    pub name: &'static str,
    pub adhan: String,
    /// `None` for sunrise, which has no congregation.
    pub iqamah: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JumuahTime {
    pub khutbah: String,
    pub iqamah: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub weekday: String,
    pub prayers: Vec<PrayerTime>,
    pub jumuah: Option<JumuahTime>,
}

/// Name and minutes from adhan to iqamah.
const SLOTS: [(&str, Option<i64>); 6] = [
    ("Fajr", Some(20)),
    ("Sunrise", None),
    ("Dhuhr", Some(15)),
    ("Asr", Some(15)),
    ("Maghrib", Some(5)),
    ("Isha", Some(15)),
];

/// Adhan (hour, minute) per month, in `SLOTS` order.
const ADHAN_BY_MONTH: [[(u32, u32); 6]; 12] = [
    [(6, 15), (7, 20), (12, 15), (14, 45), (16, 55), (18, 20)],
    [(5, 55), (7, 0), (12, 20), (15, 15), (17, 30), (18, 50)],
    [(6, 15), (7, 15), (13, 15), (16, 40), (19, 10), (20, 25)],
    [(5, 30), (6, 35), (13, 10), (16, 55), (19, 40), (20, 55)],
    [(4, 45), (6, 0), (13, 5), (17, 5), (20, 5), (21, 30)],
    [(4, 20), (5, 45), (13, 10), (17, 15), (20, 30), (22, 0)],
    [(4, 35), (5, 55), (13, 15), (17, 20), (20, 30), (21, 55)],
    [(5, 5), (6, 20), (13, 15), (17, 5), (20, 5), (21, 25)],
    [(5, 35), (6, 50), (13, 5), (16, 35), (19, 20), (20, 35)],
    [(6, 0), (7, 15), (12, 55), (16, 0), (18, 35), (19, 50)],
    [(5, 35), (6, 50), (11, 50), (14, 35), (16, 55), (18, 15)],
    [(6, 0), (7, 15), (12, 0), (14, 30), (16, 40), (18, 5)],
];

const JUMUAH_KHUTBAH: (u32, u32) = (13, 15);
const JUMUAH_IQAMAH: (u32, u32) = (13, 45);

pub const DAYS_PER_WEEK: i64 = 7;

pub struct PrayerTimeService;

impl PrayerTimeService {
    /// Parses a `YYYY-MM-DD` query value.
    pub fn parse_date(raw: &str) -> ApiResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::BadRequest(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
    }

    pub fn daily(date: NaiveDate) -> DailySchedule {
        let row = &ADHAN_BY_MONTH[date.month0() as usize];
        let prayers = SLOTS
            .iter()
            .zip(row.iter())
            .map(|(&(name, offset), &(h, m))| {
                let adhan = clock(h, m);
                PrayerTime {
                    name,
                    adhan: format_time(adhan),
                    iqamah: offset.map(|mins| format_time(adhan + Duration::minutes(mins))),
                }
            })
            .collect();

        let jumuah = (date.weekday() == Weekday::Fri).then(|| JumuahTime {
            khutbah: format_time(clock(JUMUAH_KHUTBAH.0, JUMUAH_KHUTBAH.1)),
            iqamah: format_time(clock(JUMUAH_IQAMAH.0, JUMUAH_IQAMAH.1)),
        });

        DailySchedule {
            date,
            weekday: date.format("%A").to_string(),
            prayers,
            jumuah,
        }
    }

    /// Seven consecutive days starting at `start`.
    pub fn week(start: NaiveDate) -> Vec<DailySchedule> {
        (0..DAYS_PER_WEEK)
            .map(|offset| Self::daily(start + Duration::days(offset)))
            .collect()
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// "5:30 AM" style.
fn format_time(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}
