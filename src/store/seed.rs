//! Startup content.
//!
//! Loaded into a fresh store when `SEED_CONTENT` is on:
//! - 3 announcements (2 active)
//! - 5 events (3 active, 2 inactive; one weekly Friday halaqa)
//! - 4 programs
//! - 4 directory businesses (2 featured)

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc, Weekday};
use tracing::info;

use super::{ContentStore, StoreResult};
use crate::models::{
    announcement::CreateAnnouncementRequest,
    business::CreateBusinessRequest,
    event::{CreateEventRequest, EventType},
    program::CreateProgramRequest,
};

pub async fn seed(store: &ContentStore) -> StoreResult<()> {
    seed_at(store, Utc::now()).await
}

/// Seeds with event dates relative to `now`.
pub async fn seed_at(store: &ContentStore, now: DateTime<Utc>) -> StoreResult<()> {
    let announcements = [
        (
            "Ramadan Preparation Workshop",
            "Join us for a workshop on spiritual and practical preparation for Ramadan.",
            true,
        ),
        (
            "Parking Lot Resurfacing",
            "The north parking lot will be closed for resurfacing. Please use street parking.",
            true,
        ),
        (
            "Eid Bazaar Vendors Wanted",
            "Vendor registration for last year's Eid bazaar has closed.",
            false,
        ),
    ];
    for (title, content, is_active) in announcements {
        store
            .announcements
            .create(CreateAnnouncementRequest {
                title: title.into(),
                content: content.into(),
                date: Some(now - Duration::days(2)),
                is_active,
            })
            .await?;
    }

    let day = |offset: i64, hour: u32| at_hour(now + Duration::days(offset), hour);
    let events = [
        event(
            ("Friday Night Halaqa", "Weekly study circle after Isha."),
            day(days_until(now, Weekday::Fri), 20),
            ("8:30 PM", "Main Prayer Hall"),
            true,
            EventType::Regular,
            Some("Friday"),
        ),
        event(
            ("Community Iftar", "Open iftar for families and neighbours."),
            day(10, 19),
            ("7:00 PM", "Community Hall"),
            true,
            EventType::Special,
            None,
        ),
        event(
            ("Youth Basketball Night", "Games and dinner for ages 12 to 18."),
            day(5, 18),
            ("6:00 PM", "Gymnasium"),
            true,
            EventType::Regular,
            None,
        ),
        event(
            ("Open House", "Tour of the masjid for our neighbours."),
            day(-30, 11),
            ("11:00 AM", "Main Entrance"),
            false,
            EventType::Special,
            None,
        ),
        event(
            ("Winter Coat Drive", "Collection of coats for local shelters."),
            day(-60, 10),
            ("10:00 AM", "Lobby"),
            false,
            EventType::Regular,
            None,
        ),
    ];
    for req in events {
        store.events.create(req).await?;
    }

    let mut quran = CreateProgramRequest::new(
        "Qur'an Memorization",
        "Hifz program with individual teacher follow-up.",
        "Monday to Thursday",
    );
    quran.time = Some("5:00 PM - 7:00 PM".into());
    quran.instructor = Some("Sheikh Abdullah".into());
    quran.cost = Some("$50/month".into());

    let mut arabic = CreateProgramRequest::new(
        "Arabic for Beginners",
        "Reading and conversational Arabic for adults.",
        "Saturdays",
    );
    arabic.time = Some("10:00 AM".into());
    arabic.location = "Classroom 2".into();

    let mut sisters = CreateProgramRequest::new(
        "Sisters' Tafsir Circle",
        "Weekly tafsir study for sisters.",
        "Wednesdays",
    );
    sisters.registration_required = false;
    sisters.location = "Sisters' Hall".into();

    let mut weekend = CreateProgramRequest::new(
        "Weekend Islamic School",
        "Islamic studies and Qur'an for children aged 5 to 14.",
        "Sundays",
    );
    weekend.time = Some("10:00 AM - 1:00 PM".into());
    weekend.cost = Some("$300/year".into());

    for req in [quran, arabic, sisters, weekend] {
        store.programs.create(req).await?;
    }

    let businesses = [
        business(
            ("Crescent Halal Market", "Halal meat and groceries."),
            "Grocery",
            true,
            Some("10% off for members"),
        ),
        business(("Noor Dental", "Family dentistry."), "Health", true, None),
        business(
            ("Barakah Auto Repair", "Honest repairs and inspections."),
            "Automotive",
            false,
            Some("Free brake check"),
        ),
        business(("Al-Huda Bookstore", "Islamic books and gifts."), "Retail", false, None),
    ];
    for req in businesses {
        store.businesses.create(req).await?;
    }

    info!(
        announcements = 3,
        events = 5,
        programs = 4,
        businesses = 4,
        "Seed content loaded"
    );
    Ok(())
}

fn at_hour(date: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let naive = date.date_naive().and_hms_opt(hour, 0, 0).unwrap_or_else(|| date.naive_utc());
    Utc.from_utc_datetime(&naive)
}

/// Days from `now` to the next `weekday`, 0 when `now` is that day.
fn days_until(now: DateTime<Utc>, weekday: Weekday) -> i64 {
    let from = now.weekday().num_days_from_monday();
    let to = weekday.num_days_from_monday();
    i64::from((to + 7 - from) % 7)
}

fn event(
    (title, description): (&str, &str),
    date: DateTime<Utc>,
    (start_time, location): (&str, &str),
    is_active: bool,
    event_type: EventType,
    recurring_day: Option<&str>,
) -> CreateEventRequest {
    CreateEventRequest {
        title: title.into(),
        description: description.into(),
        date,
        end_date: None,
        start_time: start_time.into(),
        end_time: None,
        location: location.into(),
        organizer: Some("Masjid Events Committee".into()),
        is_active,
        event_type,
        is_recurring: recurring_day.is_some(),
        recurring_day: recurring_day.map(String::from),
    }
}

fn business(
    (name, description): (&str, &str),
    category: &str,
    featured: bool,
    discount: Option<&str>,
) -> CreateBusinessRequest {
    CreateBusinessRequest {
        name: name.into(),
        description: description.into(),
        category: category.into(),
        address: None,
        phone: None,
        email: None,
        website: None,
        logo_url: None,
        discount: discount.map(String::from),
        featured,
        active: true,
    }
}
