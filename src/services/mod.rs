pub mod announcements;
pub mod businesses;
pub mod contact;
pub mod donations;
pub mod events;
pub mod metrics;
pub mod prayer_times;
pub mod programs;
