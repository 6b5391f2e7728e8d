pub mod announcement;
pub mod business;
pub mod contact;
pub mod donation;
pub mod event;
pub mod program;
pub mod registration;
pub mod user;

/// Defaults applied when a create request omits the field.
pub(crate) mod defaults {
    pub const PROGRAM_LOCATION: &str = "Main Prayer Hall";
    pub const REGISTRATION_ATTENDEES: u32 = 1;

    pub fn active() -> bool {
        true
    }

    pub fn registration_required() -> bool {
        true
    }

    pub fn program_location() -> String {
        PROGRAM_LOCATION.to_string()
    }

    pub fn attendees() -> u32 {
        REGISTRATION_ATTENDEES
    }
}

/// Overwrites `target` when the patch carries a value.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Like [`merge`] for nullable fields: a present value replaces the stored one.
pub(crate) fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
