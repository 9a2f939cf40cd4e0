use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const CONTACT_ACKNOWLEDGEMENT: &str = "Thank you for your message! I will get back to you soon.";
