use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Scroll and timer traces while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn get_site_url() -> &'static str {
    option_env!("SITE_URL").unwrap_or("https://www.aesthetixagency.com")
}

// Form relay that forwards contact applications by email.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xaqeaqaj";

pub const CONTACT_EMAIL: &str = "info@aesthetixagency.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/agencyaesthetix/";

pub const HERO_INTERVAL_MS: u32 = 4000;
pub const NAV_FADE_MS: u32 = 150;

// Fractions of the viewport height where the fan starts and finishes opening.
pub const FAN_START: f64 = 0.75;
pub const FAN_END: f64 = 0.10;
pub const FAN_HEADER_REVEAL: f64 = 0.90;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_FRAME_MS: u32 = 16;
