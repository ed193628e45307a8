use std::time::Duration;

use log::Level;

pub const SITE_TITLE: &str = "PixelPulse - Digital Marketing Agency";

/// Navbar switches to its solid style past this many pixels of scroll.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed header; in-page anchors land this far below the top.
pub const ANCHOR_SCROLL_OFFSET: f64 = 100.0;

/// How long the thank-you panel stays up before the form is cleared.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Round-trip time of the built-in submitter.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Upper bound on a single submission before it is treated as failed.
pub const SUBMISSION_TIMEOUT: Duration = Duration::from_secs(10);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
