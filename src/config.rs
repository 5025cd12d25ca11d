//! Site Configuration
//!
//! Fixed endpoints, storage keys and timings.

/// Form relay that forwards contact submissions by email
pub const FORM_RELAY_ENDPOINT: &str = "https://formspree.io/f/mvgqgjer";

/// Remote résumé (dl=1 forces a download instead of the preview page)
pub const RESUME_URL: &str = "https://www.dropbox.com/scl/fi/n1whabv522gkqhk5e3qv9/Tanvin_Waseef_Resume.pdf?rlkey=qek6k2c1d7ljta8dr0e6seezf&st=9i1yr4i9&dl=1";
pub const RESUME_FILE_NAME: &str = "Tanvin_Waseef_Resume.pdf";

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

// ========================
// Timings (milliseconds)
// ========================

pub const SPLASH_DURATION_MS: u32 = 1500;
pub const TOAST_DURATION_MS: u32 = 5000;
/// Delay between consecutive timeline entries, skill bars and stats
pub const STAGGER_STEP_MS: u32 = 100;
pub const COUNTER_TICK_MS: u32 = 30;
pub const COUNTER_TICKS: u32 = 50;

// ========================
// Layout
// ========================

/// Scroll offset after which the navbar background turns more opaque
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;
pub const STAR_COUNT: usize = 50;

/// Hero content drifts down by up to `HERO_MAX_SHIFT_PX` over the first
/// `HERO_SHIFT_RANGE_PX` of scroll and fades out over `HERO_FADE_RANGE_PX`
pub const HERO_SHIFT_RANGE_PX: f64 = 500.0;
pub const HERO_MAX_SHIFT_PX: f64 = 150.0;
pub const HERO_FADE_RANGE_PX: f64 = 300.0;
