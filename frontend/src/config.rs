//! Application configuration.
//!
//! Centralized UI constants for the AI QC page. Workflow constants (formats,
//! timing) live in `aiqc::config`.

/// Brand shown in the navigation bar and footer.
pub const APP_NAME: &str = "AI QC";

/// Company name in the footer.
pub const COMPANY_NAME: &str = "Deeppaper";

/// Contact QR code shown once a report is "ready".
pub const CONTACT_QR_SRC: &str = "assets/contact-qr.jpg";

/// Hero background image.
pub const HERO_IMAGE_SRC: &str = "assets/ai-qc-hero.jpg";

/// Scroll offset (px) after which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long a toast stays on screen (ms).
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Maximum toasts kept on screen; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

/// Promised report delivery window, in hours.
pub const REPORT_DELIVERY_HOURS: u32 = 24;
