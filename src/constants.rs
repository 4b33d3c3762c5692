//! Global constants for the startup-report application.
//!
//! Spoken phrases and default tuning values live here so the reporters
//! and the configuration layer agree on them.

// Tuning defaults
/// Battery percentage below which an unplugged battery is reported as low
pub const DEFAULT_LOW_BATTERY_THRESHOLD: u8 = 20;

/// CPU sampling window in milliseconds
pub const DEFAULT_CPU_SAMPLE_WINDOW_MS: u64 = 1000;

/// Address used for the outbound connectivity probe
pub const DEFAULT_PROBE_ADDRESS: &str = "8.8.8.8:53";

/// Connectivity probe timeout in seconds
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 3;

/// Pause after the farewell before the process exits
pub const DEFAULT_FAREWELL_PAUSE_SECS: u64 = 2;

/// Speech rate in words per minute
pub const DEFAULT_SPEECH_RATE: u32 = 185;

/// Words per minute the Windows synthesizer speaks at rate 0
pub const SAPI_BASE_RATE_WPM: i32 = 180;

// Sentinel values
pub const UNKNOWN_NETWORK: &str = "Unknown Network";

// Bracketing phrases
pub const GREETING: &str = "Let's begin your startup report.";
pub const FAREWELL: &str = "Goodbye!";

// Fallback phrases
pub const MSG_BATTERY_UNAVAILABLE: &str = "Battery information is not available on this device.";
pub const MSG_BATTERY_LOW: &str = "Warning! Battery is low, please plug in your charger.";
pub const MSG_IDENTITY_FAILED: &str = "Unable to fetch system information at the moment.";
pub const MSG_NO_INTERNET: &str = "No internet connection detected.";
pub const MSG_WIFI_NAME_FAILED: &str = "Connected to internet, but unable to fetch Wi-Fi name.";
pub const MSG_BRIGHTNESS_NOT_INSTALLED: &str = "Brightness control module is not installed.";
pub const MSG_BRIGHTNESS_FAILED: &str = "Unable to fetch brightness information.";
pub const MSG_VOLUME_NOT_INSTALLED: &str = "Volume control module is not installed.";
pub const MSG_VOLUME_FAILED: &str = "Unable to fetch volume information.";

// Platform paths
pub const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";
pub const BACKLIGHT_PATH: &str = "/sys/class/backlight";
