//! Application constants.
//!
//! Centralizes endpoint defaults and output markers.

/// Remote verse endpoint defaults.
pub mod endpoint {
    /// Default verse lookup URL.
    pub const DEFAULT_URL: &str = "http://ibibles.net/quote.php";

    /// Translation prefix placed before the lookup key (`kor-john/3:16`).
    pub const TRANSLATION_PREFIX: &str = "kor";

    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
}

/// Callout rendering constants.
pub mod callout {
    /// Header marker for a collapsible, expanded quote callout.
    pub const HEADER_MARKER: &str = "[!quote]+";

    /// Prefix that marks a line as part of the quote block.
    pub const LINE_PREFIX: &str = "> ";
}

/// Settings store constants.
pub mod settings {
    /// Directory name under the platform config dir.
    pub const APP_DIR: &str = "korbible";

    /// Settings file name.
    pub const FILE_NAME: &str = "settings.json";

    /// Default value of the free-form setting.
    pub const DEFAULT_MY_SETTING: &str = "default";
}
