//! Scan configuration and the NHS page selectors.
//!
//! The selectors below are a contract with a third-party site. The NHS can
//! (and does) change its page markup without notice; when that happens,
//! extraction breaks and the selectors here are the place to fix it. There is
//! no fallback selector set and no compatibility guarantee.

use std::path::PathBuf;

/// The fixed search page for the NHS "find a dentist" service.
pub const SEARCH_URL: &str = "https://www.nhs.uk/service-search/find-a-dentist";

/// Present once the search form has finished loading.
pub const SEARCH_READY_SELECTOR: &str = ".nhsuk-button";

/// The postcode input control on the search page.
pub const POSTCODE_INPUT_SELECTOR: &str = ".nhsuk-input";

/// The search submit button.
pub const SEARCH_SUBMIT_SELECTOR: &str = ".nhsuk-u-margin-bottom-4";

/// Anchor elements linking to each practice's detail page, in page order.
pub const RESULT_LINK_SELECTOR: &str = ".results__item .results__name a";

/// Practice name heading on a detail page.
pub const PRACTICE_NAME_SELECTOR: &str = "#page-heading-org-name";

/// Acceptance-status text immediately following its header element.
pub const ACCEPTANCE_STATUS_SELECTOR: &str = "#dentist_taking_patients_header ~ *";

/// Settings for one scan run.
///
/// Passed explicitly into the locator and extractor rather than living as
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Search page URL.
    pub search_url: String,
    /// How long to wait for the search form to become ready, in seconds.
    pub wait_timeout_secs: u64,
    /// Run Chromium headless.
    pub headless: bool,
    /// Directory for per-postcode log files.
    pub results_dir: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            wait_timeout_secs: 200,
            headless: true,
            results_dir: PathBuf::from("./results"),
        }
    }
}
