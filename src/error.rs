//! Error taxonomy for a scan run.

use thiserror::Error;

/// Everything that can end a scan early.
///
/// `main` decides what each variant means for the process; library callers
/// get a typed value they can match on instead of a terminated process.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The search page never presented its form within the configured wait.
    #[error("search page did not become ready within {timeout_secs}s")]
    SiteUnavailable { timeout_secs: u64 },

    /// The search returned zero practices, which almost always means the
    /// postcode itself was not understood by the site.
    #[error("no practices found for postcode '{postcode}'")]
    InvalidPostcode { postcode: String },

    /// A detail page was missing an element we extract from.
    #[error("element '{selector}' not found on {url}")]
    ElementNotFound { selector: String, url: String },

    /// Browser engine or session fault.
    #[error(transparent)]
    Browser(#[from] anyhow::Error),
}
