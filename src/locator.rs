//! Resolve a postcode to the ordered list of practice detail URLs.

use crate::browser::PageSession;
use crate::config::{
    ScanConfig, POSTCODE_INPUT_SELECTOR, RESULT_LINK_SELECTOR, SEARCH_READY_SELECTOR,
    SEARCH_SUBMIT_SELECTOR,
};
use crate::error::ScanError;
use tracing::{debug, info};

/// Submit `postcode` on the search page and collect every result link.
///
/// URLs come back in the order the site lists them; no dedup, no pagination.
pub async fn collect_detail_urls(
    session: &mut dyn PageSession,
    config: &ScanConfig,
    postcode: &str,
) -> Result<Vec<String>, ScanError> {
    session.navigate(&config.search_url).await?;

    let ready = session
        .wait_for_selector(SEARCH_READY_SELECTOR, config.wait_timeout_secs)
        .await?;
    if !ready {
        return Err(ScanError::SiteUnavailable {
            timeout_secs: config.wait_timeout_secs,
        });
    }

    debug!("search form ready, submitting postcode '{postcode}'");
    session.type_into(POSTCODE_INPUT_SELECTOR, postcode).await?;
    session.click(SEARCH_SUBMIT_SELECTOR).await?;

    let urls = session.link_targets(RESULT_LINK_SELECTOR).await?;
    if urls.is_empty() {
        return Err(ScanError::InvalidPostcode {
            postcode: postcode.to_string(),
        });
    }

    info!("found {} practices near '{postcode}'", urls.len());
    Ok(urls)
}
