//! Turn one detail-page URL into one availability record.

use crate::browser::PageSession;
use crate::config::{ACCEPTANCE_STATUS_SELECTOR, PRACTICE_NAME_SELECTOR};
use crate::error::ScanError;
use crate::report::AvailabilityRecord;
use tracing::debug;

/// Visit `url` and read the practice name and acceptance status.
///
/// A missing element is a hard error; there is no per-record skip. A present
/// element with no text yields an empty field.
pub async fn extract(
    session: &mut dyn PageSession,
    url: &str,
) -> Result<AvailabilityRecord, ScanError> {
    session.navigate(url).await?;

    let practice_name = read_field(session, PRACTICE_NAME_SELECTOR, url).await?;
    let acceptance_status = read_field(session, ACCEPTANCE_STATUS_SELECTOR, url).await?;

    debug!("extracted '{practice_name}' from {url}");
    Ok(AvailabilityRecord {
        practice_name,
        acceptance_status,
        detail_url: url.to_string(),
    })
}

async fn read_field(
    session: &mut dyn PageSession,
    selector: &str,
    url: &str,
) -> Result<String, ScanError> {
    session
        .inner_text(selector)
        .await?
        .ok_or_else(|| ScanError::ElementNotFound {
            selector: selector.to_string(),
            url: url.to_string(),
        })
}
