//! Scan orchestration: locator once, then extractor per URL, in order.

use crate::browser::PageSession;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extractor;
use crate::locator;
use crate::progress::ScanProgress;
use crate::report::AvailabilityRecord;

/// Run one full scan for `postcode`.
///
/// The session is closed on every exit path, exactly once. On success the
/// record count equals the URL count, in the same order the site listed them.
pub async fn run_scan(
    session: &mut dyn PageSession,
    config: &ScanConfig,
    postcode: &str,
    show_progress: bool,
) -> Result<Vec<AvailabilityRecord>, ScanError> {
    let result = scan_inner(session, config, postcode, show_progress).await;
    let closed = session.close().await;
    match result {
        Ok(records) => {
            closed?;
            Ok(records)
        }
        // The scan error takes precedence over any teardown error
        Err(e) => Err(e),
    }
}

async fn scan_inner(
    session: &mut dyn PageSession,
    config: &ScanConfig,
    postcode: &str,
    show_progress: bool,
) -> Result<Vec<AvailabilityRecord>, ScanError> {
    let urls = locator::collect_detail_urls(session, config, postcode).await?;

    let progress = show_progress.then(|| ScanProgress::new(urls.len() as u64));
    let mut records = Vec::with_capacity(urls.len());
    for url in &urls {
        let record = extractor::extract(session, url).await?;
        records.push(record);
        if let Some(p) = &progress {
            p.record_done();
        }
    }
    if let Some(p) = &progress {
        p.finish();
    }

    Ok(records)
}
