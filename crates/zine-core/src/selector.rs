use tracing::{debug, trace};

use crate::catalog::ContentCatalog;

/// Show the block whose identifier equals `code` and hide every other one.
///
/// A code with no matching block leaves everything hidden. That is a gap in
/// the catalog, not a failure, so it is only reported at debug level.
pub fn select<C>(catalog: &mut C, code: &str)
where
    C: ContentCatalog + ?Sized,
{
    catalog.deactivate_all();
    if catalog.activate(code) {
        trace!(code, "instruction block activated");
    } else {
        debug!(code, "no instruction block for code; nothing displayed");
    }
}
