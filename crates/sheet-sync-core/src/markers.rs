use std::ops::Range;

use regex::Regex;

use crate::error::{SyncError, SyncResult};

pub const BODY_OPEN: &str = "<body>";
pub const BODY_CLOSE: &str = "</body>";

/// Byte offsets of the region rewritten on every sync.
///
/// `inner_start` sits immediately after the opening body tag, `inner_end` is
/// where the closing body tag begins. Whitespace adjacent to either tag
/// belongs to the region, so repeated syncs rebuild the same canonical shell
/// instead of stacking indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorRegion {
    pub inner_start: usize,
    pub inner_end: usize,
}

fn body_close_re() -> Regex {
    Regex::new(r"\s*</body>").expect("marker pattern compiles")
}

fn worker_block_re() -> Regex {
    Regex::new(r#"(?s)<script type="text/worker">.*?</script>"#).expect("marker pattern compiles")
}

fn inline_script_re() -> Regex {
    Regex::new(r"(?s)<script>.*?</script>").expect("marker pattern compiles")
}

pub fn locate_anchor(content: &str) -> SyncResult<AnchorRegion> {
    let open = content
        .find(BODY_OPEN)
        .ok_or(SyncError::MissingAnchor { marker: BODY_OPEN })?;
    let inner_start = open + BODY_OPEN.len();

    // The close marker must follow the open marker; a stray </body> earlier
    // in the file does not count.
    let close = body_close_re()
        .find_at(content, inner_start)
        .ok_or(SyncError::MissingAnchor { marker: BODY_CLOSE })?;
    let inner_end = close.end() - BODY_CLOSE.len();

    Ok(AnchorRegion {
        inner_start,
        inner_end,
    })
}

/// First worker-script block in the source, if any.
pub fn find_worker_block(content: &str) -> Option<Range<usize>> {
    worker_block_re().find(content).map(|m| m.range())
}

/// First plain inline script block, kept verbatim across syncs. Worker
/// blocks carry a type attribute and never match here.
pub fn find_inline_script(content: &str) -> Option<&str> {
    inline_script_re().find(content).map(|m| m.as_str())
}
