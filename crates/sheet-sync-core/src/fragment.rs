use crate::markers::find_worker_block;

/// Derive the markup fragment to splice into the preview.
///
/// With `strip_worker_block` set, the source is cut at the first
/// worker-script block; the block and everything after it are dropped. The
/// result is always trimmed of surrounding whitespace.
pub fn derive_fragment(source: &str, strip_worker_block: bool) -> &str {
    let cut = if strip_worker_block {
        find_worker_block(source)
            .map(|block| block.start)
            .unwrap_or(source.len())
    } else {
        source.len()
    };

    source[..cut].trim()
}
