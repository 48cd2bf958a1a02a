use std::path::PathBuf;

use crate::diff::build_unified_diff;
use crate::error::SyncResult;
use crate::fragment::derive_fragment;
use crate::fs::replace_file;
use crate::markers::{find_inline_script, locate_anchor};

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub strip_worker_block: bool,
    pub preserve_inline_script: bool,
    pub dry_run: bool,
    pub backup: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            strip_worker_block: true,
            preserve_inline_script: true,
            dry_run: false,
            backup: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyncRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub options: SyncOptions,
}

#[derive(Debug)]
pub struct SyncOutcome {
    pub changed: bool,
    pub diff: Option<String>,
    pub result: String,
}

pub fn apply_sync(request: SyncRequest) -> SyncResult<SyncOutcome> {
    let source = std::fs::read_to_string(&request.source)?;
    let dest = std::fs::read_to_string(&request.dest)?;

    let result = splice(&source, &dest, &request.options)?;

    if result == dest {
        return Ok(SyncOutcome {
            changed: false,
            diff: None,
            result,
        });
    }

    let diff = build_unified_diff(&dest, &result, &request.dest);

    if !request.options.dry_run {
        replace_file(&request.dest, &result, request.options.backup)?;
    }

    Ok(SyncOutcome {
        changed: true,
        diff,
        result,
    })
}

/// Rebuild the destination text with the anchor region replaced by the
/// derived fragment. Everything outside the region is copied through
/// byte for byte.
fn splice(source: &str, dest: &str, options: &SyncOptions) -> SyncResult<String> {
    let fragment = derive_fragment(source, options.strip_worker_block);
    let anchor = locate_anchor(dest)?;

    let preserved = if options.preserve_inline_script {
        find_inline_script(dest)
    } else {
        None
    };

    let mut rebuilt = String::with_capacity(dest.len() + fragment.len());
    rebuilt.push_str(&dest[..anchor.inner_start]);
    rebuilt.push_str("\n    ");
    rebuilt.push_str(fragment);
    if let Some(script) = preserved {
        rebuilt.push_str("\n\n");
        rebuilt.push_str(script);
    }
    rebuilt.push('\n');
    rebuilt.push_str(&dest[anchor.inner_end..]);

    Ok(rebuilt)
}
