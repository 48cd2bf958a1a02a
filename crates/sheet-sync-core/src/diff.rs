use std::path::Path;

use similar::TextDiff;

pub fn build_unified_diff(original: &str, modified: &str, path: &Path) -> Option<String> {
    if original == modified {
        return None;
    }

    let name = path.display();
    let diff = TextDiff::from_lines(original, modified)
        .unified_diff()
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string();

    Some(diff)
}
