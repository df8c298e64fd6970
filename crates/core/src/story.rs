//! Story scene editing rules.

/// Entity label used in not-found errors for scenes.
pub const SCENE_ENTITY: &str = "Scene";

/// Trim every line and drop the ones left empty.
///
/// `script` and `actions` are stored in this form no matter what the
/// client sent.
pub fn normalize_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == line.len() {
                Some(line)
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
