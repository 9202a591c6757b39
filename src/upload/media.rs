use mime_guess::mime::{self, Mime};
use std::path::Path;

/// Extensions offered by the file dialog filter: every known video and
/// image extension.
pub fn accepted_extensions() -> Vec<&'static str> {
    ["video/*", "image/*"]
        .iter()
        .filter_map(|pattern| mime_guess::get_mime_extensions_str(pattern))
        .flat_map(|exts| exts.iter().copied())
        .collect()
}

/// Content type sent with the file part.
pub fn mime_for_path(path: &Path) -> Mime {
    mime_guess::from_path(path).first_or_octet_stream()
}

pub fn is_supported_file(path: &Path) -> bool {
    mime_guess::from_path(path)
        .iter()
        .any(|guess| guess.type_() == mime::VIDEO || guess.type_() == mime::IMAGE)
}
