//! Filename generation and sanitization.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of the random filename prefix.
const PREFIX_LEN: usize = 7;

/// Prefix a filename with a short random tag to disambiguate files that
/// share an original name, e.g. `image.jpg` -> `x3Fb9Qz_image.jpg`.
pub fn randomize_filename(name: &str) -> String {
    let prefix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PREFIX_LEN)
        .map(char::from)
        .collect();

    format!("{}_{}", prefix, sanitize_filename(name))
}

/// Replace characters that are unsafe in a filename.
///
/// The API declares filenames; a hostile or broken value must not be able to
/// escape the thread folder, so path separators are flattened along with the
/// usual problematic characters.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        "unnamed".to_string()
    } else {
        sanitized
    }
}
