//! Filename helpers for downloaded attachments

/// Replacement for characters that cannot appear in a filename
const REPLACEMENT: char = '_';

/// Characters rejected by at least one mainstream filesystem
///
/// Control characters (U+0000..=U+001F) are rejected separately.
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

fn is_illegal(c: char) -> bool {
    (c as u32) < 0x20 || ILLEGAL_CHARS.contains(&c)
}

/// Make a string safe to use as a filename
///
/// Every character that is illegal on Windows, macOS or Linux is replaced by `_`.
/// The result never contains an illegal character, so applying this twice
/// gives the same string as applying it once.
///
/// # Examples
///
/// ```
/// use sprint_dl::utils::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Login: fails / retry?"), "Login_ fails _ retry_");
/// assert_eq!(sanitize_filename(""), "");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if is_illegal(c) { REPLACEMENT } else { c })
        .collect()
}

/// Extension of `filename` including the leading dot, or `""`
///
/// Only the last path component is inspected. A trailing dot yields no
/// extension, and a leading-dot name such as `.bashrc` is its own extension.
///
/// # Examples
///
/// ```
/// use sprint_dl::utils::file_extension;
///
/// assert_eq!(file_extension("archive.tar.gz"), ".gz");
/// assert_eq!(file_extension("README"), "");
/// ```
pub fn file_extension(filename: &str) -> &str {
    let name = filename
        .rfind(['/', '\\'])
        .map_or(filename, |idx| &filename[idx + 1..]);
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[idx..],
        _ => "",
    }
}

/// Destination filename for an attachment: the issue summary plus the
/// attachment's extension, sanitized as a whole
///
/// A result of `""`, `.` or `..` is replaced by `_` so the name always
/// points at a file inside the output directory.
pub fn destination_file_name(summary: &str, filename: &str) -> String {
    let name = sanitize_filename(&format!("{}{}", summary, file_extension(filename)));
    match name.as_str() {
        "" | "." | ".." => REPLACEMENT.to_string(),
        _ => name,
    }
}
