use regex::Regex;
use std::sync::LazyLock;

static VIDEO_SCRIPTS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*VIDEO SCRIPTS[ \t]*:[ \t\r]*$").expect("valid marker regex")
});

/// The two halves of a model reply, both trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSections<'a> {
    pub idea_list: &'a str,
    pub scripts: &'a str,
}

/// Splits at the first `VIDEO SCRIPTS:` line. Without the marker the whole reply
/// is the idea list and the script section is empty.
pub fn split_response(raw: &str) -> ResponseSections<'_> {
    match VIDEO_SCRIPTS_LINE.find(raw) {
        Some(marker) => ResponseSections {
            idea_list: raw[..marker.start()].trim(),
            scripts: raw[marker.end()..].trim(),
        },
        None => ResponseSections {
            idea_list: raw.trim(),
            scripts: "",
        },
    }
}
