use ideagraph_core::model::{Format, Platform};

// " x " is space-padded so the letter inside ordinary words never matches.
const PLATFORM_KEYWORDS: &[(&str, Platform)] = &[
    ("instagram", Platform::Instagram),
    ("tiktok", Platform::TikTok),
    ("youtube", Platform::YouTube),
    ("linkedin", Platform::LinkedIn),
    ("twitter", Platform::TwitterX),
    (" x ", Platform::TwitterX),
    ("facebook", Platform::Facebook),
];

const FORMAT_KEYWORDS: &[(&str, Format)] = &[
    ("reel", Format::Video),
    ("reels", Format::Video),
    ("carousel", Format::Carousel),
    ("video", Format::Video),
    ("short", Format::Short),
    ("story", Format::Story),
    ("stories", Format::Story),
    ("photo", Format::Photo),
    ("graphic", Format::Graphics),
];

/// Platforms and formats the topic explicitly asks for. Empty means no narrowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicFocus {
    pub platforms: Vec<Platform>,
    pub formats: Vec<Format>,
}

impl TopicFocus {
    pub fn has_platform_focus(&self) -> bool {
        !self.platforms.is_empty()
    }

    pub fn has_format_focus(&self) -> bool {
        !self.formats.is_empty()
    }

    pub fn is_narrowed(&self) -> bool {
        self.has_platform_focus() || self.has_format_focus()
    }

    /// Platforms to cycle through: the detected ones, or every platform.
    pub fn applicable_platforms(&self) -> &[Platform] {
        if self.platforms.is_empty() {
            &Platform::ALL[..]
        } else {
            self.platforms.as_slice()
        }
    }

    pub fn applicable_formats(&self) -> &[Format] {
        if self.formats.is_empty() {
            &Format::ALL[..]
        } else {
            self.formats.as_slice()
        }
    }
}

pub fn detect_topic_focus(topic: &str) -> TopicFocus {
    let lowered = topic.to_lowercase();
    TopicFocus {
        platforms: matching_labels(&lowered, PLATFORM_KEYWORDS),
        formats: matching_labels(&lowered, FORMAT_KEYWORDS),
    }
}

fn matching_labels<T: Copy + PartialEq>(lowered: &str, table: &[(&str, T)]) -> Vec<T> {
    let mut labels = Vec::new();
    for (keyword, label) in table {
        if lowered.contains(keyword) && !labels.contains(label) {
            labels.push(*label);
        }
    }
    labels
}
