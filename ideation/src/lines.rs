use crate::focus::TopicFocus;
use ideagraph_core::model::{Format, NodeType, Platform};
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_LABEL_CHARS: usize = 80;
const TRUNCATED_LABEL_CHARS: usize = MAX_LABEL_CHARS - 3;
const TITLE_SEPARATOR: &str = " - ";

// ASCII digits only; `\d` would also accept other scripts' numerals.
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[).\s]").expect("valid numbering regex"));
static NUMBERING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[).\s]*").expect("valid numbering regex"));

/// One idea line after cleanup, before it becomes a graph node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdea {
    pub label: String,
    pub description: String,
    pub node_type: NodeType,
    pub platform: Platform,
    pub format: Format,
}

impl ParsedIdea {
    /// Only Instagram/TikTok video-style ideas may carry a script.
    pub fn is_video_like(&self) -> bool {
        matches!(self.platform, Platform::Instagram | Platform::TikTok)
            && matches!(self.format, Format::Video | Format::Short | Format::Story)
    }
}

/// Keeps numbered lines when the model numbered anything, otherwise every
/// non-empty line.
pub fn select_idea_lines(section: &str) -> Vec<&str> {
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let numbered: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|line| NUMBERED_LINE.is_match(line))
        .collect();

    if numbered.is_empty() {
        lines
    } else {
        numbered
    }
}

pub fn parse_idea_line(line: &str, index: usize, topic: &str, focus: &TopicFocus) -> ParsedIdea {
    let position = index + 1;
    let cleaned = NUMBERING_PREFIX.replace(line, "");
    let cleaned = cleaned.trim();

    let (title, description) = match cleaned.split_once(TITLE_SEPARATOR) {
        Some((title, description)) => (title.trim(), description.trim()),
        None => (cleaned, ""),
    };

    let label = if title.chars().count() > MAX_LABEL_CHARS {
        let mut truncated: String = title.chars().take(TRUNCATED_LABEL_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else if title.is_empty() {
        format!("Idea {position}")
    } else {
        title.to_string()
    };

    let description = if !description.is_empty() {
        description.to_string()
    } else if !cleaned.is_empty() {
        cleaned.to_string()
    } else {
        format!("Generated idea {position} for {topic}.")
    };

    let platforms = focus.applicable_platforms();
    let formats = focus.applicable_formats();

    ParsedIdea {
        label,
        description,
        node_type: node_type_at(index),
        platform: platforms[index % platforms.len()],
        format: formats[index % formats.len()],
    }
}

pub fn parse_idea_lines(section: &str, topic: &str, focus: &TopicFocus) -> Vec<ParsedIdea> {
    select_idea_lines(section)
        .into_iter()
        .enumerate()
        .map(|(index, line)| parse_idea_line(line, index, topic, focus))
        .collect()
}

fn node_type_at(index: usize) -> NodeType {
    match index {
        0 => NodeType::Main,
        1 | 2 => NodeType::Sub,
        _ => NodeType::Related,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::detect_topic_focus;

    fn parse(line: &str, index: usize) -> ParsedIdea {
        parse_idea_line(line, index, "Mindful productivity", &TopicFocus::default())
    }

    #[test]
    fn test_numbered_lines_win_over_chatter() {
        let section = "Here are your ideas:\n1) Deep Work - Block time\n\n2. Walks - Think outside\n3 Journaling - Reflect\nEnjoy!";
        assert_eq!(
            select_idea_lines(section),
            vec![
                "1) Deep Work - Block time",
                "2. Walks - Think outside",
                "3 Journaling - Reflect"
            ]
        );
    }

    #[test]
    fn test_non_ascii_digits_do_not_count_as_numbering() {
        let section = "Intro line\n١٢ Arabic-indic numbered - desc";
        assert_eq!(
            select_idea_lines(section),
            vec!["Intro line", "١٢ Arabic-indic numbered - desc"]
        );

        let idea = parse("١٢ Arabic-indic numbered - desc", 0);
        assert_eq!(idea.label, "١٢ Arabic-indic numbered");
    }

    #[test]
    fn test_unnumbered_reply_uses_every_line() {
        let section = "  Deep Work - Block time \n\n Walks - Think outside";
        assert_eq!(
            select_idea_lines(section),
            vec!["Deep Work - Block time", "Walks - Think outside"]
        );
    }

    #[test]
    fn test_title_and_description_split_on_first_separator() {
        let idea = parse("1. Short Title - A full description - with a dash.", 0);
        assert_eq!(idea.label, "Short Title");
        assert_eq!(idea.description, "A full description - with a dash.");
    }

    #[test]
    fn test_missing_separator_reuses_cleaned_line() {
        let idea = parse("4) Morning pages", 3);
        assert_eq!(idea.label, "Morning pages");
        assert_eq!(idea.description, "Morning pages");
    }

    #[test]
    fn test_hyphenated_words_are_not_separators() {
        let idea = parse("2. Self-care sprint", 1);
        assert_eq!(idea.label, "Self-care sprint");
        assert_eq!(idea.description, "Self-care sprint");
    }

    #[test]
    fn test_empty_line_content_synthesizes_label_and_description() {
        let idea = parse("5.", 4);
        assert_eq!(idea.label, "Idea 5");
        assert_eq!(idea.description, "Generated idea 5 for Mindful productivity.");
    }

    #[test]
    fn test_leading_dash_stays_in_title() {
        // After trimming there is no space before the dash, so no split happens.
        let idea = parse("1.  - Only a description", 0);
        assert_eq!(idea.label, "- Only a description");
        assert_eq!(idea.description, "- Only a description");
    }

    #[test]
    fn test_long_title_is_truncated_to_eighty_chars() {
        let title = "A".repeat(95);
        let idea = parse(&format!("1. {title} - desc"), 0);
        assert_eq!(idea.label.chars().count(), 80);
        assert!(idea.label.ends_with("..."));
        assert_eq!(&idea.label[..77], &title[..77]);
    }

    #[test]
    fn test_title_of_exactly_eighty_chars_is_kept() {
        let title = "B".repeat(80);
        let idea = parse(&format!("1. {title} - desc"), 0);
        assert_eq!(idea.label, title);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let title = "é".repeat(90);
        let idea = parse(&format!("1. {title}"), 0);
        assert_eq!(idea.label.chars().count(), 80);
        assert!(idea.label.starts_with("ééé"));
    }

    #[test]
    fn test_node_type_is_positional() {
        let types: Vec<NodeType> = (0..5).map(node_type_at).collect();
        assert_eq!(
            types,
            vec![
                NodeType::Main,
                NodeType::Sub,
                NodeType::Sub,
                NodeType::Related,
                NodeType::Related
            ]
        );
    }

    #[test]
    fn test_platform_and_format_cycle_through_applicable_sets() {
        let focus = detect_topic_focus("TikTok and YouTube video or carousel");
        let ideas: Vec<ParsedIdea> = (0..4)
            .map(|i| parse_idea_line("1. X - y", i, "t", &focus))
            .collect();

        let platforms: Vec<Platform> = ideas.iter().map(|idea| idea.platform).collect();
        let formats: Vec<Format> = ideas.iter().map(|idea| idea.format).collect();
        assert_eq!(
            platforms,
            vec![
                Platform::TikTok,
                Platform::YouTube,
                Platform::TikTok,
                Platform::YouTube
            ]
        );
        assert_eq!(
            formats,
            vec![
                Format::Carousel,
                Format::Video,
                Format::Carousel,
                Format::Video
            ]
        );
    }

    #[test]
    fn test_video_like_requires_both_platform_and_format() {
        let mut idea = parse("1. X - y", 0);
        idea.platform = Platform::Instagram;
        idea.format = Format::Story;
        assert!(idea.is_video_like());

        idea.format = Format::Carousel;
        assert!(!idea.is_video_like());

        idea.platform = Platform::YouTube;
        idea.format = Format::Video;
        assert!(!idea.is_video_like());
    }

    #[test]
    fn test_parse_idea_lines_defaults_cycle_over_full_sets() {
        let section = (1..=7)
            .map(|n| format!("{n}. Title {n} - Desc {n}"))
            .collect::<Vec<_>>()
            .join("\n");
        let ideas = parse_idea_lines(&section, "t", &TopicFocus::default());

        assert_eq!(ideas.len(), 7);
        assert_eq!(ideas[0].platform, Platform::Instagram);
        assert_eq!(ideas[0].format, Format::Carousel);
        assert_eq!(ideas[1].platform, Platform::TikTok);
        assert_eq!(ideas[1].format, Format::Video);
        assert_eq!(ideas[6].platform, Platform::Instagram);
        assert_eq!(ideas[6].label, "Title 7");
    }
}
