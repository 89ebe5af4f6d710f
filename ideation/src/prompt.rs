use crate::focus::TopicFocus;
use ideagraph_core::model::{Format, Platform};

/// Line separating the idea list from the script blocks in a model reply.
pub const VIDEO_SCRIPTS_MARKER: &str = "VIDEO SCRIPTS:";

const MIN_IDEAS: usize = 7;

pub fn compose_prompt(topic: &str, focus: &TopicFocus) -> String {
    format!(
        r#"
You are an elite AI content strategist, digital marketer, and digital content creator.

Your mission:
Generate a **week's worth of content plans** (at least {min_ideas} strong ideas) for the topic below.
Each plan should feel like a standalone, publish-ready idea.

You must:
- Think like a senior content strategist, senior digital marketer and senior digital content creator
- Break the topic into interesting angles and create a content plan for each angle
- Ensure ideas are original and non-generic
- Avoid repetition and fluff
- Make ideas practical and execution-ready
{focus}
CRITICAL FOR VIDEO / REEL IDEAS:
- Many ideas should be best suited for Instagram or TikTok video / reels.
- For each such video/reel idea you MUST also generate a short script (see below).

FORMAT RULES (STRICT):

PART 1 - Numbered ideas:
- First, output a numbered list. Each item MUST be exactly one line.
- Each line MUST follow: "<Title> - <Description>"
- Title = short, punchy, under 80 characters.
- Description = detailed explanation (caption, script hint, or talking point). One line only.

PART 2 - Video scripts (only for video/reel/short ideas):
- After the numbered list, add a blank line, then the line: {marker}
- For each idea that is a video/reel/short-style idea (by its number N), output a block exactly like this (one block per video idea, in order by N):

N: HOOK: <one line - the opening hook, specific to this idea>
SCENE 1: <one line - what happens in scene 1>
SCENE 2: <one line - what happens in scene 2>
SCENE 3: <one line - what happens in scene 3>
CTA: <one line - call to action>

- Replace N with the idea number (1, 2, 3...). Generate creative, specific script lines for that idea, not generic text. No blank line between the "N:" line and HOOK/SCENE/CTA lines; one blank line after each block before the next "N:".
- Skip non-video ideas (e.g. carousel, static graphic). Only output blocks for ideas that are video/reel/short.

DO NOT:
- Add commentary or markdown outside the format above
- Add explanations before or after the list
- Mention "pillars" or "steps"

Topic: {topic}
"#,
        min_ideas = MIN_IDEAS,
        focus = focus_instruction(focus),
        marker = VIDEO_SCRIPTS_MARKER,
        topic = topic,
    )
}

fn focus_instruction(focus: &TopicFocus) -> String {
    if !focus.is_narrowed() {
        return format!(
            "- Mix different platforms ({}) and content types ({}).\n",
            join_labels(Platform::ALL.iter().map(Platform::label)),
            join_labels(Format::ALL.iter().map(|f| f.label().to_lowercase())),
        );
    }

    let mut out =
        String::from("\nIMPORTANT - The topic explicitly mentions preferred channel or content type:\n");
    if focus.has_platform_focus() {
        out.push_str(&format!(
            "- Generate ideas ONLY for these platforms: {}.\n",
            join_labels(focus.platforms.iter().map(Platform::label))
        ));
    }
    if focus.has_format_focus() {
        out.push_str(&format!(
            "- Generate ideas ONLY for these content types: {}.\n",
            join_labels(focus.formats.iter().map(Format::label))
        ));
    }
    out.push_str("Do not mix in other platforms or formats; stick to what the user asked for.\n");
    out
}

fn join_labels<S: AsRef<str>>(labels: impl Iterator<Item = S>) -> String {
    labels
        .map(|label| label.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
