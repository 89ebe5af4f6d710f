use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^([0-9]+):\s*HOOK:\s*").expect("valid hook regex"));

/// Script text keyed by the 1-based idea number printed in `N: HOOK:`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBlocks {
    blocks: HashMap<usize, String>,
}

impl ScriptBlocks {
    pub fn get(&self, idea_number: usize) -> Option<&str> {
        self.blocks.get(&idea_number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

struct OpenBlock {
    number: usize,
    lines: Vec<String>,
}

pub fn parse_script_blocks(section: &str) -> ScriptBlocks {
    let mut scripts = ScriptBlocks::default();
    let mut current: Option<OpenBlock> = None;

    for line in section.lines() {
        if let Some(number) = block_number(line) {
            flush(&mut scripts, current.take());
            // A number too large to address any idea opens nothing; its lines are dropped.
            current = number.map(|number| OpenBlock {
                number,
                lines: vec![line.to_string()],
            });
        } else if let Some(block) = current.as_mut() {
            if !line.is_empty() {
                block.lines.push(line.to_string());
            }
        }
    }
    flush(&mut scripts, current);

    scripts
}

/// `None` for ordinary lines, `Some(None)` for an opener whose number overflows.
fn block_number(line: &str) -> Option<Option<usize>> {
    BLOCK_START
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse().ok())
}

fn flush(scripts: &mut ScriptBlocks, block: Option<OpenBlock>) {
    if let Some(block) = block {
        let text = block.lines.join("\n").trim().to_string();
        scripts.blocks.insert(block.number, text);
    }
}
