pub mod assembler;
pub mod focus;
pub mod generator;
pub mod lines;
pub mod prompt;
pub mod scripts;
pub mod splitter;

pub use focus::{detect_topic_focus, TopicFocus};
pub use generator::{parse_reply, validate_topic, IdeaGenerator, IdeationError};
