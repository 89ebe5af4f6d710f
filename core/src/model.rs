use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
    LinkedIn,
    #[serde(rename = "Twitter/X")]
    TwitterX,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Instagram,
        Platform::TikTok,
        Platform::YouTube,
        Platform::LinkedIn,
        Platform::TwitterX,
        Platform::Facebook,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::LinkedIn => "LinkedIn",
            Platform::TwitterX => "Twitter/X",
            Platform::Facebook => "Facebook",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    Carousel,
    Video,
    Photo,
    Short,
    Story,
    Graphics,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Carousel,
        Format::Video,
        Format::Photo,
        Format::Short,
        Format::Story,
        Format::Graphics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Format::Carousel => "Carousel",
            Format::Video => "Video",
            Format::Photo => "Photo",
            Format::Short => "Short",
            Format::Story => "Story",
            Format::Graphics => "Graphics",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Positional role of a node in the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Main,
    Sub,
    Related,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    Hierarchical,
    Related,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaNode {
    pub id: String,
    pub label: String,
    pub description: String,
    pub platform: Platform,
    pub format: Format,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(rename = "type")]
    pub node_type: NodeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    pub topic: String,
    pub generated_at: DateTime<Utc>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaGraph {
    pub nodes: Vec<IdeaNode>,
    pub edges: Vec<IdeaEdge>,
    pub metadata: GraphMetadata,
}

impl IdeaGraph {
    pub fn hub(&self) -> Option<&IdeaNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: &str) -> Option<&IdeaNode> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_serializes_wire_names() {
        let node = IdeaNode {
            id: "idea-1".to_string(),
            label: "Thread".to_string(),
            description: "A thread".to_string(),
            platform: Platform::TwitterX,
            format: Format::Graphics,
            script: None,
            node_type: NodeType::Main,
        };

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["platform"], "Twitter/X");
        assert_eq!(json["format"], "Graphics");
        assert_eq!(json["type"], "main");
        assert!(json.get("script").is_none());
    }

    #[test]
    fn test_metadata_uses_camel_case() {
        let metadata = GraphMetadata {
            topic: "Mindful productivity".to_string(),
            generated_at: Utc::now(),
            version: "2.5-gemini".to_string(),
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("generatedAt").is_some());
        assert_eq!(json["version"], "2.5-gemini");
    }

    #[test]
    fn test_platform_labels_match_display() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string(), platform.label());
        }
        assert_eq!(Format::ALL.len(), 6);
    }
}
