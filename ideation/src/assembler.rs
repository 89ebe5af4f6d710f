use crate::lines::ParsedIdea;
use crate::scripts::ScriptBlocks;
use chrono::{DateTime, Utc};
use ideagraph_core::model::{EdgeType, GraphMetadata, IdeaEdge, IdeaGraph, IdeaNode};

/// Version tag stamped on every graph this engine produces.
pub const ENGINE_VERSION: &str = "2.5-gemini";

const HIERARCHICAL_EDGES: usize = 2;

pub fn node_id(position: usize) -> String {
    format!("idea-{position}")
}

/// Turns parsed ideas into a hub graph: the first idea links to every other one.
pub fn assemble_graph(
    topic: &str,
    ideas: Vec<ParsedIdea>,
    scripts: &ScriptBlocks,
    generated_at: DateTime<Utc>,
) -> IdeaGraph {
    let nodes: Vec<IdeaNode> = ideas
        .into_iter()
        .enumerate()
        .map(|(index, idea)| {
            let position = index + 1;
            let script = if idea.is_video_like() {
                scripts.get(position).map(str::to_string)
            } else {
                None
            };

            IdeaNode {
                id: node_id(position),
                label: idea.label,
                description: idea.description,
                platform: idea.platform,
                format: idea.format,
                script,
                node_type: idea.node_type,
            }
        })
        .collect();

    let edges = hub_edges(&nodes);

    IdeaGraph {
        nodes,
        edges,
        metadata: GraphMetadata {
            topic: topic.to_string(),
            generated_at,
            version: ENGINE_VERSION.to_string(),
        },
    }
}

fn hub_edges(nodes: &[IdeaNode]) -> Vec<IdeaEdge> {
    let Some((hub, rest)) = nodes.split_first() else {
        return Vec::new();
    };

    rest.iter()
        .enumerate()
        .map(|(idx, node)| IdeaEdge {
            id: format!("edge-{}", idx + 1),
            source: hub.id.clone(),
            target: node.id.clone(),
            edge_type: if idx < HIERARCHICAL_EDGES {
                EdgeType::Hierarchical
            } else {
                EdgeType::Related
            },
        })
        .collect()
}
