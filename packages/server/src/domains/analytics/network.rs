// Hashtag/mention co-occurrence graph for the network visualization.
//
// Every post contributes a user node plus one node per unique hashtag and
// mention. Edges are deduplicated on (source, target, kind); a new edge
// increments both endpoints' connection counts, so repeated co-occurrence
// across posts grows the counters instead of duplicating edges.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use serde::Serialize;

use crate::domains::posts::Post;

/// Visual size cap for a node.
const MAX_NODE_WEIGHT: u32 = 10;

/// Fixed topic buckets for cluster coloring, in cluster-index order:
/// transportation, environment, safety, governance, economy.
const CLUSTER_KEYWORDS: [&[&str]; 5] = [
    &["macet", "transjakarta", "mrt"],
    &["banjir", "polusi", "bpbd", "lingkungan"],
    &["penjambretan", "polres", "keamanan"],
    &["dukcapil", "imb", "dkijakarta"],
    &["harga", "cabai", "pasar", "umkm"],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    User,
    Hashtag,
    Mention,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub weight: u32,
    pub cluster: usize,
    pub connections: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMeta {
    pub region: String,
    pub total_nodes: usize,
    pub total_edges: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub meta: GraphMeta,
}

struct NodeAcc {
    label: String,
    kind: NodeKind,
    connections: u32,
}

struct GraphBuilder {
    index: HashMap<String, usize>,
    nodes: Vec<(String, NodeAcc)>,
    edges: Vec<GraphEdge>,
    edge_keys: HashSet<String>,
}

impl GraphBuilder {
    fn new() -> Self {
        GraphBuilder {
            index: HashMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            edge_keys: HashSet::new(),
        }
    }

    fn add_node(&mut self, id: &str, label: &str, kind: NodeKind) {
        if !self.index.contains_key(id) {
            self.index.insert(id.to_string(), self.nodes.len());
            self.nodes.push((
                id.to_string(),
                NodeAcc {
                    label: label.to_string(),
                    kind,
                    connections: 0,
                },
            ));
        }
    }

    fn add_edge(&mut self, source: &str, target: &str, kind: NodeKind) {
        let key = format!("{source}-{target}-{}", kind_tag(kind));
        if !self.edge_keys.insert(key.clone()) {
            return;
        }
        self.edges.push(GraphEdge {
            id: key,
            source: source.to_string(),
            target: target.to_string(),
            kind,
        });
        for endpoint in [source, target] {
            if let Some(&position) = self.index.get(endpoint) {
                self.nodes[position].1.connections += 1;
            }
        }
    }
}

fn kind_tag(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::User => "user",
        NodeKind::Hashtag => "hashtag",
        NodeKind::Mention => "mention",
    }
}

/// Assign a cluster by keyword match against the five fixed topic buckets.
/// Unmatched labels get a deterministic pseudo-random bucket from an
/// FNV-1a hash of the lowercased label.
pub fn assign_cluster(label: &str) -> usize {
    let lower = label.to_lowercase();
    for (cluster, keywords) in CLUSTER_KEYWORDS.iter().enumerate() {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return cluster;
        }
    }
    (fnv1a(&lower) % CLUSTER_KEYWORDS.len() as u64) as usize
}

fn fnv1a(value: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in value.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Build the deduplicated graph from a batch of posts.
pub fn build_network_graph(posts: &[Post], region: &str) -> NetworkGraph {
    let mut builder = GraphBuilder::new();

    for post in posts {
        let user_id = format!("user-{}", post.username);
        builder.add_node(&user_id, &post.username, NodeKind::User);

        for hashtag in &post.hashtags {
            if hashtag.is_empty() {
                continue;
            }
            let hashtag_id = format!("hashtag-{hashtag}");
            builder.add_node(&hashtag_id, hashtag, NodeKind::Hashtag);
            builder.add_edge(&user_id, &hashtag_id, NodeKind::Hashtag);
        }

        for mention in &post.mentions {
            if mention.is_empty() {
                continue;
            }
            let mention_id = format!("mention-{mention}");
            builder.add_node(&mention_id, mention, NodeKind::Mention);
            builder.add_edge(&user_id, &mention_id, NodeKind::Mention);
        }
    }

    let mut rng = rand::thread_rng();
    let nodes: Vec<GraphNode> = builder
        .nodes
        .into_iter()
        .map(|(id, acc)| GraphNode {
            weight: MAX_NODE_WEIGHT.min(acc.connections + 1),
            cluster: assign_cluster(&acc.label),
            position: Position {
                x: rng.gen_range(0.0..1200.0),
                y: rng.gen_range(0.0..800.0),
            },
            id,
            kind: acc.kind,
            label: acc.label,
            connections: acc.connections,
        })
        .collect();

    let meta = GraphMeta {
        region: region.to_string(),
        total_nodes: nodes.len(),
        total_edges: builder.edges.len(),
    };

    NetworkGraph {
        nodes,
        edges: builder.edges,
        meta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(username: &str, hashtags: &[&str], mentions: &[&str]) -> Post {
        Post {
            id: Uuid::new_v4(),
            username: username.to_string(),
            caption: String::new(),
            hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
            mentions: mentions.iter().map(|s| s.to_string()).collect(),
            keywords: vec![],
            created_at: Utc::now(),
            region: None,
            topic: None,
            urgency: 0,
            sentiment: None,
            like_count: 0,
            link: None,
            thumbnail_url: None,
            post_type: None,
        }
    }

    #[test]
    fn shared_hashtag_produces_one_node_with_n_connections() {
        let posts: Vec<Post> = (0..4)
            .map(|i| post(&format!("user{i}"), &["banjir"], &[]))
            .collect();
        let graph = build_network_graph(&posts, "All Data");

        let hashtag_nodes: Vec<&GraphNode> = graph
            .nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Hashtag)
            .collect();
        assert_eq!(hashtag_nodes.len(), 1);
        assert_eq!(hashtag_nodes[0].connections, 4);

        let edges_to_hashtag = graph
            .edges
            .iter()
            .filter(|edge| edge.target == "hashtag-banjir")
            .count();
        assert_eq!(edges_to_hashtag, 4);
    }

    #[test]
    fn repeated_cooccurrence_does_not_duplicate_edges() {
        let posts = vec![
            post("alice", &["macet"], &["@dinas"]),
            post("alice", &["macet"], &["@dinas"]),
        ];
        let graph = build_network_graph(&posts, "All Data");
        assert_eq!(graph.edges.len(), 2);
        let user = graph.nodes.iter().find(|n| n.id == "user-alice").unwrap();
        assert_eq!(user.connections, 2);
    }

    #[test]
    fn weight_is_capped() {
        let posts: Vec<Post> = (0..20)
            .map(|i| post(&format!("user{i}"), &["banjir"], &[]))
            .collect();
        let graph = build_network_graph(&posts, "All Data");
        let hashtag = graph
            .nodes
            .iter()
            .find(|n| n.id == "hashtag-banjir")
            .unwrap();
        assert_eq!(hashtag.connections, 20);
        assert_eq!(hashtag.weight, 10);
    }

    #[test]
    fn cluster_keywords_hit_their_bucket() {
        assert_eq!(assign_cluster("macetparah"), 0);
        assert_eq!(assign_cluster("BanjirJakarta"), 1);
        assert_eq!(assign_cluster("polres_metro"), 2);
        assert_eq!(assign_cluster("dukcapil"), 3);
        assert_eq!(assign_cluster("hargacabai"), 4);
    }

    #[test]
    fn fallback_cluster_is_deterministic_and_in_range() {
        let a = assign_cluster("somethingelse");
        let b = assign_cluster("somethingelse");
        assert_eq!(a, b);
        assert!(a < 5);
    }
}
