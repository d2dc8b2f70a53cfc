//! Tests for the hashtag/mention network graph builder.

use chrono::Utc;
use server_core::domains::analytics::network::{build_network_graph, NodeKind};
use server_core::domains::posts::Post;
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
        region: Some("Jakarta Pusat".to_string()),
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
fn shared_hashtag_collapses_to_one_node_with_per_user_edges() {
    let posts: Vec<Post> = (0..6)
        .map(|i| post(&format!("user{i}"), &["banjir"], &[]))
        .collect();

    let graph = build_network_graph(&posts, "All Data");

    let hashtag_nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Hashtag)
        .collect();
    assert_eq!(hashtag_nodes.len(), 1);
    assert_eq!(hashtag_nodes[0].connections, 6);

    let edges: Vec<_> = graph
        .edges
        .iter()
        .filter(|edge| edge.target == "hashtag-banjir")
        .collect();
    assert_eq!(edges.len(), 6);
    let sources: std::collections::HashSet<&str> =
        edges.iter().map(|e| e.source.as_str()).collect();
    assert_eq!(sources.len(), 6);
}

#[test]
fn meta_counts_match_the_graph() {
    let posts = vec![
        post("alice", &["macet"], &["@dishub"]),
        post("bob", &["macet"], &[]),
    ];
    let graph = build_network_graph(&posts, "Jakarta Pusat");
    assert_eq!(graph.meta.region, "Jakarta Pusat");
    assert_eq!(graph.meta.total_nodes, graph.nodes.len());
    assert_eq!(graph.meta.total_edges, graph.edges.len());
}
