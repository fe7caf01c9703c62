mod fixtures;

use axum::http::StatusCode;
use fixtures::{assert_status, create_song_app, get, read_json};
use songwalk_core::NodeKind;
use songwalk_web::models::{GraphResponse, HealthResponse, StatsResponse};

#[tokio::test]
async fn test_health_check() {
    let app = create_song_app();

    let response = get(&app.router, "/health").await;
    assert_status(&response, StatusCode::OK);

    let data: HealthResponse = read_json(response).await;
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn test_graph_lists_nodes_and_links() {
    let app = create_song_app();

    let response = get(&app.router, "/api/graph").await;
    assert_status(&response, StatusCode::OK);

    let data: GraphResponse = read_json(response).await;
    assert_eq!(data.nodes.len(), 7);
    assert_eq!(data.links.len(), 7);

    let numb = data.nodes.iter().find(|node| node.name == "Numb").unwrap();
    assert_eq!(numb.kind, NodeKind::Song);
    assert_eq!(numb.artist.as_deref(), Some("Linkin Park"));
    assert_eq!(numb.tags, vec!["nu metal"]);

    let artist = data
        .nodes
        .iter()
        .find(|node| node.name == "Linkin Park artist")
        .unwrap();
    assert_eq!(artist.kind, NodeKind::Artist);
    assert!(artist.artist.is_none());

    let first_link = &data.links[0];
    assert_eq!(first_link.source, "Numb");
    assert_eq!(first_link.target, "In the End");
    assert_eq!(first_link.value, 0.9);
}

#[tokio::test]
async fn test_stats_counts_songs() {
    let app = create_song_app();

    let response = get(&app.router, "/api/stats").await;
    assert_status(&response, StatusCode::OK);

    let data: StatsResponse = read_json(response).await;
    assert_eq!(data.total_nodes, 7);
    assert_eq!(data.total_links, 7);
    assert_eq!(data.total_songs, 6);
}
