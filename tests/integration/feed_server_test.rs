//! フィードサーバーの結合テスト（実ポート経由）

use serde_json::Value;

use crate::support::{fixtures, http};

const QUAKE: &str = r#"[{"code":551,"issue":{"type":"Foreign"},"earthquake":{"hypocenter":{"name":"南太平洋"}}}]"#;
const TSUNAMI: &str = r#"[{"code":552,"cancelled":false,"areas":[{"grade":"Watch","name":"伊豆諸島"}]}]"#;

/// 両フィードがHTTP越しに200とJSONを返す
#[tokio::test]
async fn test_server_serves_both_feeds_over_http() {
    let (_root, state) = fixtures::build_state(
        &[("quake.json", QUAKE)],
        &[("tsunami.json", TSUNAMI)],
    );
    let server = http::spawn_app(quakemock::api::create_app(state)).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/p2p")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body[0]["code"], 551);

    let response = client.get(server.url("/jma")).send().await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body[0]["code"], 552);

    server.stop().await;
}

/// 同じ窓の間は実HTTP越しでも同じサンプルが返る
#[tokio::test]
async fn test_repeated_requests_are_sticky_over_http() {
    let (_root, state) = fixtures::build_state(
        &[
            ("quake_a.json", r#"[{"code":551,"points":[{"scale":10}]}]"#),
            ("quake_b.json", r#"[{"code":551,"points":[{"scale":30}]}]"#),
            ("quake_c.json", r#"[{"code":551,"points":[{"scale":45}]}]"#),
        ],
        &[("tsunami.json", TSUNAMI)],
    );
    let server = http::spawn_app(quakemock::api::create_app(state)).await;
    let client = reqwest::Client::new();
    let url = server.url("/p2p");

    let first = client.get(&url).send().await.unwrap().text().await.unwrap();
    for _ in 0..5 {
        let next = client.get(&url).send().await.unwrap().text().await.unwrap();
        assert_eq!(next, first);
    }

    server.stop().await;
}

/// 並行リクエストが全て同じサンプルを観測する
#[tokio::test]
async fn test_concurrent_requests_observe_one_sample() {
    let (_root, state) = fixtures::build_state(
        &[
            ("quake_a.json", r#"[{"code":551,"points":[{"scale":10}]}]"#),
            ("quake_b.json", r#"[{"code":551,"points":[{"scale":30}]}]"#),
            ("quake_c.json", r#"[{"code":551,"points":[{"scale":45}]}]"#),
        ],
        &[("tsunami.json", TSUNAMI)],
    );
    let server = http::spawn_app(quakemock::api::create_app(state)).await;
    let client = reqwest::Client::new();
    let url = server.url("/p2p");

    let requests = (0..16).map(|_| {
        let client = client.clone();
        let url = url.clone();
        async move { client.get(&url).send().await.unwrap().text().await.unwrap() }
    });
    let bodies = futures::future::join_all(requests).await;

    assert!(
        bodies.windows(2).all(|w| w[0] == w[1]),
        "all concurrent requests must observe the same sample"
    );

    server.stop().await;
}
