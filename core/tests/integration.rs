//! End-to-end session tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port serving `test-vectors/fixtures`,
//! then drives `HakushSession` over real HTTP through `ReqwestTransport`.

#![cfg(feature = "reqwest-client")]

use futures_util::future::try_join_all;
use hakush::{ApiError, ClientConfig, HakushSession, ReqwestTransport, TransportError};
use mock_server::{Fixtures, StatusCode};

fn fixture_root() -> String {
    format!("{}/../test-vectors/fixtures", env!("CARGO_MANIFEST_DIR"))
}

async fn start(fixtures: Fixtures) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener, fixtures));
    format!("http://{addr}")
}

async fn session(fixtures: Fixtures) -> HakushSession<ReqwestTransport> {
    let config = ClientConfig {
        origin: start(fixtures).await,
        max_connections: 4,
        ..ClientConfig::default()
    };
    HakushSession::with_config(&config).unwrap()
}

#[tokio::test]
async fn documents_round_trip() {
    let s = session(Fixtures::from_dir(fixture_root())).await;

    let changelog = s.changelog().await.unwrap();
    assert_eq!(changelog.relicset, vec![101]);

    let avatars = s.avatar_index().await.unwrap();
    for id in &changelog.character {
        assert!(avatars.contains_key(id), "changelog avatar {id} missing from index");
    }

    let avatar = s.avatar(1212u32).await.unwrap();
    assert_eq!(avatar.relics.avatar_id, 1212);

    let lightcone = s.lightcone("23014").await.unwrap();
    assert_eq!(lightcone.refinements.level.len(), 5);

    let relicsets = s.relicset_index().await.unwrap();
    assert_eq!(relicsets[&101].icon, "SpriteOutput/ItemIcon/71000.png");

    let series = s.achievement_index().await.unwrap();
    assert_eq!(series[&1].list.len(), 3);

    let items = s.item_index().await.unwrap();
    let fuel = s.item(201u32).await.unwrap();
    assert_eq!(items[&201].item_name, fuel.item_name);

    let monsters = s.monster_index().await.unwrap();
    let template = s.monster_template(1004010u32).await.unwrap();
    let child: Vec<u32> = template.child.iter().map(|m| m.id).collect();
    assert_eq!(monsters[&1004010].child, child);

    s.close();
}

#[tokio::test]
async fn assets_round_trip() {
    let s = session(Fixtures::from_dir(fixture_root())).await;

    assert!(s.avatar_icon(1212u32).await.unwrap().starts_with(b"RIFF"));
    assert!(s.avatar_image("1212").await.unwrap().starts_with(b"RIFF"));
    assert!(s.lightcone_image(23014u32).await.unwrap().starts_with(b"RIFF"));
    assert!(s.profession_icon("Rogue").await.unwrap().starts_with(b"RIFF"));
    assert!(s.status_icon("MaxHP").await.unwrap().starts_with(b"RIFF"));

    let numeric = s.avatar_rank_image(121204u32).await.unwrap();
    let text = s.avatar_rank_image("121204").await.unwrap();
    assert_eq!(numeric, text);

    let numeric = s.relic_icon(31011u32).await.unwrap();
    let text = s.relic_icon("31011").await.unwrap();
    assert_eq!(numeric, text);

    let by_id = s.relicset_icon(101u32).await.unwrap();
    let relicsets = s.relicset_index().await.unwrap();
    let by_brief = s.relicset_icon(&relicsets[&101]).await.unwrap();
    assert_eq!(by_id, by_brief);
}

#[tokio::test]
async fn missing_documents_are_transport_errors() {
    let s = session(Fixtures::from_dir(fixture_root())).await;

    match s.avatar(9999u32).await {
        Err(ApiError::Transport(TransportError { status, reason, url })) => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
            assert!(url.ends_with("/hsr/data/cn/character/9999.json"), "{url}");
        }
        other => panic!("expected 404, got {other:?}"),
    }

    let err = s.item_icon(424242u32).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn server_errors_surface_status() {
    let fixtures = Fixtures::new().with_status("/hsr/data/monster.json", StatusCode::SERVICE_UNAVAILABLE);
    let s = session(fixtures).await;
    let err = s.monster_index().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn malformed_index_entry_fails_whole_call() {
    let fixtures = Fixtures::new().with_body(
        "/hsr/data/lightcone.json",
        r#"{
            "20000": {"rank": "CombatPowerLightconeRarity3", "baseType": "Rogue", "en": "Arrows", "desc": "", "kr": "", "cn": "", "jp": ""},
            "20001": {"rank": "CombatPowerLightconeRarity3", "en": "Cornucopia", "desc": "", "kr": "", "cn": "", "jp": ""}
        }"#,
    );
    let s = session(fixtures).await;
    match s.lightcone_index().await {
        Err(ApiError::Schema(e)) => {
            assert_eq!(e.path, "20001");
            assert!(e.message.contains("baseType"), "{}", e.message);
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_requests_share_one_session() {
    let s = session(Fixtures::from_dir(fixture_root())).await;
    let ids = [1212u32, 1212, 1212, 1212, 1212, 1212, 1212, 1212];
    let avatars = try_join_all(ids.iter().map(|&id| s.avatar(id))).await.unwrap();
    assert_eq!(avatars.len(), ids.len());
    assert!(avatars.windows(2).all(|w| w[0] == w[1]));
}

#[tokio::test]
async fn unreachable_origin_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig {
        origin: format!("http://{addr}"),
        ..ClientConfig::default()
    };
    let s = HakushSession::with_config(&config).unwrap();
    assert!(matches!(s.changelog().await, Err(ApiError::Network { .. })));
}

