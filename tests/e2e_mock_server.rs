//! E2E tests using the mock Crisp server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use crispapi::mock_server::{Fixtures, MockServer, MockState, DEFAULT_PLUGIN_ID, UNRATED_PLUGIN_ID};
use crispapi::{
    check_connect_session_validity, delete_plugin_rank, is_connect_session_valid,
    list_connect_websites, rank_plugin, CrispClient, CrispConfig, Get, PersonalPluginRank,
    PluginInformation, PluginStars, StatusCode, Tier,
};

fn client_for(server: &MockServer) -> CrispClient {
    CrispClient::new("test-id", "test-key", server.url()).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Connect Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_session_validity_follows_state() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert!(check_connect_session_validity(&client).await.is_ok());

    // Invalidate the session mid-test
    server.state().write().await.session_valid = false;

    let err = check_connect_session_validity(&client).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(!is_connect_session_valid(&client).await);

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_connected_websites() {
    let state = MockState::new()
        .with_connected_website("site-a")
        .with_connected_website("site-b");
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let websites = list_connect_websites(&client).await.unwrap();
    assert_eq!(
        websites.data,
        Some(vec!["site-a".to_string(), "site-b".to_string()])
    );

    server.shutdown().await;
}

// =============================================================================
// Plugin Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_get_plugin_and_stars() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let plugin = PluginInformation::get(&client, DEFAULT_PLUGIN_ID.to_string())
        .await
        .expect("Failed to get plugin")
        .data
        .expect("Plugin data");
    assert_eq!(plugin.id.as_deref(), Some(DEFAULT_PLUGIN_ID));
    assert_eq!(plugin.since.as_deref(), Some("2017-04-21T10:13:15.000Z"));
    assert!(plugin.since_datetime().is_some());

    let stars = PluginStars::get(&client, DEFAULT_PLUGIN_ID.to_string())
        .await
        .expect("Failed to get stars");
    assert_eq!(stars.data, Some(Fixtures::stars(4, 128)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_plugin_not_found() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = PluginInformation::get(&client, "nonexistent".to_string()).await;

    let err = result.unwrap_err();
    assert!(err.is_not_found(), "Error should indicate not found: {err}");
    assert!(err.to_string().contains("plugin_not_found"));

    server.shutdown().await;
}

// =============================================================================
// Rank Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_rank_set_get_delete_workflow() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Step 1: Unrated plugin has no rank
    let rank = PersonalPluginRank::get(&client, UNRATED_PLUGIN_ID.to_string())
        .await
        .unwrap();
    assert_eq!(rank.data, Some(PersonalPluginRank::default()));

    // Step 2: Rank it
    rank_plugin(&client, UNRATED_PLUGIN_ID, 3).await.unwrap();

    // Step 3: The rank reads back unchanged
    let rank = PersonalPluginRank::get(&client, UNRATED_PLUGIN_ID.to_string())
        .await
        .unwrap();
    assert_eq!(rank.data, Some(PersonalPluginRank::new(3)));

    // Step 4: Delete it and verify it is gone
    delete_plugin_rank(&client, UNRATED_PLUGIN_ID).await.unwrap();
    let rank = PersonalPluginRank::get(&client, UNRATED_PLUGIN_ID.to_string())
        .await
        .unwrap();
    assert!(rank.data.and_then(|r| r.rank).is_none());

    server.shutdown().await;
}

#[tokio::test]
async fn test_rank_out_of_range_is_rejected() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = rank_plugin(&client, DEFAULT_PLUGIN_ID, 9).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

    // The previous rank is untouched
    let rank = PersonalPluginRank::get(&client, DEFAULT_PLUGIN_ID.to_string())
        .await
        .unwrap();
    assert_eq!(rank.data, Some(PersonalPluginRank::new(5)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_seeded_stars_and_rank() {
    let state = MockState::new()
        .with_plugin(Fixtures::full_plugin("p1", "Seeded", 900))
        .with_stars("p1", Fixtures::stars(2, 7))
        .with_rank("p1", 1);
    let server = MockServer::with_state(state).await;
    let client = client_for(&server);

    let stars = PluginStars::get(&client, "p1".to_string()).await.unwrap();
    assert_eq!(stars.into_data(), Some(Fixtures::stars(2, 7)));

    let rank = PersonalPluginRank::get(&client, "p1".to_string())
        .await
        .unwrap()
        .map(|r| r.rank);
    assert_eq!(rank.into_data(), Some(Some(1)));

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_required_credentials_and_tier() {
    let state = MockState::new()
        .with_plugin(Fixtures::minimal_plugin("p1", "Guarded"))
        .with_required_credentials("plugin-id", "plugin-key")
        .with_required_tier(Tier::Plugin);
    let server = MockServer::with_state(state).await;

    // Wrong key
    let wrong = CrispClient::new("plugin-id", "wrong-key", server.url()).unwrap();
    let err = PluginInformation::get(&wrong, "p1".to_string()).await.unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    // Right key, wrong tier
    let user_tier = CrispClient::new("plugin-id", "plugin-key", server.url()).unwrap();
    let err = PluginInformation::get(&user_tier, "p1".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));

    // Right key and tier
    let config = CrispConfig::new("plugin-id", "plugin-key")
        .with_tier(Tier::Plugin)
        .with_base_url(server.url());
    let client = CrispClient::with_config(config).unwrap();
    let plugin = PluginInformation::get(&client, "p1".to_string()).await.unwrap();
    assert_eq!(plugin.data.unwrap().name.as_deref(), Some("Guarded"));

    server.shutdown().await;
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[tokio::test]
async fn test_client_shared_across_tasks() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                PluginInformation::get(&client, DEFAULT_PLUGIN_ID.to_string()).await
            })
        })
        .collect();

    for handle in handles {
        let plugin = handle.await.unwrap().unwrap();
        assert!(plugin.data.is_some());
    }

    server.shutdown().await;
}
