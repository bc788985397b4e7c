//! Moka KV Provider Tests

use darth_domain::ports::KvProvider;
use darth_providers::kv::MokaKvProvider;
use std::time::Duration;

#[tokio::test]
async fn test_moka_provider_basic_operations() {
    let provider = MokaKvProvider::new();

    provider
        .set_ex("NS::User::1", r#"{"name":"ann"}"#, 60)
        .await
        .unwrap();

    assert_eq!(
        provider.get("NS::User::1").await.unwrap().as_deref(),
        Some(r#"{"name":"ann"}"#)
    );

    assert_eq!(provider.del("NS::User::1").await.unwrap(), 1);
    assert_eq!(provider.get("NS::User::1").await.unwrap(), None);
}

#[tokio::test]
async fn test_moka_provider_nonexistent_key() {
    let provider = MokaKvProvider::new();

    assert!(provider.get("nonexistent").await.unwrap().is_none());
    assert_eq!(provider.del("nonexistent").await.unwrap(), 0);
}

#[tokio::test]
async fn test_moka_provider_overwrite_replaces_value() {
    let provider = MokaKvProvider::new();

    provider.set_ex("k", "1", 60).await.unwrap();
    provider.set_ex("k", "2", 60).await.unwrap();

    assert_eq!(provider.get("k").await.unwrap().as_deref(), Some("2"));
    assert_eq!(provider.entry_count().await, 1);
}

#[tokio::test]
async fn test_moka_provider_rejects_zero_ttl() {
    let provider = MokaKvProvider::new();

    let err = provider.set_ex("k", "v", 0).await.unwrap_err();
    assert!(err.is_backend());
    assert!(provider.get("k").await.unwrap().is_none());
}

#[tokio::test]
async fn test_moka_provider_entries_expire() {
    let provider = MokaKvProvider::new();

    provider.set_ex("short", "v", 1).await.unwrap();
    provider.set_ex("long", "v", 60).await.unwrap();

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert!(provider.get("short").await.unwrap().is_none());
    assert!(provider.get("long").await.unwrap().is_some());
}

#[tokio::test]
async fn test_moka_provider_keys_glob() {
    let provider = MokaKvProvider::new();
    for key in [
        "NS::User::1",
        "NS::User::current::1",
        "NS::User::11",
        "NS::UserProfile::1",
        "OTHER::User::1",
    ] {
        provider.set_ex(key, "v", 60).await.unwrap();
    }

    let mut keys = provider.keys("NS::User::*").await.unwrap();
    keys.sort();
    assert_eq!(
        keys,
        vec!["NS::User::1", "NS::User::11", "NS::User::current::1"]
    );

    // The raw glob over-matches; callers filter structurally
    let mut keys = provider.keys("NS::User*1").await.unwrap();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "NS::User::1",
            "NS::User::11",
            "NS::User::current::1",
            "NS::UserProfile::1"
        ]
    );

    assert!(provider.keys("NOPE::*").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_moka_provider_invalid_pattern() {
    let provider = MokaKvProvider::new();

    let err = provider.keys("NS::[").await.unwrap_err();
    assert!(err.is_backend());
}

#[test]
fn test_moka_provider_capacity() {
    let provider = MokaKvProvider::with_capacity(1000);
    assert_eq!(provider.max_capacity(), Some(1000));
    assert_eq!(provider.provider_name(), "moka");
}

#[tokio::test]
async fn test_moka_provider_default_keeps_every_live_entry() {
    let provider = MokaKvProvider::new();
    assert_eq!(provider.max_capacity(), None);

    for i in 0..2_000 {
        provider.set_ex(&format!("NS::User::{i}"), "v", 60).await.unwrap();
    }
    assert_eq!(provider.entry_count().await, 2_000);
    assert_eq!(provider.get("NS::User::0").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn test_moka_provider_bound_evicts() {
    let provider = MokaKvProvider::with_capacity(10);

    for i in 0..100 {
        provider.set_ex(&format!("NS::User::{i}"), "v", 60).await.unwrap();
    }
    assert!(provider.entry_count().await <= 10);
}
