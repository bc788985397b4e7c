//! Bounded fan-out over large wildcard matches

use crate::test_utils::{Call, RecordingKvProvider};
use darth_application::{CacheStore, HandleOptions, StoreConfig};
use darth_domain::Qualifier;
use std::sync::Arc;
use std::time::Duration;

const KEY_COUNT: usize = 1000;

fn seeded(provider: &RecordingKvProvider) {
    for i in 0..KEY_COUNT {
        provider.insert(&format!("DARTH::Item::{i}"), &i.to_string());
    }
}

#[tokio::test]
async fn test_wildcard_read_respects_fanout_limit() {
    let provider = Arc::new(RecordingKvProvider::with_latency(Duration::from_millis(1)));
    seeded(&provider);
    let store = CacheStore::new(provider.clone(), StoreConfig::new().with_fanout_limit(8)).unwrap();
    let items = store.handle("Item", HandleOptions::new(60)).unwrap();

    let mut values: Vec<usize> = items.get_many(&Qualifier::all_for_entity()).await.unwrap();
    values.sort_unstable();

    assert_eq!(values, (0..KEY_COUNT).collect::<Vec<_>>());
    let peak = provider.peak_in_flight();
    assert!(peak <= 8, "peak in-flight {peak} exceeded the limit");
    assert!(peak > 1, "fan-out ran sequentially");
}

#[tokio::test]
async fn test_wildcard_invalidate_respects_fanout_limit() {
    let provider = Arc::new(RecordingKvProvider::with_latency(Duration::from_millis(1)));
    seeded(&provider);
    let store = CacheStore::new(provider.clone(), StoreConfig::new()).unwrap();
    let items = store.handle("Item", HandleOptions::new(60)).unwrap();

    let removed = items.invalidate(&Qualifier::all_for_entity()).await.unwrap();

    assert_eq!(removed, KEY_COUNT as u64);
    assert!(provider.stored_keys().is_empty());
    let deletes = provider
        .calls()
        .iter()
        .filter(|call| matches!(call, Call::Del(_)))
        .count();
    assert_eq!(deletes, KEY_COUNT);
    assert!(provider.peak_in_flight() <= store.config().fanout_limit);
}

#[tokio::test]
async fn test_fanout_limit_of_one_is_sequential() {
    let provider = Arc::new(RecordingKvProvider::new());
    seeded(&provider);
    let store = CacheStore::new(provider.clone(), StoreConfig::new().with_fanout_limit(1)).unwrap();
    let items = store.handle("Item", HandleOptions::new(60)).unwrap();

    assert_eq!(items.fanout_limit(), 1);
    let values: Vec<usize> = items.get_many(&Qualifier::all_for_entity()).await.unwrap();

    assert_eq!(values.len(), KEY_COUNT);
    assert_eq!(provider.peak_in_flight(), 1);
}

/// Deletes a key from under the fan-out after the scan has listed it
#[derive(Debug)]
struct VanishingProvider {
    inner: RecordingKvProvider,
    vanish: String,
}

#[async_trait::async_trait]
impl darth_domain::KvProvider for VanishingProvider {
    async fn get(&self, key: &str) -> darth_domain::Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64) -> darth_domain::Result<()> {
        self.inner.set_ex(key, value, ttl_secs).await
    }

    async fn del(&self, key: &str) -> darth_domain::Result<u64> {
        self.inner.del(key).await
    }

    async fn keys(&self, pattern: &str) -> darth_domain::Result<Vec<String>> {
        let keys = self.inner.keys(pattern).await?;
        self.inner.remove(&self.vanish);
        Ok(keys)
    }

    fn provider_name(&self) -> &str {
        "vanishing"
    }
}

#[tokio::test]
async fn test_key_vanishing_between_scan_and_get_is_skipped() {
    let inner = RecordingKvProvider::new();
    inner.insert("DARTH::Item::1", "1");
    inner.insert("DARTH::Item::2", "2");
    let provider = Arc::new(VanishingProvider {
        inner,
        vanish: "DARTH::Item::2".to_string(),
    });
    let items = CacheStore::new(provider.clone(), StoreConfig::new())
        .unwrap()
        .handle("Item", HandleOptions::new(60))
        .unwrap();

    let values: Vec<u32> = items.get_many(&Qualifier::all_for_entity()).await.unwrap();
    assert_eq!(values, vec![1]);

    // A vanished key is not counted as removed
    provider.inner.insert("DARTH::Item::2", "2");
    assert_eq!(items.invalidate(&Qualifier::all_for_entity()).await.unwrap(), 1);
    assert!(provider.inner.stored_keys().is_empty());
}
