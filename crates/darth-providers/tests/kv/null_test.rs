//! Null KV Provider Tests

use darth_domain::ports::KvProvider;
use darth_providers::kv::NullKvProvider;

#[tokio::test]
async fn test_null_provider_stores_nothing() {
    let provider = NullKvProvider::new();

    provider.set_ex("NS::User::1", "{}", 60).await.unwrap();

    assert_eq!(provider.get("NS::User::1").await.unwrap(), None);
    assert_eq!(provider.del("NS::User::1").await.unwrap(), 0);
    assert!(provider.keys("NS::User::*").await.unwrap().is_empty());
    assert_eq!(provider.provider_name(), "null");
}
