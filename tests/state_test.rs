use randplay::management::{InMemoryStateRegistry, StateStore};

#[tokio::test]
async fn test_state_token_is_single_use() {
    let registry = InMemoryStateRegistry::default();
    registry.insert("token-1".to_string()).await;

    // First use succeeds, second must find nothing
    assert!(registry.take("token-1").await);
    assert!(!registry.take("token-1").await);
}

#[tokio::test]
async fn test_unknown_state_token_is_rejected() {
    let registry = InMemoryStateRegistry::default();
    assert!(!registry.take("never-issued").await);
}

#[tokio::test]
async fn test_tokens_are_independent() {
    let registry = InMemoryStateRegistry::default();
    registry.insert("token-1".to_string()).await;
    registry.insert("token-2".to_string()).await;

    assert!(registry.take("token-2").await);
    assert!(registry.take("token-1").await);
}

#[tokio::test]
async fn test_expired_state_token_is_rejected() {
    // A zero lifetime makes every token expired on arrival
    let registry = InMemoryStateRegistry::new(0);
    registry.insert("token-1".to_string()).await;

    assert!(!registry.take("token-1").await);
}

#[tokio::test]
async fn test_sweep_drops_expired_tokens_only() {
    let expired = InMemoryStateRegistry::new(0);
    expired.insert("stale".to_string()).await;
    expired.sweep().await;
    assert!(!expired.take("stale").await);

    // A live token must survive the sweep
    let live = InMemoryStateRegistry::default();
    live.insert("fresh".to_string()).await;
    live.sweep().await;
    assert!(live.take("fresh").await);
}
