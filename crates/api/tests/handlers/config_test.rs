use std::collections::HashMap;

use pretty_assertions::assert_eq;
use slotbook_api::{
    build_router,
    config::{ApiConfig, StoreBackend},
    ApiState,
};
use slotbook_db::InMemoryStore;
use std::sync::Arc;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults_with_database_url() {
    let config = ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/slots")]))
        .unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:3000");
    assert_eq!(config.store_backend, StoreBackend::Postgres);
    assert_eq!(config.database_max_connections, 5);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.cors_origins, None);
}

#[test]
fn test_postgres_requires_database_url() {
    assert!(ApiConfig::from_lookup(lookup(&[])).is_err());
}

#[test]
fn test_memory_backend_needs_no_database() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("STORE_BACKEND", "memory"),
        ("API_PORT", "8080"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://app.example.com"),
    ]))
    .unwrap();

    assert_eq!(config.store_backend, StoreBackend::Memory);
    assert_eq!(config.port, 8080);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:5173".to_string(),
            "https://app.example.com".to_string()
        ])
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(ApiConfig::from_lookup(lookup(&[("STORE_BACKEND", "redis")])).is_err());
    assert!(
        ApiConfig::from_lookup(lookup(&[("STORE_BACKEND", "memory"), ("API_PORT", "http")]))
            .is_err()
    );
}

#[test]
fn test_invalid_cors_origin_fails_router_build() {
    let mut config = ApiConfig::from_lookup(lookup(&[("STORE_BACKEND", "memory")])).unwrap();
    config.cors_origins = Some(vec!["bad\norigin".to_string()]);
    let state = Arc::new(ApiState::new(Arc::new(InMemoryStore::new())));

    assert!(build_router(&config, state).is_err());
}
