use std::time::Duration;

use repool::{Builder, Config, Factory};

struct Lines;

impl Factory for Lines {
    type Resource = String;
    type Error = std::convert::Infallible;

    fn create(&self) -> Result<String, Self::Error> {
        Ok(String::new())
    }
}

#[test]
fn build_pool_with_defaults() {
    let mut builder = Builder::new();
    let pool = builder.build(Lines);
    assert_eq!(pool.capacity(), Some(100));
    assert!(!pool.is_shutdown());
}

#[test]
fn default_config_matches_documented_limits() {
    let config = Config::default();
    assert_eq!(config.capacity, Some(100));
    assert_eq!(config.max_age, Duration::from_secs(1800));
    assert_eq!(config.max_idle, Duration::from_secs(300));
}

#[test]
fn build_pool_with_custom_capacity() {
    let mut builder = Builder::new();
    let pool = builder.capacity(10).build(Lines);
    assert_eq!(pool.capacity(), Some(10));
}

#[test]
fn build_unbounded_pool() {
    let mut builder = Builder::new();
    let pool = builder.unbounded().build(Lines);
    assert_eq!(pool.capacity(), None);
}

#[test]
fn built_limits_drive_eviction() {
    let mut builder = Builder::new();
    let pool = builder
        .capacity(4)
        .max_age(Duration::from_secs(600))
        .max_idle(Duration::from_millis(100))
        .build(Lines);

    let line = pool.pull().unwrap();
    pool.recycle(line);
    std::thread::sleep(Duration::from_millis(250));

    let line = pool.pull().unwrap();
    let stats = pool.stats();
    assert_eq!(stats.killed_stale, 1);
    assert_eq!(stats.created, 2);
    drop(line);
}
