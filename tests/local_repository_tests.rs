//! Tests for the in-memory LocalRepository.
//!
//! These cover the storage contract the service layer depends on: ordering,
//! skip/limit semantics, upsert-vs-insert behavior, abort modification
//! reporting, and the health toggle.

mod support;

use std::sync::Arc;

use launchtrack::db::repository::{
    LaunchRepository, PlanetRepository, RepositoryError,
};
use launchtrack::db::LocalRepository;

use support::launch;

#[tokio::test]
async fn list_is_ordered_by_flight_number() {
    let repo = LocalRepository::new();
    for n in [3, 1, 2] {
        repo.upsert_launch(&launch(n, "m", "r")).await.unwrap();
    }

    let launches = repo.list_launches(0, 10).await.unwrap();
    let numbers: Vec<u32> = launches.iter().map(|l| l.flight_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn list_applies_skip_and_limit() {
    let repo = LocalRepository::new();
    for n in 1..=5 {
        repo.upsert_launch(&launch(n, "m", "r")).await.unwrap();
    }

    let page = repo.list_launches(1, 2).await.unwrap();
    let numbers: Vec<u32> = page.iter().map(|l| l.flight_number).collect();
    assert_eq!(numbers, vec![2, 3]);
}

#[tokio::test]
async fn zero_limit_means_no_cap() {
    let repo = LocalRepository::new();
    for n in 1..=5 {
        repo.upsert_launch(&launch(n, "m", "r")).await.unwrap();
    }

    assert_eq!(repo.list_launches(0, 0).await.unwrap().len(), 5);
    assert_eq!(repo.list_launches(3, 0).await.unwrap().len(), 2);
}

#[tokio::test]
async fn upsert_overwrites_existing_record() {
    let repo = LocalRepository::new();
    repo.upsert_launch(&launch(1, "original", "r")).await.unwrap();
    repo.upsert_launch(&launch(1, "replacement", "r")).await.unwrap();

    let stored = repo.get_launch(1).await.unwrap().unwrap();
    assert_eq!(stored.mission, "replacement");
    assert_eq!(repo.launch_count(), 1);
}

#[tokio::test]
async fn insert_rejects_taken_flight_number() {
    let repo = LocalRepository::new();
    repo.insert_launch(&launch(42, "first", "r")).await.unwrap();

    let err = repo.insert_launch(&launch(42, "second", "r")).await.unwrap_err();
    assert!(err.is_conflict());

    // The original record is untouched.
    assert_eq!(repo.get_launch(42).await.unwrap().unwrap().mission, "first");
}

#[tokio::test]
async fn latest_flight_number_tracks_the_maximum() {
    let repo = LocalRepository::new();
    assert_eq!(repo.latest_flight_number().await.unwrap(), None);

    for n in [7, 100, 12] {
        repo.upsert_launch(&launch(n, "m", "r")).await.unwrap();
    }
    assert_eq!(repo.latest_flight_number().await.unwrap(), Some(100));
}

#[tokio::test]
async fn abort_flips_flags_and_reports_modification() {
    let repo = LocalRepository::new();
    repo.upsert_launch(&launch(9, "m", "r")).await.unwrap();

    assert!(repo.abort_launch(9).await.unwrap());
    let aborted = repo.get_launch(9).await.unwrap().unwrap();
    assert!(!aborted.upcoming);
    assert!(!aborted.success);

    // Second abort changes nothing.
    assert!(!repo.abort_launch(9).await.unwrap());
}

#[tokio::test]
async fn abort_of_missing_launch_reports_no_modification() {
    let repo = LocalRepository::new();
    assert!(!repo.abort_launch(404).await.unwrap());
}

#[tokio::test]
async fn unhealthy_store_rejects_operations() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(!repo.health_check().await.unwrap());
    let err = repo.get_launch(1).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Connection(_)));
}

#[tokio::test]
async fn planets_are_found_by_kepler_name() {
    let repo = LocalRepository::new();
    repo.add_planet("Kepler-442 b");
    repo.add_planet("Kepler-62 f");

    assert!(repo.find_planet("Kepler-442 b").await.unwrap().is_some());
    assert!(repo.find_planet("Nonexistent-1b").await.unwrap().is_none());

    let names: Vec<String> = repo
        .list_planets()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.kepler_name)
        .collect();
    assert_eq!(names, vec!["Kepler-442 b", "Kepler-62 f"]);
}

#[tokio::test]
async fn concurrent_upserts_land_without_loss() {
    let repo = Arc::new(LocalRepository::new());

    let mut handles = vec![];
    for n in 1..=20u32 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.upsert_launch(&launch(n, "m", "r")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.launch_count(), 20);
}
