use address_store::{Address, AddressRepository, InMemoryRepository};

fn sample(street: &str) -> Address {
    Address::new(street, "Springfield", "IL", "62701")
}

#[tokio::test]
async fn test_save_assigns_id_and_round_trips() {
    let repo = InMemoryRepository::new();

    let saved = repo.save(sample("123 Main St")).await.unwrap();
    let id = saved.id.expect("save should assign an id");

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert_eq!(found.street, "123 Main St");
    assert_eq!(found.city, "Springfield");
}

#[tokio::test]
async fn test_save_with_existing_id_overwrites() {
    let repo = InMemoryRepository::new();

    let saved = repo.save(sample("123 Main St")).await.unwrap();
    let id = saved.id.unwrap();

    let mut updated = saved.clone();
    updated.street = "456 Oak Ave".to_string();
    repo.save(updated).await.unwrap();

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found.street, "456 Oak Ave");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let repo = InMemoryRepository::new();
    assert!(repo.find_by_id(42).await.unwrap().is_none());
    assert!(!repo.exists_by_id(42).await.unwrap());
}

#[tokio::test]
async fn test_delete_by_id_removes_record() {
    let repo = InMemoryRepository::new();
    let saved = repo.save(sample("123 Main St")).await.unwrap();
    let id = saved.id.unwrap();

    assert!(repo.exists_by_id(id).await.unwrap());
    repo.delete_by_id(id).await.unwrap();
    assert!(!repo.exists_by_id(id).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_id_is_silent() {
    let repo = InMemoryRepository::new();
    repo.delete_by_id(999).await.unwrap();

    let unsaved = sample("no id");
    repo.delete(&unsaved).await.unwrap();
}

#[tokio::test]
async fn test_count_tracks_saves_and_deletes() {
    let repo = InMemoryRepository::new();

    let a = repo.save(sample("1 First St")).await.unwrap();
    repo.save(sample("2 Second St")).await.unwrap();
    repo.save(sample("3 Third St")).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 3);

    repo.delete(&a).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_find_all_by_id_returns_existing_subset() {
    let repo = InMemoryRepository::new();

    let a = repo.save(sample("1 First St")).await.unwrap();
    let b = repo.save(sample("2 Second St")).await.unwrap();

    let found = repo
        .find_all_by_id(&[a.id.unwrap(), 999, b.id.unwrap()])
        .await
        .unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_find_all_returns_everything() {
    let repo = InMemoryRepository::new();

    repo.save(sample("1 First St")).await.unwrap();
    repo.save(sample("2 Second St")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_explicit_id_advances_sequence() {
    let repo = InMemoryRepository::new();

    repo.save(sample("explicit").with_id(10)).await.unwrap();
    let next = repo.save(sample("generated")).await.unwrap();

    assert_eq!(next.id, Some(11));
}

#[tokio::test]
async fn test_bulk_deletes() {
    let repo = InMemoryRepository::new();

    let a = repo.save(sample("1 First St")).await.unwrap();
    let b = repo.save(sample("2 Second St")).await.unwrap();
    let c = repo.save(sample("3 Third St")).await.unwrap();

    repo.delete_all_by_id(&[a.id.unwrap(), b.id.unwrap()])
        .await
        .unwrap();
    assert_eq!(repo.count().await.unwrap(), 1);

    repo.delete_entities(&[c]).await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.save(sample("again")).await.unwrap();
    repo.delete_all().await.unwrap();
    assert_eq!(repo.count().await.unwrap(), 0);
}
