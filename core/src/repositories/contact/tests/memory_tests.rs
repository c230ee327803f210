//! Tests for the in-memory contact repository

use crate::domain::entities::{Contact, ContactId};
use crate::repositories::contact::InMemoryContactRepository;
use crate::repositories::ContactRepository;

fn contact(name: &str) -> Contact {
    Contact::create(name, "0912345678", None).unwrap()
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let repo = InMemoryContactRepository::new();

    let first = repo.save(&contact("張三")).await.unwrap();
    let second = repo.save(&contact("李四")).await.unwrap();

    assert_eq!(first.id(), Some(ContactId::new(1).unwrap()));
    assert_eq!(second.id(), Some(ContactId::new(2).unwrap()));
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_save_with_id_updates_in_place() {
    let repo = InMemoryContactRepository::new();
    let mut saved = repo.save(&contact("張三")).await.unwrap();

    saved.update_info("張三豐", "0911111111", None).unwrap();
    repo.save(&saved).await.unwrap();

    let found = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(found.name(), "張三豐");
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_with_id_restores_deleted_contact() {
    let repo = InMemoryContactRepository::new();
    let saved = repo.save(&contact("張三")).await.unwrap();
    let id = saved.id().unwrap();

    repo.delete_by_id(id).await.unwrap();
    assert!(!repo.exists_by_id(id).await.unwrap());

    repo.save(&saved).await.unwrap();
    assert!(repo.exists_by_id(id).await.unwrap());

    // New inserts never reuse a restored id
    let next = repo.save(&contact("李四")).await.unwrap();
    assert_eq!(next.id(), Some(ContactId::new(2).unwrap()));
}

#[tokio::test]
async fn test_find_all_ordered_by_id() {
    let repo = InMemoryContactRepository::new();
    for name in ["c", "a", "b"] {
        repo.save(&contact(name)).await.unwrap();
    }

    let names: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let repo = InMemoryContactRepository::new();
    let found = repo.find_by_id(ContactId::new(99).unwrap()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_should_fail() {
    let repo = InMemoryContactRepository::new();
    repo.set_should_fail(true);

    assert!(repo.save(&contact("張三")).await.is_err());
    assert!(repo.find_all().await.is_err());

    repo.set_should_fail(false);
    assert!(repo.find_all().await.is_ok());
}
