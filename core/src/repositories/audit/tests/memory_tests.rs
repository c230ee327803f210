//! Tests for the in-memory audit log repository

use chrono::{Duration, Utc};

use crate::domain::entities::{AuditLog, OperationType};
use crate::repositories::audit::InMemoryAuditLogRepository;
use crate::repositories::AuditLogRepository;

fn log_at(contact_id: i64, op: OperationType, seconds_ago: i64) -> AuditLog {
    AuditLog::create_at(
        contact_id,
        op,
        None,
        Some("{}".to_string()),
        Utc::now() - Duration::seconds(seconds_ago),
    )
}

#[tokio::test]
async fn test_save_assigns_id() {
    let repo = InMemoryAuditLogRepository::new();

    let saved = repo.save(&log_at(1, OperationType::Create, 0)).await.unwrap();

    assert_eq!(saved.id(), Some(1));
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(repo.get_all_logs().await.len(), 1);
}

#[tokio::test]
async fn test_find_all_newest_first() {
    let repo = InMemoryAuditLogRepository::new();
    repo.save(&log_at(1, OperationType::Create, 30)).await.unwrap();
    repo.save(&log_at(1, OperationType::Delete, 0)).await.unwrap();
    repo.save(&log_at(1, OperationType::Update, 10)).await.unwrap();

    let ops: Vec<OperationType> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|log| log.operation_type())
        .collect();
    assert_eq!(
        ops,
        vec![OperationType::Delete, OperationType::Update, OperationType::Create]
    );
}

#[tokio::test]
async fn test_same_time_breaks_ties_by_id() {
    let repo = InMemoryAuditLogRepository::new();
    let at = Utc::now();
    let first = repo
        .save(&AuditLog::create_at(1, OperationType::Create, None, None, at))
        .await
        .unwrap();
    let second = repo
        .save(&AuditLog::create_at(1, OperationType::Update, None, None, at))
        .await
        .unwrap();

    let logs = repo.find_by_contact_id(1).await.unwrap();
    assert_eq!(logs[0].id(), second.id());
    assert_eq!(logs[1].id(), first.id());
}

#[tokio::test]
async fn test_find_by_contact_and_operation() {
    let repo = InMemoryAuditLogRepository::new();
    repo.save(&log_at(1, OperationType::Create, 3)).await.unwrap();
    repo.save(&log_at(2, OperationType::Create, 2)).await.unwrap();
    repo.save(&log_at(1, OperationType::Update, 1)).await.unwrap();

    let for_contact = repo.find_by_contact_id(1).await.unwrap();
    assert_eq!(for_contact.len(), 2);
    assert!(for_contact.iter().all(|log| log.contact_id() == 1));

    let creates = repo
        .find_by_operation_type(OperationType::Create)
        .await
        .unwrap();
    assert_eq!(creates.len(), 2);
    assert_eq!(creates[0].contact_id(), 2);

    let reads = repo.find_by_operation_type(OperationType::Read).await.unwrap();
    assert!(reads.is_empty());
}

#[tokio::test]
async fn test_delete_all() {
    let repo = InMemoryAuditLogRepository::new();
    repo.save(&log_at(1, OperationType::Create, 0)).await.unwrap();

    repo.delete_all().await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_should_fail() {
    let repo = InMemoryAuditLogRepository::new();
    repo.set_should_fail(true);

    assert!(repo.save(&log_at(1, OperationType::Create, 0)).await.is_err());
    assert!(repo.count().await.is_err());
}
