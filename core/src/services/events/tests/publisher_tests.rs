//! Tests for the auditing event publisher

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{ContactId, ContactSnapshot, OperationType};
use crate::domain::events::ContactEvent;
use crate::domain::value_objects::AuditContext;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::InMemoryAuditLogRepository;
use crate::services::events::{
    AuditDispatchConfig, AuditEventHandler, AuditingEventPublisher, DatabaseAuditEventHandler,
    DomainEventPublisher,
};

/// Handler that records the order it was called in
struct RecordingHandler {
    name: &'static str,
    order: i32,
    entity_type: Option<&'static str>,
    fail: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    fn new(name: &'static str, order: i32, calls: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            order,
            entity_type: None,
            fail: false,
            calls: Arc::clone(calls),
        }
    }
}

#[async_trait]
impl AuditEventHandler for RecordingHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn handle(&self, _context: &AuditContext) -> DomainResult<()> {
        self.calls.lock().unwrap().push(self.name.to_string());
        if self.fail {
            return Err(DomainError::Audit {
                message: self.name.to_string(),
            });
        }
        Ok(())
    }

    fn order(&self) -> i32 {
        self.order
    }

    fn supports(&self, entity_type: &str) -> bool {
        self.entity_type.map_or(true, |t| t == entity_type)
    }
}

fn created_event() -> ContactEvent {
    ContactEvent::created(
        ContactId::new(1).unwrap(),
        ContactSnapshot {
            id: Some(1),
            name: "張三".to_string(),
            phone: "0912345678".to_string(),
            address: String::new(),
        },
    )
}

#[tokio::test]
async fn test_handlers_run_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let publisher = AuditingEventPublisher::new(
        vec![
            Arc::new(RecordingHandler::new("late", 10, &calls)),
            Arc::new(RecordingHandler::new("early", -1, &calls)),
            Arc::new(RecordingHandler::new("middle", 0, &calls)),
        ],
        &AuditDispatchConfig::default(),
    );

    publisher.publish(&created_event()).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["early", "middle", "late"]);
    assert_eq!(publisher.handler_names(), vec!["early", "middle", "late"]);
}

#[tokio::test]
async fn test_unsupported_entity_types_are_skipped() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut orders_only = RecordingHandler::new("orders", 0, &calls);
    orders_only.entity_type = Some("Order");

    let publisher = AuditingEventPublisher::new(
        vec![
            Arc::new(orders_only),
            Arc::new(RecordingHandler::new("all", 1, &calls)),
        ],
        &AuditDispatchConfig::default(),
    );

    publisher.publish(&created_event()).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["all"]);
}

#[tokio::test]
async fn test_first_failure_stops_dispatch_by_default() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut failing = RecordingHandler::new("failing", 0, &calls);
    failing.fail = true;

    let publisher = AuditingEventPublisher::new(
        vec![
            Arc::new(failing),
            Arc::new(RecordingHandler::new("after", 1, &calls)),
        ],
        &AuditDispatchConfig::default(),
    );

    let result = publisher.publish(&created_event()).await;

    assert!(matches!(result, Err(DomainError::Audit { .. })));
    assert_eq!(*calls.lock().unwrap(), vec!["failing"]);
}

#[tokio::test]
async fn test_continue_on_failure_swallows_errors() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut failing = RecordingHandler::new("failing", 0, &calls);
    failing.fail = true;

    let config = AuditDispatchConfig {
        continue_on_failure: true,
        ..Default::default()
    };
    let publisher = AuditingEventPublisher::new(
        vec![
            Arc::new(failing),
            Arc::new(RecordingHandler::new("after", 1, &calls)),
        ],
        &config,
    );

    assert!(publisher.publish(&created_event()).await.is_ok());
    assert_eq!(*calls.lock().unwrap(), vec!["failing", "after"]);
}

#[tokio::test]
async fn test_database_handler_records_event() {
    let repo = Arc::new(InMemoryAuditLogRepository::new());
    let publisher = AuditingEventPublisher::new(
        vec![Arc::new(DatabaseAuditEventHandler::new(Arc::clone(&repo), false))],
        &AuditDispatchConfig::default(),
    );

    publisher.publish(&created_event()).await.unwrap();

    let logs = repo.get_all_logs().await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].operation_type(), OperationType::Create);
    assert!(logs[0].before_data().is_none());
    assert!(logs[0].after_data().unwrap().contains("張三"));
}
