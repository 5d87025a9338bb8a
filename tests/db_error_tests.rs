//! Tests for db::repository::error module.

use clubops_rust::db::repository::{ErrorContext, RepositoryError};

#[test]
fn test_error_context_new() {
    let ctx = ErrorContext::new("test_operation");
    assert_eq!(ctx.operation, Some("test_operation".to_string()));
    assert!(ctx.entity.is_none());
    assert!(ctx.entity_id.is_none());
    assert!(ctx.details.is_none());
    assert!(!ctx.retryable);
}

#[test]
fn test_error_context_with_entity() {
    let ctx = ErrorContext::new("op").with_entity("session");
    assert_eq!(ctx.entity, Some("session".to_string()));
}

#[test]
fn test_error_context_with_entity_id() {
    let ctx = ErrorContext::new("op").with_entity_id(123);
    assert_eq!(ctx.entity_id, Some("123".to_string()));
}

#[test]
fn test_error_context_with_details() {
    let ctx = ErrorContext::new("op").with_details("some details");
    assert_eq!(ctx.details, Some("some details".to_string()));
}

#[test]
fn test_error_context_retryable() {
    let ctx = ErrorContext::new("op").retryable();
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_chaining() {
    let ctx = ErrorContext::new("update_session")
        .with_entity("session")
        .with_entity_id(42)
        .with_details("row missing")
        .retryable();

    assert_eq!(ctx.operation, Some("update_session".to_string()));
    assert_eq!(ctx.entity, Some("session".to_string()));
    assert_eq!(ctx.entity_id, Some("42".to_string()));
    assert_eq!(ctx.details, Some("row missing".to_string()));
    assert!(ctx.retryable);
}

#[test]
fn test_error_context_display() {
    let ctx = ErrorContext::new("test_op")
        .with_entity("test_entity")
        .with_entity_id("123");

    let display = format!("{}", ctx);
    assert!(display.contains("operation=test_op"));
    assert!(display.contains("entity=test_entity"));
    assert!(display.contains("id=123"));
}

#[test]
fn test_error_context_display_retryable() {
    let ctx = ErrorContext::new("op").retryable();
    let display = format!("{}", ctx);
    assert!(display.contains("retryable=true"));
}

#[test]
fn test_error_context_display_with_details() {
    let ctx = ErrorContext::new("op").with_details("extra info");
    let display = format!("{}", ctx);
    assert!(display.contains("details=extra info"));
}

#[test]
fn test_error_context_default() {
    let ctx = ErrorContext::default();
    assert!(ctx.operation.is_none());
    assert!(ctx.entity.is_none());
    assert!(ctx.entity_id.is_none());
    assert!(ctx.details.is_none());
    assert!(!ctx.retryable);
}

#[test]
fn test_error_context_clone() {
    let ctx1 = ErrorContext::new("op").with_entity("entity");
    let ctx2 = ctx1.clone();
    assert_eq!(ctx1.operation, ctx2.operation);
    assert_eq!(ctx1.entity, ctx2.entity);
}

#[test]
fn test_repository_error_not_found() {
    let err = RepositoryError::not_found("session not found");
    assert!(err.to_string().contains("Not found"));
    assert!(err.to_string().contains("session not found"));
}

#[test]
fn test_repository_error_not_found_with_context() {
    let ctx = ErrorContext::new("get_session").with_entity("session").with_entity_id(7);
    let err = RepositoryError::not_found_with_context("no such session", ctx);
    let err_str = err.to_string();
    assert!(err_str.contains("Not found"));
    assert!(err_str.contains("no such session"));
    assert!(err_str.contains("operation=get_session"));
    assert!(err_str.contains("id=7"));
}

#[test]
fn test_repository_error_validation() {
    let err = RepositoryError::validation("invalid data");
    assert!(err.to_string().contains("validation error"));
    assert!(err.to_string().contains("invalid data"));
}

#[test]
fn test_repository_error_configuration() {
    let err = RepositoryError::configuration("missing config");
    assert!(err.to_string().contains("Configuration error"));
    assert!(err.to_string().contains("missing config"));
}

#[test]
fn test_repository_error_internal() {
    let err = RepositoryError::internal("unexpected state");
    assert!(err.to_string().contains("Internal error"));
    assert!(err.to_string().contains("unexpected state"));
}

#[test]
fn test_repository_error_transaction() {
    let err = RepositoryError::transaction("lock acquisition failed");
    assert!(err.to_string().contains("Transaction error"));
    assert!(err.to_string().contains("lock acquisition failed"));
}

#[test]
fn test_repository_error_transaction_is_retryable() {
    let err = RepositoryError::transaction("contention");
    assert!(err.is_retryable());
}

#[test]
fn test_repository_error_is_retryable_not_found() {
    let err = RepositoryError::not_found("missing");
    assert!(!err.is_retryable());
}

#[test]
fn test_repository_error_is_retryable_validation() {
    let err = RepositoryError::validation("invalid");
    assert!(!err.is_retryable());
}

#[test]
fn test_repository_error_with_operation() {
    let err = RepositoryError::internal("error").with_operation("insert_slot");
    let err_str = err.to_string();
    assert!(err_str.contains("operation=insert_slot"));
}

#[test]
fn test_repository_error_debug() {
    let err = RepositoryError::internal("test");
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InternalError"));
}

#[test]
fn test_repository_result_ok() {
    use clubops_rust::db::repository::RepositoryResult;
    let result: RepositoryResult<i32> = Ok(42);
    assert!(result.is_ok());
    assert_eq!(*result.as_ref().unwrap(), 42);
}

#[test]
fn test_repository_result_err() {
    use clubops_rust::db::repository::RepositoryResult;
    let result: RepositoryResult<i32> = Err(RepositoryError::not_found("test"));
    assert!(result.is_err());
}
