// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::Other("VALIDATION_ERROR".into()), "bad field");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);

    let email = DomainError::validation(ValidationKind::InvalidEmail, "not an email");
    let app: AppError = email.into();
    assert_eq!(app.code(), ErrorCode::InvalidEmail);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let unique = DomainError::conflict(ConflictKind::UniqueEmail, "email exists");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status().as_u16(), 409);

    let username = DomainError::conflict(ConflictKind::UniqueUsername, "username exists");
    let app: AppError = username.into();
    assert_eq!(app.code().as_str(), "UNIQUE_USERNAME");
    assert_eq!(app.status().as_u16(), 409);

    // Generic conflict fallback
    let other = DomainError::conflict(
        ConflictKind::Other("some conflict".to_string()),
        "generic conflict",
    );
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::User, "no user");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "USER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Todo, "no todo");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "TODO_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let nf = DomainError::not_found(NotFoundKind::Other("thing".into()), "no thing");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}

#[test]
fn domain_purity_check() {
    // Domain errors can be created without HTTP or SeaORM imports and
    // converted to AppError at the web boundary.
    let validation = DomainError::validation(ValidationKind::InvalidEmail, "test");
    let conflict = DomainError::conflict(ConflictKind::UniqueUsername, "test");
    let not_found = DomainError::not_found(NotFoundKind::Todo, "test");
    let infra = DomainError::infra(InfraErrorKind::DbUnavailable, "test");

    let _: AppError = validation.into();
    let _: AppError = conflict.into();
    let _: AppError = not_found.into();
    let _: AppError = infra.into();
}
