//! Unit tests for registration intake

use super::*;
use crate::error::AppError;

const MIN: usize = 10;

#[test]
fn test_valid_form_passes() {
    let form = RegistrationForm::new("Jane", "5550001001", "General OP");
    assert!(validate_form(&form, MIN).is_ok());
}

#[test]
fn test_blank_name_rejected() {
    let form = RegistrationForm::new("   ", "5550001001", "General OP");
    assert_eq!(
        validate_form(&form, MIN),
        Err(DomainError::MissingField("name"))
    );
}

#[test]
fn test_missing_mobile_rejected() {
    let form = RegistrationForm::new("Jane", "", "General OP");
    assert_eq!(
        validate_form(&form, MIN),
        Err(DomainError::MissingField("mobile"))
    );
}

#[test]
fn test_missing_department_rejected() {
    let form = RegistrationForm::new("Jane", "5550001001", "");
    assert_eq!(
        validate_form(&form, MIN),
        Err(DomainError::MissingField("department"))
    );
}

#[test]
fn test_short_mobile_rejected() {
    let form = RegistrationForm::new("Jane", " 555000 ", "General OP");
    let err = validate_form(&form, MIN).unwrap_err();
    assert_eq!(err, DomainError::ContactTooShort { len: 6, min: 10 });
    assert!(err.to_string().contains("minimum 10"));
}

#[test]
fn test_register_trims_and_issues() {
    let mut engine = QueueEngine::with_defaults();
    let form = RegistrationForm::new("  Jane ", " 5550001001 ", " X-Ray ");

    let token = register(&mut engine, &form).unwrap();

    assert_eq!(token.number.to_string(), "A-43");
    assert_eq!(token.holder_name, "Jane");
    assert_eq!(token.contact, "5550001001");
    assert_eq!(token.department, "X-Ray");
}

#[test]
fn test_register_rejection_leaves_engine_untouched() {
    let mut engine = QueueEngine::with_defaults();
    let form = RegistrationForm::new("Jane", "123", "X-Ray");

    let result = register(&mut engine, &form);

    assert!(matches!(result, Err(AppError::Domain(_))));
    assert_eq!(engine.last_issued_number(), 42);
    assert!(engine.current_token().is_none());
}
