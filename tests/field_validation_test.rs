use small_textkit::{validate_fields, validate_record_fields, KitError, User, Validate};

#[test]
fn test_first_empty_field_wins() {
    let user = User::new(1, "", "X");
    let err = user.validate().unwrap_err();

    assert_eq!(
        err,
        KitError::ValidationFailure {
            kind: "user".to_string(),
            record_id: "1".to_string(),
            field: "Name".to_string(),
        }
    );
    assert_ne!(err.field(), Some("Address"));
}

#[test]
fn test_complete_user_passes() {
    let user = User::new(2, "A", "B");
    assert!(user.validate().is_ok());
    assert!(user.validate_before_save().is_ok());
}

#[test]
fn test_validation_does_not_touch_record() {
    let user = User::new(3, "Name", "");
    let before = user.clone();

    let err = user.validate_before_save().unwrap_err();
    assert_eq!(err.to_string(), "Can't save user 3: empty Address");
    assert_eq!(user, before);
}

#[test]
fn test_generic_record_fields() {
    let sku = "SKU-42";
    let fields = [("Widget", "Title"), ("", "Vendor"), ("", "Price")];

    let err = validate_fields(sku, &fields).unwrap_err();
    assert_eq!(err.to_string(), "Can't save record SKU-42: empty Vendor");
    assert!(err.user_friendly_message().contains("Vendor"));
    assert!(err.recovery_suggestion().contains("Vendor"));
}

#[test]
fn test_resupplied_field_passes() {
    let mut user = User::new(4, "", "Main St");
    assert!(user.validate().is_err());

    user.name = "Dmitry".to_string();
    assert!(user.validate().is_ok());
}

#[test]
fn test_record_kind_appears_in_message() {
    let fields = [("Widget", "Title"), ("", "Vendor")];

    let err = validate_record_fields("product", "SKU-42", &fields).unwrap_err();
    assert_eq!(err.to_string(), "Can't save product SKU-42: empty Vendor");
    assert_eq!(
        err.user_friendly_message(),
        "The product SKU-42 is missing a value for Vendor"
    );
}
