use axum::body::Body;
use contact_validator::backend::router::get_router;
use contact_validator::{
    validate_email, validate_phone_number, EmailInput, PhoneNumberInput, ValidationError,
    ValidationResult,
};
use http::{Method, Request, StatusCode};
use tower::ServiceExt;

#[test]
fn test_library_scenarios() {
    let email = validate_email(Some("user@example.com"));
    assert!(email.is_valid);
    assert_eq!(email.message, "Email is valid");

    assert_eq!(validate_email(Some("not-an-email")).message, "Invalid email format");
    assert_eq!(validate_email(Some("")).message, "Email is required.");

    assert!(validate_phone_number(Some("(123) 456-7890")).is_valid);
    assert!(validate_phone_number(Some("123-456-7890")).is_valid);

    let phone = validate_phone_number(Some("1234567890"));
    assert!(!phone.is_valid);
    assert_eq!(phone.message, "Invalid phone number format");
}

#[test]
fn test_typed_inputs_agree_with_rules() {
    let inputs = [
        "user@example.com",
        "not-an-email",
        "   ",
        "(123) 456-7890",
        "123-456-7890",
        "1234567890",
    ];

    for input in inputs {
        assert_eq!(
            EmailInput::try_from(input).is_ok(),
            validate_email(Some(input)).is_valid,
            "Email rule and EmailInput disagree on {:?}",
            input
        );
        assert_eq!(
            PhoneNumberInput::try_from(input).is_ok(),
            validate_phone_number(Some(input)).is_valid,
            "Phone rule and PhoneNumberInput disagree on {:?}",
            input
        );
    }

    assert_eq!(PhoneNumberInput::try_from(" "), Err(ValidationError::PhoneNumberRequired));
}

#[tokio::test]
async fn test_router_matches_library() {
    let inputs = ["user@example.com", "user@", "", "(123)456-7890", "123.456.7890"];

    for input in inputs {
        for (uri, expected) in [
            ("/api/ValidateEmail", validate_email(Some(input))),
            ("/api/ValidatePhoneNumber", validate_phone_number(Some(input))),
        ] {
            let body = serde_json::json!({ "value": input }).to_string();
            let response = get_router()
                .oneshot(
                    Request::builder()
                        .method(Method::POST)
                        .uri(uri)
                        .header("content-type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let result: ValidationResult = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(result, expected, "{} disagrees with the library on {:?}", uri, input);
        }
    }
}
