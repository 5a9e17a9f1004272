//! Tests for the error system.

use relay::error::*;

#[test]
fn error_display_is_stable() {
    assert_eq!(RelayError::backend("no choices").to_string(), "Backend error: no choices");
    assert_eq!(
        RelayError::NotFound("alice".to_string()).to_string(),
        "key not found: alice"
    );
    assert_eq!(RelayError::DeadlineExceeded(250).to_string(), "Deadline exceeded after 250ms");
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: RelayError,
        expected_category: ErrorCategory,
        expected_status: u16,
    }

    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk");
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: RelayError::NotFound("k".to_string()),
            expected_category: ErrorCategory::NotFound,
            expected_status: 404,
        },
        Case {
            error: RelayError::backend("empty content"),
            expected_category: ErrorCategory::Backend,
            expected_status: 500,
        },
        Case {
            error: RelayError::BackendStatus {
                status: 503,
                body: "loading".to_string(),
            },
            expected_category: ErrorCategory::Backend,
            expected_status: 500,
        },
        Case {
            error: RelayError::Network(network_error),
            expected_category: ErrorCategory::Backend,
            expected_status: 500,
        },
        Case {
            error: RelayError::Cancelled,
            expected_category: ErrorCategory::Cancelled,
            expected_status: 504,
        },
        Case {
            error: RelayError::DeadlineExceeded(1000),
            expected_category: ErrorCategory::DeadlineExceeded,
            expected_status: 504,
        },
        Case {
            error: RelayError::validation("missing field `message`"),
            expected_category: ErrorCategory::Validation,
            expected_status: 400,
        },
        Case {
            error: RelayError::Configuration("bad".to_string()),
            expected_category: ErrorCategory::Configuration,
            expected_status: 500,
        },
        Case {
            error: RelayError::Serialization(serde_error),
            expected_category: ErrorCategory::Serialization,
            expected_status: 400,
        },
        Case {
            error: RelayError::Io(io_error),
            expected_category: ErrorCategory::Unknown,
            expected_status: 500,
        },
    ];

    for case in cases {
        let category = case.error.category();
        assert_eq!(category, case.expected_category, "{:?}", case.error);
        assert_eq!(category.status_code(), case.expected_status, "{:?}", case.error);
    }
}

#[test]
fn aborted_and_backend_predicates() {
    assert!(RelayError::Cancelled.is_aborted());
    assert!(RelayError::DeadlineExceeded(1).is_aborted());
    assert!(!RelayError::backend("x").is_aborted());

    assert!(RelayError::backend("x").is_backend_failure());
    assert!(!RelayError::NotFound("k".to_string()).is_backend_failure());
}
