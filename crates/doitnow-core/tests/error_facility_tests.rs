use doitnow_core::errors::{DoItNowError, ExError, ExErrorKind};
use doitnow_core_types::{RequestId, TraceId};

#[test]
fn test_every_domain_error_maps_to_a_kind() {
    let cases = vec![
        (
            DoItNowError::TaskNotFound {
                task_id: "t".to_string(),
            },
            ExErrorKind::NotFound,
        ),
        (
            DoItNowError::CategoryNotFound {
                category_id: "c".to_string(),
            },
            ExErrorKind::NotFound,
        ),
        (
            DoItNowError::InvalidTitle {
                reason: "empty".to_string(),
            },
            ExErrorKind::InvalidTitle,
        ),
        (
            DoItNowError::InvalidCategoryName {
                reason: "empty".to_string(),
            },
            ExErrorKind::InvalidName,
        ),
        (
            DoItNowError::InvalidIcon {
                reason: "empty".to_string(),
            },
            ExErrorKind::InvalidIcon,
        ),
        (
            DoItNowError::InvalidColor {
                color: "red".to_string(),
            },
            ExErrorKind::InvalidColor,
        ),
        (
            DoItNowError::InvalidDate {
                value: "x".to_string(),
            },
            ExErrorKind::InvalidDate,
        ),
        (
            DoItNowError::InvalidTimestamp {
                value: "x".to_string(),
            },
            ExErrorKind::InvalidDate,
        ),
        (
            DoItNowError::UnknownSetting {
                key: "k".to_string(),
            },
            ExErrorKind::InvalidSetting,
        ),
        (
            DoItNowError::InvalidSettingValue {
                key: "k".to_string(),
                value: "v".to_string(),
            },
            ExErrorKind::InvalidSetting,
        ),
        (
            DoItNowError::Serialization {
                message: "m".to_string(),
            },
            ExErrorKind::Serialization,
        ),
    ];

    for (err, kind) in cases {
        let ex: ExError = err.clone().into();
        assert_eq!(ex.kind(), kind, "{:?}", err);
        assert!(ex.code().starts_with("ERR_"));
        assert!(!ex.message().is_empty());
    }
}

#[test]
fn test_correlation_ids_are_carried() {
    let request_id = RequestId::from_string("req-7".to_string());
    let trace_id = TraceId::from_string("trace-7".to_string());

    let ex = ExError::new(ExErrorKind::Persistence)
        .with_request_id(request_id.clone())
        .with_trace_id(trace_id.clone());

    assert_eq!(ex.request_id(), Some(&request_id));
    assert_eq!(ex.trace_id(), Some(&trace_id));
}

#[test]
fn test_serde_json_errors_become_serialization() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: DoItNowError = parse.unwrap_err().into();
    assert!(matches!(err, DoItNowError::Serialization { .. }));
}
