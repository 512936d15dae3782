use gedaff::domain::{ExtractionRequest, ValidationError, MAX_MAX_DOCS, MIN_MAX_DOCS};

#[test]
fn given_valid_params_when_creating_request_then_fields_are_trimmed() {
    let request = ExtractionRequest::new(
        500,
        "  /mnt/contentstore2/ExtractionTravodoc  ",
        "  invoice  ",
        vec!["application/pdf".to_string()],
    )
    .unwrap();

    assert_eq!(request.max_docs, 500);
    assert_eq!(request.extraction_path, "/mnt/contentstore2/ExtractionTravodoc");
    assert_eq!(request.keywords, "invoice");
    assert_eq!(request.mimetypes, vec!["application/pdf".to_string()]);
}

#[test]
fn given_blank_path_when_creating_request_then_path_required() {
    let result = ExtractionRequest::new(500, "   ", "", vec![]);
    assert_eq!(result.unwrap_err(), ValidationError::PathRequired);
}

#[test]
fn given_parent_traversal_when_creating_request_then_invalid_path() {
    let result = ExtractionRequest::new(500, "/mnt/../etc", "", vec![]);
    assert!(matches!(result.unwrap_err(), ValidationError::InvalidPath(_)));
}

#[test]
fn given_home_shorthand_when_creating_request_then_invalid_path() {
    let result = ExtractionRequest::new(500, "~/export", "", vec![]);
    assert!(matches!(result.unwrap_err(), ValidationError::InvalidPath(_)));
}

#[test]
fn given_zero_count_when_creating_request_then_out_of_range() {
    let result = ExtractionRequest::new(0, "/tmp/out", "", vec![]);
    assert_eq!(result.unwrap_err(), ValidationError::MaxDocsOutOfRange(0));
}

#[test]
fn given_negative_count_when_creating_request_then_out_of_range() {
    let result = ExtractionRequest::new(-5, "/tmp/out", "", vec![]);
    assert_eq!(result.unwrap_err(), ValidationError::MaxDocsOutOfRange(-5));
}

#[test]
fn given_count_above_limit_when_creating_request_then_out_of_range() {
    let result = ExtractionRequest::new(MAX_MAX_DOCS + 1, "/tmp/out", "", vec![]);
    assert!(matches!(
        result.unwrap_err(),
        ValidationError::MaxDocsOutOfRange(_)
    ));
}

#[test]
fn given_boundary_counts_when_creating_request_then_accepted() {
    assert!(ExtractionRequest::new(MIN_MAX_DOCS, "/tmp/out", "", vec![]).is_ok());
    assert!(ExtractionRequest::new(MAX_MAX_DOCS, "/tmp/out", "", vec![]).is_ok());
}

#[test]
fn given_blank_path_and_bad_count_when_creating_request_then_path_error_wins() {
    // Validation is fail-fast in declaration order.
    let result = ExtractionRequest::new(0, "", "", vec![]);
    assert_eq!(result.unwrap_err(), ValidationError::PathRequired);
}

#[test]
fn given_out_of_range_error_when_displayed_then_names_both_bounds() {
    let message = ValidationError::MaxDocsOutOfRange(200_000).to_string();
    assert!(message.contains("between 1 and 100000"));
}

#[test]
fn given_full_request_when_summarized_then_echoes_all_parts() {
    let request = ExtractionRequest::new(
        500,
        "/tmp/out",
        "invoice",
        vec!["application/pdf".to_string(), "image/png".to_string()],
    )
    .unwrap();

    let summary = request.summary();
    assert!(summary.starts_with("Extraction started successfully."));
    assert!(summary.contains("invoice"));
    assert!(summary.contains("2 type(s)"));
    assert!(summary.contains("500"));
}

#[test]
fn given_bare_request_when_summarized_then_skips_optional_echoes() {
    let request = ExtractionRequest::new(40_000, "/tmp/out", "", vec![]).unwrap();

    let summary = request.summary();
    assert!(!summary.contains("Keyword filter"));
    assert!(!summary.contains("type(s)"));
    assert!(summary.contains("40000"));
}
