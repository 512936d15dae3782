use gedaff::domain::FlashStatus;

#[test]
fn given_success_status_when_round_tripped_then_equal() {
    let status = FlashStatus::success("Extraction started successfully.");
    let json = status.to_json().unwrap();
    assert_eq!(FlashStatus::from_json(&json).unwrap(), status);
}

#[test]
fn given_failure_status_when_serialized_then_success_flag_false() {
    let json = FlashStatus::failure("boom").to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "boom");
}

#[test]
fn given_malformed_json_when_decoding_then_error() {
    assert!(FlashStatus::from_json("not json at all").is_err());
    assert!(FlashStatus::from_json("{\"success\":\"maybe\"}").is_err());
}
