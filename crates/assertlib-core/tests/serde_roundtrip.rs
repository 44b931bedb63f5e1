use assertlib_core::{AssertError, FailureInfo, ToleranceMode};

#[test]
fn failure_round_trip_json() {
    let err = AssertError::Assertion(
        FailureInfo::new("almost_equal", "1.0 != 1.06 within 1 places")
            .with_context("left", "1.0")
            .with_context("right", "1.06")
            .with_context("mode", "1 places"),
    );

    let json = serde_json::to_string_pretty(&err).expect("serialize");
    let decoded: AssertError = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, err);
}

#[test]
fn failure_is_tagged_by_family() {
    let err = AssertError::Configuration(FailureInfo::new("tolerance.conflict", "both"));
    let value = serde_json::to_value(&err).expect("serialize");

    assert_eq!(value["family"], "Configuration");
    assert_eq!(value["detail"]["code"], "tolerance.conflict");
    assert!(value["detail"].get("hint").is_none());
}

#[test]
fn tolerance_round_trip_json() {
    for mode in [
        ToleranceMode::Unset,
        ToleranceMode::Places(3),
        ToleranceMode::Epsilon(0.25),
    ] {
        let json = serde_json::to_string(&mode).expect("serialize");
        let decoded: ToleranceMode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, mode);
    }
}
