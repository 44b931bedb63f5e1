use assertlib::{assert_equal, assert_precision, AssertError, AssertResult};

#[test]
fn precision_counts_fractional_digits() -> AssertResult {
    assert_precision(1.111, 3)?;
    assert_precision(1.0, 1)?;
    assert_precision(0.5f32, 1)?;
    assert_precision(0.1f32, 1)?;
    assert_precision(2.0, 1)
}

#[test]
fn integers_have_no_fractional_digits() -> AssertResult {
    assert_precision(2, 0)?;
    assert_precision(7u8, 0)?;
    let err = assert_precision(2, 1).unwrap_err();
    assert_eq!(err.message(), "2 does not have 1 precision");
    Ok(())
}

#[test]
fn precision_mismatch_reports_actual_digits() {
    let err = assert_precision(1.11, 3).unwrap_err();
    assert_eq!(err.code(), "precision");
    assert_eq!(err.message(), "1.11 does not have 3 precision");
    assert_eq!(err.info().context["actual"], "2");
}

#[test]
fn exponent_renderings_have_no_fractional_digits() {
    assert!(assert_precision(1e21, 0).is_ok());
    assert!(assert_precision(f64::INFINITY, 0).is_ok());
}

#[test]
fn failures_serialize_for_harness_reports() {
    let err = assert_equal(&"left", &"right").unwrap_err();
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: AssertError = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, err);
    assert_eq!(decoded.info().context["left"], "\"left\"");
}

#[test]
fn failures_display_message_and_code() {
    let err = assert_equal(&1, &2).unwrap_err();
    assert_eq!(
        err.to_string(),
        "assertion failed: 1 is not equal to 2 [equal] (left: 1, right: 2)"
    );
}
