use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        InkError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        InkError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(InkError::encode("x").to_string().contains("encode error:"));
    assert!(
        InkError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn structured_variants_render_their_fields() {
    let err = InkError::InvalidExtent {
        height: -1,
        width: 4,
    };
    assert_eq!(err.to_string(), "invalid extent: -1x4");

    let err = InkError::IncompatibleFrameCounts { left: 30, right: 60 };
    assert_eq!(err.to_string(), "incompatible frame counts: 30 vs 60");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = InkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
