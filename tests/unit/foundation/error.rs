use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RevealError::path("x").to_string().contains("path error:"));
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(RevealError::output("x").to_string().contains("output error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_map_to_output() {
    let err: RevealError = std::io::Error::other("pipe closed").into();
    assert!(matches!(err, RevealError::Output(_)));
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: RevealError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, RevealError::Serde(_)));
}
