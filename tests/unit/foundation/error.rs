use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScripturaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScripturaError::persistence("x")
            .to_string()
            .contains("persistence error:")
    );
    assert!(
        ScripturaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScripturaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_validation());
}

#[test]
fn json_errors_map_to_serde() {
    let err: ScripturaError = serde_json::from_str::<Vec<String>>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, ScripturaError::Serde(_)));
}
