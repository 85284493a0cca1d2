use super::*;
use crate::foundation::error::ScripturaError;

struct Fixed(SceneDescription);

impl SceneSource for Fixed {
    fn describe(&self, _request: &SceneRequest) -> ScripturaResult<SceneDescription> {
        Ok(self.0.clone())
    }
}

struct Offline;

impl SceneSource for Offline {
    fn describe(&self, _request: &SceneRequest) -> ScripturaResult<SceneDescription> {
        Err(ScripturaError::Other(anyhow::anyhow!("connection refused")))
    }
}

fn genesis_one() -> SceneRequest {
    let canon = Canon::standard();
    let unit = canon.unit("Genesis", 1).unwrap();
    SceneRequest::from(&unit)
}

#[test]
fn successful_description_passes_through() {
    let desc = SceneDescription {
        summary: "Light is separated from darkness.".to_string(),
        color: Some("#ffffff".to_string()),
        geometry: Some("icosahedron".to_string()),
        audio_url: None,
        video_url: None,
        fallback: false,
    };
    let out = describe_or_fallback(&Fixed(desc.clone()), &Canon::standard(), &genesis_one());
    assert_eq!(out, desc);
}

#[test]
fn failure_yields_labelled_deterministic_fallback() {
    let canon = Canon::standard();
    let a = describe_or_fallback(&Offline, &canon, &genesis_one());
    let b = describe_or_fallback(&Offline, &canon, &genesis_one());
    assert_eq!(a, b);
    assert!(a.fallback);
    assert!(a.summary.starts_with(FALLBACK_SUMMARY_PREFIX));
    assert!(a.summary.contains("Genesis 1"));
    assert_eq!(a.color.as_deref(), Some(Theme::Creation.accent_hex()));
}

#[test]
fn blank_summary_is_replaced() {
    let blank = SceneDescription::fallback(&genesis_one(), None);
    let blank = SceneDescription {
        summary: "  ".to_string(),
        fallback: false,
        ..blank
    };
    let out = describe_or_fallback(&Fixed(blank), &Canon::standard(), &genesis_one());
    assert!(out.fallback);
}

#[test]
fn minimal_payload_deserializes() {
    let desc: SceneDescription = serde_json::from_str(r#"{"summary":"Exodus"}"#).unwrap();
    assert_eq!(desc.summary, "Exodus");
    assert!(desc.color.is_none());
    assert!(!desc.fallback);
    let json = serde_json::to_string(&desc).unwrap();
    assert!(!json.contains("color"));
}
