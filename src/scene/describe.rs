use crate::{
    canon::book::Theme,
    canon::index::{Canon, ReadingUnit},
    foundation::error::ScripturaResult,
};

/// Prefix marking a substituted payload so renderers can label it.
pub const FALLBACK_SUMMARY_PREFIX: &str = "[offline]";

/// What a scene source is asked for: the canon display name and the 1-based chapter.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneRequest {
    /// Book display name as it appears in the canon table.
    pub book: String,
    /// 1-based chapter.
    pub chapter: u32,
}

impl From<&ReadingUnit> for SceneRequest {
    fn from(unit: &ReadingUnit) -> Self {
        Self {
            book: unit.book.clone(),
            chapter: unit.chapter,
        }
    }
}

/// Free-text summary plus optional styling hints returned by a scene source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneDescription {
    /// Narrative summary shown alongside the visuals.
    pub summary: String,
    /// Accent color (`#rrggbb`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Geometry hint for procedural scenes (e.g. `"icosahedron"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    /// Narration or soundtrack URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    /// Pre-rendered video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// `true` when this payload was substituted after a failed call.
    #[serde(default)]
    pub fallback: bool,
}

impl SceneDescription {
    /// Deterministic placeholder for `request`, tinted by `theme` when known.
    pub fn fallback(request: &SceneRequest, theme: Option<Theme>) -> Self {
        Self {
            summary: format!(
                "{FALLBACK_SUMMARY_PREFIX} {} {}: scene description unavailable.",
                request.book, request.chapter
            ),
            color: theme.map(|t| t.accent_hex().to_string()),
            geometry: None,
            audio_url: None,
            video_url: None,
            fallback: true,
        }
    }
}

/// Anything that can describe a chapter: a remote service, a cache, a fixture.
///
/// Implementations are expected to bound their own latency and report failure as an error.
pub trait SceneSource {
    /// Describe one chapter.
    fn describe(&self, request: &SceneRequest) -> ScripturaResult<SceneDescription>;
}

/// Call `source`, substituting [`SceneDescription::fallback`] on any failure.
pub fn describe_or_fallback(
    source: &dyn SceneSource,
    canon: &Canon,
    request: &SceneRequest,
) -> SceneDescription {
    match source.describe(request) {
        Ok(desc) if !desc.summary.trim().is_empty() => desc,
        Ok(_) => {
            tracing::warn!(
                book = %request.book,
                chapter = request.chapter,
                "scene source returned an empty summary"
            );
            SceneDescription::fallback(request, canon.book(&request.book).map(|b| b.theme))
        }
        Err(err) => {
            tracing::warn!(
                book = %request.book,
                chapter = request.chapter,
                error = %err,
                "scene source failed; using fallback"
            );
            SceneDescription::fallback(request, canon.book(&request.book).map(|b| b.theme))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/describe.rs"]
mod tests;
