//! Contract for the scene-description collaborator that renderers call per reading unit.
//!
//! No network client lives here; hosts implement [`SceneSource`] and always get a usable payload
//! back through [`describe_or_fallback`].

/// Request/response types and the fallback policy.
pub mod describe;
