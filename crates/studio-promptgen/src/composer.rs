//! Deterministic prompt composition.
//!
//! The composer is the offline fallback for client-scoped prompt
//! generation: a pure template over the brand profile and request text.

use studio_models::BrandInfo;

/// Compose a video prompt from a brand profile and a free-text request.
///
/// Pure and deterministic: identical inputs yield byte-identical output.
/// Missing profile fields render as empty segments; this never fails.
pub fn compose(brand: &BrandInfo, request_text: &str) -> String {
    format!(
        "A {} {} video showing {}, targeting {}, with a {} tone.",
        brand.style.join(" and "),
        brand.industry,
        request_text,
        brand.target_audience,
        brand.tone,
    )
}
