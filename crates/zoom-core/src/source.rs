//! Source element classification

use serde::{Deserialize, Serialize};

/// How a zoomable element shows its image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// `<img>`, fitted with `object-fit`
    #[default]
    PlainImage,
    /// `<div>` or `<span>` with a `background-image`
    BackgroundContainer,
}

impl SourceKind {
    /// Classify an element by its tag name
    pub fn from_tag_name(tag_name: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("div") || tag_name.eq_ignore_ascii_case("span") {
            SourceKind::BackgroundContainer
        } else {
            SourceKind::PlainImage
        }
    }
}

const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml";

/// Whether the source is a vector image (SVG file or SVG data URI)
pub fn has_scalable_source(src: Option<&str>) -> bool {
    let Some(src) = src else {
        return false;
    };

    let is_data_uri = src
        .get(..SVG_DATA_URI_PREFIX.len())
        .is_some_and(|prefix| prefix == SVG_DATA_URI_PREFIX);

    let is_svg_file = src.len() >= 4
        && src
            .get(src.len() - 4..)
            .is_some_and(|ext| ext.eq_ignore_ascii_case(".svg"));

    is_data_uri || is_svg_file
}

/// Extract the address from the first `url(...)` in a CSS value
///
/// Single or double quotes around the address are dropped.
///
/// ```
/// use zoom_core::extract_css_url;
///
/// assert_eq!(extract_css_url(r#"url("cat.png")"#), Some("cat.png"));
/// assert_eq!(extract_css_url("none"), None);
/// ```
pub fn extract_css_url(value: &str) -> Option<&str> {
    let start = value.find("url(")? + "url(".len();
    let rest = &value[start..];
    let rest = rest.strip_prefix(['"', '\'']).unwrap_or(rest);

    let end = rest.find(')')?;
    let url = &rest[..end];
    Some(url.strip_suffix(['"', '\'']).unwrap_or(url))
}
