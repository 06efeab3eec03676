//! Inline style maps and zoom transforms

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// `transition-duration` forced when restyling after a viewport resize
pub const REFRESH_TRANSITION_DURATION: &str = "0.01ms";

/// Ordered map of CSS property names to values
///
/// Inserting an existing key replaces its value in place, so later builders
/// override earlier ones without reordering the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set a pixel-valued property
    pub fn insert_px(&mut self, key: impl Into<String>, value: f64) {
        self.insert(key, format_px(value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Numeric value of a pixel property such as `"120.5px"`
    pub fn px(&self, key: &str) -> Option<f64> {
        let value = self.get(key)?;
        value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto this map
    pub fn merge(&mut self, other: StyleMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Render as an inline style attribute, e.g. `"top: 10px; left: 0px;"`
    pub fn to_css_string(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}: {};", key, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS property names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleMap, A::Error> {
                let mut map = StyleMap::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(StyleMapVisitor)
    }
}

/// Format a number the way inline styles expect, without a `-0`
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

pub(crate) fn format_px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Transform applied to the zoomed image
///
/// The image is first laid out at its zoomed size and shrunk back with
/// `Collapsed`. Zooming swaps in `Expanded`, which moves the box to the
/// viewport center at scale 1, so a CSS transition between the two animates
/// the zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomTransform {
    /// `translate(0,0) scale(1/scale)`
    Collapsed { scale: f64 },
    /// `translate(Xpx,Ypx) scale(1)`
    Expanded { translate_x: f64, translate_y: f64 },
}

impl ZoomTransform {
    /// Expanded transform that centers `(center_x, center_y)` in the viewport
    pub fn centered(viewport_center: (f64, f64), center_x: f64, center_y: f64) -> Self {
        ZoomTransform::Expanded {
            translate_x: viewport_center.0 - center_x,
            translate_y: viewport_center.1 - center_y,
        }
    }

    /// Scale factor the transform renders with
    fn factor(&self) -> f64 {
        match self {
            ZoomTransform::Collapsed { scale } => 1.0 / scale,
            ZoomTransform::Expanded { .. } => 1.0,
        }
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomTransform::Collapsed { .. } => {
                write!(f, "translate(0,0) scale({})", format_number(self.factor()))
            }
            ZoomTransform::Expanded {
                translate_x,
                translate_y,
            } => write!(
                f,
                "translate({},{}) scale(1)",
                format_px(*translate_x),
                format_px(*translate_y)
            ),
        }
    }
}

/// Parse the translate offsets back out of a transform string
#[cfg(test)]
pub(crate) fn parse_translate(transform: &str) -> Option<(f64, f64)> {
    let inner = transform.strip_prefix("translate(")?;
    let inner = &inner[..inner.find(')')?];
    let (x, y) = inner.split_once(',')?;
    let parse = |s: &str| s.trim().trim_end_matches("px").parse::<f64>().ok();
    Some((parse(x)?, parse(y)?))
}
