//! Zoom configuration

use crate::duration::{parse_duration, Duration, DEFAULT_DURATION};
use crate::{Result, ZoomError};
use serde::{Deserialize, Serialize};

/// Selector of the container the zoom dialog is mounted into
pub const DEFAULT_PORTAL_SELECTOR: &str = "[data-smiz-portal]";

/// Element wrapping the zoomable content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapElement {
    #[default]
    Div,
    Span,
}

impl WrapElement {
    pub fn tag_name(self) -> &'static str {
        match self {
            WrapElement::Div => "div",
            WrapElement::Span => "span",
        }
    }
}

/// Transition duration as given by the user: a number of milliseconds or a
/// string such as `"300ms"` or `"1s"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSetting {
    Millis(u64),
    Text(String),
}

impl Default for DurationSetting {
    fn default() -> Self {
        DurationSetting::Text(DEFAULT_DURATION.to_string())
    }
}

impl DurationSetting {
    /// Resolve to a duration, warning and falling back on bad text
    pub fn resolve(&self) -> Duration {
        match self {
            DurationSetting::Millis(millis) => Duration::from_millis(*millis),
            DurationSetting::Text(text) => parse_duration(text),
        }
    }
}

/// Options of an image zoom instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomConfig {
    /// Margin in pixels between the zoomed image and the viewport edges
    pub zoom_margin: f64,

    pub transition_duration: DurationSetting,

    pub wrap_element: WrapElement,

    /// Extra class added to the dialog element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_class: Option<String>,

    /// CSS selector of the dialog container, `[data-smiz-portal]` if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_target: Option<String>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_margin: 0.0,
            transition_duration: DurationSetting::default(),
            wrap_element: WrapElement::Div,
            dialog_class: None,
            portal_target: None,
        }
    }
}

impl ZoomConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ZoomConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the geometry cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.zoom_margin.is_finite() || self.zoom_margin < 0.0 {
            return Err(ZoomError::InvalidConfig(format!(
                "zoomMargin must be a non-negative number, got {}",
                self.zoom_margin
            )));
        }

        if let DurationSetting::Text(text) = &self.transition_duration {
            text.parse::<Duration>()?;
        }

        if matches!(&self.portal_target, Some(selector) if selector.trim().is_empty()) {
            return Err(ZoomError::InvalidConfig(
                "portalTarget must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn transition_duration(&self) -> Duration {
        self.transition_duration.resolve()
    }

    pub fn portal_selector(&self) -> &str {
        self.portal_target.as_deref().unwrap_or(DEFAULT_PORTAL_SELECTOR)
    }
}
