//! Popup layout pass
//!
//! One call per layout pass: sizes the content, resolves the attachment,
//! places the content box and the arrow. The previous pass's attachment is
//! threaded through `PopupGeometry::previous` instead of living in component
//! state.

use serde::{Deserialize, Serialize};

use super::arrow::place_arrow;
use super::resolver::{candidate_rect, pair_fits, resolve_with, ArrowGeometry, PlacementOptions};
use crate::models::{
    ArrowPlacement, AttachmentPair, AttachmentPoint, FallbackBehavior, PopupHeight, PopupWidth,
    Rect, Size,
};

pub const DEFAULT_ARROW_SIZE: f64 = 11.0;
pub const DEFAULT_CORNER_INSET: f64 = 3.0;

/// Tie-break between the previous pass's attachment and a fresh auto resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hysteresis {
    /// Always resolve from the requested pair
    #[default]
    None,
    /// Keep the previous auto candidate while it still fits
    PreferPrevious,
}

/// Immutable popup configuration passed on every layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub attachment_behavior: FallbackBehavior,
    /// Attachment point on the popup content
    pub content_attachment: AttachmentPoint,
    /// Attachment point on the target; mirrors `content_attachment` when unset
    pub target_attachment: Option<AttachmentPoint>,
    pub content_height: PopupHeight,
    pub content_width: PopupWidth,
    pub is_arrow_displayed: bool,
    pub arrow_size: f64,
    pub corner_inset: f64,
    pub hysteresis: Hysteresis,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            attachment_behavior: FallbackBehavior::Auto,
            content_attachment: AttachmentPoint::default(),
            target_attachment: None,
            content_height: PopupHeight::default(),
            content_width: PopupWidth::default(),
            is_arrow_displayed: false,
            arrow_size: DEFAULT_ARROW_SIZE,
            corner_inset: DEFAULT_CORNER_INSET,
            hysteresis: Hysteresis::None,
        }
    }
}

impl PopupConfig {
    pub fn requested_pair(&self) -> AttachmentPair {
        let target = self
            .target_attachment
            .unwrap_or_else(|| self.content_attachment.mirror());
        AttachmentPair::new(self.content_attachment, target)
    }

    /// Centered popups never show an arrow
    pub fn shows_arrow(&self) -> bool {
        self.is_arrow_displayed && !self.content_attachment.is_centered()
    }

    pub fn placement_options(&self) -> PlacementOptions {
        if self.shows_arrow() {
            PlacementOptions::with_arrow(ArrowGeometry {
                arrow_size: self.arrow_size,
                corner_inset: self.corner_inset,
            })
        } else {
            PlacementOptions::default()
        }
    }
}

/// Live measurements for one layout pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupGeometry {
    pub target: Rect,
    /// Bounding container; the viewport is used when absent
    pub bounding: Option<Rect>,
    #[serde(default)]
    pub viewport: Size,
    /// Measured content size, used for dynamic axes
    pub measured_content: Option<Size>,
    /// Attachment returned by the previous pass
    pub previous: Option<AttachmentPair>,
}

/// Everything the host needs to position the popup and its arrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupLayout {
    pub attachment: AttachmentPair,
    pub content_rect: Rect,
    pub arrow: ArrowPlacement,
    pub content_size: Size,
    pub is_height_bounded: bool,
    pub is_width_bounded: bool,
}

/// Content size after presets and clamping to the bounding container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedContent {
    pub size: Size,
    pub is_height_bounded: bool,
    pub is_width_bounded: bool,
}

/// Resolve preset sizes (or the measured size for dynamic axes) and clamp to `bounding`
pub fn bounded_content_size(
    height: PopupHeight,
    width: PopupWidth,
    measured: Option<Size>,
    bounding: &Rect,
) -> BoundedContent {
    let measured = measured.unwrap_or_default();
    let requested_height = height.px().unwrap_or(measured.height);
    let requested_width = width.px().unwrap_or(measured.width);

    let (height, is_height_bounded) = clamp_axis(requested_height, bounding.height);
    let (width, is_width_bounded) = clamp_axis(requested_width, bounding.width);

    BoundedContent {
        size: Size::new(width, height),
        is_height_bounded,
        is_width_bounded,
    }
}

fn clamp_axis(value: f64, max: f64) -> (f64, bool) {
    if value > max {
        (max.max(0.0), true)
    } else {
        (value.max(0.0), false)
    }
}

/// Run one layout pass for a popup
pub fn layout_popup(config: &PopupConfig, geometry: &PopupGeometry) -> PopupLayout {
    let bounding = geometry
        .bounding
        .unwrap_or_else(|| Rect::viewport(geometry.viewport));

    let content = bounded_content_size(
        config.content_height,
        config.content_width,
        geometry.measured_content,
        &bounding,
    );
    let options = config.placement_options();
    let attachment = resolve_for_pass(config, geometry, &bounding, content.size, &options);
    let content_rect = candidate_rect(&geometry.target, content.size, attachment, &options);

    let arrow = if config.shows_arrow() {
        place_arrow(
            &geometry.target,
            &content_rect,
            attachment,
            config.arrow_size,
            config.corner_inset,
        )
    } else {
        ArrowPlacement::none()
    };

    PopupLayout {
        attachment,
        content_rect,
        arrow,
        content_size: content.size,
        is_height_bounded: content.is_height_bounded,
        is_width_bounded: content.is_width_bounded,
    }
}

fn resolve_for_pass(
    config: &PopupConfig,
    geometry: &PopupGeometry,
    bounding: &Rect,
    content: Size,
    options: &PlacementOptions,
) -> AttachmentPair {
    let requested = config.requested_pair();

    if config.hysteresis == Hysteresis::PreferPrevious
        && config.attachment_behavior == FallbackBehavior::Auto
    {
        if let Some(previous) = geometry.previous {
            if requested.auto_candidates().contains(&previous)
                && pair_fits(&geometry.target, bounding, content, previous, options)
            {
                return previous;
            }
        }
    }

    resolve_with(
        &geometry.target,
        bounding,
        content,
        requested,
        config.attachment_behavior,
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_popup_defaults() {
        let config = PopupConfig::default();
        assert_eq!(config.attachment_behavior, FallbackBehavior::Auto);
        assert_eq!(config.content_attachment.to_string(), "top center");
        assert_eq!(config.requested_pair().target.to_string(), "bottom center");
        assert!(!config.shows_arrow());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: PopupConfig =
            serde_json::from_str(r#"{"content_attachment":"middle left","is_arrow_displayed":true}"#).unwrap();
        assert_eq!(config.content_attachment.to_string(), "middle left");
        assert_eq!(config.arrow_size, DEFAULT_ARROW_SIZE);
        assert_eq!(config.content_width, PopupWidth::W240);
        assert!(config.shows_arrow());
    }

    #[test]
    fn test_centered_popup_hides_arrow() {
        let config = PopupConfig {
            content_attachment: AttachmentPoint::MIDDLE_CENTER,
            is_arrow_displayed: true,
            ..PopupConfig::default()
        };
        assert!(!config.shows_arrow());
        assert_eq!(config.placement_options(), PlacementOptions::default());
    }

    #[test]
    fn test_bounded_content_size() {
        let bounding = Rect::new(0.0, 0.0, 300.0, 60.0);
        let bounded = bounded_content_size(PopupHeight::H80, PopupWidth::W240, None, &bounding);
        assert_eq!(bounded.size, Size::new(240.0, 60.0));
        assert!(bounded.is_height_bounded);
        assert!(!bounded.is_width_bounded);
    }

    #[test]
    fn test_dynamic_size_uses_measurement() {
        let bounding = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let measured = Some(Size::new(333.0, 44.0));
        let bounded = bounded_content_size(PopupHeight::Dynamic, PopupWidth::Dynamic, measured, &bounding);
        assert_eq!(bounded.size, Size::new(333.0, 44.0));

        let unmeasured = bounded_content_size(PopupHeight::Dynamic, PopupWidth::W160, None, &bounding);
        assert_eq!(unmeasured.size, Size::new(160.0, 0.0));
    }
}
