//! Attachment resolution
//!
//! Decides which (content, target) attachment pair to use for a popup,
//! falling back to mirrored pairs when the requested one would overflow
//! the bounding container.

use serde::{Deserialize, Serialize};

use crate::models::{
    AttachmentPair, FallbackBehavior, HorizontalAttachment, Point, Rect, Size, VerticalAttachment,
};

/// Arrow dimensions used when shifting content for small targets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrowGeometry {
    /// Arrow length, also the gap kept between content and target
    pub arrow_size: f64,
    /// Distance the arrow tip keeps from either end of a content side
    pub corner_inset: f64,
}

/// Adjustments applied on top of the plain point-to-point alignment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacementOptions {
    /// Gap between content and target for edge-to-opposite-edge attachments
    pub margin: f64,
    /// When set, content slides along the attached edge so the arrow can reach small targets
    pub arrow: Option<ArrowGeometry>,
}

impl PlacementOptions {
    /// Options for a popup that shows an arrow: margin is the arrow size
    pub fn with_arrow(arrow: ArrowGeometry) -> Self {
        Self {
            margin: arrow.arrow_size,
            arrow: Some(arrow),
        }
    }
}

/// Content box implied by aligning `pair.content` on the content to `pair.target` on `target`
pub fn candidate_rect(
    target: &Rect,
    content: Size,
    pair: AttachmentPair,
    options: &PlacementOptions,
) -> Rect {
    let anchor = pair.target.locate(target);
    let inner = pair.content.offset_in(content);
    let aligned = Rect::from_origin(Point::new(anchor.x - inner.x, anchor.y - inner.y), content);

    aligned.translate(margin_shift(pair, options.margin) + content_offset(pair, target, options.arrow))
}

/// Whether the candidate box for `pair` stays inside `bounding`
///
/// Zero-size content fits anywhere.
pub fn pair_fits(
    target: &Rect,
    bounding: &Rect,
    content: Size,
    pair: AttachmentPair,
    options: &PlacementOptions,
) -> bool {
    if content.is_empty() {
        return true;
    }
    bounding.contains_rect(&candidate_rect(target, content, pair, options))
}

/// Resolve the attachment pair with no margin or content offset
pub fn resolve(
    target: &Rect,
    bounding: &Rect,
    content: Size,
    requested: AttachmentPair,
    behavior: FallbackBehavior,
) -> AttachmentPair {
    resolve_with(target, bounding, content, requested, behavior, &PlacementOptions::default())
}

/// Resolve the attachment pair, applying `behavior` when `requested` overflows
///
/// Never fails: when nothing fits, `auto` settles on the fully flipped pair.
pub fn resolve_with(
    target: &Rect,
    bounding: &Rect,
    content: Size,
    requested: AttachmentPair,
    behavior: FallbackBehavior,
    options: &PlacementOptions,
) -> AttachmentPair {
    if target.width < 0.0 || target.height < 0.0 || bounding.width < 0.0 || bounding.height < 0.0 {
        log::warn!("resolve: negative size in target {:?} or bounding {:?}", target, bounding);
    }

    let fits = |pair: AttachmentPair| pair_fits(target, bounding, content, pair, options);

    if fits(requested) {
        return requested;
    }

    match behavior {
        FallbackBehavior::None => requested,
        FallbackBehavior::Flip => {
            let flipped = requested.flip();
            log::debug!("resolve: {} overflows, flipped to {}", requested, flipped);
            flipped
        }
        FallbackBehavior::Auto => {
            let candidates = requested.auto_candidates();
            match candidates.iter().skip(1).copied().find(|pair| fits(*pair)) {
                Some(pair) => {
                    log::debug!("resolve: {} overflows, auto picked {}", requested, pair);
                    pair
                }
                None => {
                    log::debug!("resolve: no candidate for {} fits, using full flip", requested);
                    requested.flip()
                }
            }
        }
    }
}

/// Gap between content and target when edges attach to opposite edges
fn margin_shift(pair: AttachmentPair, margin: f64) -> Point {
    let dy = match (pair.content.vertical, pair.target.vertical) {
        (VerticalAttachment::Top, VerticalAttachment::Bottom) => margin,
        (VerticalAttachment::Bottom, VerticalAttachment::Top) => -margin,
        _ => 0.0,
    };
    let dx = match (pair.content.horizontal, pair.target.horizontal) {
        (HorizontalAttachment::Left, HorizontalAttachment::Right) => margin,
        (HorizontalAttachment::Right, HorizontalAttachment::Left) => -margin,
        _ => 0.0,
    };
    Point::new(dx, dy)
}

fn is_vertical_edge_attachment(pair: AttachmentPair) -> bool {
    matches!(
        (pair.content.vertical, pair.target.vertical),
        (VerticalAttachment::Top, VerticalAttachment::Bottom)
            | (VerticalAttachment::Bottom, VerticalAttachment::Top)
    )
}

fn is_horizontal_edge_attachment(pair: AttachmentPair) -> bool {
    matches!(
        (pair.content.horizontal, pair.target.horizontal),
        (HorizontalAttachment::Left, HorizontalAttachment::Right)
            | (HorizontalAttachment::Right, HorizontalAttachment::Left)
    )
}

/// Slide content along the attached edge so the arrow tip clears the corner
///
/// Only applies when the content corner lines up with the same corner of the
/// target and the target is too small for the arrow to reach its center
/// without entering the corner inset.
pub fn content_offset(pair: AttachmentPair, target: &Rect, arrow: Option<ArrowGeometry>) -> Point {
    let Some(arrow) = arrow else {
        return Point::zero();
    };
    if pair.content.is_centered() {
        return Point::zero();
    }

    let reach = arrow.corner_inset + arrow.arrow_size;

    if is_vertical_edge_attachment(pair) && pair.content.horizontal == pair.target.horizontal {
        let shortfall = reach - target.width / 2.0;
        if shortfall > 0.0 {
            return match pair.content.horizontal {
                HorizontalAttachment::Left => Point::new(-shortfall, 0.0),
                HorizontalAttachment::Right => Point::new(shortfall, 0.0),
                HorizontalAttachment::Center => Point::zero(),
            };
        }
    } else if is_horizontal_edge_attachment(pair) && pair.content.vertical == pair.target.vertical {
        let shortfall = reach - target.height / 2.0;
        if shortfall > 0.0 {
            return match pair.content.vertical {
                VerticalAttachment::Top => Point::new(0.0, -shortfall),
                VerticalAttachment::Bottom => Point::new(0.0, shortfall),
                VerticalAttachment::Middle => Point::zero(),
            };
        }
    }

    Point::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttachmentPoint;

    fn pair(content: &str, target: &str) -> AttachmentPair {
        AttachmentPair::new(content.parse().unwrap(), target.parse().unwrap())
    }

    fn target() -> Rect {
        Rect::new(100.0, 100.0, 50.0, 20.0)
    }

    #[test]
    fn test_candidate_below_target() {
        let rect = candidate_rect(
            &target(),
            Size::new(200.0, 80.0),
            pair("top center", "bottom center"),
            &PlacementOptions::default(),
        );
        assert_eq!(rect, Rect::new(120.0, 25.0, 200.0, 80.0));
    }

    #[test]
    fn test_candidate_centered_over_target() {
        let rect = candidate_rect(
            &target(),
            Size::new(10.0, 10.0),
            AttachmentPair::new(AttachmentPoint::MIDDLE_CENTER, AttachmentPoint::MIDDLE_CENTER),
            &PlacementOptions::default(),
        );
        assert_eq!(rect.center(), target().center());
    }

    #[test]
    fn test_margin_pushes_content_away() {
        let options = PlacementOptions { margin: 8.0, arrow: None };
        let below = candidate_rect(&target(), Size::new(20.0, 20.0), pair("top center", "bottom center"), &options);
        assert_eq!(below.top, 128.0);

        let above = candidate_rect(&target(), Size::new(20.0, 20.0), pair("bottom center", "top center"), &options);
        assert_eq!(above.bottom(), 92.0);

        let right = candidate_rect(&target(), Size::new(20.0, 20.0), pair("middle left", "middle right"), &options);
        assert_eq!(right.left, 158.0);

        // Same-edge alignment gets no margin
        let aligned = candidate_rect(&target(), Size::new(20.0, 20.0), pair("top left", "top left"), &options);
        assert_eq!(aligned.top, 100.0);
        assert_eq!(aligned.left, 100.0);
    }

    #[test]
    fn test_content_offset_for_small_target() {
        let small = Rect::new(100.0, 100.0, 10.0, 10.0);
        let arrow = Some(ArrowGeometry { arrow_size: 8.0, corner_inset: 6.0 });

        // reach 14, half width 5 -> shortfall 9
        assert_eq!(content_offset(pair("top left", "bottom left"), &small, arrow), Point::new(-9.0, 0.0));
        assert_eq!(content_offset(pair("top right", "bottom right"), &small, arrow), Point::new(9.0, 0.0));
        assert_eq!(content_offset(pair("top left", "top right"), &small, arrow), Point::new(0.0, -9.0));
        assert_eq!(content_offset(pair("top center", "bottom center"), &small, arrow), Point::zero());
        assert_eq!(content_offset(pair("top left", "bottom left"), &small, None), Point::zero());
        // diagonal corners do not slide
        assert_eq!(content_offset(pair("top left", "bottom right"), &small, arrow), Point::zero());
    }

    #[test]
    fn test_content_offset_ignored_for_wide_target() {
        let arrow = Some(ArrowGeometry { arrow_size: 8.0, corner_inset: 6.0 });
        assert_eq!(content_offset(pair("top left", "bottom left"), &target(), arrow), Point::zero());
    }

    #[test]
    fn test_zero_size_content_always_fits() {
        let bounding = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(pair_fits(
            &Rect::new(500.0, 500.0, 10.0, 10.0),
            &bounding,
            Size::new(0.0, 40.0),
            pair("top center", "bottom center"),
            &PlacementOptions::default(),
        ));
    }

    #[test]
    fn test_flip_does_not_retest() {
        // Nothing fits in a tiny container, flip still returns the mirror
        let bounding = Rect::new(0.0, 0.0, 10.0, 10.0);
        let requested = pair("top left", "bottom left");
        let resolved = resolve(&target(), &bounding, Size::new(200.0, 80.0), requested, FallbackBehavior::Flip);
        assert_eq!(resolved, pair("bottom right", "top right"));
    }
}
