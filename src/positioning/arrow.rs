//! Arrow placement
//!
//! Given the realized target and content boxes, finds the content side the
//! arrow sits on and how far along that side its tip goes.

use crate::models::{ArrowPlacement, ArrowSide, AttachmentPair, Rect, VerticalAttachment};

/// Sub-pixel slack when testing whether two boxes touch
const ADJACENCY_TOLERANCE: f64 = 1.0;

/// Compute the arrow side and offset for `content` pointing at `target`
///
/// Returns `ArrowSide::None` for centered attachments, overlapping or
/// diagonal boxes, degenerate sizes, gaps wider than the arrow, and sides too
/// short to hold the corner insets.
pub fn place_arrow(
    target: &Rect,
    content: &Rect,
    resolved: AttachmentPair,
    arrow_size: f64,
    corner_inset: f64,
) -> ArrowPlacement {
    if resolved.content.is_centered() || target.is_empty() || content.is_empty() {
        return ArrowPlacement::none();
    }

    let reach = arrow_size.max(0.0) + ADJACENCY_TOLERANCE;
    let stacked = stacked_side(target, content, reach);
    let beside = beside_side(target, content, reach);

    // Edge attachments on the vertical axis prefer an arrow on top/bottom
    let side = if resolved.content.vertical == VerticalAttachment::Middle {
        beside.or(stacked)
    } else {
        stacked.or(beside)
    };

    let Some(side) = side else {
        return ArrowPlacement::none();
    };

    let inset = corner_inset.max(0.0);
    let center = target.center();
    let (distance, side_length) = if side.is_horizontal() {
        (center.x - content.left, content.width)
    } else {
        (center.y - content.top, content.height)
    };

    let max = side_length - inset;
    if max.is_nan() || max < inset {
        return ArrowPlacement::none();
    }

    ArrowPlacement::new(side, distance.clamp(inset, max))
}

/// Content above or below the target with overlapping horizontal spans
fn stacked_side(target: &Rect, content: &Rect, reach: f64) -> Option<ArrowSide> {
    if !content.overlaps_horizontally(target) {
        return None;
    }
    let gap_above = target.top - content.bottom();
    let gap_below = content.top - target.bottom();
    if within_reach(gap_above, reach) {
        Some(ArrowSide::Bottom)
    } else if within_reach(gap_below, reach) {
        Some(ArrowSide::Top)
    } else {
        None
    }
}

/// Content left or right of the target with overlapping vertical spans
fn beside_side(target: &Rect, content: &Rect, reach: f64) -> Option<ArrowSide> {
    if !content.overlaps_vertically(target) {
        return None;
    }
    let gap_left = target.left - content.right();
    let gap_right = content.left - target.right();
    if within_reach(gap_left, reach) {
        Some(ArrowSide::Right)
    } else if within_reach(gap_right, reach) {
        Some(ArrowSide::Left)
    } else {
        None
    }
}

fn within_reach(gap: f64, reach: f64) -> bool {
    gap >= -ADJACENCY_TOLERANCE && gap <= reach
}
