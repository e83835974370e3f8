//! Smart-guide snapping for object translation.
//!
//! Both axes run the same nearest-alignment search independently: the moving
//! frame contributes its low edge, center, and high edge; every target frame
//! contributes the same three points; the closest pair under the threshold
//! wins. Manual guides only participate on an axis where no frame alignment
//! was found.

use crate::guides::{GuideStore, Orientation};
use kurbo::Rect;

/// Snap activation distance in page units.
pub const SNAP_THRESHOLD: f64 = 5.0;

/// A transient alignment line to highlight while snapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapLine {
    pub orientation: Orientation,
    /// Axis position of the target point the moving frame aligned with.
    pub pos: f64,
}

/// Axis adjustments produced by one snap query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapOutcome {
    /// Snapped low-edge x, if an alignment was found on the x axis.
    pub x: Option<f64>,
    /// Snapped low-edge y, if an alignment was found on the y axis.
    pub y: Option<f64>,
    /// Zero, one, or two lines for transient highlight rendering. Manual
    /// guide fallbacks adjust the position without emitting a line.
    pub lines: Vec<SnapLine>,
}

impl SnapOutcome {
    /// Check if either axis snapped.
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// One alignment point of the moving frame: its axis value and its offset
/// from the frame's low edge.
#[derive(Debug, Clone, Copy)]
struct MovingPoint {
    value: f64,
    offset: f64,
}

/// Best alignment found so far on one axis.
#[derive(Debug, Clone, Copy)]
struct AxisBest {
    distance: f64,
    low: f64,
    line: f64,
}

fn moving_points(low: f64, size: f64) -> [MovingPoint; 3] {
    [
        MovingPoint {
            value: low,
            offset: 0.0,
        },
        MovingPoint {
            value: low + size / 2.0,
            offset: size / 2.0,
        },
        MovingPoint {
            value: low + size,
            offset: size,
        },
    ]
}

fn target_points(low: f64, size: f64) -> [f64; 3] {
    [low, low + size / 2.0, low + size]
}

/// Fold one target's alignment points into the running best for an axis.
///
/// Strict comparisons keep the first-found minimum, so iteration order over
/// targets decides ties between equally close candidates. That determinism
/// is observable (it picks which edge "wins") and must not change.
fn consider(
    moving: &[MovingPoint; 3],
    targets: &[f64; 3],
    threshold: f64,
    best: &mut Option<AxisBest>,
) {
    for mp in moving {
        for &tp in targets {
            let distance = tp - mp.value;
            let current = best.map_or(f64::INFINITY, |b| b.distance.abs());
            if distance.abs() < threshold && distance.abs() < current {
                *best = Some(AxisBest {
                    distance,
                    low: tp - mp.offset,
                    line: tp,
                });
            }
        }
    }
}

/// Nearest-alignment search over target spans on one axis.
/// Each span is the target's (low edge, size) on that axis.
fn nearest_axis_snap(
    moving: [MovingPoint; 3],
    spans: impl Iterator<Item = (f64, f64)>,
    threshold: f64,
) -> Option<AxisBest> {
    let mut best = None;
    for (low, size) in spans {
        consider(&moving, &target_points(low, size), threshold, &mut best);
    }
    best
}

/// First manual guide within the threshold, in insertion order.
/// First match wins, not the nearest overall.
fn first_guide_within(value: f64, guides: &[f64], threshold: f64) -> Option<f64> {
    guides.iter().copied().find(|g| (value - g).abs() < threshold)
}

/// Compute snap adjustments for a candidate frame being translated.
///
/// `targets` must list the page bounds first and then every other visible
/// object in paint order; that order breaks ties.
pub fn snap_frame(
    candidate: Rect,
    targets: &[Rect],
    guides: &GuideStore,
    guides_enabled: bool,
) -> SnapOutcome {
    let width = candidate.width();
    let height = candidate.height();

    let best_x = nearest_axis_snap(
        moving_points(candidate.x0, width),
        targets.iter().map(|t| (t.x0, t.width())),
        SNAP_THRESHOLD,
    );
    let best_y = nearest_axis_snap(
        moving_points(candidate.y0, height),
        targets.iter().map(|t| (t.y0, t.height())),
        SNAP_THRESHOLD,
    );

    let mut outcome = SnapOutcome::default();
    if let Some(best) = best_x {
        outcome.x = Some(best.low);
        outcome.lines.push(SnapLine {
            orientation: Orientation::Vertical,
            pos: best.line,
        });
    }
    if let Some(best) = best_y {
        outcome.y = Some(best.low);
        outcome.lines.push(SnapLine {
            orientation: Orientation::Horizontal,
            pos: best.line,
        });
    }

    if guides_enabled {
        if outcome.x.is_none() {
            outcome.x = first_guide_within(
                candidate.x0,
                guides.guides(Orientation::Vertical),
                SNAP_THRESHOLD,
            );
        }
        if outcome.y.is_none() {
            outcome.y = first_guide_within(
                candidate.y0,
                guides.guides(Orientation::Horizontal),
                SNAP_THRESHOLD,
            );
        }
    }

    outcome
}
