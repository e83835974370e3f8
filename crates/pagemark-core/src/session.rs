//! Interaction sessions and the pure transform math behind each gesture.
//!
//! A session is created at pointer-down and destroyed at pointer-up. Its
//! baseline snapshot is immutable for the session's lifetime: every move
//! recomputes the full geometry from (baseline, current pointer), never from
//! the previous move's output, so rounding can't accumulate.

use crate::guides::GuideDrag;
use crate::object::{clamp_corner_radius, ObjectId, PageObject, MIN_OBJECT_SIZE};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// One of the eight resize handles around a selected object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::North,
        ResizeHandle::NorthEast,
        ResizeHandle::East,
        ResizeHandle::SouthEast,
        ResizeHandle::South,
        ResizeHandle::SouthWest,
        ResizeHandle::West,
    ];

    /// Whether dragging this handle moves the right edge.
    pub fn touches_east(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthEast | ResizeHandle::East | ResizeHandle::SouthEast
        )
    }

    /// Whether dragging this handle moves the left edge.
    pub fn touches_west(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthWest | ResizeHandle::West | ResizeHandle::SouthWest
        )
    }

    /// Whether dragging this handle moves the top edge.
    pub fn touches_north(self) -> bool {
        matches!(
            self,
            ResizeHandle::NorthWest | ResizeHandle::North | ResizeHandle::NorthEast
        )
    }

    /// Whether dragging this handle moves the bottom edge.
    pub fn touches_south(self) -> bool {
        matches!(
            self,
            ResizeHandle::SouthWest | ResizeHandle::South | ResizeHandle::SouthEast
        )
    }
}

/// One of the four corner-radius handles (rectangle and image kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiusCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl RadiusCorner {
    pub const ALL: [RadiusCorner; 4] = [
        RadiusCorner::TopLeft,
        RadiusCorner::TopRight,
        RadiusCorner::BottomLeft,
        RadiusCorner::BottomRight,
    ];

    /// Project a pointer delta onto the diagonal that points from this
    /// corner toward the frame's center. Dragging inward is positive.
    pub fn inward_delta(self, delta: Vec2) -> f64 {
        match self {
            RadiusCorner::TopLeft => (delta.x + delta.y) / 2.0,
            RadiusCorner::TopRight => (-delta.x + delta.y) / 2.0,
            RadiusCorner::BottomLeft => (delta.x - delta.y) / 2.0,
            RadiusCorner::BottomRight => (-delta.x - delta.y) / 2.0,
        }
    }
}

/// Geometry snapshot taken at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub corner_radius: f64,
}

impl Pose {
    /// Snapshot an object's current geometry.
    pub fn of(object: &PageObject) -> Self {
        Self {
            x: object.x,
            y: object.y,
            width: object.width,
            height: object.height,
            rotation: object.rotation,
            corner_radius: object.style.corner_radius,
        }
    }
}

/// Discriminant of the session variants, for cursor and state display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Translating,
    Resizing,
    Rotating,
    AdjustingRadius,
    DraggingGuide,
}

/// The active pointer gesture. `None` on the editor means idle.
///
/// At most one session exists at a time; a new one can only start from idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionSession {
    Translating {
        id: ObjectId,
        baseline: Pose,
        start: Point,
    },
    Resizing {
        id: ObjectId,
        baseline: Pose,
        start: Point,
        handle: ResizeHandle,
    },
    /// Rotation needs no baseline: the angle is fully determined by the
    /// current pointer and the object's current center.
    Rotating { id: ObjectId },
    AdjustingRadius {
        id: ObjectId,
        baseline: Pose,
        start: Point,
        corner: RadiusCorner,
    },
    DraggingGuide { drag: GuideDrag },
}

impl InteractionSession {
    pub fn mode(&self) -> InteractionMode {
        match self {
            InteractionSession::Translating { .. } => InteractionMode::Translating,
            InteractionSession::Resizing { .. } => InteractionMode::Resizing,
            InteractionSession::Rotating { .. } => InteractionMode::Rotating,
            InteractionSession::AdjustingRadius { .. } => InteractionMode::AdjustingRadius,
            InteractionSession::DraggingGuide { .. } => InteractionMode::DraggingGuide,
        }
    }
}

/// Candidate top-left for a translate gesture, before snapping.
pub fn translated_position(baseline: &Pose, delta: Vec2) -> (f64, f64) {
    if !delta.x.is_finite() || !delta.y.is_finite() {
        return (baseline.x, baseline.y);
    }
    (baseline.x + delta.x, baseline.y + delta.y)
}

/// Resize the baseline frame by a pointer delta on the given handle.
///
/// Each touched edge follows the pointer. Width and height are floored at
/// [`MIN_OBJECT_SIZE`], and the x/y shift is derived from the clamped size,
/// so the edge opposite the grabbed handle never moves.
pub fn resized_frame(baseline: &Pose, handle: ResizeHandle, delta: Vec2) -> Pose {
    if !delta.x.is_finite() || !delta.y.is_finite() {
        return *baseline;
    }
    let mut frame = *baseline;
    if handle.touches_east() {
        frame.width = (baseline.width + delta.x).max(MIN_OBJECT_SIZE);
    }
    if handle.touches_west() {
        frame.width = (baseline.width - delta.x).max(MIN_OBJECT_SIZE);
        frame.x = baseline.x + (baseline.width - frame.width);
    }
    if handle.touches_south() {
        frame.height = (baseline.height + delta.y).max(MIN_OBJECT_SIZE);
    }
    if handle.touches_north() {
        frame.height = (baseline.height - delta.y).max(MIN_OBJECT_SIZE);
        frame.y = baseline.y + (baseline.height - frame.height);
    }
    frame
}

/// Rotation implied by the current pointer, in degrees.
///
/// Two-argument arctangent from the object's center to the pointer, shifted
/// by 90 so an upright object reads 0. A pure function of its arguments:
/// replaying the same pointer position yields the same angle regardless of
/// gesture history. The result is never normalized.
pub fn rotation_from_pointer(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees() + 90.0
}

/// Corner radius implied by a radius-handle drag, clamped to the frame.
pub fn radius_from_drag(baseline: &Pose, corner: RadiusCorner, delta: Vec2) -> f64 {
    let raw = if delta.x.is_finite() && delta.y.is_finite() {
        baseline.corner_radius + corner.inward_delta(delta)
    } else {
        baseline.corner_radius
    };
    clamp_corner_radius(raw, baseline.width, baseline.height)
}
