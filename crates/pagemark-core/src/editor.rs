//! Editor state: selection, interaction sessions, and pointer dispatch.
//!
//! The editor owns the one active [`InteractionSession`] and all transient
//! render state (snap lines, in-flight guide drag). Pointer handlers take
//! raw screen coordinates and convert them through the viewport on every
//! call. Everything runs synchronously inside the host's event handlers.

use crate::guides::{GuideDrag, GuideStore, Orientation};
use crate::keyboard::{key_command, KeyCommand};
use crate::object::{ObjectId, PageObject};
use crate::page::{page_bounds, ObjectUpdate, PageDocument, PageSettings, PAGE_HEIGHT, PAGE_WIDTH};
use crate::pointer::{Modifiers, Viewport};
use crate::session::{
    radius_from_drag, resized_frame, rotation_from_pointer, translated_position, InteractionMode,
    InteractionSession, Pose, RadiusCorner, ResizeHandle,
};
use crate::snap::{snap_frame, SnapLine};
use kurbo::{Point, Rect};

/// Smallest visual inset of a radius handle from its corner, so the handle
/// stays clickable at radius zero.
pub const RADIUS_HANDLE_MIN_OFFSET: f64 = 12.0;

/// Runtime editor state for one page.
#[derive(Debug, Clone)]
pub struct Editor {
    /// The page being edited.
    pub document: PageDocument,
    /// Manual ruler guides.
    pub guides: GuideStore,
    /// Page surface display settings.
    pub settings: PageSettings,
    /// Current screen placement of the page surface.
    pub viewport: Viewport,
    selection: Option<ObjectId>,
    session: Option<InteractionSession>,
    snap_lines: Vec<SnapLine>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with an empty page.
    pub fn new() -> Self {
        Self::with_document(PageDocument::new())
    }

    /// Create an editor for an existing page.
    pub fn with_document(document: PageDocument) -> Self {
        Self {
            document,
            guides: GuideStore::new(),
            settings: PageSettings::default(),
            viewport: Viewport::default(),
            selection: None,
            session: None,
            snap_lines: Vec::new(),
        }
    }

    /// Currently selected object, if any.
    pub fn selection(&self) -> Option<ObjectId> {
        self.selection
    }

    /// Change the selection without touching any active session.
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selection = id;
    }

    /// Active snap lines for transient highlight rendering.
    pub fn snap_lines(&self) -> &[SnapLine] {
        &self.snap_lines
    }

    /// The guide currently being dragged, if any.
    pub fn dragging_guide(&self) -> Option<GuideDrag> {
        match self.session {
            Some(InteractionSession::DraggingGuide { drag }) => Some(drag),
            _ => None,
        }
    }

    /// Current interaction mode, for cursor display.
    pub fn mode(&self) -> InteractionMode {
        self.session.map_or(InteractionMode::Idle, |s| s.mode())
    }

    /// Visual inset of an object's radius handles from their corners.
    /// Purely a handle-placement heuristic; the radius invariant itself
    /// lives in the session math.
    pub fn radius_handle_offset(object: &PageObject) -> f64 {
        RADIUS_HANDLE_MIN_OFFSET
            .max(object.style.corner_radius)
            .min(object.max_corner_radius())
    }

    /// Pointer-down on an object body. Selects the object and, when it is
    /// unlocked, starts a translate session.
    pub fn pointer_down_object(&mut self, screen: Point, id: ObjectId) {
        if self.session.is_some() {
            return;
        }
        let Some(object) = self.document.object(id) else {
            return;
        };
        if !object.visible {
            return;
        }
        let locked = object.locked;
        let baseline = Pose::of(object);
        self.selection = Some(id);
        if locked {
            return;
        }
        let start = self.viewport.to_page_local(screen);
        self.session = Some(InteractionSession::Translating { id, baseline, start });
        log::debug!("translate session started for object {id}");
    }

    /// Pointer-down on one of the eight resize handles of the selection.
    pub fn pointer_down_resize(&mut self, screen: Point, handle: ResizeHandle) {
        if self.session.is_some() {
            return;
        }
        let Some((id, baseline)) = self.selected_unlocked() else {
            return;
        };
        let start = self.viewport.to_page_local(screen);
        self.session = Some(InteractionSession::Resizing {
            id,
            baseline,
            start,
            handle,
        });
        log::debug!("resize session started for object {id} on {handle:?}");
    }

    /// Pointer-down on the rotation handle of the selection.
    pub fn pointer_down_rotate(&mut self, _screen: Point) {
        if self.session.is_some() {
            return;
        }
        let Some((id, _)) = self.selected_unlocked() else {
            return;
        };
        self.session = Some(InteractionSession::Rotating { id });
        log::debug!("rotate session started for object {id}");
    }

    /// Pointer-down on a corner-radius handle of the selection. Only
    /// rectangle and image kinds carry these handles.
    pub fn pointer_down_radius(&mut self, screen: Point, corner: RadiusCorner) {
        if self.session.is_some() {
            return;
        }
        let Some(id) = self.selection else {
            return;
        };
        let Some(object) = self.document.object(id) else {
            return;
        };
        if object.locked || !object.supports_corner_radius() {
            return;
        }
        let baseline = Pose::of(object);
        let start = self.viewport.to_page_local(screen);
        self.session = Some(InteractionSession::AdjustingRadius {
            id,
            baseline,
            start,
            corner,
        });
    }

    /// Pointer-down on a ruler track: start dragging a new, uncommitted
    /// guide of the given orientation.
    pub fn pointer_down_ruler(&mut self, screen: Point, orientation: Orientation) {
        if self.session.is_some() {
            return;
        }
        let page = self.viewport.to_page_local(screen);
        let pos = match orientation {
            Orientation::Horizontal => page.y,
            Orientation::Vertical => page.x,
        };
        self.session = Some(InteractionSession::DraggingGuide {
            drag: GuideDrag {
                orientation,
                index: None,
                pos,
            },
        });
    }

    /// Pointer-down on an existing guide line: start relocating it.
    pub fn pointer_down_guide(&mut self, orientation: Orientation, index: usize) {
        if self.session.is_some() {
            return;
        }
        let Some(&pos) = self.guides.guides(orientation).get(index) else {
            return;
        };
        self.session = Some(InteractionSession::DraggingGuide {
            drag: GuideDrag {
                orientation,
                index: Some(index),
                pos,
            },
        });
    }

    /// Pointer-down on the page background outside any object: deselect.
    pub fn pointer_down_background(&mut self) {
        if self.session.is_none() {
            self.selection = None;
        }
    }

    /// Pointer movement. Recomputes the active gesture's full geometry from
    /// its baseline and the current pointer, then pushes one update to the
    /// object store.
    pub fn pointer_move(&mut self, screen: Point) {
        let pointer = self.viewport.to_page_local(screen);
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            // Keep the last geometry computed from the baseline.
            return;
        }
        let Some(session) = self.session else {
            return;
        };
        match session {
            InteractionSession::DraggingGuide { mut drag } => {
                drag.pos = match drag.orientation {
                    Orientation::Horizontal => pointer.y,
                    Orientation::Vertical => pointer.x,
                };
                self.session = Some(InteractionSession::DraggingGuide { drag });
            }
            InteractionSession::Translating { id, baseline, start } => {
                let (mut x, mut y) = translated_position(&baseline, pointer - start);
                let candidate = Rect::new(x, y, x + baseline.width, y + baseline.height);
                let targets = self.snap_targets(id);
                let outcome =
                    snap_frame(candidate, &targets, &self.guides, self.settings.show_guides);
                if let Some(snapped) = outcome.x {
                    x = snapped;
                }
                if let Some(snapped) = outcome.y {
                    y = snapped;
                }
                self.snap_lines = outcome.lines;
                self.document.update(id, ObjectUpdate::position(x, y));
            }
            InteractionSession::Resizing {
                id,
                baseline,
                start,
                handle,
            } => {
                let frame = resized_frame(&baseline, handle, pointer - start);
                self.document
                    .update(id, ObjectUpdate::frame(frame.x, frame.y, frame.width, frame.height));
            }
            InteractionSession::Rotating { id } => {
                let Some(object) = self.document.object(id) else {
                    return;
                };
                let rotation = rotation_from_pointer(object.center(), pointer);
                self.document.update(id, ObjectUpdate::rotation(rotation));
            }
            InteractionSession::AdjustingRadius {
                id,
                baseline,
                start,
                corner,
            } => {
                let radius = radius_from_drag(&baseline, corner, pointer - start);
                let Some(object) = self.document.object(id) else {
                    return;
                };
                let style = object.style.clone().with_corner_radius(radius);
                self.document.update(id, ObjectUpdate::style(style));
            }
        }
    }

    /// Pointer release: commit any in-flight guide drag and return to idle.
    pub fn pointer_up(&mut self) {
        if let Some(InteractionSession::DraggingGuide { drag }) = self.session {
            let extent = match drag.orientation {
                Orientation::Horizontal => PAGE_HEIGHT,
                Orientation::Vertical => PAGE_WIDTH,
            };
            let outcome = self.guides.commit(drag, extent);
            log::debug!("guide drag committed: {outcome:?}");
        }
        self.session = None;
        self.snap_lines.clear();
    }

    /// The pointer left the tracking surface. Treated exactly like a
    /// release so no session outlives its gesture.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Handle a key press from the host shell. Returns true when the event
    /// was consumed and the platform default should be suppressed (required
    /// for the duplicate chord).
    pub fn handle_key(&mut self, key: &str, modifiers: Modifiers, text_input_focused: bool) -> bool {
        let Some(command) = key_command(key, modifiers, text_input_focused) else {
            return false;
        };
        let Some(id) = self.selection else {
            return false;
        };
        match command {
            KeyCommand::DeleteSelection => {
                if self.document.remove(id).is_some() {
                    log::debug!("deleted object {id} via keyboard");
                }
                self.selection = None;
            }
            KeyCommand::DuplicateSelection => {
                if let Some(copy) = self.document.duplicate(id) {
                    self.selection = Some(copy);
                    log::debug!("duplicated object {id} as {copy}");
                }
            }
        }
        true
    }

    /// Selected object's id and pose when it exists and is unlocked.
    fn selected_unlocked(&self) -> Option<(ObjectId, Pose)> {
        let id = self.selection?;
        let object = self.document.object(id)?;
        (!object.locked).then(|| (id, Pose::of(object)))
    }

    /// Snap targets for a translate gesture: the page bounds first, then
    /// every other visible object in paint order.
    fn snap_targets(&self, moving: ObjectId) -> Vec<Rect> {
        let mut targets = Vec::with_capacity(self.document.len() + 1);
        targets.push(page_bounds());
        targets.extend(
            self.document
                .visible_objects()
                .filter(|o| o.id != moving)
                .map(PageObject::bounds),
        );
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use kurbo::Vec2;

    fn rect_at(x: f64, y: f64, w: f64, h: f64) -> PageObject {
        let mut object = PageObject::new(ObjectKind::Rectangle);
        object.x = x;
        object.y = y;
        object.width = w;
        object.height = h;
        object
    }

    fn editor_with(objects: Vec<PageObject>) -> Editor {
        let mut document = PageDocument::new();
        for object in objects {
            document.insert(object);
        }
        Editor::with_document(document)
    }

    #[test]
    fn test_translate_gesture() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        assert_eq!(editor.mode(), InteractionMode::Translating);
        assert_eq!(editor.selection(), Some(id));

        editor.pointer_move(Point::new(350.0, 342.0));
        let moved = editor.document.object(id).unwrap();
        assert!((moved.x - 330.0).abs() < f64::EPSILON);
        assert!((moved.y - 322.0).abs() < f64::EPSILON);
        assert!(editor.snap_lines().is_empty());

        editor.pointer_up();
        assert_eq!(editor.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_translate_recomputes_from_baseline() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        editor.pointer_move(Point::new(327.0, 331.0));
        editor.pointer_move(Point::new(333.0, 324.0));
        // Returning to the start restores the baseline exactly; deltas do
        // not accumulate across moves.
        editor.pointer_move(Point::new(320.0, 320.0));
        let moved = editor.document.object(id).unwrap();
        assert!((moved.x - 300.0).abs() < f64::EPSILON);
        assert!((moved.y - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_snaps_to_neighbor_edge() {
        let stationary = rect_at(100.0, 500.0, 100.0, 50.0);
        let moving = rect_at(200.0, 900.0, 30.0, 30.0);
        let id = moving.id;
        let mut editor = editor_with(vec![stationary, moving]);

        editor.pointer_down_object(Point::new(210.0, 910.0), id);
        // Candidate left edge lands at 103, three units from the
        // stationary object's left edge at 100.
        editor.pointer_move(Point::new(113.0, 915.0));

        let snapped = editor.document.object(id).unwrap();
        assert!((snapped.x - 100.0).abs() < f64::EPSILON);
        assert!((snapped.y - 905.0).abs() < f64::EPSILON);
        assert_eq!(
            editor.snap_lines(),
            &[SnapLine {
                orientation: Orientation::Vertical,
                pos: 100.0
            }]
        );
    }

    #[test]
    fn test_translate_does_not_snap_past_threshold() {
        let stationary = rect_at(100.0, 500.0, 100.0, 50.0);
        let moving = rect_at(200.0, 900.0, 30.0, 30.0);
        let id = moving.id;
        let mut editor = editor_with(vec![stationary, moving]);

        editor.pointer_down_object(Point::new(210.0, 910.0), id);
        // Candidate left edge at 112: twelve units away, no snap.
        editor.pointer_move(Point::new(122.0, 915.0));

        let moved = editor.document.object(id).unwrap();
        assert!((moved.x - 112.0).abs() < f64::EPSILON);
        assert!(editor.snap_lines().is_empty());
    }

    #[test]
    fn test_snap_lines_cleared_on_release() {
        let stationary = rect_at(100.0, 500.0, 100.0, 50.0);
        let moving = rect_at(200.0, 900.0, 30.0, 30.0);
        let id = moving.id;
        let mut editor = editor_with(vec![stationary, moving]);

        editor.pointer_down_object(Point::new(210.0, 910.0), id);
        editor.pointer_move(Point::new(113.0, 915.0));
        assert!(!editor.snap_lines().is_empty());

        editor.pointer_up();
        assert!(editor.snap_lines().is_empty());
    }

    #[test]
    fn test_hidden_objects_are_not_snap_targets() {
        let mut stationary = rect_at(100.0, 500.0, 100.0, 50.0);
        stationary.visible = false;
        let moving = rect_at(200.0, 900.0, 30.0, 30.0);
        let id = moving.id;
        let mut editor = editor_with(vec![stationary, moving]);

        editor.pointer_down_object(Point::new(210.0, 910.0), id);
        editor.pointer_move(Point::new(113.0, 915.0));

        let moved = editor.document.object(id).unwrap();
        assert!((moved.x - 103.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_translate_snaps_to_manual_guide_as_fallback() {
        let moving = rect_at(200.0, 900.0, 30.0, 30.0);
        let id = moving.id;
        let mut editor = editor_with(vec![moving]);
        editor.guides.add(Orientation::Vertical, 250.0);

        editor.pointer_down_object(Point::new(210.0, 910.0), id);
        editor.pointer_move(Point::new(258.0, 915.0));

        let snapped = editor.document.object(id).unwrap();
        assert!((snapped.x - 250.0).abs() < f64::EPSILON);
        // Guide fallback adjusts position without a highlight line.
        assert!(editor.snap_lines().is_empty());

        // With guides hidden the same drag lands free.
        editor.pointer_up();
        editor.settings.show_guides = false;
        editor.pointer_down_object(Point::new(260.0, 915.0), id);
        editor.pointer_move(Point::new(258.0, 915.0));
        let free = editor.document.object(id).unwrap();
        assert!((free.x - 248.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_locked_object_selects_without_session() {
        let mut object = rect_at(300.0, 300.0, 40.0, 40.0);
        object.locked = true;
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        assert_eq!(editor.selection(), Some(id));
        assert_eq!(editor.mode(), InteractionMode::Idle);

        editor.pointer_move(Point::new(400.0, 400.0));
        let object = editor.document.object(id).unwrap();
        assert!((object.x - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_locked_object_rejects_handle_sessions() {
        let mut object = rect_at(300.0, 300.0, 40.0, 40.0);
        object.locked = true;
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_resize(Point::new(340.0, 340.0), ResizeHandle::SouthEast);
        assert_eq!(editor.mode(), InteractionMode::Idle);
        editor.pointer_down_rotate(Point::new(320.0, 360.0));
        assert_eq!(editor.mode(), InteractionMode::Idle);
        editor.pointer_down_radius(Point::new(312.0, 312.0), RadiusCorner::TopLeft);
        assert_eq!(editor.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_hidden_object_is_ignored() {
        let mut object = rect_at(300.0, 300.0, 40.0, 40.0);
        object.visible = false;
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        assert_eq!(editor.selection(), None);
        assert_eq!(editor.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_resize_gesture() {
        let object = rect_at(100.0, 100.0, 80.0, 60.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_resize(Point::new(180.0, 130.0), ResizeHandle::East);
        editor.pointer_move(Point::new(205.0, 170.0));

        let resized = editor.document.object(id).unwrap();
        assert!((resized.width - 105.0).abs() < f64::EPSILON);
        assert!((resized.height - 60.0).abs() < f64::EPSILON);
        assert!((resized.x - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_keeps_opposite_edge_on_overshoot() {
        let object = rect_at(100.0, 100.0, 80.0, 60.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        // Drag the west handle far past the east edge.
        editor.pointer_down_resize(Point::new(100.0, 130.0), ResizeHandle::West);
        editor.pointer_move(Point::new(400.0, 130.0));

        let resized = editor.document.object(id).unwrap();
        assert!((resized.width - 10.0).abs() < f64::EPSILON);
        assert!((resized.x + resized.width - 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_without_selection_is_noop() {
        let object = rect_at(100.0, 100.0, 80.0, 60.0);
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_resize(Point::new(180.0, 130.0), ResizeHandle::East);
        assert_eq!(editor.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_rotate_gesture_follows_pointer() {
        let object = rect_at(100.0, 100.0, 100.0, 100.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_rotate(Point::new(150.0, 230.0));
        // Center is (150, 150); pointer due east reads 90 degrees.
        editor.pointer_move(Point::new(250.0, 150.0));
        assert!((editor.document.object(id).unwrap().rotation - 90.0).abs() < 1e-9);

        // Straight below reads 180.
        editor.pointer_move(Point::new(150.0, 250.0));
        assert!((editor.document.object(id).unwrap().rotation - 180.0).abs() < 1e-9);

        // Replaying the same pointer position is idempotent.
        editor.pointer_move(Point::new(150.0, 250.0));
        assert!((editor.document.object(id).unwrap().rotation - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_gesture() {
        let object = rect_at(100.0, 100.0, 80.0, 60.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_radius(Point::new(170.0, 150.0), RadiusCorner::BottomRight);
        // Inward drag: left and up.
        editor.pointer_move(Point::new(150.0, 140.0));

        let style = &editor.document.object(id).unwrap().style;
        assert!((style.corner_radius - 15.0).abs() < f64::EPSILON);
        // The rest of the style record survives the whole-record replace.
        assert!(style.fill_color.is_some());
    }

    #[test]
    fn test_radius_rejected_for_unsupported_kind() {
        let object = PageObject::new(ObjectKind::Ellipse);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_radius(Point::new(60.0, 60.0), RadiusCorner::TopLeft);
        assert_eq!(editor.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_guide_create_and_commit() {
        let mut editor = editor_with(vec![]);

        editor.pointer_down_ruler(Point::new(500.0, 7.0), Orientation::Vertical);
        assert_eq!(editor.mode(), InteractionMode::DraggingGuide);

        editor.pointer_move(Point::new(10.0, 50.0));
        let drag = editor.dragging_guide().unwrap();
        assert!((drag.pos - 10.0).abs() < f64::EPSILON);
        // The store is untouched until commit.
        assert!(editor.guides.is_empty());

        editor.pointer_up();
        assert_eq!(editor.guides.guides(Orientation::Vertical), &[10.0]);
    }

    #[test]
    fn test_guide_dropped_outside_page_is_discarded() {
        let mut editor = editor_with(vec![]);

        editor.pointer_down_ruler(Point::new(500.0, 7.0), Orientation::Vertical);
        editor.pointer_move(Point::new(-25.0, 50.0));
        editor.pointer_up();

        assert!(editor.guides.is_empty());
    }

    #[test]
    fn test_guide_relocate_in_place() {
        let mut editor = editor_with(vec![]);
        editor.guides.add(Orientation::Vertical, 100.0);
        editor.guides.add(Orientation::Vertical, 200.0);
        editor.guides.add(Orientation::Vertical, 300.0);

        editor.pointer_down_guide(Orientation::Vertical, 1);
        editor.pointer_move(Point::new(250.0, 40.0));
        editor.pointer_up();

        assert_eq!(
            editor.guides.guides(Orientation::Vertical),
            &[100.0, 250.0, 300.0]
        );
    }

    #[test]
    fn test_guide_dragged_off_page_is_removed() {
        let mut editor = editor_with(vec![]);
        editor.guides.add(Orientation::Vertical, 100.0);
        editor.guides.add(Orientation::Vertical, 200.0);

        editor.pointer_down_guide(Orientation::Vertical, 0);
        editor.pointer_move(Point::new(900.0, 40.0));
        editor.pointer_up();

        assert_eq!(editor.guides.guides(Orientation::Vertical), &[200.0]);
    }

    #[test]
    fn test_horizontal_guide_tracks_y() {
        let mut editor = editor_with(vec![]);

        editor.pointer_down_ruler(Point::new(7.0, 400.0), Orientation::Horizontal);
        editor.pointer_move(Point::new(300.0, 620.0));
        editor.pointer_up();

        assert_eq!(editor.guides.guides(Orientation::Horizontal), &[620.0]);
    }

    #[test]
    fn test_pointer_leave_aborts_session() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        editor.pointer_leave();
        assert_eq!(editor.mode(), InteractionMode::Idle);

        editor.pointer_move(Point::new(400.0, 400.0));
        let object = editor.document.object(id).unwrap();
        assert!((object.x - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stale_object_mid_gesture_is_noop() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        editor.document.remove(id);
        editor.pointer_move(Point::new(350.0, 350.0));
        editor.pointer_up();

        assert!(editor.document.is_empty());
    }

    #[test]
    fn test_session_only_starts_from_idle() {
        let first = rect_at(300.0, 300.0, 40.0, 40.0);
        let second = rect_at(500.0, 500.0, 40.0, 40.0);
        let (a, b) = (first.id, second.id);
        let mut editor = editor_with(vec![first, second]);

        editor.pointer_down_object(Point::new(320.0, 320.0), a);
        editor.pointer_down_object(Point::new(520.0, 520.0), b);

        assert_eq!(editor.selection(), Some(a));
        assert_eq!(editor.mode(), InteractionMode::Translating);
    }

    #[test]
    fn test_background_click_deselects() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        editor.pointer_down_background();
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_non_finite_pointer_is_discarded() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);

        editor.pointer_down_object(Point::new(320.0, 320.0), id);
        editor.pointer_move(Point::new(350.0, 320.0));
        editor.pointer_move(Point::new(f64::NAN, 320.0));

        let object = editor.document.object(id).unwrap();
        assert!((object.x - 330.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_viewport_offset_applies_to_gestures() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.viewport = Viewport::new(Point::new(100.0, 0.0));
        editor.viewport.set_scroll(Vec2::new(0.0, 50.0));

        // Screen (420, 260) maps to page (320, 310).
        editor.pointer_down_object(Point::new(420.0, 260.0), id);
        editor.pointer_move(Point::new(450.0, 280.0));

        let moved = editor.document.object(id).unwrap();
        assert!((moved.x - 330.0).abs() < f64::EPSILON);
        assert!((moved.y - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyboard_delete_selected() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        assert!(editor.handle_key("Delete", Modifiers::default(), false));
        assert!(editor.document.is_empty());
        assert_eq!(editor.selection(), None);
    }

    #[test]
    fn test_keyboard_delete_without_selection_is_noop() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let mut editor = editor_with(vec![object]);

        assert!(!editor.handle_key("Delete", Modifiers::default(), false));
        assert_eq!(editor.document.len(), 1);
    }

    #[test]
    fn test_keyboard_delete_ignored_in_text_input() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        assert!(!editor.handle_key("Backspace", Modifiers::default(), true));
        assert_eq!(editor.document.len(), 1);
        assert_eq!(editor.selection(), Some(id));
    }

    #[test]
    fn test_keyboard_duplicate_selects_copy() {
        let object = rect_at(300.0, 300.0, 40.0, 40.0);
        let id = object.id;
        let mut editor = editor_with(vec![object]);
        editor.select(Some(id));

        let modifiers = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        assert!(editor.handle_key("d", modifiers, false));
        assert_eq!(editor.document.len(), 2);

        let copy = editor.selection().unwrap();
        assert_ne!(copy, id);
        let duplicated = editor.document.object(copy).unwrap();
        assert!((duplicated.x - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radius_handle_offset_heuristic() {
        let mut object = rect_at(0.0, 0.0, 80.0, 60.0);
        assert!((Editor::radius_handle_offset(&object) - 12.0).abs() < f64::EPSILON);

        object.style.corner_radius = 20.0;
        assert!((Editor::radius_handle_offset(&object) - 20.0).abs() < f64::EPSILON);

        object.style.corner_radius = 100.0;
        // Capped at half the shortest side.
        assert!((Editor::radius_handle_offset(&object) - 30.0).abs() < f64::EPSILON);
    }
}
