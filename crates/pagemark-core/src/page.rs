//! Page document and object store.

use crate::object::{ObjectId, ObjectKind, ObjectStyle, PageObject, SerializableColor};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Printable page width in page units (A4 at 96 dpi).
pub const PAGE_WIDTH: f64 = 794.0;
/// Printable page height in page units (A4 at 96 dpi).
pub const PAGE_HEIGHT: f64 = 1123.0;

/// Offset applied to duplicated objects so the copy is visibly separate.
const DUPLICATE_OFFSET: f64 = 20.0;

/// The printable page area as a rectangle at the origin.
pub fn page_bounds() -> Rect {
    Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT)
}

/// Errors from decoding a serialized document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Display settings for the page surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub background_color: SerializableColor,
    pub show_horizontal_ruler: bool,
    pub show_vertical_ruler: bool,
    /// Master switch for manual guides, both rendering and snapping.
    pub show_guides: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            background_color: SerializableColor::white(),
            show_horizontal_ruler: true,
            show_vertical_ruler: true,
            show_guides: true,
        }
    }
}

/// A partial update applied to one object.
///
/// Each populated field is a complete replacement of that field group; the
/// store performs the merge. In particular `style` swaps the whole record,
/// never individual style fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub style: Option<ObjectStyle>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub name: Option<String>,
}

impl ObjectUpdate {
    /// Update that moves an object.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Update that replaces the whole frame.
    pub fn frame(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Update that sets the rotation in degrees.
    pub fn rotation(rotation: f64) -> Self {
        Self {
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    /// Update that replaces the style record.
    pub fn style(style: ObjectStyle) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }
}

/// A single page holding an ordered list of objects.
///
/// Insertion order doubles as both the paint order and the stable iteration
/// order the snap engine relies on for deterministic tie-breaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    objects: Vec<PageObject>,
}

impl Default for PageDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDocument {
    /// Create a new empty page.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            objects: Vec::new(),
        }
    }

    /// Create a new object of the given kind with an auto-generated layer
    /// name, append it, and return its id.
    pub fn add_object(&mut self, kind: ObjectKind) -> ObjectId {
        let mut object = PageObject::new(kind);
        object.name = format!("{} {}", object.kind.label(), self.objects.len() + 1);
        let id = object.id;
        self.objects.push(object);
        id
    }

    /// Append an already-built object (used by paste and tests).
    pub fn insert(&mut self, object: PageObject) -> ObjectId {
        let id = object.id;
        self.objects.push(object);
        id
    }

    /// Get an object by id.
    pub fn object(&self, id: ObjectId) -> Option<&PageObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get a mutable reference to an object by id.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut PageObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// All objects in paint order.
    pub fn objects(&self) -> &[PageObject] {
        &self.objects
    }

    /// Visible objects in paint order.
    pub fn visible_objects(&self) -> impl Iterator<Item = &PageObject> {
        self.objects.iter().filter(|o| o.visible)
    }

    /// Merge a partial update into an object.
    ///
    /// Returns false (and changes nothing) when the id is unknown; a stale
    /// id is never a fault.
    pub fn update(&mut self, id: ObjectId, update: ObjectUpdate) -> bool {
        let Some(object) = self.object_mut(id) else {
            return false;
        };
        if let Some(x) = update.x {
            object.x = x;
        }
        if let Some(y) = update.y {
            object.y = y;
        }
        if let Some(width) = update.width {
            object.width = width;
        }
        if let Some(height) = update.height {
            object.height = height;
        }
        if let Some(rotation) = update.rotation {
            object.rotation = rotation;
        }
        if let Some(style) = update.style {
            object.style = style;
        }
        if let Some(visible) = update.visible {
            object.visible = visible;
        }
        if let Some(locked) = update.locked {
            object.locked = locked;
        }
        if let Some(name) = update.name {
            object.name = name;
        }
        true
    }

    /// Remove an object, returning it if it existed.
    pub fn remove(&mut self, id: ObjectId) -> Option<PageObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Duplicate an object with a fresh id, offset so the copy is visible.
    /// Returns the new object's id, or None for an unknown id.
    pub fn duplicate(&mut self, id: ObjectId) -> Option<ObjectId> {
        let source = self.object(id)?;
        let mut copy = source.clone();
        copy.id = Uuid::new_v4();
        copy.name.push_str(" (Copy)");
        copy.x += DUPLICATE_OFFSET;
        copy.y += DUPLICATE_OFFSET;
        let new_id = copy.id;
        self.objects.push(copy);
        Some(new_id)
    }

    /// Set an object's visibility flag. Returns false for an unknown id.
    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        self.update(
            id,
            ObjectUpdate {
                visible: Some(visible),
                ..ObjectUpdate::default()
            },
        )
    }

    /// Set an object's locked flag. Returns false for an unknown id.
    pub fn set_locked(&mut self, id: ObjectId, locked: bool) -> bool {
        self.update(
            id,
            ObjectUpdate {
                locked: Some(locked),
                ..ObjectUpdate::default()
            },
        )
    }

    /// Check if the page has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects on the page.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}
