//! Page object definitions for the layout engine.

use kurbo::{Point, Rect};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for page objects.
pub type ObjectId = Uuid;

/// Minimum object width/height in page units. Resize gestures floor at this
/// value so objects can never collapse or invert.
pub const MIN_OBJECT_SIZE: f64 = 10.0;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Border stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    /// Cycle to the next border style.
    pub fn next(self) -> Self {
        match self {
            BorderStyle::Solid => BorderStyle::Dashed,
            BorderStyle::Dashed => BorderStyle::Dotted,
            BorderStyle::Dotted => BorderStyle::Solid,
        }
    }
}

/// Style properties for page objects.
///
/// Updates through [`crate::page::ObjectUpdate`] replace the whole record;
/// field-level merging of styles is deliberately unsupported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStyle {
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Border color (None = no border).
    pub border_color: Option<SerializableColor>,
    /// Border width in page units.
    pub border_width: f64,
    /// Border stroke style.
    pub border_style: BorderStyle,
    /// Corner radius in page units. Meaningful for rectangle and image kinds.
    #[serde(default)]
    pub corner_radius: f64,
    /// Text color for text objects.
    pub text_color: SerializableColor,
    /// Font size for text objects.
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

fn default_font_size() -> f64 {
    16.0
}

impl ObjectStyle {
    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }

    /// Set the fill color from a peniko Color.
    pub fn set_fill(&mut self, color: Option<Color>) {
        self.fill_color = color.map(|c| c.into());
    }

    /// Get the border color as a peniko Color.
    pub fn border(&self) -> Option<Color> {
        self.border_color.map(|c| c.into())
    }

    /// Set the border color from a peniko Color.
    pub fn set_border(&mut self, color: Option<Color>) {
        self.border_color = color.map(|c| c.into());
    }

    /// Copy of this style with a different corner radius, for the
    /// whole-record update contract.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

impl Default for ObjectStyle {
    fn default() -> Self {
        Self {
            fill_color: None,
            border_color: None,
            border_width: 0.0,
            border_style: BorderStyle::default(),
            corner_radius: 0.0,
            text_color: SerializableColor::black(),
            font_size: default_font_size(),
        }
    }
}

/// The kind of content an object renders, with kind-specific payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    Text { content: String },
    Image { source: String },
    Rectangle,
    Ellipse,
    Line,
    Path { data: String },
}

impl ObjectKind {
    /// Short label used for default layer names.
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Text { .. } => "text",
            ObjectKind::Image { .. } => "image",
            ObjectKind::Rectangle => "rectangle",
            ObjectKind::Ellipse => "ellipse",
            ObjectKind::Line => "line",
            ObjectKind::Path { .. } => "path",
        }
    }

    /// Default frame size for newly created objects of this kind.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ObjectKind::Text { .. } => (300.0, 100.0),
            ObjectKind::Image { .. } => (300.0, 200.0),
            ObjectKind::Rectangle => (150.0, 150.0),
            ObjectKind::Ellipse => (150.0, 150.0),
            ObjectKind::Line => (200.0, 2.0),
            ObjectKind::Path { .. } => (200.0, 200.0),
        }
    }

    /// Whether this kind renders rounded corners.
    pub fn supports_corner_radius(&self) -> bool {
        matches!(self, ObjectKind::Rectangle | ObjectKind::Image { .. })
    }
}

/// A single visual object on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageObject {
    pub id: ObjectId,
    /// Layer name shown in the layer list.
    pub name: String,
    pub kind: ObjectKind,
    /// Top-left corner x in page units.
    pub x: f64,
    /// Top-left corner y in page units.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, clockwise, around the center. Never normalized.
    #[serde(default)]
    pub rotation: f64,
    pub style: ObjectStyle,
    /// Hidden objects are skipped for rendering, selection, and snapping.
    pub visible: bool,
    /// Locked objects are selectable but not transformable.
    pub locked: bool,
}

impl PageObject {
    /// Create a new object of the given kind with the kind's default frame.
    pub fn new(kind: ObjectKind) -> Self {
        let (width, height) = kind.default_size();
        let style = ObjectStyle {
            // Rectangles start filled so they are visible on a white page.
            fill_color: matches!(kind, ObjectKind::Rectangle)
                .then(|| SerializableColor::new(0x3b, 0x82, 0xf6, 255)),
            ..ObjectStyle::default()
        };
        Self {
            id: Uuid::new_v4(),
            name: kind.label().to_string(),
            kind,
            x: 50.0,
            y: 50.0,
            width,
            height,
            rotation: 0.0,
            style,
            visible: true,
            locked: false,
        }
    }

    /// Axis-aligned bounding frame (ignores rotation).
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Center of the frame, the pivot for rotation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether this object offers corner-radius handles.
    pub fn supports_corner_radius(&self) -> bool {
        self.kind.supports_corner_radius()
    }

    /// Largest corner radius this frame admits (half the shortest side).
    pub fn max_corner_radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0).max(0.0)
    }
}

/// Clamp a corner radius into the valid range for a frame of the given size.
pub fn clamp_corner_radius(radius: f64, width: f64, height: f64) -> f64 {
    radius.clamp(0.0, (width.min(height) / 2.0).max(0.0))
}
