//! Pagemark Core Library
//!
//! Platform-agnostic direct-manipulation engine for the Pagemark page-layout
//! editor: dragging, resizing, rotating and corner-rounding of page objects,
//! smart-guide snapping, and manual ruler guides.

pub mod editor;
pub mod guides;
pub mod keyboard;
pub mod object;
pub mod page;
pub mod pointer;
pub mod session;
pub mod snap;

pub use editor::Editor;
pub use guides::{GuideCommit, GuideDrag, GuideStore, Orientation};
pub use keyboard::KeyCommand;
pub use object::{ObjectId, ObjectKind, ObjectStyle, PageObject, SerializableColor};
pub use page::{ObjectUpdate, PageDocument, PageSettings, PAGE_HEIGHT, PAGE_WIDTH};
pub use pointer::{Modifiers, Viewport};
pub use session::{InteractionMode, InteractionSession, Pose, RadiusCorner, ResizeHandle};
pub use snap::{SnapLine, SnapOutcome, SNAP_THRESHOLD};
