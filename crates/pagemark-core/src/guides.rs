//! Manual ruler guides.

use serde::{Deserialize, Serialize};

/// Orientation of a manual guide or snap line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Distance past the page edge beyond which a dropped guide is discarded.
pub const GUIDE_REMOVE_MARGIN: f64 = 20.0;

/// An in-flight guide drag, not yet committed to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideDrag {
    pub orientation: Orientation,
    /// Slot of the guide being relocated, or None for a new guide pulled
    /// off the ruler.
    pub index: Option<usize>,
    /// Live position in page units on the perpendicular axis.
    pub pos: f64,
}

/// What committing a guide drag did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCommit {
    /// A new guide was appended.
    Added,
    /// An existing slot was updated in place.
    Updated,
    /// An existing guide was dropped outside the page and removed.
    Removed,
    /// Nothing changed (new guide dropped outside, or stale index).
    Discarded,
}

/// Ordered manual guide positions, one sequence per orientation.
///
/// Insertion order is preserved and doubles as the index space the UI
/// addresses during a drag. No deduplication, no sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideStore {
    horizontal: Vec<f64>,
    vertical: Vec<f64>,
}

impl GuideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guide positions for one orientation, in insertion order.
    pub fn guides(&self, orientation: Orientation) -> &[f64] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn guides_mut(&mut self, orientation: Orientation) -> &mut Vec<f64> {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        }
    }

    /// Append a guide.
    pub fn add(&mut self, orientation: Orientation, pos: f64) {
        self.guides_mut(orientation).push(pos);
    }

    /// Remove the guide at `index`, returning its position if it existed.
    pub fn remove(&mut self, orientation: Orientation, index: usize) -> Option<f64> {
        let guides = self.guides_mut(orientation);
        (index < guides.len()).then(|| guides.remove(index))
    }

    /// Move the guide at `index` to a new position, in place. Indices of
    /// all other guides are untouched. Returns false for a stale index.
    pub fn set(&mut self, orientation: Orientation, index: usize, pos: f64) -> bool {
        match self.guides_mut(orientation).get_mut(index) {
            Some(slot) => {
                *slot = pos;
                true
            }
            None => false,
        }
    }

    /// Number of guides for one orientation.
    pub fn len(&self, orientation: Orientation) -> usize {
        self.guides(orientation).len()
    }

    /// Check if there are no guides at all.
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_empty() && self.vertical.is_empty()
    }

    /// Commit an in-flight drag.
    ///
    /// `extent` is the page dimension the guide's position runs along
    /// (page height for horizontal guides, page width for vertical ones).
    /// A final position more than [`GUIDE_REMOVE_MARGIN`] outside the page
    /// deletes the guide instead of placing it.
    pub fn commit(&mut self, drag: GuideDrag, extent: f64) -> GuideCommit {
        let out_of_page = drag.pos < -GUIDE_REMOVE_MARGIN || drag.pos > extent + GUIDE_REMOVE_MARGIN;
        match (drag.index, out_of_page) {
            (Some(index), true) => {
                if self.remove(drag.orientation, index).is_some() {
                    GuideCommit::Removed
                } else {
                    GuideCommit::Discarded
                }
            }
            (Some(index), false) => {
                if self.set(drag.orientation, index, drag.pos) {
                    GuideCommit::Updated
                } else {
                    GuideCommit::Discarded
                }
            }
            (None, true) => GuideCommit::Discarded,
            (None, false) => {
                self.add(drag.orientation, drag.pos);
                GuideCommit::Added
            }
        }
    }
}
