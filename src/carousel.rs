//! Card carousel and the selection synchronization controller
//!
//! The carousel is a horizontally scrolling strip of property cards. Its
//! current card and the map's selected marker are kept consistent by
//! [`SelectionSync`], which distinguishes position changes it commanded
//! itself from position changes made by a person scrolling.

pub mod card;
pub mod carousel_render;
mod carousel_state;
mod debouncer;
mod sync;

pub use carousel_state::CarouselState;
pub use debouncer::SettleDebouncer;
pub use sync::{SelectionSync, SuppressionFlag};

/// A list that can be driven to an index and reports its own position changes
pub trait ScrollableList {
    /// Index of the current item (0 for an empty list)
    fn active_index(&self) -> usize;

    /// Number of items in the list
    fn item_count(&self) -> usize;

    /// Move the list to `index`. A move to a different index emits exactly one
    /// position-change notification.
    fn scroll_to(&mut self, index: usize);

    /// Replace the item count after the underlying sequence was swapped out.
    /// Resets the position without emitting a notification.
    fn set_item_count(&mut self, count: usize);

    /// Oldest undelivered position-change notification
    fn take_index_change(&mut self) -> Option<usize>;
}
