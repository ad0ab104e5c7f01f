mod selection_state;

pub use selection_state::{SelectionChange, SelectionState};
