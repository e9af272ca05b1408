pub mod post_formatter;
pub mod rotation;
pub mod state_store;

pub use post_formatter::{format_post, PostContent};
pub use rotation::next_index;
pub use state_store::{RotationState, StateStore};
