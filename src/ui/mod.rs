mod confirm;
pub mod layout;
mod quiz;
mod summary;

pub use confirm::draw_confirmation;
pub use layout::{calculate_quiz_chunks, centered_rect};
pub use quiz::draw_quiz;
pub use summary::draw_summary;
