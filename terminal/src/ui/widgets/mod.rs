//! Reusable egui components.

pub mod block_card;
pub mod status_bar;

pub use block_card::render_block_card;
pub use status_bar::render_status_bar;
