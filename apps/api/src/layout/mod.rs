// Poster layout engine.
// Turns a hierarchical content tree and a canvas size into non-overlapping rectangles
// for every title, subtitle, highlight, icon, visualization and text block.
// The engine is pure and CPU-bound; HTTP handlers run it inside tokio::task::spawn_blocking.

pub mod arrangement;
pub mod carve;
pub mod column;
pub mod engine;
pub mod error;
pub mod font_metrics;
pub mod font_scale;
pub mod geometry;
pub mod handlers;
pub mod image_size;
pub mod options;
pub mod padding;
pub mod placement;
pub mod result;

// Re-export the types the service layer matches on.
pub use arrangement::Arrangement;
pub use error::LayoutError;
