pub mod poster;

pub use poster::{Document, Group, Item};
