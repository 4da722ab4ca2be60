// src/domain/image/mod.rs
//
// Social preview image selection
//
// Pure value logic: no I/O, no state. Same candidates → same image.

pub mod resolver;

pub use resolver::{resolve_image, ImageCandidates, ImageSource};
