//! Editor engine: coordinate math, gesture state, playback sync, media
//! probing, and the render service client. Everything here is plain
//! Rust with no view dependencies.

pub mod geometry;
pub mod gesture;
pub mod media;
pub mod render;
pub mod sync;
