//! Presentation helpers shared by page components.

pub mod motion;
