//! Utility modules for tickbox.
//!
//! - [`color`] - Color conversion and blending used by the fade animation

pub mod color;
