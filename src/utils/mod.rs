//! Utility modules shared by the tag renderers.

pub mod html;
