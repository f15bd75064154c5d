//! Tag entities built from configuration.
//!
//! | Entity          | Output                                        |
//! |-----------------|-----------------------------------------------|
//! | `MiscTags`      | canonical, robots and default `<meta>` tags   |
//! | `twitter::Card` | `twitter:`-prefixed card tags                 |

mod misc;
pub mod twitter;

pub use misc::{MiscTags, ROBOTS_BLOCK};
