//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `misc`    | `[misc]`     | Canonical, robots and default metas  |
//! | `twitter` | `[twitter]`  | Twitter card settings                |

mod misc;
mod twitter;

pub use misc::MiscTagsConfig;
pub use twitter::TwitterConfig;
