//! Meta tag primitives.
//!
//! | Type             | Purpose                                    |
//! |------------------|--------------------------------------------|
//! | `Meta`           | One `<meta name content>` element          |
//! | `MetaCollection` | Ordered, prefixed set of unique entries    |

mod collection;
mod tag;

pub use collection::MetaCollection;
pub use tag::Meta;
