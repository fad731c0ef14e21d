//! Content collections and the rules deciding what gets published.
//!
//! ```text
//! content/
//! ├── blog/
//! │   ├── hello-world.md          → /blog/hello-world/
//! │   └── bundled-post/index.md   → /blog/bundled-post/
//! └── projects/
//!     └── tool.md                 → /projects/tool/
//! ```
//!
//! Entries are loaded by a [`ContentSource`] and then only read. Whether an
//! entry gets a page or a spot on an index is decided by [`should_render`]
//! and [`should_list`].

mod entry;
mod error;
pub mod frontmatter;
mod source;
pub mod visibility;

pub use entry::{Collection, ContentEntry, ProjectLinks};
pub use error::ContentError;
pub use source::{ContentSource, FsSource};
pub use visibility::{RuntimeMode, Visibility, should_list, should_render};
