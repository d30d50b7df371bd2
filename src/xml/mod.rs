//! XML document loading and navigation
//!
//! Documents are parsed with roxmltree. The library parser only walks the
//! resulting nodes through the helpers here and never sees raw bytes.

mod utils;

pub use utils::{element_text, find_child, find_children, find_descendants, load_str};
