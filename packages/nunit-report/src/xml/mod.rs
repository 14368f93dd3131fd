//! XML utilities.

mod utils;

pub use utils::{descendants_named, find_children, get_tag_name, has_tag};
