mod annotation;
mod imports;
mod insert;

pub use annotation::{append_or_create_annotation, create_annotation};
pub use imports::{add_imports, existing_imports};
pub use insert::{insert_after, insert_before, insert_first, Placement};
