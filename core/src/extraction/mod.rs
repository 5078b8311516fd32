pub mod dataset;
pub mod registry;
pub mod tags;
pub mod value;

pub use dataset::extract_row;
pub use registry::{TagRegistry, TagSpec};
pub use tags::find_nested;
pub use value::field_value;
