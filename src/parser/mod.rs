//! Document parsing: reading the source file, locating the feature section
//! and splitting it into features.

mod features;
mod reader;
mod section;
mod validate;

pub use features::segment_features;
pub use reader::{decode_document, read_document};
pub use section::locate_section;
pub use validate::{validate_features, ValidationIssue};
