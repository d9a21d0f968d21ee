pub mod defaults;
pub mod merge;
pub mod model;
pub mod section;

pub use defaults::default_content;
pub use merge::merge_with_defaults;
pub use model::{PartialSiteContent, SiteContent};
pub use section::{SectionKey, SectionUpdate};
