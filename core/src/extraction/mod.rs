pub mod bundle;
pub mod record;
pub mod tags;

pub use bundle::extract;
pub use record::{description_mentions_contrast, read_record};
pub use tags::*;
