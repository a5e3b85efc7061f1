pub mod source;
pub mod sources;
pub mod types;

pub use source::{ExperienceSource, FetchError, GENERIC_FETCH_MESSAGE};
pub use sources::{HttpSource, SampleSource};
pub use types::ListResponse;
