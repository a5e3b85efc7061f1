pub mod http;
pub mod sample;

pub use http::HttpSource;
pub use sample::SampleSource;
