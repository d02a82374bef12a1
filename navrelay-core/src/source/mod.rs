//! Platform source seam: observation hooks and the capture pipeline

pub mod capture;
pub mod mock;
pub mod traits;
pub mod types;

pub use capture::CapturePipeline;
pub use mock::{MockSource, SourceCall};
pub use traits::NotificationSource;
pub use types::SourcePost;
