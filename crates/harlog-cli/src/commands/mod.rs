pub mod completion;
pub mod redirects;
pub mod stats;
