mod normalize;
mod options;
mod reader;
mod types;

pub use normalize::{authority, normalize_redirects, resolve_partial_redirect};
pub use options::{ProtocolRelative, ReaderOptions};
pub use reader::HarReader;
pub use types::*;
