pub mod layout;
pub mod sheet;

mod frame;
mod options;
mod preview;
mod session;
mod sort;
mod stats;
mod types;

pub use frame::prepare_frame;
pub use options::SheetOptions;
pub use preview::render_preview;
pub use session::Session;
pub use sheet::{SheetOutput, SourceImage, generate, load_source_images};
pub use sort::{CaptureStamp, SortKey, resolve_sort_key, sort_by_strategy};
pub use stats::calculate_statistics;
pub use types::*;
