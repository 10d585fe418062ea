pub mod payload;
pub mod preview;

pub use payload::{FieldError, ParsedPayload, RowRecord, SheetPayload};
pub use preview::{interpret, Reply, PREVIEW_ROWS};
