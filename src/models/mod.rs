//! 数据模型层

pub mod edit_history;
pub mod edit_op;
pub mod selection;
pub mod text_buffer;

pub use edit_history::{EditHistory, Transaction};
pub use edit_op::{EditOp, OpKind};
pub use selection::Selection;
pub use text_buffer::{slice_to_cow, strip_line_ending, TextBuffer};
