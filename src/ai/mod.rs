//! Column selection for computer-controlled seats.

mod chooser;
mod random;

pub use chooser::{choose_open_column, ColumnChooser};
pub use random::RandomChooser;
