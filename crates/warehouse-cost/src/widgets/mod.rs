//! TUI widget modules

pub mod breakdown;
pub mod charts;
pub mod header;
pub mod inputs;
pub mod popup;
pub mod shortcuts;
pub mod summary;

pub use breakdown::*;
pub use charts::*;
pub use header::*;
pub use inputs::*;
pub use popup::*;
pub use shortcuts::*;
pub use summary::*;
