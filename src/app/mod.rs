//! Application runtime split into terminal handling and the event loop.

mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::run;
