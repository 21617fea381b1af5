//! Drives the sprout front end: reads source files, lexes and parses them, and hands back the
//! checked result or a single error describing why the program was rejected.

mod frontend;
pub use frontend::*;
