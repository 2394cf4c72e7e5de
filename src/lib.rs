pub mod console;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod shell;

pub mod core;
pub mod input;
pub mod process;
