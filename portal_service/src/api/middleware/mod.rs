mod attach_context;

pub use attach_context::*;
