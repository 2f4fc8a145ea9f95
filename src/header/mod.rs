//! Generated header rendering

mod emitter;

pub use emitter::{DEFAULT_MACRO_PREFIX, HeaderEmitter};
