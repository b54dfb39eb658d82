//! crates/logging-sink/src/sink/mod.rs
//! Bundled [`logging::Writer`] implementations.

mod guard;
mod memory;
mod stream;

pub use guard::LineModeGuard;
pub use memory::MemoryWriter;
pub use stream::StreamWriter;
