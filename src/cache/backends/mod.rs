pub mod memory;
pub mod null;

pub use memory::MemoryAssetCache;
pub use null::NullAssetCache;
