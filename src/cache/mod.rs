pub mod backends;
pub mod register;
pub mod traits;

pub use register::create_asset_cache;
pub use traits::{AssetCache, CacheResult, CachedAsset};
