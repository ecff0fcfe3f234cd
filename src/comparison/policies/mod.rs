pub mod fallback;

pub use fallback::{FallbackPolicy, ResolvedVendor};
