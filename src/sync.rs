#[cfg(feature = "std")]
pub use std::sync::LazyLock as Lazy;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Lazy;

#[cfg(feature = "std")]
pub use std::collections::HashSet;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use hashbrown::HashSet;
