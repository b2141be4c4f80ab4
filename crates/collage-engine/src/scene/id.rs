use core::fmt;
use core::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

// Zero is never handed out so `Option<ObjectId>` stays pointer-sized.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a scene object, unique within this process.
///
/// Ids survive history restores: an object brought back by undo keeps the id
/// it had, and new objects never reuse one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ObjectId(NonZeroU64);

impl ObjectId {
    /// Allocates a fresh id.
    pub(crate) fn next() -> Self {
        let raw = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        // Wrapping past u64::MAX would take centuries of allocation.
        Self(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04}", self.0.get() % 10_000)
    }
}
