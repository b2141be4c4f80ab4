use core::cmp::Ordering;

/// Z-ordering key for scene objects.
///
/// Higher values paint on top of lower values. Values are only compared
/// relative to each other; gaps and negatives are normal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn raised(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[inline]
    pub const fn lowered(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
