//! Dense integer keys for offsets inside a radius-bounded square.
//!
//! An offset `(dx, dy)` with `|dx|, |dy| <= radius` maps to
//! `(radius + dx) + stride * (radius + dy)` where `stride = 2 * radius + 1`.
//! Keys are contiguous in `0..stride²`, so they double as array indices for
//! the trie lookup table and the FOV scratch buffer.

use glam::IVec2;

/// Key of one cell offset within the bounding square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey(pub u32);

impl CellKey {
    /// Array index for this key.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Encoder/decoder between offsets and [`CellKey`]s for one radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCodec {
    radius: i32,
    stride: i32,
}

impl KeyCodec {
    /// Create a codec for the square `[-radius, radius]²`.
    pub fn new(radius: i32) -> Self {
        assert!(radius >= 0, "radius must be non-negative");
        Self {
            radius,
            stride: 2 * radius + 1,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Side length of the bounding square.
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Number of distinct keys (`stride²`).
    pub fn key_count(&self) -> usize {
        (self.stride as usize) * (self.stride as usize)
    }

    /// Whether `offset` lies inside the bounding square.
    #[inline]
    pub fn contains(&self, offset: IVec2) -> bool {
        (-self.radius..=self.radius).contains(&offset.x)
            && (-self.radius..=self.radius).contains(&offset.y)
    }

    /// Key for an offset inside the bounding square.
    #[inline]
    pub fn encode(&self, offset: IVec2) -> CellKey {
        debug_assert!(self.contains(offset), "offset {offset} outside radius {}", self.radius);
        CellKey(((self.radius + offset.x) + self.stride * (self.radius + offset.y)) as u32)
    }

    /// Key for `offset`, or `None` if it is outside the bounding square.
    pub fn try_encode(&self, offset: IVec2) -> Option<CellKey> {
        self.contains(offset).then(|| self.encode(offset))
    }

    /// Offset for a key produced by this codec.
    #[inline]
    pub fn decode(&self, key: CellKey) -> IVec2 {
        let k = key.0 as i32;
        IVec2::new(k % self.stride - self.radius, k / self.stride - self.radius)
    }
}
