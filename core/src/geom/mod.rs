use derive_more::Constructor;
use get_size::GetSize;
use serde::{Deserialize, Serialize};

/// Extent of a single 2D plane.
#[derive(
    Constructor, Default, PartialEq, Eq, Debug, Copy, Clone, Hash, Serialize, Deserialize, GetSize,
)]
pub struct Dim2 {
    pub width: usize,
    pub height: usize,
}

impl Dim2 {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `shape` starts with `(width, height)`.
    pub fn is_prefix_of(&self, shape: &[usize]) -> bool {
        matches!(shape, [w, h, ..] if *w == self.width && *h == self.height)
    }
}

impl From<(usize, usize)> for Dim2 {
    fn from((width, height): (usize, usize)) -> Self {
        Dim2 { width, height }
    }
}

impl From<Dim2> for (usize, usize) {
    fn from(v: Dim2) -> Self {
        (v.width, v.height)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_matches_leading_axes() {
        let dims = Dim2::new(4, 5);
        assert!(dims.is_prefix_of(&[4, 5]));
        assert!(dims.is_prefix_of(&[4, 5, 2]));
        assert!(!dims.is_prefix_of(&[5, 4, 2]));
        assert!(!dims.is_prefix_of(&[4]));
        assert_eq!(dims.area(), 20);
        assert_eq!(<(usize, usize)>::from(dims), (4, 5));
    }
}
