// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks every module outside the vertical timing column in data placement
/// order: two column strips from the bottom right corner, alternating up and
/// down, right module of each row before the left one.
pub struct EncRegionIter {
    r: i16,
    // Right column of the current strip
    c: i16,
    width: i16,
    upward: bool,
    right: bool,
}

impl EncRegionIter {
    pub fn new(width: usize) -> Self {
        let w = width as i16;
        Self { r: w - 1, c: w - 1, width: w, upward: true, right: true }
    }

    fn next_strip(&mut self) {
        self.c -= 2;
        self.upward = !self.upward;
        if self.c == VERT_TIMING_COL {
            self.c -= 1;
        }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 1 {
            return None;
        }

        let res = if self.right { (self.r, self.c) } else { (self.r, self.c - 1) };
        if self.right {
            self.right = false;
            return Some(res);
        }

        self.right = true;
        match (self.upward, self.r) {
            (true, 0) => self.next_strip(),
            (false, r) if r == self.width - 1 => self.next_strip(),
            (true, _) => self.r -= 1,
            (false, _) => self.r += 1,
        }
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use std::collections::HashSet;

    use super::{EncRegionIter, VERT_TIMING_COL};

    #[test]
    fn test_start_order() {
        let coords = EncRegionIter::new(21).take(6).collect::<Vec<_>>();
        assert_eq!(coords, vec![(20, 20), (20, 19), (19, 20), (19, 19), (18, 20), (18, 19)]);
    }

    #[test]
    fn test_turn_at_top() {
        let coords = EncRegionIter::new(21).skip(40).take(4).collect::<Vec<_>>();
        assert_eq!(coords, vec![(0, 20), (0, 19), (0, 18), (0, 17)]);
    }

    #[test]
    fn test_skips_timing_column() {
        let coords = EncRegionIter::new(25).collect::<Vec<_>>();
        assert!(coords.iter().all(|&(_, c)| c != VERT_TIMING_COL));
        assert_eq!(coords.len(), 25 * 24);
        assert_eq!(coords.iter().collect::<HashSet<_>>().len(), 25 * 24);
        assert_eq!(coords.last(), Some(&(24, 0)));
    }

    #[test]
    fn test_strip_after_timing_column() {
        // Strip (8, 7) ends at the top, so strip (5, 4) runs downward
        let coords = EncRegionIter::new(21).collect::<Vec<_>>();
        let pos = coords.iter().position(|&(_, c)| c == 5).unwrap();
        assert_eq!(coords[pos], (0, 5));
        assert_eq!(coords[pos + 1], (0, 4));
        assert_eq!(coords[pos - 1], (0, 7));
        assert_eq!(coords[pos + 2], (1, 5));
    }
}

// Global constants
//------------------------------------------------------------------------------

pub const VERT_TIMING_COL: i16 = 6;
