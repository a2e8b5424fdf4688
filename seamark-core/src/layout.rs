//! Shared layout parameters and their single writer
//!
//! The consultant search view pins a card in each of its two columns
//! and starts both scrolling lists at the same offset below the column
//! tops. That offset is the larger of the two pinned heights, and the
//! value has to be shared: the renderer of either column needs to know
//! about the other one. [`LayoutSync`] owns those numbers; everything
//! else reads a [`LayoutParams`] snapshot.

/// Where measured heights come from.
///
/// The embedding UI reports the rendered extent of the header and of
/// the two pinned cards. A panel that is not on screen reports `None`.
pub trait StickyProbe {
    /// Height of the fixed page header.
    fn header_h(&self) -> Option<u16>;
    /// Height of the pinned card in the left column.
    fn left_sticky_h(&self) -> Option<u16>;
    /// Height of the pinned card in the right column.
    fn right_sticky_h(&self) -> Option<u16>;
}

/// Snapshot of the shared layout values, in terminal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutParams {
    pub header_h: u16,
    pub left_sticky_h: u16,
    pub right_sticky_h: u16,
    /// Larger of the two sticky heights; the common list start offset.
    pub sticky_max_h: u16,
}

/// Sole writer of the shared layout parameters.
///
/// `recompute` and `reset` are the only mutations, and both keep
/// `sticky_max_h` consistent with the two sides, so readers never see
/// a torn combination.
#[derive(Debug, Clone, Default)]
pub struct LayoutSync {
    params: LayoutParams,
}

impl LayoutSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current values.
    #[must_use]
    pub const fn params(&self) -> LayoutParams {
        self.params
    }

    /// Measure through `probe` and publish fresh values.
    ///
    /// A missing header keeps its previous height; a missing sticky
    /// card counts as zero. `sticky_max_h` is recomputed from whatever
    /// the sides came out to.
    pub fn recompute(&mut self, probe: &dyn StickyProbe) {
        if let Some(h) = probe.header_h() {
            self.params.header_h = h;
        }
        let left = probe.left_sticky_h().unwrap_or(0);
        let right = probe.right_sticky_h().unwrap_or(0);
        self.params.left_sticky_h = left;
        self.params.right_sticky_h = right;
        self.params.sticky_max_h = left.max(right);
        log::debug!(
            "layout recomputed: header={} left={} right={} max={}",
            self.params.header_h,
            left,
            right,
            self.params.sticky_max_h
        );
    }

    /// Zero the sticky values. The header height is left alone; the
    /// header never leaves the screen.
    pub fn reset(&mut self) {
        self.params.left_sticky_h = 0;
        self.params.right_sticky_h = 0;
        self.params.sticky_max_h = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        header: Option<u16>,
        left: Option<u16>,
        right: Option<u16>,
    }

    impl StickyProbe for FixedProbe {
        fn header_h(&self) -> Option<u16> {
            self.header
        }
        fn left_sticky_h(&self) -> Option<u16> {
            self.left
        }
        fn right_sticky_h(&self) -> Option<u16> {
            self.right
        }
    }

    #[test]
    fn recompute_publishes_both_sides_and_their_max() {
        let mut sync = LayoutSync::new();
        sync.recompute(&FixedProbe {
            header: Some(4),
            left: Some(120),
            right: Some(340),
        });

        let p = sync.params();
        assert_eq!(p.header_h, 4);
        assert_eq!(p.left_sticky_h, 120);
        assert_eq!(p.right_sticky_h, 340);
        assert_eq!(p.sticky_max_h, 340);
    }

    #[test]
    fn missing_side_counts_as_zero() {
        let mut sync = LayoutSync::new();
        sync.recompute(&FixedProbe {
            header: Some(4),
            left: Some(15),
            right: None,
        });

        let p = sync.params();
        assert_eq!(p.right_sticky_h, 0);
        assert_eq!(p.sticky_max_h, 15);
    }

    #[test]
    fn missing_header_keeps_previous_height() {
        let mut sync = LayoutSync::new();
        sync.recompute(&FixedProbe {
            header: Some(6),
            left: Some(10),
            right: Some(12),
        });
        sync.recompute(&FixedProbe {
            header: None,
            left: Some(3),
            right: Some(2),
        });

        let p = sync.params();
        assert_eq!(p.header_h, 6);
        assert_eq!(p.left_sticky_h, 3);
        assert_eq!(p.sticky_max_h, 3);
    }

    #[test]
    fn reset_zeroes_sticky_values_but_not_the_header() {
        let mut sync = LayoutSync::new();
        sync.recompute(&FixedProbe {
            header: Some(5),
            left: Some(20),
            right: Some(30),
        });

        sync.reset();

        let p = sync.params();
        assert_eq!(p.header_h, 5);
        assert_eq!(p.left_sticky_h, 0);
        assert_eq!(p.right_sticky_h, 0);
        assert_eq!(p.sticky_max_h, 0);
    }

    #[test]
    fn fresh_sync_starts_at_zero() {
        assert_eq!(LayoutSync::new().params(), LayoutParams::default());
    }
}
