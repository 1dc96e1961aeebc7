//! Canvas partitions and the two-up layout choice.
//!
//! A two-photo sheet can be split down the middle (two side-by-side halves)
//! or across (two stacked halves). The split that lets both photos cover the
//! larger total area wins.

use std::fmt;

use tracing::debug;

use crate::fit::best_area;

/// A rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner at which a `width` x `height` image sits centered.
    pub fn centered_origin(&self, width: u32, height: u32) -> (u32, u32) {
        (
            self.x + self.width.saturating_sub(width) / 2,
            self.y + self.height.saturating_sub(height) / 2,
        )
    }

    /// Whether the point lies inside the region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// How a sheet's canvas is divided into regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition {
    /// Vertical split line: two half-width regions side by side.
    Vertical,
    /// Horizontal split line: two half-height regions stacked.
    Horizontal,
    /// The whole canvas as one region.
    Single,
    /// Four half-width, half-height quadrants.
    Quadrants,
}

impl Partition {
    /// Size of each region in this partition.
    pub fn region_size(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Partition::Vertical => (width / 2, height),
            Partition::Horizontal => (width, height / 2),
            Partition::Single => (width, height),
            Partition::Quadrants => (width / 2, height / 2),
        }
    }

    /// Regions in placement order for a `width` x `height` canvas.
    ///
    /// Quadrants run top-left, top-right, bottom-left, bottom-right.
    pub fn regions(self, width: u32, height: u32) -> Vec<Region> {
        let (w, h) = self.region_size(width, height);
        match self {
            Partition::Vertical => vec![Region::new(0, 0, w, h), Region::new(w, 0, w, h)],
            Partition::Horizontal => vec![Region::new(0, 0, w, h), Region::new(0, h, w, h)],
            Partition::Single => vec![Region::new(0, 0, w, h)],
            Partition::Quadrants => vec![
                Region::new(0, 0, w, h),
                Region::new(w, 0, w, h),
                Region::new(0, h, w, h),
                Region::new(w, h, w, h),
            ],
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Partition::Vertical => "2x1",
            Partition::Horizontal => "1x2",
            Partition::Single => "full sheet",
            Partition::Quadrants => "2x2",
        };
        f.write_str(name)
    }
}

/// A partition together with the total area its photos would cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutChoice {
    pub partition: Partition,
    pub total_area: u64,
}

/// Total covered area, truncated to whole pixels, if each photo in `dims`
/// gets one region of `partition`.
pub fn partition_area(dims: &[(u32, u32)], partition: Partition, width: u32, height: u32) -> u64 {
    let (rw, rh) = partition.region_size(width, height);
    let total: f64 = dims.iter().map(|&(w, h)| best_area(w, h, rw, rh)).sum();
    total as u64
}

/// Pick the split for two photos on a `width` x `height` canvas.
///
/// The vertical split must cover strictly more area; ties go horizontal.
pub fn select_layout(a: (u32, u32), b: (u32, u32), width: u32, height: u32) -> LayoutChoice {
    let dims = [a, b];
    let horizontal = LayoutChoice {
        partition: Partition::Horizontal,
        total_area: partition_area(&dims, Partition::Horizontal, width, height),
    };
    let vertical = LayoutChoice {
        partition: Partition::Vertical,
        total_area: partition_area(&dims, Partition::Vertical, width, height),
    };

    debug!(
        horizontal = horizontal.total_area,
        vertical = vertical.total_area,
        "Compared two-up layouts"
    );

    if vertical.total_area > horizontal.total_area {
        vertical
    } else {
        horizontal
    }
}

/// Layout for however many photos decoded: none, one, or two.
///
/// A lone photo gets the whole canvas. Photos past the second are ignored.
pub fn choose_layout(dims: &[(u32, u32)], width: u32, height: u32) -> Option<LayoutChoice> {
    match dims {
        [] => None,
        [only] => Some(LayoutChoice {
            partition: Partition::Single,
            total_area: partition_area(&[*only], Partition::Single, width, height),
        }),
        [a, b, ..] => Some(select_layout(*a, *b, width, height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 1800;
    const H: u32 = 1200;

    #[test]
    fn test_quadrants_cover_canvas() {
        let regions = Partition::Quadrants.regions(W, H);
        assert_eq!(
            regions,
            vec![
                Region::new(0, 0, 900, 600),
                Region::new(900, 0, 900, 600),
                Region::new(0, 600, 900, 600),
                Region::new(900, 600, 900, 600),
            ]
        );
    }

    #[test]
    fn test_two_up_regions() {
        assert_eq!(
            Partition::Vertical.regions(W, H),
            vec![Region::new(0, 0, 900, 1200), Region::new(900, 0, 900, 1200)]
        );
        assert_eq!(
            Partition::Horizontal.regions(W, H),
            vec![Region::new(0, 0, 1800, 600), Region::new(0, 600, 1800, 600)]
        );
        assert_eq!(Partition::Single.regions(W, H), vec![Region::new(0, 0, W, H)]);
    }

    #[test]
    fn test_centered_origin() {
        let quad = Region::new(900, 600, 900, 600);
        assert_eq!(quad.centered_origin(800, 600), (950, 600));
        assert_eq!(quad.centered_origin(899, 599), (900, 600));
        assert_eq!(quad.centered_origin(900, 600), (900, 600));
    }

    #[test]
    fn test_contains() {
        let r = Region::new(10, 20, 5, 5);
        assert!(r.contains(10, 20));
        assert!(r.contains(14, 24));
        assert!(!r.contains(15, 20));
        assert!(!r.contains(9, 22));
    }

    #[test]
    fn test_portrait_pair_prefers_vertical_split() {
        // Portraits fill 800x1200 side by side, but only 400x600 stacked
        // (or 900x600 turned sideways).
        let choice = select_layout((2000, 3000), (2000, 3000), W, H);
        assert_eq!(choice.partition, Partition::Vertical);
        assert_eq!(choice.total_area, 2 * 800 * 1200);
    }

    #[test]
    fn test_panorama_pair_prefers_horizontal_split() {
        let choice = select_layout((3000, 1000), (3000, 1000), W, H);
        assert_eq!(choice.partition, Partition::Horizontal);
        assert_eq!(choice.total_area, 2 * 1800 * 600);
    }

    #[test]
    fn test_tie_goes_horizontal() {
        // A 2:1 photo covers 1200x600 stacked and 600x1200 (rotated) side by side.
        let a = (2000, 1000);
        assert_eq!(
            partition_area(&[a, a], Partition::Horizontal, W, H),
            partition_area(&[a, a], Partition::Vertical, W, H)
        );

        let choice = select_layout(a, a, W, H);
        assert_eq!(choice.partition, Partition::Horizontal);
        assert_eq!(choice.total_area, 2 * 1200 * 600);
    }

    #[test]
    fn test_mixed_pair_sums_both_photos() {
        let portrait = (2000, 3000);
        let landscape = (3000, 2000);
        let vertical = partition_area(&[portrait, landscape], Partition::Vertical, W, H);
        let horizontal = partition_area(&[portrait, landscape], Partition::Horizontal, W, H);

        // Landscape rotates into a half-width region, so both score 800x1200.
        assert_eq!(vertical, 2 * 800 * 1200);
        // Portrait rotates into a half-height region, so both score 900x600.
        assert_eq!(horizontal, 2 * 900 * 600);
        assert_eq!(
            select_layout(portrait, landscape, W, H).partition,
            Partition::Vertical
        );
    }

    #[test]
    fn test_choose_layout_by_count() {
        assert_eq!(choose_layout(&[], W, H), None);

        let single = choose_layout(&[(300, 200)], W, H).unwrap();
        assert_eq!(single.partition, Partition::Single);
        assert_eq!(single.total_area, 1800 * 1200);

        let pair = choose_layout(&[(2000, 3000), (2000, 3000), (10, 10)], W, H).unwrap();
        assert_eq!(pair.partition, Partition::Vertical);
    }

    #[test]
    fn test_partition_display() {
        assert_eq!(Partition::Vertical.to_string(), "2x1");
        assert_eq!(Partition::Horizontal.to_string(), "1x2");
        assert_eq!(Partition::Quadrants.to_string(), "2x2");
    }
}
