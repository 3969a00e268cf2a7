//! Grid packing of label images onto fixed-size pages.
//!
//! Pure geometry: labels are scaled to the column width (aspect preserved),
//! placed left to right, wrapped to the next grid row when the column count
//! is reached, and moved to a fresh page when a row would cross the bottom
//! margin. Input order is preserved.

use image::RgbaImage;
use tracing::debug;

use crate::LayoutOptions;

/// Page margin on all four sides, in points.
pub const PAGE_MARGIN: f32 = 40.0;

/// Horizontal spacing between adjacent labels, in points.
pub const H_SPACING: f32 = 20.0;

/// Vertical spacing between grid rows, in points.
pub const V_SPACING: f32 = 20.0;

/// Page dimensions in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
}

impl PageSpec {
    /// A4 portrait.
    pub const fn a4() -> Self {
        Self {
            width: 595.276,
            height: 841.89,
        }
    }

    /// Width allotted to one label slot for the given column count.
    pub fn column_width(&self, columns: u32) -> f32 {
        (self.width - 2.0 * PAGE_MARGIN - (columns as f32 - 1.0) * H_SPACING) / columns as f32
    }
}

/// One label placed on a page.
///
/// `x`/`y` anchor the bottom-left corner in PDF coordinates (origin at the
/// page's bottom-left, y up). `width`/`height` are the printed size in
/// points; the raster itself is kept at its composed resolution.
#[derive(Debug, Clone)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub image: RgbaImage,
}

/// One packed page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub placements: Vec<Placement>,
}

/// Tile labels across pages, in input order.
///
/// The drop to the next grid row uses the tallest label of the completed
/// row, so rows of mixed aspect ratio never overlap. A label taller than
/// the printable area is placed at the top of its page and may run past
/// the bottom margin; empty pages are never emitted.
pub fn pack(labels: Vec<RgbaImage>, opts: &LayoutOptions, page: PageSpec) -> Vec<Page> {
    let column_width = page.column_width(opts.columns_per_row);

    let mut pages = Vec::new();
    let mut current = Page::default();
    let mut x = PAGE_MARGIN;
    let mut y = page.height - PAGE_MARGIN;
    let mut col = 0u32;
    let mut row_max_height = 0.0f32;

    for image in labels {
        let scale = column_width / image.width().max(1) as f32;
        let width = column_width;
        let height = image.height() as f32 * scale;

        if col == opts.columns_per_row {
            col = 0;
            x = PAGE_MARGIN;
            y -= row_max_height + V_SPACING;
            row_max_height = 0.0;
        }

        if y - height < PAGE_MARGIN && !current.placements.is_empty() {
            pages.push(std::mem::take(&mut current));
            x = PAGE_MARGIN;
            y = page.height - PAGE_MARGIN;
            col = 0;
            row_max_height = 0.0;
        }

        current.placements.push(Placement {
            x,
            y: y - height,
            width,
            height,
            image,
        });
        x += width + H_SPACING;
        col += 1;
        row_max_height = row_max_height.max(height);
    }

    if !current.placements.is_empty() {
        pages.push(current);
    }

    debug!(pages = pages.len(), "packed label pages");
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn label(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
    }

    fn opts(columns: u32) -> LayoutOptions {
        LayoutOptions::new(columns, 12).unwrap()
    }

    #[test]
    fn empty_input_produces_no_pages() {
        let pages = pack(Vec::new(), &opts(3), PageSpec::a4());
        assert!(pages.is_empty());
    }

    #[test]
    fn every_label_is_placed_exactly_once() {
        let labels: Vec<_> = (0..10).map(|_| label(100, 100)).collect();
        let pages = pack(labels, &opts(3), PageSpec::a4());
        let total: usize = pages.iter().map(|p| p.placements.len()).sum();
        assert_eq!(total, 10);
        assert!(pages.iter().all(|p| !p.placements.is_empty()));
    }

    #[test]
    fn two_labels_sit_side_by_side_with_a_shared_top_edge() {
        let pages = pack(vec![label(100, 100), label(100, 100)], &opts(2), PageSpec::a4());
        assert_eq!(pages.len(), 1);
        let p = &pages[0].placements;
        assert_eq!(p.len(), 2);
        let top0 = p[0].y + p[0].height;
        let top1 = p[1].y + p[1].height;
        assert!((top0 - top1).abs() < 0.001);
        assert!(p[1].x > p[0].x + p[0].width);
    }

    #[test]
    fn labels_are_scaled_to_the_column_width() {
        let page = PageSpec::a4();
        let pages = pack(vec![label(200, 100)], &opts(3), page);
        let p = &pages[0].placements[0];
        let expected = page.column_width(3);
        assert!((p.width - expected).abs() < 0.001);
        // aspect preserved: 200x100 keeps its 2:1 ratio
        assert!((p.height - expected / 2.0).abs() < 0.001);
    }

    #[test]
    fn ten_labels_at_three_columns_form_four_grid_rows() {
        let labels: Vec<_> = (0..10).map(|_| label(100, 100)).collect();
        let pages = pack(labels, &opts(3), PageSpec::a4());
        assert_eq!(pages.len(), 1);

        let mut tops: Vec<f32> = pages[0]
            .placements
            .iter()
            .map(|p| p.y + p.height)
            .collect();
        tops.dedup_by(|a, b| (*a - *b).abs() < 0.001);
        assert_eq!(tops.len(), 4);

        // rows of 3, 3, 3, 1
        let last = pages[0].placements.last().unwrap();
        assert!((last.x - PAGE_MARGIN).abs() < 0.001);
    }

    #[test]
    fn row_drop_uses_the_tallest_label_of_the_completed_row() {
        let page = PageSpec::a4();
        let labels = vec![label(100, 30), label(100, 60), label(100, 40)];
        let pages = pack(labels, &opts(2), page);
        assert_eq!(pages.len(), 1);
        let p = &pages[0].placements;

        let row_top = page.height - PAGE_MARGIN;
        let tallest = p[0].height.max(p[1].height);
        let expected_second_row_top = row_top - tallest - V_SPACING;
        assert!(((p[2].y + p[2].height) - expected_second_row_top).abs() < 0.001);
        // second row never overlaps the taller first-row label
        assert!(p[2].y + p[2].height <= p[1].y + 0.001);
    }

    #[test]
    fn overflowing_rows_spill_onto_a_new_page() {
        // 100x150 labels at 3 columns: three grid rows fit per page,
        // so the 10th label lands alone on page two.
        let labels: Vec<_> = (0..10).map(|_| label(100, 150)).collect();
        let pages = pack(labels, &opts(3), PageSpec::a4());
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].placements.len(), 9);
        assert_eq!(pages[1].placements.len(), 1);

        let p = &pages[1].placements[0];
        assert!((p.x - PAGE_MARGIN).abs() < 0.001);
        assert!((p.y + p.height - (PageSpec::a4().height - PAGE_MARGIN)).abs() < 0.001);
    }

    #[test]
    fn no_two_placements_on_a_page_overlap() {
        let labels: Vec<_> = (0..12).map(|i| label(100, 60 + (i % 4) * 30)).collect();
        let pages = pack(labels, &opts(4), PageSpec::a4());
        for page in &pages {
            let p = &page.placements;
            for i in 0..p.len() {
                for j in (i + 1)..p.len() {
                    let (a, b) = (&p[i], &p[j]);
                    let disjoint = a.x + a.width <= b.x + 0.001
                        || b.x + b.width <= a.x + 0.001
                        || a.y + a.height <= b.y + 0.001
                        || b.y + b.height <= a.y + 0.001;
                    assert!(disjoint, "placements {i} and {j} overlap");
                }
            }
        }
    }

    #[test]
    fn reading_order_follows_input_order() {
        let labels: Vec<_> = (0..10).map(|_| label(100, 100)).collect();
        let pages = pack(labels, &opts(3), PageSpec::a4());
        for page in &pages {
            for pair in page.placements.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let a_top = a.y + a.height;
                let b_top = b.y + b.height;
                let same_row = (a_top - b_top).abs() < 0.001;
                assert!(
                    (same_row && b.x > a.x) || b_top < a_top,
                    "placement order breaks top-to-bottom, left-to-right reading"
                );
            }
        }
    }

    #[test]
    fn a_label_taller_than_the_page_is_still_placed() {
        let pages = pack(vec![label(100, 5000)], &opts(2), PageSpec::a4());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].placements.len(), 1);
    }

    #[test]
    fn packing_is_deterministic() {
        let make = || -> Vec<RgbaImage> { (0..7).map(|i| label(100, 50 + i * 20)).collect() };
        let a = pack(make(), &opts(3), PageSpec::a4());
        let b = pack(make(), &opts(3), PageSpec::a4());
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.placements.len(), pb.placements.len());
            for (x, y) in pa.placements.iter().zip(&pb.placements) {
                assert_eq!(x.x, y.x);
                assert_eq!(x.y, y.y);
                assert_eq!(x.width, y.width);
                assert_eq!(x.height, y.height);
            }
        }
    }
}
