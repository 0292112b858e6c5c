use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

use crate::traits::ContourExtractor;

/// Imageproc-based extractor that keeps only outermost borders.
///
/// Hole borders and borders nested inside another shape are discarded, and each
/// remaining border is reduced to its corner points with [`compress_chain`].
///
/// Contours come back newest first: the border whose start pixel is last in
/// raster order is at index 0, the same list order OpenCV's `findContours`
/// produces for external retrieval.
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor;

impl ContourExtractor for ExternalContourExtractor {
    fn extract_contours(&self, binary_image: &GrayImage) -> Vec<Vec<Point<i32>>> {
        find_contours::<i32>(binary_image)
            .into_iter()
            .filter(|contour| matches!(contour.border_type, BorderType::Outer) && contour.parent.is_none())
            .map(|contour| compress_chain(&contour.points))
            .rev()
            .collect()
    }
}

/// Collapse runs of boundary points that continue in the same direction.
///
/// The input is a closed chain of 8-connected pixels; only points where the
/// step direction changes are kept.
pub fn compress_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<i32>, b: Point<i32>| ((b.x - a.x).signum(), (b.y - a.y).signum());

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        vec![points[0]]
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn square_mask() -> GrayImage {
        let mut img = GrayImage::new(50, 50);
        for y in 10..30 {
            for x in 10..30 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        img
    }

    #[test]
    fn square_reduces_to_four_corners() {
        let contours = ExternalContourExtractor.extract_contours(&square_mask());
        assert_eq!(contours.len(), 1);

        let mut corners = contours[0].clone();
        corners.sort_by_key(|p| (p.y, p.x));
        assert_eq!(
            corners,
            vec![
                Point::new(10, 10),
                Point::new(29, 10),
                Point::new(10, 29),
                Point::new(29, 29),
            ]
        );
    }

    #[test]
    fn holes_and_nested_shapes_are_not_external() {
        let mut img = GrayImage::new(60, 60);
        // ring
        for y in 5..55 {
            for x in 5..55 {
                let inside_hole = (15..45).contains(&x) && (15..45).contains(&y);
                if !inside_hole {
                    img.put_pixel(x, y, Luma([255u8]));
                }
            }
        }
        // island inside the ring's hole
        for y in 25..35 {
            for x in 25..35 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }

        let contours = ExternalContourExtractor.extract_contours(&img);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn disjoint_blobs_come_back_newest_first() {
        let mut img = GrayImage::new(40, 40);
        for y in 25..35 {
            for x in 2..8 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }
        for y in 3..9 {
            for x in 20..30 {
                img.put_pixel(x, y, Luma([255u8]));
            }
        }

        let contours = ExternalContourExtractor.extract_contours(&img);
        assert_eq!(contours.len(), 2);
        assert!(contours[0].iter().all(|p| p.y >= 25));
        assert!(contours[1].iter().all(|p| p.y < 10));
    }

    #[test]
    fn blank_image_has_no_contours() {
        let img = GrayImage::new(16, 16);
        assert!(ExternalContourExtractor.extract_contours(&img).is_empty());
    }

    #[test]
    fn compress_keeps_short_chains() {
        let single = vec![Point::new(3, 4)];
        assert_eq!(compress_chain(&single), single);

        let pair = vec![Point::new(3, 4), Point::new(4, 4)];
        assert_eq!(compress_chain(&pair), pair);
    }
}
