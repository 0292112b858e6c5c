use image::{GrayImage, Luma};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::{traits::ContourFiller, types::{Silhouette, FOREGROUND}};

/// Scanline polygon fill of a contour, boundary pixels included
#[derive(Debug, Clone, Default)]
pub struct PolygonFiller;

impl ContourFiller for PolygonFiller {
    fn fill(&self, contour: &[Point<i32>], width: u32, height: u32) -> Silhouette {
        let mut canvas = GrayImage::new(width, height);
        let color = Luma([FOREGROUND]);

        let mut ring: Vec<Point<i32>> = contour.to_vec();
        ring.dedup();
        // draw_polygon_mut rejects explicitly closed rings
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }

        match ring.as_slice() {
            [] => {}
            [p] => {
                if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
                    canvas.put_pixel(p.x as u32, p.y as u32, color);
                }
            }
            [a, b] => {
                draw_line_segment_mut(&mut canvas, (a.x as f32, a.y as f32), (b.x as f32, b.y as f32), color);
            }
            polygon => draw_polygon_mut(&mut canvas, polygon, color),
        }

        Silhouette::new(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_corners_fill_whole_rectangle() {
        let corners = [
            Point::new(20, 20),
            Point::new(79, 20),
            Point::new(79, 79),
            Point::new(20, 79),
        ];
        let silhouette = PolygonFiller.fill(&corners, 100, 100);
        assert_eq!(silhouette.width(), 100);
        assert_eq!(silhouette.height(), 100);
        assert_eq!(silhouette.area(), 60 * 60);
        assert_eq!(silhouette.mask().get_pixel(50, 50)[0], FOREGROUND);
        assert_eq!(silhouette.mask().get_pixel(19, 50)[0], 0);
    }

    #[test]
    fn single_point_fills_one_pixel() {
        let silhouette = PolygonFiller.fill(&[Point::new(4, 5)], 10, 10);
        assert_eq!(silhouette.area(), 1);
        assert_eq!(silhouette.mask().get_pixel(4, 5)[0], FOREGROUND);
    }

    #[test]
    fn two_points_fill_a_segment() {
        let silhouette = PolygonFiller.fill(&[Point::new(2, 3), Point::new(6, 3)], 10, 10);
        assert_eq!(silhouette.area(), 5);
    }

    #[test]
    fn closed_ring_is_accepted() {
        let ring = [
            Point::new(1, 1),
            Point::new(5, 1),
            Point::new(5, 5),
            Point::new(1, 5),
            Point::new(1, 1),
        ];
        let silhouette = PolygonFiller.fill(&ring, 8, 8);
        assert_eq!(silhouette.area(), 25);
    }
}
