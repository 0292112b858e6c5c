//! Raster image moments and the Hu invariants derived from them.
//!
//! Moments are accumulated over raw pixel intensities, so a silhouette with
//! foreground value 255 weighs each foreground pixel by 255. This matters for
//! the normalized moments: they are scale invariant but not intensity invariant.

use image::GrayImage;

use crate::{
    traits::ShapeDescriptor,
    types::{HuDescriptor, Silhouette},
};

/// Spatial, central and normalized central moments up to third order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RasterMoments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m11: f64,
    pub m02: f64,
    pub m30: f64,
    pub m21: f64,
    pub m12: f64,
    pub m03: f64,

    pub mu20: f64,
    pub mu11: f64,
    pub mu02: f64,
    pub mu30: f64,
    pub mu21: f64,
    pub mu12: f64,
    pub mu03: f64,

    pub nu20: f64,
    pub nu11: f64,
    pub nu02: f64,
    pub nu30: f64,
    pub nu21: f64,
    pub nu12: f64,
    pub nu03: f64,
}

impl RasterMoments {
    pub fn from_image(image: &GrayImage) -> Self {
        let mut m = RasterMoments::default();

        for (x, y, pixel) in image.enumerate_pixels() {
            let v = pixel[0] as f64;
            if v == 0.0 {
                continue;
            }
            let (x, y) = (x as f64, y as f64);
            let (xv, yv) = (x * v, y * v);

            m.m00 += v;
            m.m10 += xv;
            m.m01 += yv;
            m.m20 += x * xv;
            m.m11 += x * yv;
            m.m02 += y * yv;
            m.m30 += x * x * xv;
            m.m21 += x * x * yv;
            m.m12 += x * y * yv;
            m.m03 += y * y * yv;
        }

        m.complete();
        m
    }

    /// Derive central and normalized moments from the spatial ones
    fn complete(&mut self) {
        let inv_m00 = if self.m00.abs() > f64::EPSILON { 1.0 / self.m00 } else { 0.0 };
        let cx = self.m10 * inv_m00;
        let cy = self.m01 * inv_m00;

        self.mu20 = self.m20 - self.m10 * cx;
        self.mu11 = self.m11 - self.m10 * cy;
        self.mu02 = self.m02 - self.m01 * cy;

        self.mu30 = self.m30 - cx * (3.0 * self.mu20 + cx * self.m10);
        self.mu21 = self.m21 - cx * (2.0 * self.mu11 + cx * self.m01) - cy * self.mu20;
        self.mu12 = self.m12 - cy * (2.0 * self.mu11 + cy * self.m10) - cx * self.mu02;
        self.mu03 = self.m03 - cy * (3.0 * self.mu02 + cy * self.m01);

        let inv_sqrt_m00 = inv_m00.abs().sqrt();
        let s2 = inv_m00 * inv_m00;
        let s3 = s2 * inv_sqrt_m00;

        self.nu20 = self.mu20 * s2;
        self.nu11 = self.mu11 * s2;
        self.nu02 = self.mu02 * s2;
        self.nu30 = self.mu30 * s3;
        self.nu21 = self.mu21 * s3;
        self.nu12 = self.mu12 * s3;
        self.nu03 = self.mu03 * s3;
    }

    /// The seven Hu invariants
    pub fn hu(&self) -> HuDescriptor {
        let (nu20, nu11, nu02) = (self.nu20, self.nu11, self.nu02);
        let (nu30, nu21, nu12, nu03) = (self.nu30, self.nu21, self.nu12, self.nu03);

        let sum2 = nu20 + nu02;
        let diff2 = nu20 - nu02;

        let a = nu30 + nu12;
        let b = nu21 + nu03;
        let c = nu30 - 3.0 * nu12;
        let d = 3.0 * nu21 - nu03;

        let a2 = a * a;
        let b2 = b * b;

        HuDescriptor([
            sum2,
            diff2 * diff2 + 4.0 * nu11 * nu11,
            c * c + d * d,
            a2 + b2,
            c * a * (a2 - 3.0 * b2) + d * b * (3.0 * a2 - b2),
            diff2 * (a2 - b2) + 4.0 * nu11 * a * b,
            d * a * (a2 - 3.0 * b2) - c * b * (3.0 * a2 - b2),
        ])
    }
}

/// Hu-moment descriptor over raster moments of the silhouette mask
#[derive(Debug, Clone, Default)]
pub struct HuMomentDescriptor;

impl ShapeDescriptor for HuMomentDescriptor {
    fn describe(&self, silhouette: &Silhouette) -> HuDescriptor {
        RasterMoments::from_image(silhouette.mask()).hu()
    }
}
