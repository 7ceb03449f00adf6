/// Converts world-space coordinates to canvas pixel-space coordinates.
///
/// Scale and origin are derived once from the plot dimensions and kept for
/// the lifetime of the window. A window resize does not recompute them; the
/// draw is simply re-run against the original constants.
pub struct Mapper {
    scale: f64,
    origin: [f64; 2],
}

impl Mapper {
    pub fn new(plot_width: u32, plot_height: u32, half_extent: f64) -> Mapper {
        let w = plot_width as f64;
        let h = plot_height as f64;
        Mapper {
            scale: w.min(h) / (2.0 * half_extent),
            origin: [w / 2.0, h / 2.0],
        }
    }

    /// Pixel y grows downward while world y grows upward, hence the sign
    /// flip. No clamping: points beyond the plot map to pixels beyond it.
    pub fn to_pixel(&self, wx: f64, wy: f64) -> [f64; 2] {
        [
            self.origin[0] + wx * self.scale,
            self.origin[1] - wy * self.scale,
        ]
    }

    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_origin_maps_to_plot_center_exactly() {
        let m = Mapper::new(520, 520, 5.0);
        assert_eq!(m.to_pixel(0.0, 0.0), [260.0, 260.0]);
    }

    #[test]
    fn mapping_is_affine_with_inverted_y() {
        // 520 px across 10 world units: 52 px per unit.
        let m = Mapper::new(520, 520, 5.0);
        assert_eq!(m.to_pixel(1.0, 0.0), [312.0, 260.0]);
        assert_eq!(m.to_pixel(0.0, 1.0), [260.0, 208.0]);
        assert_eq!(m.to_pixel(-5.0, -5.0), [0.0, 520.0]);
    }

    #[test]
    fn out_of_extent_points_are_not_clamped() {
        let m = Mapper::new(520, 520, 5.0);
        assert_eq!(m.to_pixel(7.0, 0.0), [624.0, 260.0]);
    }

    #[test]
    fn pixel_y_strictly_decreases_as_world_y_increases() {
        let m = Mapper::new(520, 520, 5.0);
        let mut last = f64::INFINITY;
        for i in -20..=20 {
            let [_, py] = m.to_pixel(0.0, i as f64 * 0.25);
            assert!(py < last);
            last = py;
        }
    }

    #[test]
    fn scale_comes_from_the_shorter_dimension() {
        let m = Mapper::new(800, 520, 5.0);
        assert_eq!(m.scale(), 52.0);
        assert_eq!(m.origin(), [400.0, 260.0]);
    }
}
