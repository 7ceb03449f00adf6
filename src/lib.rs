pub mod library {
    pub fn magnitude(vx: f64, vy: f64) -> f64 {
        (vx * vx + vy * vy).sqrt()
    }

    /// Direction of (vx, vy) scaled to magnitude 1. The zero vector has no
    /// direction, so it has no unit vector.
    pub fn unit_vector(vx: f64, vy: f64) -> Option<[f64; 2]> {
        let mag = magnitude(vx, vy);
        // Exact comparison: any nonzero magnitude, however small, still
        // names a direction and proceeds to the division.
        if mag == 0.0 {
            return None;
        }
        Some([vx / mag, vy / mag])
    }

    pub fn clamp_components(vx: f64, vy: f64, extent: f64) -> [f64; 2] {
        [vx.clamp(-extent, extent), vy.clamp(-extent, extent)]
    }

    /// Lenient numeric parse for the input fields: anything that is not a
    /// number, including the empty string, silently becomes 0.
    pub fn parse_component(raw: &str) -> f64 {
        raw.trim().parse().unwrap_or(0.0)
    }
}
