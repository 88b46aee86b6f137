//! Approximate placement for inputs no exact strategy covers
//!
//! Unknown side lengths become the mean of the known ones. D sits at the
//! origin with C on +x, B is placed from the angle at C, and A is found where
//! the circle of radius DA around D meets the circle of radius AB around B.

use tracing::warn;

use super::circle;
use super::config::LayoutConfig;
use super::types::Point;

/// Side lengths with every gap filled by the mean of the known lengths
pub fn fill_lengths(lengths: &[Option<f64>; 4], config: &LayoutConfig) -> [f64; 4] {
    let known: Vec<f64> = lengths.iter().flatten().copied().collect();
    let mean = if known.is_empty() {
        config.fallback_side_length
    } else {
        known.iter().sum::<f64>() / known.len() as f64
    };
    lengths.map(|l| l.unwrap_or(mean))
}

/// Model-space positions `[A, B, C, D]`
pub fn solve(
    lengths: &[Option<f64>; 4],
    angles: &[Option<f64>; 4],
    config: &LayoutConfig,
) -> [Point; 4] {
    let [ab, bc, cd, da] = fill_lengths(lengths, config);

    let d = Point::origin();
    let c = Point::new(cd, 0.0);

    // Interior angle at C opens from C->D (pointing along -x) towards B
    let angle_c = angles[2].unwrap_or(config.default_angle_c).to_radians();
    let b = c.offset(std::f64::consts::PI - angle_c, bc);

    let candidates = circle::intersect(d, da, b, ab);
    let a = match circle::pick_upper(&candidates) {
        Some(a) => a,
        None => {
            let angle_d = angles[3].unwrap_or(config.fallback_angle_d);
            warn!(
                da,
                ab,
                angle_d,
                "circles around D and B do not meet, placing A from the angle at D"
            );
            d.offset(angle_d.to_radians(), da)
        }
    };

    [a, b, c, d]
}
