//! Gaussian hill uplift.

use glam::Vec2;
use rand::Rng;

use super::UpliftConfig;
use crate::geometry::interior_range;
use crate::terrain::Heightfield;

/// Deterministic uplift at `(x, y)` for one step, excluding the random jitter.
pub fn uplift_contribution(config: &UpliftConfig, size: usize, x: usize, y: usize, intensity: f32) -> f32 {
    let p = Vec2::new(x as f32, y as f32);
    let sigma = config.sigma();
    let two_sigma_sq = 2.0 * sigma * sigma;

    config
        .scaled_hills(size)
        .filter_map(|hill| {
            let d = p.distance(hill.position);
            (d <= config.radius).then(|| {
                hill.strength * (-(d * d) / two_sigma_sq).exp() * intensity * config.scale_factor
            })
        })
        .sum()
}

/// Applies one uplift pass in place to every interior cell.
///
/// # Arguments
/// * `field` - Heightfield to raise
/// * `config` - Hill centers, falloff radius and jitter
/// * `intensity` - Scheduler intensity in [0, 1]
/// * `rng` - Source of the per-cell jitter
pub fn apply_uplift<R: Rng + ?Sized>(field: &mut Heightfield, config: &UpliftConfig, intensity: f32, rng: &mut R) {
    let size = field.size();
    for y in interior_range(size) {
        for x in interior_range(size) {
            let noise = (rng.gen::<f32>() - 0.5) * intensity * config.jitter;
            let delta = uplift_contribution(config, size, x, y, intensity) + noise;
            field.add(x, y, delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn peak_is_at_the_strongest_center() {
        let config = UpliftConfig::default();
        let at_center = uplift_contribution(&config, 50, 25, 25, 1.0);
        // Only the center hill is within the cutoff at (25, 25).
        assert!((at_center - 8.0 * 0.5).abs() < 1e-4, "{at_center}");
        assert!(uplift_contribution(&config, 50, 30, 25, 1.0) < at_center);
    }

    #[test]
    fn centers_beyond_radius_contribute_nothing() {
        let config = UpliftConfig {
            hills: vec![crate::tectonics::HillCenter::new(10.0, 10.0, 5.0)],
            ..Default::default()
        };
        assert_eq!(uplift_contribution(&config, 50, 30, 30, 1.0), 0.0);
        assert!(uplift_contribution(&config, 50, 20, 10, 1.0) > 0.0);
    }

    #[test]
    fn zero_intensity_is_a_no_op() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let field = Heightfield::from_values(20, vec![35.0; 400]).unwrap();
        let mut out = field.clone();
        apply_uplift(&mut out, &UpliftConfig::default(), 0.0, &mut rng);
        assert_eq!(out, field);
    }

    #[test]
    fn border_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut out = Heightfield::from_values(50, vec![35.0; 2500]).unwrap();
        apply_uplift(&mut out, &UpliftConfig::default(), 1.0, &mut rng);
        for i in 0..50 {
            assert_eq!(out.get(i, 0), 35.0);
            assert_eq!(out.get(0, i), 35.0);
            assert_eq!(out.get(i, 49), 35.0);
            assert_eq!(out.get(48, i), 35.0);
        }
        assert!(out.get(25, 25) > 38.9);
    }
}
