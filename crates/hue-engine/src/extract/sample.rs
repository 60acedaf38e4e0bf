use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::Srgb;

/// Seeded uniform sample of at most `cap` pixels, drawn without replacement.
///
/// Inputs that already fit are returned whole. The result is a pure function
/// of `(pixels, cap, seed)`; sampled pixels keep their original relative
/// order.
///
/// ```
/// use hue_engine::{sample_pixels, Srgb};
///
/// let pixels: Vec<Srgb> = (0..=255).map(|v| Srgb::from_u8(v, 0, 0)).collect();
/// let a = sample_pixels(&pixels, 16, 42);
/// assert_eq!(a.len(), 16);
/// assert_eq!(a, sample_pixels(&pixels, 16, 42));
/// ```
pub fn sample_pixels(pixels: &[Srgb], cap: usize, seed: u64) -> Vec<Srgb> {
    if pixels.len() <= cap {
        return pixels.to_vec();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices = rand::seq::index::sample(&mut rng, pixels.len(), cap).into_vec();
    indices.sort_unstable();
    indices.into_iter().map(|i| pixels[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ramp(len: usize) -> Vec<Srgb> {
        (0..len)
            .map(|i| Srgb::from_u8((i % 256) as u8, (i / 256 % 256) as u8, (i / 65536) as u8))
            .collect()
    }

    #[test]
    fn test_under_cap_returns_everything() {
        let pixels = ramp(10);
        assert_eq!(sample_pixels(&pixels, 10, 1), pixels);
        assert_eq!(sample_pixels(&pixels, 100, 1), pixels);
    }

    #[test]
    fn test_sample_is_without_replacement() {
        // Every pixel in the ramp is distinct, so duplicates would mean reuse
        let pixels = ramp(5000);
        let sample = sample_pixels(&pixels, 1000, 7);
        assert_eq!(sample.len(), 1000);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_reproducible_per_seed() {
        let pixels = ramp(5000);
        assert_eq!(sample_pixels(&pixels, 500, 42), sample_pixels(&pixels, 500, 42));
        assert_ne!(sample_pixels(&pixels, 500, 42), sample_pixels(&pixels, 500, 43));
    }
}
