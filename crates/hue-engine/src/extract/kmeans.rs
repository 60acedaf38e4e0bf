//! K-means clustering in RGB space.
//!
//! Centers are seeded with k-means++ (each new center drawn with probability
//! proportional to its squared distance from the nearest chosen center),
//! refined with Lloyd iterations, and the whole procedure is repeated for a
//! number of attempts. The attempt with the lowest compactness (sum of
//! squared distances from each point to its center) is kept.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

pub(crate) type Point = [f64; 3];

/// Termination and restart settings for [`kmeans`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct KmeansParams {
    pub k: usize,
    pub max_iterations: usize,
    pub epsilon: f64,
    pub attempts: usize,
}

/// Best clustering found across attempts.
#[derive(Debug, Clone)]
pub(crate) struct Clustering {
    pub centers: Vec<Point>,
    pub compactness: f64,
}

#[inline]
pub(crate) fn distance_sq(a: &Point, b: &Point) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    d0 * d0 + d1 * d1 + d2 * d2
}

/// Index of the closest center and its squared distance; first wins on ties.
#[inline]
pub(crate) fn nearest(point: &Point, centers: &[Point]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_dist = f64::MAX;
    for (i, center) in centers.iter().enumerate() {
        let dist = distance_sq(point, center);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }
    (best_idx, best_dist)
}

/// k-means++ seeding.
///
/// When every remaining point coincides with a chosen center (fewer distinct
/// points than `k`) the next center is drawn uniformly, which duplicates an
/// existing center.
fn seed_centers<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    let mut centers = Vec::with_capacity(k);
    centers.push(points[rng.gen_range(0..points.len())]);

    let mut closest: Vec<f64> = points.iter().map(|p| distance_sq(p, &centers[0])).collect();
    while centers.len() < k {
        let next = match WeightedIndex::new(&closest) {
            Ok(dist) => points[dist.sample(rng)],
            Err(_) => points[rng.gen_range(0..points.len())],
        };
        for (d, p) in closest.iter_mut().zip(points) {
            *d = d.min(distance_sq(p, &next));
        }
        centers.push(next);
    }
    centers
}

/// Lloyd refinement of one seeded attempt. Returns the final compactness.
fn refine(points: &[Point], centers: &mut [Point], params: &KmeansParams) -> (f64, usize) {
    let k = centers.len();
    let mut labels = vec![0usize; points.len()];
    let mut iterations = 0;

    for _ in 0..params.max_iterations {
        iterations += 1;

        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        let mut point_dist = Vec::with_capacity(points.len());
        for (label, p) in labels.iter_mut().zip(points) {
            let (idx, dist) = nearest(p, centers);
            *label = idx;
            point_dist.push(dist);
            counts[idx] += 1;
            for c in 0..3 {
                sums[idx][c] += p[c];
            }
        }

        let mut shift = 0.0f64;
        for j in 0..k {
            let updated = if counts[j] > 0 {
                let n = counts[j] as f64;
                [sums[j][0] / n, sums[j][1] / n, sums[j][2] / n]
            } else {
                // Empty cluster: take over the worst-fitting point
                let (far, _) = point_dist.iter().enumerate().fold(
                    (0, f64::MIN),
                    |best, (i, &d)| if d > best.1 { (i, d) } else { best },
                );
                point_dist[far] = 0.0;
                points[far]
            };
            shift = shift.max(distance_sq(&centers[j], &updated).sqrt());
            centers[j] = updated;
        }

        if shift <= params.epsilon {
            break;
        }
    }

    let compactness = points.iter().map(|p| nearest(p, centers).1).sum();
    (compactness, iterations)
}

/// Cluster `points` into `params.k` centers.
///
/// `points` must be non-empty and `params.k`, `params.attempts` and
/// `params.max_iterations` at least 1; the extractor validates both.
pub(crate) fn kmeans<R: Rng + ?Sized>(
    points: &[Point],
    params: &KmeansParams,
    rng: &mut R,
) -> Clustering {
    let mut best: Option<Clustering> = None;

    for attempt in 0..params.attempts {
        let mut centers = seed_centers(points, params.k, rng);
        let (compactness, iterations) = refine(points, &mut centers, params);
        debug!(attempt, iterations, compactness, "k-means attempt finished");

        match &best {
            Some(b) if compactness >= b.compactness => {}
            _ => best = Some(Clustering { centers, compactness }),
        }
    }

    best.unwrap_or_else(|| Clustering {
        centers: vec![points[0]; params.k],
        compactness: f64::INFINITY,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(k: usize) -> KmeansParams {
        KmeansParams {
            k,
            max_iterations: 40,
            epsilon: 0.2,
            attempts: 3,
        }
    }

    fn sorted(mut centers: Vec<Point>) -> Vec<Point> {
        centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
        centers
    }

    #[test]
    fn test_nearest_first_on_ties() {
        let centers = [[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        assert_eq!(nearest(&[1.0, 0.0, 0.0], &centers), (0, 1.0));
        assert_eq!(nearest(&[1.5, 0.0, 0.0], &centers).0, 1);
    }

    #[test]
    fn test_two_well_separated_groups() {
        let mut points = vec![[250.0, 5.0, 5.0]; 50];
        points.extend(vec![[5.0, 5.0, 250.0]; 50]);
        points.push([240.0, 0.0, 10.0]);
        points.push([10.0, 0.0, 240.0]);

        let mut rng = StdRng::seed_from_u64(42);
        let result = kmeans(&points, &params(2), &mut rng);
        let centers = sorted(result.centers);
        assert!(distance_sq(&centers[0], &[5.0, 5.0, 250.0]) < 25.0);
        assert!(distance_sq(&centers[1], &[250.0, 5.0, 5.0]) < 25.0);
    }

    #[test]
    fn test_exact_clusters_have_zero_compactness() {
        let points = [
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [255.0, 255.0, 255.0],
            [128.0, 0.0, 0.0],
        ];
        let mut rng = StdRng::seed_from_u64(3);
        let result = kmeans(&points, &params(3), &mut rng);
        assert_eq!(result.compactness, 0.0);
        assert_eq!(
            sorted(result.centers),
            vec![[0.0, 0.0, 0.0], [128.0, 0.0, 0.0], [255.0, 255.0, 255.0]]
        );
    }

    #[test]
    fn test_fewer_distinct_points_than_k_still_yields_k_centers() {
        let points = vec![[10.0, 20.0, 30.0]; 8];
        let mut rng = StdRng::seed_from_u64(0);
        let result = kmeans(&points, &params(4), &mut rng);
        assert_eq!(result.centers.len(), 4);
        assert!(result.centers.iter().all(|c| *c == [10.0, 20.0, 30.0]));
        assert_eq!(result.compactness, 0.0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let points: Vec<Point> = (0..200)
            .map(|i| [(i * 37 % 256) as f64, (i * 91 % 256) as f64, (i * 13 % 256) as f64])
            .collect();
        let a = kmeans(&points, &params(5), &mut StdRng::seed_from_u64(9));
        let b = kmeans(&points, &params(5), &mut StdRng::seed_from_u64(9));
        assert_eq!(a.centers, b.centers);
        assert_eq!(a.compactness, b.compactness);
    }

    #[test]
    fn test_seeding_spreads_over_distinct_points() {
        let points = [[0.0, 0.0, 0.0], [255.0, 0.0, 0.0], [0.0, 255.0, 0.0]];
        let mut rng = StdRng::seed_from_u64(5);
        let centers = seed_centers(&points, 3, &mut rng);
        // Already-chosen points have zero weight, so all three get picked
        assert_eq!(sorted(centers), sorted(points.to_vec()));
    }
}
