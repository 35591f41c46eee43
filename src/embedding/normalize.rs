//! Vector normalization and similarity functions.

/// L2 (Euclidean) norm of a vector.
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// L2-normalize a vector in place. Zero vectors stay zero.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = l2_norm(v);
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Inner product. Equals cosine similarity when both inputs are normalized.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity for arbitrary (non-normalized) vectors; 0.0 if either is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

/// Component-wise mean of equally sized vectors. `None` for an empty set.
pub fn mean_vector(vectors: &[Vec<f32>]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let mut mean = vec![0.0f32; first.len()];
    for v in vectors {
        for (acc, x) in mean.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }
    let n = vectors.len() as f32;
    for x in mean.iter_mut() {
        *x /= n;
    }
    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn l2_norm_known() {
        assert!(approx_eq(l2_norm(&[3.0, 4.0]), 5.0));
    }

    #[test]
    fn l2_normalize_known_vector() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!(approx_eq(v[0], 0.6));
        assert!(approx_eq(v[1], 0.8));
        assert!(approx_eq(l2_norm(&v), 1.0));
    }

    #[test]
    fn l2_normalize_zero_vector() {
        let mut v = vec![0.0, 0.0, 0.0];
        l2_normalize(&mut v);
        assert!(v.iter().all(|x| *x == 0.0));
        assert!(!v.iter().any(|x| x.is_nan()));
    }

    #[test]
    fn cosine_matches_dot_for_unit_vectors() {
        let mut a = vec![1.0, 2.0, 2.0];
        let mut b = vec![2.0, 0.0, 1.0];
        let raw = cosine_similarity(&a, &b);
        l2_normalize(&mut a);
        l2_normalize(&mut b);
        assert!(approx_eq(raw, dot(&a, &b)));
    }

    #[test]
    fn cosine_of_opposites() {
        assert!(approx_eq(cosine_similarity(&[1.0, 0.0], &[-2.0, 0.0]), -1.0));
        assert!(approx_eq(cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]), 0.0));
    }

    #[test]
    fn mean_vector_known() {
        let mean = mean_vector(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert!(approx_eq(mean[0], 0.5));
        assert!(approx_eq(mean[1], 0.5));
        assert!(mean_vector(&[]).is_none());
    }
}
