//! Row normalization. Euclidean distance between unit vectors is monotone in
//! cosine distance, so a Euclidean density clusterer groups by angle.

/// Scale `v` to unit length in place. Zero-magnitude vectors are left as-is.
pub fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

/// Normalize every row.
pub fn normalize_rows(mut rows: Vec<Vec<f32>>) -> Vec<Vec<f32>> {
    for row in &mut rows {
        l2_normalize(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scales_to_unit_length() {
        let mut v = vec![3.0, 4.0];
        l2_normalize(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_stays_zero() {
        let mut v = vec![0.0; 8];
        l2_normalize(&mut v);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn rows_keep_their_order() {
        let rows = normalize_rows(vec![vec![2.0, 0.0], vec![0.0, 5.0]]);
        assert_eq!(rows, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    proptest! {
        #[test]
        fn nonzero_rows_have_unit_norm(v in prop::collection::vec(-100.0f32..100.0, 1..64)) {
            prop_assume!(v.iter().any(|x| x.abs() > 1e-3));
            let mut v = v;
            l2_normalize(&mut v);
            let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            prop_assert!((norm - 1.0).abs() < 1e-4);
        }
    }
}
