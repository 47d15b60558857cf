//! Vector math for cosine similarity over frequency vectors.

use crate::error::{KritesError, Result};

/// Element-wise dot product of two frequency vectors.
///
/// # Errors
///
/// Returns an error if the vectors differ in length.
pub fn scalar_product(one: &[u32], two: &[u32]) -> Result<u64> {
    if one.len() != two.len() {
        return Err(KritesError::invalid_argument(
            "vectors of different length are not allowed",
        ));
    }
    Ok(one
        .iter()
        .zip(two)
        .map(|(a, b)| u64::from(*a) * u64::from(*b))
        .sum())
}

/// Euclidean norm of a frequency vector.
pub fn vector_length(vector: &[u32]) -> f64 {
    vector
        .iter()
        .map(|&v| f64::from(v) * f64::from(v))
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of two frequency vectors.
///
/// Returns exactly 0.0 when either vector has zero magnitude; an untaught or
/// disjoint document is simply dissimilar, not a division error.
///
/// # Errors
///
/// Returns an error if the vectors differ in length.
pub fn cosine(one: &[u32], two: &[u32]) -> Result<f64> {
    if one.len() != two.len() {
        return Err(KritesError::invalid_argument(
            "vectors of different length are not allowed",
        ));
    }

    let denominator = vector_length(one) * vector_length(two);
    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(scalar_product(one, two)? as f64 / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_product() {
        assert_eq!(scalar_product(&[1, 2, 3], &[4, 5, 6]).unwrap(), 32);
        assert_eq!(scalar_product(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn test_scalar_product_length_mismatch() {
        assert!(matches!(
            scalar_product(&[1, 2], &[1]),
            Err(KritesError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_vector_length() {
        assert_eq!(vector_length(&[3, 4]), 5.0);
        assert_eq!(vector_length(&[0, 0]), 0.0);
        assert_eq!(vector_length(&[]), 0.0);
    }

    #[test]
    fn test_cosine_identical_vectors() {
        let v = [2, 2, 1, 1, 1];
        assert!((cosine(&v, &v).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_is_symmetric() {
        let a = [1, 1, 0, 0, 0];
        let b = [2, 2, 1, 1, 1];
        assert_eq!(cosine(&a, &b).unwrap(), cosine(&b, &a).unwrap());
    }

    #[test]
    fn test_cosine_zero_vector_is_zero() {
        assert_eq!(cosine(&[0, 0], &[1, 2]).unwrap(), 0.0);
        assert_eq!(cosine(&[1, 2], &[0, 0]).unwrap(), 0.0);
        assert_eq!(cosine(&[0], &[0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cosine_length_mismatch() {
        assert!(matches!(
            cosine(&[1], &[1, 2]),
            Err(KritesError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        assert_eq!(cosine(&[1, 0], &[0, 1]).unwrap(), 0.0);
    }
}
