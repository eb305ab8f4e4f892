//! Plain polynomials over a group's scalar field.
//!
//! Only what interpolation needs: sum, product, scaling and evaluation.

use crate::error::ShareError;
use crate::group::{Group, Scalar};

/// A polynomial with scalar coefficients, lowest degree first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriPoly<G: Group> {
    group: G,
    coeffs: Vec<G::Scalar>,
}

impl<G: Group> PriPoly<G> {
    /// Build a polynomial from coefficients, lowest degree first.
    pub fn new(group: G, coeffs: Vec<G::Scalar>) -> Self {
        Self { group, coeffs }
    }

    /// The constant polynomial `c`.
    pub fn constant(group: G, c: G::Scalar) -> Self {
        Self::new(group, vec![c])
    }

    /// The monic linear factor `X - root`.
    pub fn linear_factor(group: G, root: G::Scalar) -> Self {
        Self::new(group, vec![-root, G::Scalar::one()])
    }

    /// Coefficients, lowest degree first.
    pub fn coeffs(&self) -> &[G::Scalar] {
        &self.coeffs
    }

    /// Take the coefficient vector.
    pub fn into_coeffs(self) -> Vec<G::Scalar> {
        self.coeffs
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Whether there are no coefficients at all.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Pointwise sum.
    ///
    /// Both operands must come from the same group and have the same number
    /// of coefficients.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, ShareError> {
        let (left, right) = (self.group.name(), other.group.name());
        if left != right {
            return Err(ShareError::MismatchedGroup { left, right });
        }
        if self.coeffs.len() != other.coeffs.len() {
            return Err(ShareError::MismatchedLength {
                left: self.coeffs.len(),
                right: other.coeffs.len(),
            });
        }
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Self::new(self.group.clone(), coeffs))
    }

    /// Full convolution. The result has `len(p) + len(q) - 1` coefficients.
    #[allow(clippy::should_implement_trait)]
    pub fn mul(&self, other: &Self) -> Self {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Self::new(self.group.clone(), Vec::new());
        }
        let mut coeffs = vec![G::Scalar::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Self::new(self.group.clone(), coeffs)
    }

    /// Multiply every coefficient by `s`.
    pub fn scale(&self, s: G::Scalar) -> Self {
        Self::new(
            self.group.clone(),
            self.coeffs.iter().map(|&c| c * s).collect(),
        )
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn eval(&self, x: G::Scalar) -> G::Scalar {
        self.coeffs
            .iter()
            .rev()
            .fold(G::Scalar::zero(), |acc, &c| acc * x + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodecError, ErrorKind};
    use crate::group::small::{SmallPoint, SmallScalar, Z97};

    fn poly(coeffs: &[u64]) -> PriPoly<Z97> {
        PriPoly::new(
            Z97::default(),
            coeffs.iter().map(|&c| SmallScalar::new(c)).collect(),
        )
    }

    #[test]
    fn add_is_pointwise() {
        let sum = poly(&[1, 2, 3]).add(&poly(&[96, 5, 0])).unwrap();
        assert_eq!(sum, poly(&[0, 7, 3]));
    }

    #[test]
    fn add_rejects_length_mismatch() {
        let err = poly(&[1, 2]).add(&poly(&[1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedLength);
        assert!(matches!(
            err,
            ShareError::MismatchedLength { left: 2, right: 3 }
        ));
    }

    /// Same arithmetic as `Z97`, with a name chosen at runtime.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct NamedZ97(&'static str);

    impl Group for NamedZ97 {
        type Scalar = SmallScalar<97>;
        type Point = SmallPoint<97>;

        fn name(&self) -> String {
            self.0.to_string()
        }
        fn generator(&self) -> SmallPoint<97> {
            Z97::default().generator()
        }
        fn point_len(&self) -> usize {
            Z97::default().point_len()
        }
        fn scalar_len(&self) -> usize {
            Z97::default().scalar_len()
        }
        fn point_from_bytes(&self, bytes: &[u8]) -> Result<SmallPoint<97>, CodecError> {
            Z97::default().point_from_bytes(bytes)
        }
        fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<SmallScalar<97>, CodecError> {
            Z97::default().scalar_from_bytes(bytes)
        }
    }

    #[test]
    fn add_rejects_group_mismatch() {
        let a = PriPoly::new(NamedZ97("left"), vec![SmallScalar::new(1)]);
        let b = PriPoly::new(NamedZ97("right"), vec![SmallScalar::new(1)]);
        let err = a.add(&b).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedGroup);

        let c = PriPoly::new(NamedZ97("left"), vec![SmallScalar::new(2)]);
        assert_eq!(a.add(&c).unwrap().coeffs(), &[SmallScalar::new(3)]);
    }

    #[test]
    fn mul_convolves() {
        // (1 + X)(1 + X) = 1 + 2X + X^2
        let square = poly(&[1, 1]).mul(&poly(&[1, 1]));
        assert_eq!(square, poly(&[1, 2, 1]));

        // (X - 2)(X - 3) = X^2 - 5X + 6
        let product = poly(&[95, 1]).mul(&poly(&[94, 1]));
        assert_eq!(product, poly(&[6, 92, 1]));
        assert_eq!(product.len(), 3);
    }

    #[test]
    fn mul_leaves_inputs_untouched() {
        let p = poly(&[3, 4]);
        let q = poly(&[5]);
        let _ = p.mul(&q);
        assert_eq!(p, poly(&[3, 4]));
        assert_eq!(q, poly(&[5]));
    }

    #[test]
    fn linear_factor_vanishes_at_root() {
        let group = Z97::default();
        let root = SmallScalar::new(42);
        let f = PriPoly::linear_factor(group, root);
        assert_eq!(f.eval(root), SmallScalar::zero());
        assert_eq!(f.eval(SmallScalar::new(43)), SmallScalar::one());
    }

    #[test]
    fn eval_and_scale() {
        // 1 + 2X + 3X^2 at X = 2 is 17.
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.eval(SmallScalar::new(2)), SmallScalar::new(17));
        assert_eq!(p.scale(SmallScalar::new(2)), poly(&[2, 4, 6]));
    }
}
