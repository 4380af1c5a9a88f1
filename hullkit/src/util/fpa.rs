use std::cmp::Ordering;

/// Margin of [`FPA::is_negligible`], relative to the scale of the compared quantity.
const RELATIVE_MARGIN: f64 = 16.0 * f64::EPSILON;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Zero within a margin proportional to `scale`, the magnitude of the terms which produced the value.
    /// Used as the tie-break for signs of cross products and areas throughout the kernel.
    ///
    /// Scaling all coordinates by the same factor never changes the verdict.
    pub fn is_negligible(self, scale: f64) -> bool {
        float_cmp::approx_eq!(f64, self.0, 0.0, epsilon = RELATIVE_MARGIN * scale)
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FPA;

    #[test]
    fn negligible_relative_to_scale() {
        assert!(FPA(0.1 + 0.2 - 0.3).is_negligible(1.0));
        assert!(FPA(-0.0).is_negligible(0.0));
        assert!(!FPA(1e-9).is_negligible(1.0));
        //same ratio, different units
        assert!(!FPA(1e-27).is_negligible(1e-18));
        assert!(FPA(1e-4).is_negligible(1e12));
    }

    #[test]
    fn ordering_treats_near_values_as_equal() {
        assert!(FPA(1.0) <= FPA(1.0 + f64::EPSILON));
        assert!(FPA(1.0) >= FPA(1.0 + f64::EPSILON));
        assert!(FPA(1.0) < FPA(1.1));
    }
}
