mod tests {
    use approx::assert_relative_eq;

    use crate::number_density::{NumberDensity, H2_MASS_KG};
    use crate::volume_density::VolumeDensity;

    #[test]
    fn test_number_density_units() {
        let n = NumberDensity::from_per_m3(5.0e11);
        assert_relative_eq!(n.to_per_cm3(), 5.0e5);
    }

    #[test]
    fn test_h2_from_mass_density() {
        let rho = VolumeDensity::from_kg_per_m3(3.0e-15);
        let n = NumberDensity::h2_from_mass_density(rho);
        assert_relative_eq!(n.to_per_m3(), 3.0e-15 / H2_MASS_KG, max_relative = 1e-12);
        assert_relative_eq!(n.to_per_m3() * H2_MASS_KG, 3.0e-15, max_relative = 1e-12);
    }

    #[test]
    fn test_number_density_arithmetic() {
        let a = NumberDensity::from_per_m3(1.0e12);
        let b = NumberDensity::from_per_m3(2.0e12);
        assert_relative_eq!((a + b).to_per_m3(), 3.0e12);
        assert_relative_eq!((a * 5.25).to_per_m3(), 5.25e12);
        assert_relative_eq!(NumberDensity::zero().to_per_m3(), 0.0);
    }
}
