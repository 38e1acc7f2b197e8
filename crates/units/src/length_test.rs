mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_TO_M, SOLAR_RADIUS_M};

    #[test]
    fn test_length_conversions() {
        let length_au = Length::from_au(1.0);
        assert_relative_eq!(length_au.to_m(), AU_TO_M);

        let length_m = Length::from_m(AU_TO_M);
        assert_relative_eq!(length_m.to_au(), 1.0);

        // 500 AU grid half-extent
        let edge = Length::from_au(500.0);
        assert_relative_eq!(Length::from_m(edge.to_m()).to_au(), 500.0);
    }

    #[test]
    fn test_solar_radii() {
        let r_sun = Length::from_solar_radii(1.0);
        assert_relative_eq!(r_sun.to_m(), SOLAR_RADIUS_M, max_relative = 1e-12);
        assert_relative_eq!(r_sun.to_solar_radii(), 1.0, max_relative = 1e-12);

        // The Sun is ~215 solar radii from the Earth
        let one_au = Length::from_au(1.0);
        assert_relative_eq!(one_au.to_solar_radii(), 215.0, max_relative = 0.01);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let rd = Length::from_au(264.0);

        assert_relative_eq!((rd * 2.5).to_au(), 660.0);
        assert_relative_eq!((1.5 * rd).to_au(), 396.0);
        assert_relative_eq!((rd / 2.0).to_au(), 132.0);
        assert_relative_eq!((rd + rd).to_au(), 528.0);
        assert_relative_eq!((rd - Length::from_au(64.0)).to_au(), 200.0);
        assert_relative_eq!(rd / Length::from_au(132.0), 2.0);
    }

    #[test]
    fn test_length_min_max() {
        let a = Length::from_au(5.0);
        let b = Length::from_au(3.0);

        assert_relative_eq!(a.min(b).to_au(), 3.0);
        assert_relative_eq!(a.max(b).to_au(), 5.0);
        assert!(a.is_positive());
        assert!(!Length::zero().is_positive());
    }
}
