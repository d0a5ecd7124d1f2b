mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, DAYS_PER_YEAR};

    #[test]
    fn test_time_conversions() {
        let year = Time::from_years(1.0);
        assert_relative_eq!(year.to_days(), DAYS_PER_YEAR);

        let period = Time::from_days(365.0);
        assert_relative_eq!(period.to_years(), 365.0 / DAYS_PER_YEAR);
        assert_relative_eq!(period.to_days(), 365.0);

        let half = period * 0.5;
        assert_relative_eq!((half + half).to_days(), 365.0);
        assert_eq!(Time::zero().to_days(), 0.0);
    }
}
