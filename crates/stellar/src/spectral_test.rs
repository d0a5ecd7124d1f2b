use units::Temperature;

use crate::spectral::SpectralType;

#[test]
fn spectral_type_from_temperature_bands() {
    let class = |k: f64| SpectralType::from_temperature(Temperature::from_kelvin(k));

    assert_eq!(class(40_000.0), Some(SpectralType::O));
    assert_eq!(class(15_000.0), Some(SpectralType::B));
    assert_eq!(class(9_000.0), Some(SpectralType::A));
    assert_eq!(class(6_500.0), Some(SpectralType::F));
    assert_eq!(class(5_778.0), Some(SpectralType::G));
    assert_eq!(class(4_500.0), Some(SpectralType::K));
    assert_eq!(class(2_566.0), Some(SpectralType::M));
}

#[test]
fn spectral_type_band_edges_belong_to_hotter_class() {
    let class = |k: f64| SpectralType::from_temperature(Temperature::from_kelvin(k));

    assert_eq!(class(6_000.0), Some(SpectralType::F));
    assert_eq!(class(5_999.9), Some(SpectralType::G));
    assert_eq!(class(3_700.0), Some(SpectralType::K));
}

#[test]
fn spectral_type_rejects_unphysical_temperatures() {
    for k in [0.0, -100.0, f64::NAN, f64::INFINITY] {
        assert_eq!(SpectralType::from_temperature(Temperature::from_kelvin(k)), None);
    }
}

#[test]
fn spectral_type_display() {
    assert_eq!(format!("{}", SpectralType::G), "G");
    assert_eq!(format!("{}", SpectralType::M), "M");
}
