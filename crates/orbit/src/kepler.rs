//! Kepler's third law and catalog semi-major-axis reconciliation.
//!
//! In units of AU, years and solar masses the third law reads `a³ = T²·M`.
//! Archive rows sometimes carry a semi-major axis that is stale or a
//! placeholder; [`reconcile_semi_major_axis`] only trusts a catalog value
//! that lands within a tolerance band of the period-derived one.

use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

/// Stellar masses below this are raised to it before deriving an orbit.
pub const MIN_STELLAR_MASS_SOLAR: f64 = 0.1;

/// Smallest semi-major axis a derived orbit can have. Periods so short
/// that the axis would round to zero get this instead.
pub const MIN_SEMI_MAJOR_AXIS_AU: f64 = f64::MIN_POSITIVE;

/// Semi-major axis implied by an orbital period around `stellar_mass`.
///
/// Computed as `|T|^(2/3) · M^(1/3)` rather than `∛(T²M)` so very short
/// periods do not underflow, and never below [`MIN_SEMI_MAJOR_AXIS_AU`].
///
/// ```
/// use orbit::semi_major_axis_from_period;
/// use units::{Mass, Time};
///
/// let a = semi_major_axis_from_period(Time::from_years(1.0), Mass::from_solar_masses(1.0));
/// assert!((a.to_au() - 1.0).abs() < 1e-12);
/// ```
pub fn semi_major_axis_from_period(period: Time, stellar_mass: Mass) -> Length {
    let years = period.to_years().abs();
    let au = years.powf(2.0 / 3.0) * stellar_mass.to_solar_masses().cbrt();
    Length::from_au(au.max(MIN_SEMI_MAJOR_AXIS_AU))
}

/// Stellar mass to use for the third law: 1 M☉ when unknown, never below `floor`.
pub fn effective_stellar_mass(stellar_mass: Option<Mass>, floor: Mass) -> Mass {
    stellar_mass
        .filter(|m| m.to_solar_masses().is_finite())
        .unwrap_or_else(|| Mass::from_solar_masses(1.0))
        .max(floor)
}

/// Accepted range for catalog/derived semi-major-axis ratios, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl Default for ToleranceBand {
    fn default() -> Self {
        Self {
            lower: 0.5,
            upper: 2.0,
        }
    }
}

impl ToleranceBand {
    pub fn accepts(&self, value: Length, reference: Length) -> bool {
        value >= reference * self.lower && value <= reference * self.upper
    }
}

/// Which input supplied the semi-major axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisSource {
    Catalog,
    Derived,
}

/// Outcome of reconciling catalog and period-derived semi-major axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledAxis {
    pub semi_major_axis: Length,
    pub derived: Length,
    pub catalog: Option<Length>,
    pub source: AxisSource,
}

/// Picks the catalog value when it is finite and within `band` of
/// `derived`, otherwise `derived`.
pub fn reconcile_semi_major_axis(
    catalog: Option<Length>,
    derived: Length,
    band: ToleranceBand,
) -> ReconciledAxis {
    let accepted = catalog.filter(|value| {
        value.is_finite() && derived.to_au() > 0.0 && band.accepts(*value, derived)
    });

    match accepted {
        Some(value) => ReconciledAxis {
            semi_major_axis: value,
            derived,
            catalog,
            source: AxisSource::Catalog,
        },
        None => {
            if let Some(rejected) = catalog {
                tracing::debug!(
                    catalog_au = rejected.to_au(),
                    derived_au = derived.to_au(),
                    "catalog semi-major axis inconsistent with period, using derived value"
                );
            }
            ReconciledAxis {
                semi_major_axis: derived,
                derived,
                catalog,
                source: AxisSource::Derived,
            }
        }
    }
}
