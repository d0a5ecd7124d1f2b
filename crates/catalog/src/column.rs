use std::fmt;

use serde::{Deserialize, Serialize};

/// Archive columns read by the simulation (plus inclination, which the
/// search selects but the planar model ignores).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogColumn {
    #[serde(rename = "pl_name")]
    PlanetName,
    #[serde(rename = "hostname")]
    HostName,
    #[serde(rename = "st_rad")]
    StellarRadius,
    #[serde(rename = "st_teff")]
    StellarTemperature,
    #[serde(rename = "st_lum")]
    StellarLuminosity,
    #[serde(rename = "st_mass")]
    StellarMass,
    #[serde(rename = "pl_rade")]
    PlanetRadius,
    #[serde(rename = "pl_masse")]
    PlanetMass,
    #[serde(rename = "pl_orbsmax")]
    SemiMajorAxis,
    #[serde(rename = "pl_orbper")]
    OrbitalPeriod,
    #[serde(rename = "pl_orbeccen")]
    Eccentricity,
    #[serde(rename = "pl_orbincl")]
    Inclination,
}

impl CatalogColumn {
    /// Every column a search selects, in request order.
    pub const SELECTED: [CatalogColumn; 12] = [
        CatalogColumn::PlanetName,
        CatalogColumn::HostName,
        CatalogColumn::StellarRadius,
        CatalogColumn::StellarTemperature,
        CatalogColumn::StellarLuminosity,
        CatalogColumn::StellarMass,
        CatalogColumn::PlanetRadius,
        CatalogColumn::PlanetMass,
        CatalogColumn::SemiMajorAxis,
        CatalogColumn::OrbitalPeriod,
        CatalogColumn::Eccentricity,
        CatalogColumn::Inclination,
    ];

    /// Canonical (lower-case) archive column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogColumn::PlanetName => "pl_name",
            CatalogColumn::HostName => "hostname",
            CatalogColumn::StellarRadius => "st_rad",
            CatalogColumn::StellarTemperature => "st_teff",
            CatalogColumn::StellarLuminosity => "st_lum",
            CatalogColumn::StellarMass => "st_mass",
            CatalogColumn::PlanetRadius => "pl_rade",
            CatalogColumn::PlanetMass => "pl_masse",
            CatalogColumn::SemiMajorAxis => "pl_orbsmax",
            CatalogColumn::OrbitalPeriod => "pl_orbper",
            CatalogColumn::Eccentricity => "pl_orbeccen",
            CatalogColumn::Inclination => "pl_orbincl",
        }
    }

    /// Comma-separated select list.
    pub fn select_list() -> String {
        Self::SELECTED
            .iter()
            .map(CatalogColumn::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl AsRef<str> for CatalogColumn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CatalogColumn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
