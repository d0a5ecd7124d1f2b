//! ADQL construction for the NASA Exoplanet Archive range search.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::column::CatalogColumn;

/// Synchronous TAP endpoint of the NASA Exoplanet Archive.
pub const TAP_SYNC_URL: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Planetary Systems table.
pub const CATALOG_TABLE: &str = "ps";

/// Restricts results to the archive's default parameter set per planet.
const DEFAULT_FLAG_CLAUSE: &str = "default_flag = 1";

/// Search form input: optional text bounds per filterable column.
///
/// Field names match the search form, so the form's values deserialize
/// directly. Numbers are accepted as well as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(default)]
pub struct QueryInput {
    #[serde(deserialize_with = "loose_text")]
    pub st_rad_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub st_rad_max: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub st_teff_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub st_teff_max: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_orbsmax_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_orbsmax_max: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_rade_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_rade_max: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_masse_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_masse_max: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_orbper_min: Option<String>,
    #[serde(deserialize_with = "loose_text")]
    pub pl_orbper_max: Option<String>,
}

impl QueryInput {
    /// Columns that can be range-filtered, in clause order.
    pub const FILTERABLE: [CatalogColumn; 6] = [
        CatalogColumn::StellarRadius,
        CatalogColumn::StellarTemperature,
        CatalogColumn::SemiMajorAxis,
        CatalogColumn::PlanetRadius,
        CatalogColumn::PlanetMass,
        CatalogColumn::OrbitalPeriod,
    ];

    /// Sets both bounds for `column`. Columns outside
    /// [`QueryInput::FILTERABLE`] are ignored.
    pub fn with_range(mut self, column: CatalogColumn, min: f64, max: f64) -> Self {
        match self.bounds_mut(column) {
            Some((lo, hi)) => {
                *lo = Some(min.to_string());
                *hi = Some(max.to_string());
            }
            None => tracing::warn!(%column, "column cannot be range-filtered"),
        }
        self
    }

    /// Raw text bounds for `column`.
    pub fn bounds(&self, column: CatalogColumn) -> Option<(Option<&str>, Option<&str>)> {
        let (lo, hi) = match column {
            CatalogColumn::StellarRadius => (&self.st_rad_min, &self.st_rad_max),
            CatalogColumn::StellarTemperature => (&self.st_teff_min, &self.st_teff_max),
            CatalogColumn::SemiMajorAxis => (&self.pl_orbsmax_min, &self.pl_orbsmax_max),
            CatalogColumn::PlanetRadius => (&self.pl_rade_min, &self.pl_rade_max),
            CatalogColumn::PlanetMass => (&self.pl_masse_min, &self.pl_masse_max),
            CatalogColumn::OrbitalPeriod => (&self.pl_orbper_min, &self.pl_orbper_max),
            _ => return None,
        };
        Some((lo.as_deref(), hi.as_deref()))
    }

    fn bounds_mut(
        &mut self,
        column: CatalogColumn,
    ) -> Option<(&mut Option<String>, &mut Option<String>)> {
        match column {
            CatalogColumn::StellarRadius => Some((&mut self.st_rad_min, &mut self.st_rad_max)),
            CatalogColumn::StellarTemperature => {
                Some((&mut self.st_teff_min, &mut self.st_teff_max))
            }
            CatalogColumn::SemiMajorAxis => {
                Some((&mut self.pl_orbsmax_min, &mut self.pl_orbsmax_max))
            }
            CatalogColumn::PlanetRadius => Some((&mut self.pl_rade_min, &mut self.pl_rade_max)),
            CatalogColumn::PlanetMass => Some((&mut self.pl_masse_min, &mut self.pl_masse_max)),
            CatalogColumn::OrbitalPeriod => {
                Some((&mut self.pl_orbper_min, &mut self.pl_orbper_max))
            }
            _ => None,
        }
    }

    /// Complete ranges only: both bounds present and finite.
    pub fn filters(&self) -> Vec<RangeFilter> {
        Self::FILTERABLE
            .iter()
            .filter_map(|&column| {
                let (lo, hi) = self.bounds(column)?;
                let min = parse_bound(lo?)?;
                let max = parse_bound(hi?)?;
                Some(RangeFilter { column, min, max })
            })
            .collect()
    }
}

/// A closed `[min, max]` filter on one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub column: CatalogColumn,
    pub min: f64,
    pub max: f64,
}

impl RangeFilter {
    /// `(<col> IS NOT NULL AND <col> BETWEEN <min> AND <max>)`
    pub fn to_clause(&self) -> String {
        format!(
            "({col} IS NOT NULL AND {col} BETWEEN {min} AND {max})",
            col = self.column,
            min = self.min,
            max = self.max
        )
    }
}

/// WHERE clause body for a search.
///
/// Always starts with the default-parameter-set restriction; incomplete or
/// non-numeric ranges are skipped rather than rejected.
pub fn build_where(input: &QueryInput) -> String {
    std::iter::once(DEFAULT_FLAG_CLAUSE.to_string())
        .chain(input.filters().iter().map(RangeFilter::to_clause))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Full ADQL statement for a search.
pub fn build_query(input: &QueryInput) -> String {
    format!(
        "SELECT {} FROM {} WHERE {}",
        CatalogColumn::select_list(),
        CATALOG_TABLE,
        build_where(input)
    )
}

fn parse_bound(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
