use serde::Serialize;

use crate::geoportal::plot_address::PlotAddress;

pub const NATIONAL_PORTAL_URL: &str = "https://mapy.geoportal.gov.pl";

/// County map portal with plot search support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionalPortal {
    pub county: &'static str,
    pub url: &'static str,
}

pub const REGIONAL_PORTALS: [RegionalPortal; 3] = [
    RegionalPortal {
        county: "łańcucki",
        url: "https://lancut.geoportal2.pl/map/www/mapa.php?CFGF=wms&mylayers=+granice+OSM+",
    },
    RegionalPortal {
        county: "ropczycko sędziszowski",
        url: "https://spropczyce.geoportal2.pl/map/www/mapa.php?CFGF=wms&mylayers=+granice1,granice2+OSM+",
    },
    RegionalPortal {
        county: "rzeszowski",
        url: "https://powiatrzeszowski.geoportal2.pl/map/www/mapa.php?CFGF=wms&mylayers=+granice+OSM+",
    },
];

/// Portal URL for an exact county name, the national portal otherwise.
pub fn portal_url_for(county: &str) -> &'static str {
    let county = county.trim().to_lowercase();
    REGIONAL_PORTALS
        .iter()
        .find(|portal| portal.county == county)
        .map_or(NATIONAL_PORTAL_URL, |portal| portal.url)
}

/// Whether automatic plot search is available for the county.
pub fn is_automation_supported(county: &str) -> bool {
    let county = county.to_lowercase();
    !county.is_empty()
        && REGIONAL_PORTALS
            .iter()
            .any(|portal| county.contains(portal.county))
}

/// Everything the automation side needs for one location path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationLookup {
    pub original_location: String,
    pub address: PlotAddress,
    pub portal_url: &'static str,
    pub automation_supported: bool,
}

impl LocationLookup {
    pub fn resolve(location_path: &str) -> Self {
        let address = PlotAddress::parse(location_path);
        let county = address.county.as_deref().unwrap_or("");

        Self {
            original_location: location_path.to_string(),
            portal_url: portal_url_for(county),
            automation_supported: is_automation_supported(county),
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_lookup() {
        assert!(portal_url_for("rzeszowski").starts_with("https://powiatrzeszowski."));
        assert!(portal_url_for(" Łańcucki ").starts_with("https://lancut."));
        assert_eq!(portal_url_for("dębicki"), NATIONAL_PORTAL_URL);
        assert_eq!(portal_url_for(""), NATIONAL_PORTAL_URL);
    }

    #[test]
    fn test_automation_support() {
        assert!(is_automation_supported("ropczycko sędziszowski"));
        assert!(is_automation_supported("Rzeszowski"));
        assert!(!is_automation_supported("krośnieński"));
        assert!(!is_automation_supported(""));
    }

    #[test]
    fn test_resolve_unknown_location() {
        let lookup = LocationLookup::resolve("mazowieckie/warszawski/Warszawa/1");
        assert_eq!(lookup.address.county, None);
        assert_eq!(lookup.portal_url, NATIONAL_PORTAL_URL);
        assert!(!lookup.automation_supported);
    }
}
