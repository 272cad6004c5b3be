//! Display model for a reverse-geocoded endpoint.

use super::types::ReverseResponse;

/// Shown for any address field the geocoder did not provide.
pub const NOT_AVAILABLE: &str = "Not available";

/// Address details for one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceInfo {
    pub display_name: Option<String>,
    pub neighbourhood: Option<String>,
    pub postcode: Option<String>,
    pub municipality: Option<String>,
}

impl PlaceInfo {
    /// Pick the displayed fields out of a geocoder response.
    ///
    /// Neighbourhood falls back to suburb; municipality falls back from city
    /// district to county to city.
    pub fn from_response(response: ReverseResponse) -> Self {
        let address = response.address.unwrap_or_default();

        Self {
            display_name: non_blank(response.display_name),
            neighbourhood: non_blank(address.neighbourhood).or(non_blank(address.suburb)),
            postcode: non_blank(address.postcode),
            municipality: non_blank(address.city_district)
                .or(non_blank(address.county))
                .or(non_blank(address.city)),
        }
    }

    pub fn display_name_or_placeholder(&self) -> &str {
        self.display_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn neighbourhood_or_placeholder(&self) -> &str {
        self.neighbourhood.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn postcode_or_placeholder(&self) -> &str {
        self.postcode.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn municipality_or_placeholder(&self) -> &str {
        self.municipality.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::types::AddressDto;

    #[test]
    fn fallbacks() {
        let response = ReverseResponse {
            display_name: Some("Somewhere".into()),
            address: Some(AddressDto {
                suburb: Some("Roma Norte".into()),
                county: Some("Cuauhtémoc".into()),
                city: Some("Ciudad de México".into()),
                ..Default::default()
            }),
        };

        let place = PlaceInfo::from_response(response);
        assert_eq!(place.neighbourhood.as_deref(), Some("Roma Norte"));
        assert_eq!(place.municipality.as_deref(), Some("Cuauhtémoc"));
        assert_eq!(place.postcode_or_placeholder(), NOT_AVAILABLE);
    }

    #[test]
    fn neighbourhood_preferred_over_suburb() {
        let response = ReverseResponse {
            display_name: None,
            address: Some(AddressDto {
                neighbourhood: Some("Centro".into()),
                suburb: Some("Other".into()),
                city_district: Some("Cuauhtémoc".into()),
                city: Some("CDMX".into()),
                ..Default::default()
            }),
        };

        let place = PlaceInfo::from_response(response);
        assert_eq!(place.neighbourhood.as_deref(), Some("Centro"));
        assert_eq!(place.municipality.as_deref(), Some("Cuauhtémoc"));
    }

    #[test]
    fn empty_response_is_all_placeholders() {
        let place = PlaceInfo::from_response(ReverseResponse::default());
        assert_eq!(place, PlaceInfo::default());
        assert_eq!(place.display_name_or_placeholder(), NOT_AVAILABLE);
        assert_eq!(place.neighbourhood_or_placeholder(), NOT_AVAILABLE);
        assert_eq!(place.municipality_or_placeholder(), NOT_AVAILABLE);
    }

    #[test]
    fn blank_values_count_as_missing() {
        let response = ReverseResponse {
            display_name: Some("   ".into()),
            address: None,
        };
        assert!(PlaceInfo::from_response(response).display_name.is_none());
    }
}
