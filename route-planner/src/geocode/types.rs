//! Wire types for the reverse-geocoding endpoint (Nominatim `jsonv2`).

use serde::Deserialize;

/// Response of `GET /reverse?format=jsonv2`.
///
/// Every field is optional: the geocoder omits whatever it does not know,
/// and answers `{"error": ...}` with none of these fields at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub address: Option<AddressDto>,
}

/// The subset of the address breakdown that is displayed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressDto {
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
    pub city_district: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
}
