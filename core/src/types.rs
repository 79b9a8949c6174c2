//! Response DTOs for the place-details endpoint.
//!
//! # Design
//! Every field of `PlaceDetails` and of its nested entries is optional or
//! defaulted; only a `LatLng` needs both coordinates. Which fields the API
//! returns depends on the `fields` parameter and on what is known about the
//! place, so a partial body must still decode. `review_summary` is kept
//! as raw JSON because its shape depends on the requested extension.

use serde::{Deserialize, Serialize};

use crate::status::ApiStatus;

/// Top-level body of a details response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailsResponse {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_messages: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlaceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub international_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Minutes offset from UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_components: Vec<AddressComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reviews: Vec<Review>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<Photo>,
    /// Present only when the `review_summary` extension was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_summary: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub northeast: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub southwest: Option<LatLng>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Bounds>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_description: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub time: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default)]
    pub html_attributions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_decodes_with_defaults() {
        let resp: DetailsResponse = serde_json::from_str(r#"{"status":"NOT_FOUND"}"#).unwrap();
        assert_eq!(resp.status, ApiStatus::NotFound);
        assert!(resp.result.is_none());
        assert!(resp.html_attributions.is_empty());
        assert!(resp.info_messages.is_empty());
    }

    #[test]
    fn partial_result_decodes() {
        let resp: DetailsResponse = serde_json::from_str(
            r#"{"status":"OK","result":{"name":"Cafe","geometry":{"location":{"lat":1.5,"lng":-2.0}}}}"#,
        )
        .unwrap();
        let place = resp.result.unwrap();
        assert_eq!(place.name.as_deref(), Some("Cafe"));
        assert_eq!(place.geometry.unwrap().location, Some(LatLng { lat: 1.5, lng: -2.0 }));
        assert!(place.place_id.is_none());
        assert!(place.reviews.is_empty());
    }

    #[test]
    fn incomplete_nested_entries_decode() {
        let resp: DetailsResponse = serde_json::from_str(
            r#"{"status":"OK","result":{
                "reviews":[{"author_name":"A","text":"hi"}],
                "photos":[{"photo_reference":"ref-1"}],
                "address_components":[{"types":["country"]}],
                "geometry":{"viewport":{}}
            }}"#,
        )
        .unwrap();
        let place = resp.result.unwrap();

        assert_eq!(place.reviews.len(), 1);
        assert_eq!(place.reviews[0].author_name.as_deref(), Some("A"));
        assert!(place.reviews[0].rating.is_none());

        assert_eq!(place.photos[0].photo_reference.as_deref(), Some("ref-1"));
        assert!(place.photos[0].height.is_none());
        assert!(place.photos[0].width.is_none());

        assert_eq!(place.address_components[0].long_name, "");
        assert_eq!(place.address_components[0].types, vec!["country"]);

        let geometry = place.geometry.unwrap();
        assert!(geometry.location.is_none());
        assert_eq!(geometry.viewport, Some(Bounds::default()));
    }

    #[test]
    fn missing_status_is_rejected() {
        let result = serde_json::from_str::<DetailsResponse>(r#"{"result":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let resp: DetailsResponse =
            serde_json::from_str(r#"{"status":"OK","result":{"curbside_pickup":true}}"#).unwrap();
        assert_eq!(resp.result, Some(PlaceDetails::default()));
    }

    #[test]
    fn review_summary_is_kept_as_raw_json() {
        let resp: DetailsResponse = serde_json::from_str(
            r#"{"status":"OK","result":{"review_summary":{"text":"Great","language":"en"}}}"#,
        )
        .unwrap();
        let summary = resp.result.unwrap().review_summary.unwrap();
        assert_eq!(summary["text"], "Great");
    }
}
