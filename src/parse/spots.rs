use reqwest::Url;
use serde_json::Value;

use crate::{
    error::ApiError,
    types::{Spot, SpotRecord},
    warning,
};

use super::{SESSION_TOKEN_HEADER, SpotClient, decode_body};

const SPOT_COLLECTION_PATH: &str = "classes/Spot/";

impl SpotClient {
    /// Retrieves every spot in the `Spot` class.
    ///
    /// Elements of `results` that lack `objectId`, `Name` or a complete
    /// `Location` are skipped with a warning; the rest are returned in
    /// server order.
    ///
    /// # Example
    ///
    /// ```
    /// let spots = client.fetch_spots().await?;
    /// for spot in &spots {
    ///     println!("{} ({}, {})", spot.name, spot.location.latitude, spot.location.longitude);
    /// }
    /// ```
    pub async fn fetch_spots(&self) -> Result<Vec<Spot>, ApiError> {
        let authorization = self.authorization()?;
        let request = self.with_session(self.http.get(self.url(SPOT_COLLECTION_PATH))).await;

        let json = self.execute(request, authorization).await?;
        spots_from_response(json)
    }

    /// Retrieves a single spot by its `objectId`.
    ///
    /// The id is sent as one percent-encoded path segment under
    /// `classes/Spot/`; an empty id is rejected with `InvalidInput`.
    pub async fn fetch_spot(&self, object_id: &str) -> Result<Spot, ApiError> {
        let authorization = self.authorization()?;
        let url = self.spot_url(object_id)?;
        let request = self.with_session(self.http.get(url)).await;

        let json = self.execute(request, authorization).await?;
        spot_from_value(json)
    }

    pub(crate) fn spot_url(&self, object_id: &str) -> Result<Url, ApiError> {
        if matches!(object_id, "" | "." | "..") {
            return Err(ApiError::InvalidInput(format!(
                "invalid spot id `{object_id}`"
            )));
        }

        let mut url = Url::parse(&self.url(SPOT_COLLECTION_PATH))
            .map_err(|e| ApiError::InvalidInput(format!("invalid API base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidInput("API base URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(object_id);

        Ok(url)
    }

    async fn with_session(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.current_token().await {
            Some(token) if !token.is_empty() => request.header(SESSION_TOKEN_HEADER, token.as_str()),
            _ => request,
        }
    }
}

/// Decodes a `classes/Spot` collection response body.
pub fn decode_spots(body: &str) -> Result<Vec<Spot>, ApiError> {
    spots_from_response(decode_body(body)?)
}

/// Decodes a single `classes/Spot/<id>` response body.
pub fn decode_spot(body: &str) -> Result<Spot, ApiError> {
    spot_from_value(decode_body(body)?)
}

fn spots_from_response(mut json: Value) -> Result<Vec<Spot>, ApiError> {
    let results = match json.get_mut("results").map(Value::take) {
        Some(Value::Array(results)) => results,
        Some(_) => {
            return Err(ApiError::MalformedResponse(
                "`results` is not an array".to_string(),
            ));
        }
        None => {
            return Err(ApiError::MalformedResponse(
                "response has no `results`".to_string(),
            ));
        }
    };

    let mut spots = Vec::with_capacity(results.len());
    for (index, element) in results.into_iter().enumerate() {
        match serde_json::from_value::<SpotRecord>(element) {
            Ok(record) => spots.push(Spot::from(record)),
            Err(e) => warning!("Skipping spot at index {}: {}", index, e),
        }
    }

    Ok(spots)
}

fn spot_from_value(json: Value) -> Result<Spot, ApiError> {
    serde_json::from_value::<SpotRecord>(json)
        .map(Spot::from)
        .map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::types::Credentials;

    use super::*;

    #[test]
    fn spot_url_keeps_id_in_one_segment() {
        let client = SpotClient::with_base_url("https://api.parse.com/1/", Credentials::default());

        let url = client.spot_url("../../users/me").unwrap();
        assert_eq!(url.path(), "/1/classes/Spot/..%2F..%2Fusers%2Fme");
        assert_eq!(url.query(), None);

        let url = client.spot_url("abc?where=1").unwrap();
        assert_eq!(url.path(), "/1/classes/Spot/abc%3Fwhere=1");
        assert_eq!(url.query(), None);

        let url = client.spot_url("uwhQUedJxo").unwrap();
        assert_eq!(url.as_str(), "https://api.parse.com/1/classes/Spot/uwhQUedJxo");
    }

    #[test]
    fn spot_url_rejects_empty_and_dot_ids() {
        let client = SpotClient::with_base_url("https://api.parse.com/1/", Credentials::default());
        for id in ["", ".", ".."] {
            assert!(matches!(client.spot_url(id), Err(ApiError::InvalidInput(_))));
        }
    }

    #[test]
    fn decodes_full_parse_payload() {
        let body = r#"{
          "results": [
            {
              "Location": {"__type": "GeoPoint", "latitude": 43.4304344, "longitude": -80.4763151},
              "Name": "My Cafe",
              "createdAt": "2015-03-14T16:08:03.430Z",
              "objectId": "uwhQUedJxo",
              "updatedAt": "2015-03-14T16:09:04.355Z"
            }
          ]
        }"#;

        let spots = decode_spots(body).unwrap();
        assert_eq!(spots.len(), 1);

        let spot = &spots[0];
        assert_eq!(spot.name, "My Cafe");
        assert_eq!(spot.location.latitude, 43.4304344);
        assert_eq!(spot.location.longitude, -80.4763151);
        assert_eq!(spot.object_id, "uwhQUedJxo");
        assert_eq!(spot.id, None);
        assert_eq!(
            spot.created_at.unwrap().to_rfc3339(),
            "2015-03-14T16:08:03.430+00:00"
        );
    }

    #[test]
    fn numeric_object_id_becomes_id() {
        let body = r#"{"results":[{"objectId":"42","Name":"n","Location":{"latitude":1.0,"longitude":2.0}}]}"#;
        assert_eq!(decode_spots(body).unwrap()[0].id, Some(42));
    }

    #[test]
    fn incomplete_elements_are_skipped() {
        let body = r#"{"results":[
            {"objectId":"a","Name":"Kept","Location":{"latitude":1.5,"longitude":2.5}},
            {"objectId":"b","Location":{"latitude":1.0,"longitude":2.0}},
            {"objectId":"c","Name":"No location"},
            {"objectId":"d","Name":"Half","Location":{"latitude":1.0}},
            {"Name":"No id","Location":{"latitude":1.0,"longitude":2.0}},
            {"objectId":"e","Name":"Also kept","Location":{"latitude":-3.0,"longitude":4.0}}
        ]}"#;

        let names: Vec<String> = decode_spots(body)
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Kept", "Also kept"]);
    }

    #[test]
    fn empty_results_decode_to_empty_list() {
        assert!(decode_spots(r#"{"results":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_or_wrong_results_is_malformed() {
        assert!(matches!(
            decode_spots(r#"{"count": 3}"#),
            Err(ApiError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_spots(r#"{"results": {}}"#),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn single_spot_requires_all_fields() {
        let spot =
            decode_spot(r#"{"objectId":"x","Name":"Park","Location":{"latitude":0.5,"longitude":0.25}}"#)
                .unwrap();
        assert_eq!(spot.name, "Park");

        assert!(matches!(
            decode_spot(r#"{"objectId":"x","Name":"Park"}"#),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}
