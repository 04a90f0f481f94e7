use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Application keys issued by the Parse dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub application_id: String,
    pub client_key: String,
    pub javascript_key: String,
}

/// Opaque token handed out by the login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named point of interest.
#[derive(Debug, Clone, PartialEq)]
pub struct Spot {
    pub name: String,
    pub location: GeoPoint,
    /// `objectId` read as an integer; `None` when the id is not numeric.
    pub id: Option<i64>,
    pub object_id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Wire shape of one element of `classes/Spot` results.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotRecord {
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: GeoPoint,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SpotRecord> for Spot {
    fn from(record: SpotRecord) -> Self {
        Spot {
            id: utils::parse_numeric_id(&record.object_id),
            name: record.name,
            location: record.location,
            object_id: record.object_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserCredentialsRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Tabled)]
pub struct SpotTableRow {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct SpotDetailRow {
    pub field: String,
    pub value: String,
}
