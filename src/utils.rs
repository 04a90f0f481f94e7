use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};

use crate::types::{Spot, SpotDetailRow, SpotTableRow};

/// Builds the password half of the Basic credentials Parse accepts for
/// JavaScript-key authentication.
pub fn javascript_key_password(javascript_key: &str) -> String {
    format!("javascript-key={javascript_key}")
}

/// Builds the value of the `Authorization` header for an application id and
/// JavaScript key.
pub fn basic_auth_header(application_id: &str, javascript_key: &str) -> String {
    let pair = format!(
        "{application_id}:{password}",
        password = javascript_key_password(javascript_key)
    );
    format!("Basic {}", STANDARD.encode(pair))
}

/// Joins an endpoint path onto the API base, tolerating a missing or doubled
/// slash between the two.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{base}/{path}",
        base = base.trim_end_matches('/'),
        path = path.trim_start_matches('/')
    )
}

pub fn parse_numeric_id(object_id: &str) -> Option<i64> {
    object_id.parse().ok()
}

pub fn spots_to_table_rows(spots: &[Spot]) -> Vec<SpotTableRow> {
    let mut rows: Vec<SpotTableRow> = spots
        .iter()
        .map(|s| SpotTableRow {
            name: s.name.clone(),
            latitude: format_coordinate(s.location.latitude),
            longitude: format_coordinate(s.location.longitude),
            id: s.object_id.clone(),
        })
        .collect();

    rows.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    rows
}

pub fn spot_to_detail_rows(spot: &Spot) -> Vec<SpotDetailRow> {
    let row = |field: &str, value: String| SpotDetailRow {
        field: field.to_string(),
        value,
    };

    vec![
        row("Name", spot.name.clone()),
        row("Latitude", format_coordinate(spot.location.latitude)),
        row("Longitude", format_coordinate(spot.location.longitude)),
        row("Object ID", spot.object_id.clone()),
        row("Created", format_timestamp(spot.created_at)),
        row("Updated", format_timestamp(spot.updated_at)),
    ]
}

pub fn format_coordinate(value: f64) -> String {
    format!("{value:.6}")
}

fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string())
}
