use serde_json::json;
use spotcli::error::ApiError;
use spotcli::parse::{decode_body, decode_spots};

#[test]
fn test_coordinates_keep_full_precision() {
    let coordinates = [
        (43.430434412345678_f64, -80.47631512345679_f64),
        (0.1 + 0.2, -(0.1 + 0.2)),
        (89.99999999999999, -179.99999999999997),
        (f64::MIN_POSITIVE, -f64::MIN_POSITIVE),
    ];

    let results: Vec<_> = coordinates
        .iter()
        .enumerate()
        .map(|(i, (lat, lon))| {
            json!({
                "objectId": format!("{i}"),
                "Name": format!("spot {i}"),
                "Location": {"latitude": lat, "longitude": lon}
            })
        })
        .collect();
    let body = json!({ "results": results }).to_string();

    let spots = decode_spots(&body).unwrap();
    assert_eq!(spots.len(), coordinates.len());
    for (spot, (lat, lon)) in spots.iter().zip(coordinates) {
        assert_eq!(spot.location.latitude.to_bits(), lat.to_bits());
        assert_eq!(spot.location.longitude.to_bits(), lon.to_bits());
    }
    assert_eq!(spots[3].id, Some(3));
}

#[test]
fn test_error_string_wins_over_other_fields() {
    let bodies = [
        json!({"error": "boom"}),
        json!({"error": "boom", "results": [{"objectId": "a", "Name": "x", "Location": {"latitude": 1, "longitude": 2}}]}),
        json!({"code": 141, "error": "boom", "sessionToken": "r:abc"}),
    ];

    for body in bodies {
        match decode_spots(&body.to_string()) {
            Err(ApiError::ServerError(msg)) => assert_eq!(msg, "boom"),
            other => panic!("expected ServerError, got {:?}", other),
        }
    }
}

#[test]
fn test_malformed_bodies() {
    for body in ["", "{", "null garbage", "<html></html>"] {
        assert!(
            matches!(decode_body(body), Err(ApiError::MalformedResponse(_))),
            "body {:?} should be malformed",
            body
        );
    }
}

#[test]
fn test_integer_coordinates_are_accepted() {
    let body = r#"{"results":[{"objectId":"a","Name":"Origin","Location":{"latitude":0,"longitude":0}}]}"#;
    let spots = decode_spots(body).unwrap();
    assert_eq!(spots[0].location.latitude, 0.0);
}
