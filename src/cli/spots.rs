use tabled::Table;

use crate::{error, info, parse::SpotClient, utils, warning};

use super::spinner;

/// Lists all spots as a table sorted by name.
///
/// Terminates the program with an error message when the request fails.
pub async fn list_spots(client: &SpotClient) {
    let pb = spinner("Fetching spots...");
    let result = client.fetch_spots().await;
    pb.finish_and_clear();

    match result {
        Ok(spots) if spots.is_empty() => warning!("No spots found."),
        Ok(spots) => {
            info!("Found {} spots", spots.len());
            let table = Table::new(utils::spots_to_table_rows(&spots));
            println!("{}", table);
        }
        Err(e) => error!("Could not load spots. Err: {}", e),
    }
}

/// Shows every field of a single spot.
pub async fn show_spot(client: &SpotClient, object_id: &str) {
    let pb = spinner("Fetching spot...");
    let result = client.fetch_spot(object_id).await;
    pb.finish_and_clear();

    match result {
        Ok(spot) => {
            let table = Table::new(utils::spot_to_detail_rows(&spot));
            println!("{}", table);
        }
        Err(e) => error!("Could not load spot {}. Err: {}", object_id, e),
    }
}
