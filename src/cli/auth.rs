use crate::{error, parse::SpotClient, success};

use super::spinner;

pub async fn login(client: &SpotClient, username: &str, password: &str) {
    let pb = spinner("Logging in...");
    let result = client.login(username, password).await;
    pb.finish_and_clear();

    match result {
        Ok(_) => success!("Logged in as {}", username),
        Err(e) => error!("Could not log in :(\nError message:\n {}", e),
    }
}

pub async fn sign_up(client: &SpotClient, username: &str, password: &str) {
    let pb = spinner("Signing up...");
    let result = client.sign_up(username, password).await;
    pb.finish_and_clear();

    match result {
        Ok(_) => success!("Signed up as {}", username),
        Err(e) => error!("Could not sign up :(\nError message:\n {}", e),
    }
}
