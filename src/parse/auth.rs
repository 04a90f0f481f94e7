use serde_json::Value;

use crate::{
    error::ApiError,
    types::{SessionToken, UserCredentialsRequest},
};

use super::SpotClient;

const LOGIN_PATH: &str = "login";
const SIGNUP_PATH: &str = "users";

impl SpotClient {
    /// Logs a user in and keeps the returned session token.
    ///
    /// Credentials travel in a JSON body over POST so they stay out of URLs
    /// and access logs.
    ///
    /// # Errors
    ///
    /// - `AuthMissing` if the application keys are not configured (no request is sent)
    /// - `InvalidInput` if the username or password is empty (no request is sent)
    /// - `ServerError` with the server's message, e.g. `invalid login parameters`
    /// - `MalformedResponse` if the body is not JSON or carries no `sessionToken`
    /// - `Transport` for connection failures and unexplained non-2xx statuses
    ///
    /// # Example
    ///
    /// ```
    /// let token = client.login("alice", "secret").await?;
    /// assert!(client.is_logged_in().await);
    /// ```
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionToken, ApiError> {
        self.authenticate(LOGIN_PATH, username, password).await
    }

    /// Creates a user account and keeps the returned session token.
    ///
    /// Fails the same way as [`SpotClient::login`]; a taken username comes
    /// back as `ServerError`.
    pub async fn sign_up(&self, username: &str, password: &str) -> Result<SessionToken, ApiError> {
        self.authenticate(SIGNUP_PATH, username, password).await
    }

    /// True when a non-empty session token is held. The token is not
    /// checked against the server.
    pub async fn is_logged_in(&self) -> bool {
        self.session.is_logged_in().await
    }

    /// Forgets the session token locally.
    pub async fn log_out(&self) {
        self.session.clear().await;
    }

    async fn authenticate(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> Result<SessionToken, ApiError> {
        let authorization = self.authorization()?;
        validate_user_fields(username, password)?;

        let request = self
            .http
            .post(self.url(path))
            .json(&UserCredentialsRequest { username, password });

        let json = self.execute(request, authorization).await?;
        let token = session_token_from_response(&json)?;

        self.session.store(token.clone()).await;
        Ok(token)
    }
}

fn validate_user_fields(username: &str, password: &str) -> Result<(), ApiError> {
    if username.is_empty() {
        return Err(ApiError::InvalidInput("Username is required".to_string()));
    }
    if password.is_empty() {
        return Err(ApiError::InvalidInput("Password is required".to_string()));
    }
    Ok(())
}

fn session_token_from_response(json: &Value) -> Result<SessionToken, ApiError> {
    match json.get("sessionToken").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
        _ => Err(ApiError::MalformedResponse(
            "response has no sessionToken".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_fields_are_rejected_in_order() {
        match validate_user_fields("", "") {
            Err(ApiError::InvalidInput(msg)) => assert_eq!(msg, "Username is required"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        match validate_user_fields("alice", "") {
            Err(ApiError::InvalidInput(msg)) => assert_eq!(msg, "Password is required"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(validate_user_fields("alice", "secret").is_ok());
    }

    #[test]
    fn extracts_session_token() {
        let token =
            session_token_from_response(&json!({"objectId": "u1", "sessionToken": "r:abc"}))
                .unwrap();
        assert_eq!(token.as_str(), "r:abc");
    }

    #[test]
    fn empty_or_missing_token_is_malformed() {
        assert!(matches!(
            session_token_from_response(&json!({"sessionToken": ""})),
            Err(ApiError::MalformedResponse(_))
        ));
        assert!(matches!(
            session_token_from_response(&json!({"objectId": "u1"})),
            Err(ApiError::MalformedResponse(_))
        ));
    }
}
