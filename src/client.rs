//! Blocking HTTP collaborator: sign-in and the profile query.

use std::time::Duration;

use tracing::{debug, warn};

use crate::core::{Credentials, ProfileData, SessionToken, profile_query_body};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_SIGNIN_URL: &str = "https://01.gritlab.ax/api/auth/signin";
pub const DEFAULT_GRAPHQL_URL: &str = "https://01.gritlab.ax/api/graphql-engine/v1/graphql";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEndpoints {
    pub signin_url: String,
    pub graphql_url: String,
}

impl Default for ClientEndpoints {
    fn default() -> Self {
        Self {
            signin_url: DEFAULT_SIGNIN_URL.to_owned(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::blocking::Client,
    endpoints: ClientEndpoints,
}

impl ProfileClient {
    pub fn new(endpoints: ClientEndpoints) -> ChartResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(12))
            .build()
            .map_err(|e| ChartError::Request(format!("failed to build http client: {e}")))?;
        Ok(Self { http, endpoints })
    }

    #[must_use]
    pub fn endpoints(&self) -> &ClientEndpoints {
        &self.endpoints
    }

    /// Exchanges credentials for a session token (Basic auth).
    pub fn sign_in(&self, credentials: &Credentials) -> ChartResult<SessionToken> {
        debug!(identifier = credentials.identifier(), "sign in");
        let token: String = self
            .http
            .post(&self.endpoints.signin_url)
            .basic_auth(credentials.identifier(), Some(credentials.password()))
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!(error = %e, "sign-in rejected");
                ChartError::Request(format!("sign-in failed: {e}"))
            })?
            .json()
            .map_err(|e| ChartError::Decode(format!("sign-in response is not a token: {e}")))?;
        Ok(SessionToken::new(token))
    }

    /// Runs the profile query with `token` as bearer credentials.
    pub fn fetch_profile(&self, token: &SessionToken) -> ChartResult<ProfileData> {
        debug!(url = %self.endpoints.graphql_url, "fetch profile");
        let body = self
            .http
            .post(&self.endpoints.graphql_url)
            .bearer_auth(token.as_str())
            .json(&profile_query_body())
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| ChartError::Request(format!("profile query failed: {e}")))?
            .text()
            .map_err(|e| ChartError::Request(format!("failed to read profile response: {e}")))?;
        ProfileData::from_response_json(&body)
    }
}
