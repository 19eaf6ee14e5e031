use challenges_core::{
    Badge, BadgeUpload, Challenge, ChallengeDraft, ChallengeList, GenerateInvite, Invite,
    ListFilter,
};
use log::{debug, error};
use mime::APPLICATION_JSON;
use reqwest_middleware::{
    self,
    reqwest::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        multipart::{Form, Part},
        Method, Response, Url,
    },
    ClientWithMiddleware, RequestBuilder,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use super::SessionStore;

/// Every endpoint lives under this prefix, relative to the base url
pub const API_PREFIX: &str = "v1";

/// Code reported when an error response carries no readable envelope
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN";

#[derive(Error, Debug)]
pub enum Error {
    #[error("problem sending request to challenges api: {0}")]
    Send(#[from] reqwest_middleware::reqwest::Error),
    #[error("problem sending request to challenges api: {0}")]
    SendRetry(#[from] reqwest_middleware::Error),
    /// Non-2xx response, displayed as the server supplied message
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        details: Option<Value>,
    },
    #[error("unexpected response from challenges api: {0}")]
    Decode(String),
    #[error("problem requesting challenges api: {0}")]
    Request(String),
}

impl Error {
    /// Machine readable code of an error envelope
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct BadgesResponse {
    badges: Vec<Badge>,
}

#[derive(Debug, Deserialize)]
struct InvitesResponse {
    invites: Vec<Invite>,
}

#[async_trait::async_trait]
pub trait ChallengeApi: Send + Sync {
    async fn list_challenges(&self, filter: &ListFilter) -> Result<ChallengeList, Error>;
    async fn get_challenge(&self, id: &Uuid) -> Result<Challenge, Error>;
    async fn create_challenge(&self, draft: &ChallengeDraft) -> Result<Challenge, Error>;
    async fn update_challenge(&self, id: &Uuid, draft: &ChallengeDraft)
        -> Result<Challenge, Error>;
    async fn delete_challenge(&self, id: &Uuid) -> Result<(), Error>;
    async fn list_badges(&self, challenge_id: &Uuid) -> Result<Vec<Badge>, Error>;
    async fn upload_badge(&self, challenge_id: &Uuid, upload: BadgeUpload)
        -> Result<Badge, Error>;
    async fn delete_badge(&self, badge_id: &Uuid) -> Result<(), Error>;
    async fn list_invites(&self, challenge_id: &Uuid) -> Result<Vec<Invite>, Error>;
    async fn generate_invite(
        &self,
        challenge_id: &Uuid,
        request: &GenerateInvite,
    ) -> Result<Invite, Error>;
    async fn revoke_invite(&self, token: &str) -> Result<(), Error>;
}

#[derive(Clone)]
pub struct ApiClient {
    pub base_url: Url,
    pub client: ClientWithMiddleware,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(
        client: ClientWithMiddleware,
        base_url: &Url,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let mut base_url = base_url.to_owned();
        // a base without a trailing slash would lose its last segment on join
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            client,
            session,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(&format!("{}{}", API_PREFIX, path))
            .map_err(|e| Error::Request(e.to_string()))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request = self.client.request(method, url);
        match self.session.token() {
            Some(token) => {
                request.header(AUTHORIZATION, format!("Bearer {}", token.expose_secret()))
            }
            None => request,
        }
    }

    fn json_request<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<RequestBuilder, Error> {
        let body = serde_json::to_vec(body)
            .map_err(|e| Error::Request(format!("Failed to serialize body: {}", e)))?;
        Ok(self
            .request(method, url)
            .header(CONTENT_TYPE, APPLICATION_JSON.to_string())
            .body(body))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Error> {
        let response = request.send().await.map_err(|e| {
            error!("error sending to challenges api: {}", e);
            Error::SendRetry(e)
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(error_from_response(response).await)
        }
    }

    async fn send_for_data<T>(&self, request: RequestBuilder) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let response = self.send(request).await?;
        let body = response.bytes().await?;
        let envelope: DataEnvelope<T> =
            serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn send_ignore_body(&self, request: RequestBuilder) -> Result<(), Error> {
        self.send(request).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into `Error::Api`, falling back to the status text
/// when the body is not an error envelope.
pub async fn error_from_response(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => {
            debug!(
                "challenges api returned {} {}: {}",
                status, envelope.error.code, envelope.error.message
            );
            Error::Api {
                status: status.as_u16(),
                code: envelope.error.code,
                message: envelope.error.message,
                details: envelope.error.details,
            }
        }
        Err(_) => {
            debug!(
                "challenges api returned {} without error envelope: {:?}",
                status, body
            );
            Error::Api {
                status: status.as_u16(),
                code: String::from(UNKNOWN_ERROR_CODE),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
                details: None,
            }
        }
    }
}

#[async_trait::async_trait]
impl ChallengeApi for ApiClient {
    async fn list_challenges(&self, filter: &ListFilter) -> Result<ChallengeList, Error> {
        let mut url = self.endpoint("/challenges")?;
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        self.send_for_data(self.request(Method::GET, url)).await
    }

    async fn get_challenge(&self, id: &Uuid) -> Result<Challenge, Error> {
        let url = self.endpoint(&format!("/challenges/{}", id))?;
        self.send_for_data(self.request(Method::GET, url)).await
    }

    async fn create_challenge(&self, draft: &ChallengeDraft) -> Result<Challenge, Error> {
        debug!("creating challenge: {}", draft.name);
        let url = self.endpoint("/admin/challenges")?;
        let request = self.json_request(Method::POST, url, draft)?;
        self.send_for_data(request).await
    }

    async fn update_challenge(
        &self,
        id: &Uuid,
        draft: &ChallengeDraft,
    ) -> Result<Challenge, Error> {
        debug!("updating challenge {}: {}", id, draft.name);
        let url = self.endpoint(&format!("/admin/challenges/{}", id))?;
        let request = self.json_request(Method::PUT, url, draft)?;
        self.send_for_data(request).await
    }

    async fn delete_challenge(&self, id: &Uuid) -> Result<(), Error> {
        let url = self.endpoint(&format!("/admin/challenges/{}", id))?;
        self.send_ignore_body(self.request(Method::DELETE, url))
            .await
    }

    async fn list_badges(&self, challenge_id: &Uuid) -> Result<Vec<Badge>, Error> {
        let url = self.endpoint(&format!("/admin/challenges/{}/badges", challenge_id))?;
        let response: BadgesResponse = self.send_for_data(self.request(Method::GET, url)).await?;
        Ok(response.badges)
    }

    async fn upload_badge(
        &self,
        challenge_id: &Uuid,
        upload: BadgeUpload,
    ) -> Result<Badge, Error> {
        let url = self.endpoint(&format!("/admin/challenges/{}/badges", challenge_id))?;

        let image = Part::bytes(upload.image)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)?;
        let mut form = Form::new().part("image", image).text("name", upload.name);
        if let Some(tier_id) = upload.tier_id.filter(|tier_id| !tier_id.is_empty()) {
            form = form.text("tierId", tier_id);
        }

        self.send_for_data(self.request(Method::POST, url).multipart(form))
            .await
    }

    async fn delete_badge(&self, badge_id: &Uuid) -> Result<(), Error> {
        let url = self.endpoint(&format!("/admin/badges/{}", badge_id))?;
        self.send_ignore_body(self.request(Method::DELETE, url))
            .await
    }

    async fn list_invites(&self, challenge_id: &Uuid) -> Result<Vec<Invite>, Error> {
        let url = self.endpoint(&format!("/admin/challenges/{}/invites", challenge_id))?;
        let response: InvitesResponse = self.send_for_data(self.request(Method::GET, url)).await?;
        Ok(response.invites)
    }

    async fn generate_invite(
        &self,
        challenge_id: &Uuid,
        request: &GenerateInvite,
    ) -> Result<Invite, Error> {
        let url = self.endpoint(&format!("/admin/challenges/{}/invites", challenge_id))?;
        let request = self.json_request(Method::POST, url, request)?;
        self.send_for_data(request).await
    }

    async fn revoke_invite(&self, token: &str) -> Result<(), Error> {
        let mut url = self.endpoint("/admin/invites")?;
        url.path_segments_mut()
            .map_err(|_| Error::Request(format!("cannot build invite url from {}", self.base_url)))?
            .push(token);
        self.send_ignore_body(self.request(Method::DELETE, url))
            .await
    }
}
