//! REST binding for gateway operations.
//!
//! Shells that talk to the content API over REST build an [`HttpRequest`]
//! with [`build_request`], execute it with their platform HTTP client, and
//! hand the [`HttpResponse`] to [`decode_response`] to obtain the
//! [`GatewayResult`] the core expects.

use serde::{Deserialize, Serialize};
use secrecy::ExposeSecret;
use url::Url;

use super::gateway::{GatewayError, GatewayOperation, GatewayOutput, GatewayResult};
use crate::config::GatewayConfig;
use crate::model::{Card, CardId, UserId, UserProfile};
use crate::{MAX_HEADERS_COUNT, MAX_HEADER_VALUE_LENGTH, MAX_RESPONSE_BODY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn has_request_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpHeaders {
    headers: Vec<(String, String)>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), GatewayError> {
        let name = name.into();
        let value = value.into();
        Self::validate(&name, &value)?;

        let name_lower = name.to_lowercase();
        self.headers.retain(|(n, _)| n.to_lowercase() != name_lower);
        if self.headers.len() >= MAX_HEADERS_COUNT {
            return Err(GatewayError::InvalidRequest {
                reason: format!("too many headers (max {MAX_HEADERS_COUNT})"),
            });
        }
        self.headers.push((name, value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name_lower = name.to_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| n.to_lowercase() == name_lower)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    fn validate(name: &str, value: &str) -> Result<(), GatewayError> {
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(GatewayError::InvalidRequest {
                reason: format!("invalid header name '{name}'"),
            });
        }
        if value.len() > MAX_HEADER_VALUE_LENGTH {
            return Err(GatewayError::InvalidRequest {
                reason: format!("header '{name}' exceeds {MAX_HEADER_VALUE_LENGTH} bytes"),
            });
        }
        if value.contains(['\r', '\n', '\0']) {
            return Err(GatewayError::InvalidRequest {
                reason: format!("header '{name}' contains CR, LF or NULL"),
            });
        }
        Ok(())
    }
}

impl From<Vec<(String, String)>> for HttpHeaders {
    fn from(headers: Vec<(String, String)>) -> Self {
        Self { headers }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    method: HttpMethod,
    url: String,
    headers: HttpHeaders,
    body: Option<Vec<u8>>,
    timeout_ms: u64,
    request_id: String,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: &Url, timeout_ms: u64) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: HttpHeaders::new(),
            body: None,
            timeout_ms,
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        self.headers.insert(name, value)?;
        Ok(self)
    }

    pub fn with_json<T: Serialize>(mut self, value: &T) -> Result<Self, GatewayError> {
        if !self.method.has_request_body() {
            return Err(GatewayError::InvalidRequest {
                reason: format!("{} requests cannot have a body", self.method.as_str()),
            });
        }
        let body = serde_json::to_vec(value).map_err(|e| GatewayError::InvalidRequest {
            reason: format!("failed to encode body: {e}"),
        })?;
        self.headers.insert("Content-Type", "application/json")?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(|e| GatewayError::Malformed {
            reason: format!("failed to parse JSON: {e}"),
        })
    }
}

// --- Wire records ---

/// Owners and likers arrive either as bare ids or as embedded user objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserRef {
    Id(String),
    Object {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl From<UserRef> for UserId {
    fn from(value: UserRef) -> Self {
        match value {
            UserRef::Id(id) | UserRef::Object { id } => UserId(id),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    about: String,
    avatar: String,
}

impl From<UserRecord> for UserProfile {
    fn from(record: UserRecord) -> Self {
        Self {
            id: UserId(record.id),
            name: record.name,
            about: record.about,
            avatar: record.avatar,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CardRecord {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    link: String,
    owner: UserRef,
    #[serde(default)]
    likes: Vec<UserRef>,
}

impl From<CardRecord> for Card {
    fn from(record: CardRecord) -> Self {
        Self {
            id: CardId(record.id),
            name: record.name,
            link: record.link,
            owner: record.owner.into(),
            likes: record.likes.into_iter().map(UserId::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// --- Operation <-> REST mapping ---

fn endpoint(config: &GatewayConfig, segments: &[&str]) -> Result<Url, GatewayError> {
    let mut url = config.base_url().clone();
    url.path_segments_mut()
        .map_err(|()| GatewayError::InvalidRequest {
            reason: format!("base URL '{}' cannot be a base", config.base_url()),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Builds the REST request for `operation`.
pub fn build_request(
    operation: &GatewayOperation,
    config: &GatewayConfig,
) -> Result<HttpRequest, GatewayError> {
    let (method, url) = match operation {
        GatewayOperation::GetUser => (HttpMethod::Get, endpoint(config, &["users", "me"])?),
        GatewayOperation::EditUser(_) => {
            (HttpMethod::Patch, endpoint(config, &["users", "me"])?)
        }
        GatewayOperation::EditAvatar(_) => (
            HttpMethod::Patch,
            endpoint(config, &["users", "me", "avatar"])?,
        ),
        GatewayOperation::GetCards => (HttpMethod::Get, endpoint(config, &["cards"])?),
        GatewayOperation::AddCard(_) => (HttpMethod::Post, endpoint(config, &["cards"])?),
        GatewayOperation::DeleteCard(id) => (
            HttpMethod::Delete,
            endpoint(config, &["cards", id.as_str()])?,
        ),
        GatewayOperation::AddLike(id) => (
            HttpMethod::Put,
            endpoint(config, &["cards", "likes", id.as_str()])?,
        ),
        GatewayOperation::RemoveLike(id) => (
            HttpMethod::Delete,
            endpoint(config, &["cards", "likes", id.as_str()])?,
        ),
    };

    let request = HttpRequest::new(method, &url, config.timeout_ms())
        .with_header("authorization", config.token().expose_secret().as_str())?;

    match operation {
        GatewayOperation::EditUser(update) => request.with_json(update),
        GatewayOperation::EditAvatar(update) => request.with_json(update),
        GatewayOperation::AddCard(card) => request.with_json(card),
        _ => Ok(request),
    }
}

/// Decodes the response to `operation`. Non-2xx statuses and bodies that do
/// not match the operation's record type are failures.
pub fn decode_response(operation: &GatewayOperation, response: &HttpResponse) -> GatewayResult {
    if response.body().len() > MAX_RESPONSE_BODY_SIZE {
        return Err(GatewayError::Malformed {
            reason: format!(
                "response body of {} bytes exceeds {MAX_RESPONSE_BODY_SIZE}",
                response.body().len()
            ),
        });
    }

    if !response.is_success() {
        let message = response
            .json::<ErrorBody>()
            .map(|b| b.message)
            .unwrap_or_else(|_| String::from_utf8_lossy(response.body()).into_owned());
        return Err(GatewayError::Status {
            status: response.status(),
            message,
        });
    }

    match operation {
        GatewayOperation::GetUser
        | GatewayOperation::EditUser(_)
        | GatewayOperation::EditAvatar(_) => {
            Ok(GatewayOutput::User(response.json::<UserRecord>()?.into()))
        }
        GatewayOperation::GetCards => {
            let records = response.json::<Vec<CardRecord>>()?;
            Ok(GatewayOutput::Cards(
                records.into_iter().map(Card::from).collect(),
            ))
        }
        GatewayOperation::AddCard(_)
        | GatewayOperation::AddLike(_)
        | GatewayOperation::RemoveLike(_) => {
            Ok(GatewayOutput::Card(response.json::<CardRecord>()?.into()))
        }
        GatewayOperation::DeleteCard(_) => Ok(GatewayOutput::Deleted),
    }
}
