use super::{invalid_response, normalize_api_url, transport_error, user_agent};
use crate::ports::outbound::IssueTracker;
use crate::reporting::domain::{Issue, Repository};
use crate::shared::error::ZenqError;
use crate::shared::Result;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, LINK};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const SERVICE: &str = "GitHub";

/// GitHub REST API client implementing the IssueTracker port
///
/// Authenticates with a bearer token. Rejections (unknown ids, bad tokens)
/// surface as `ZenqError::RemoteRejection` carrying GitHub's own message.
pub struct GitHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub const API_ENDPOINT: &'static str = "https://api.github.com";
    const MEDIA_TYPE: &'static str = "application/vnd.github+json";
    const PER_PAGE: u32 = 100;

    /// Creates a client for github.com
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_url(token, Self::API_ENDPOINT)
    }

    /// Creates a client for another API root (GitHub Enterprise, test servers)
    pub fn with_api_url(token: impl Into<String>, api_url: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent()).build()?;

        Ok(Self {
            client,
            api_url: normalize_api_url(api_url),
            token: token.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends a GET and turns non-success statuses into rejections
    fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, Self::MEDIA_TYPE)
            .send()
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ZenqError::RemoteRejection {
                service: SERVICE,
                status: status.as_u16(),
                message: rejection_message(status, &body),
            }
            .into());
        }

        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(url)?;
        decode(response)
    }
}

impl IssueTracker for GitHubClient {
    fn get_repository(&self, repo_id: u64) -> Result<Repository> {
        let url = format!("{}/repositories/{}", self.api_url, repo_id);
        let repository: GitHubRepository = self.get_json(&url)?;
        Ok(repository.into())
    }

    fn get_issue(&self, repository: &Repository, number: u64) -> Result<Issue> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_url,
            urlencoding::encode(&repository.owner_login),
            urlencoding::encode(&repository.name),
            number
        );
        let issue: GitHubIssue = self.get_json(&url)?;
        Ok(Issue::new(issue.number, issue.title))
    }

    fn list_user_repositories(&self) -> Result<Vec<Repository>> {
        let mut url = format!("{}/user/repos?per_page={}", self.api_url, Self::PER_PAGE);
        let mut repositories = Vec::new();

        loop {
            let response = self.send(&url)?;
            let next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_link);

            let page: Vec<GitHubRepository> = decode(response)?;
            repositories.extend(page.into_iter().map(Repository::from));

            match next {
                Some(next_url) => url = next_url,
                None => break,
            }
        }

        Ok(repositories)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json().map_err(|e| invalid_response(SERVICE, e))
}

/// Picks the most useful text out of an error response: the `message` of
/// GitHub's JSON error payload, else the raw body, else the status reason.
fn rejection_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<GitHubErrorPayload>(body)
        .ok()
        .map(|payload| payload.message)
        .filter(|message| !message.is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|body| !body.is_empty()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// Extracts the `rel="next"` target from a `Link` header
fn next_page_link(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        if !parts.any(|param| param.trim() == r#"rel="next""#) {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}

// GitHub API response structures

#[derive(Debug, Deserialize)]
struct GitHubRepository {
    id: u64,
    name: String,
    owner: GitHubOwner,
}

#[derive(Debug, Deserialize)]
struct GitHubOwner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitHubIssue {
    number: u64,
    title: String,
}

#[derive(Debug, Deserialize)]
struct GitHubErrorPayload {
    #[serde(default)]
    message: String,
}

impl From<GitHubRepository> for Repository {
    fn from(repository: GitHubRepository) -> Self {
        Repository::new(repository.id, repository.name, repository.owner.login)
    }
}
