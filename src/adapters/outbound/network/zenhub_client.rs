use super::{invalid_response, normalize_api_url, transport_error, user_agent};
use crate::ports::outbound::{BoardRepository, BoardResponse, RawFailure};
use crate::reporting::domain::{
    Board, BoardIssue, EpicDetail, EpicSubIssue, EpicSummary, Estimate, Pipeline,
};
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const SERVICE: &str = "ZenHub";

/// ZenHub API client implementing the BoardRepository port
///
/// Every endpoint is a plain GET authenticated with a static token header.
/// Anything other than `200 OK` is handed back as `BoardResponse::Failure`
/// with the raw body.
pub struct ZenHubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl ZenHubClient {
    pub const API_ENDPOINT: &'static str = "https://api.zenhub.io";
    const AUTH_HEADER: &'static str = "X-Authentication-Token";

    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_url(token, Self::API_ENDPOINT)
    }

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

    fn repository_url(&self, repo_id: u64) -> String {
        format!("{}/p1/repositories/{}", self.api_url, repo_id)
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<BoardResponse<T>> {
        let response = self
            .client
            .get(url)
            .header(Self::AUTH_HEADER, self.token.as_str())
            .send()
            .map_err(|e| transport_error(SERVICE, e))?;

        let status = response.status();
        let body = response.text().map_err(|e| transport_error(SERVICE, e))?;

        if status != StatusCode::OK {
            return Ok(BoardResponse::Failure(RawFailure {
                status: status.as_u16(),
                body,
            }));
        }

        let payload = serde_json::from_str(&body).map_err(|e| invalid_response(SERVICE, e))?;
        Ok(BoardResponse::Success(payload))
    }
}

impl BoardRepository for ZenHubClient {
    fn list_epics(&self, repo_id: u64) -> Result<BoardResponse<Vec<EpicSummary>>> {
        let url = format!("{}/epics", self.repository_url(repo_id));
        let response: BoardResponse<ZenHubEpicList> = self.fetch(&url)?;
        Ok(response.map(Vec::from))
    }

    fn get_epic(&self, repo_id: u64, epic_id: u64) -> Result<BoardResponse<EpicDetail>> {
        let url = format!("{}/epics/{}", self.repository_url(repo_id), epic_id);
        let response: BoardResponse<ZenHubEpic> = self.fetch(&url)?;
        Ok(response.map(EpicDetail::from))
    }

    fn get_board(&self, repo_id: u64) -> Result<BoardResponse<Board>> {
        let url = format!("{}/board", self.repository_url(repo_id));
        let response: BoardResponse<ZenHubBoard> = self.fetch(&url)?;
        Ok(response.map(Board::from))
    }
}

// ZenHub API response structures

#[derive(Debug, Deserialize)]
struct ZenHubEstimate {
    value: f64,
}

#[derive(Debug, Deserialize)]
struct ZenHubPipelineRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ZenHubEpicList {
    #[serde(default)]
    epic_issues: Vec<ZenHubEpicRef>,
}

#[derive(Debug, Deserialize)]
struct ZenHubEpicRef {
    issue_number: u64,
}

#[derive(Debug, Deserialize)]
struct ZenHubEpic {
    #[serde(default)]
    estimate: Option<ZenHubEstimate>,
    #[serde(default)]
    total_epic_estimates: Option<ZenHubEstimate>,
    pipeline: ZenHubPipelineRef,
    #[serde(default)]
    issues: Vec<ZenHubEpicIssue>,
}

#[derive(Debug, Deserialize)]
struct ZenHubEpicIssue {
    issue_number: u64,
    #[serde(default)]
    estimate: Option<ZenHubEstimate>,
    pipeline: ZenHubPipelineRef,
}

#[derive(Debug, Deserialize)]
struct ZenHubBoard {
    #[serde(default)]
    pipelines: Vec<ZenHubPipeline>,
}

#[derive(Debug, Deserialize)]
struct ZenHubPipeline {
    name: String,
    #[serde(default)]
    issues: Vec<ZenHubBoardIssue>,
}

#[derive(Debug, Deserialize)]
struct ZenHubBoardIssue {
    #[serde(default)]
    issue_number: Option<u64>,
    #[serde(default)]
    estimate: Option<ZenHubEstimate>,
}

fn estimate(estimate: Option<ZenHubEstimate>) -> Option<Estimate> {
    estimate.map(|e| Estimate::new(e.value))
}

impl From<ZenHubEpicList> for Vec<EpicSummary> {
    fn from(list: ZenHubEpicList) -> Self {
        list.epic_issues
            .into_iter()
            .map(|epic| EpicSummary {
                issue_number: epic.issue_number,
            })
            .collect()
    }
}

impl From<ZenHubEpic> for EpicDetail {
    fn from(epic: ZenHubEpic) -> Self {
        EpicDetail {
            estimate: estimate(epic.estimate),
            total_epic_estimate: estimate(epic.total_epic_estimates),
            pipeline_name: epic.pipeline.name,
            issues: epic
                .issues
                .into_iter()
                .map(|issue| EpicSubIssue {
                    issue_number: issue.issue_number,
                    estimate: estimate(issue.estimate),
                    pipeline_name: issue.pipeline.name,
                })
                .collect(),
        }
    }
}

impl From<ZenHubBoard> for Board {
    fn from(board: ZenHubBoard) -> Self {
        Board {
            pipelines: board
                .pipelines
                .into_iter()
                .map(|pipeline| {
                    let issues = pipeline
                        .issues
                        .into_iter()
                        .map(|issue| BoardIssue::new(issue.issue_number, estimate(issue.estimate)))
                        .collect();
                    Pipeline::new(pipeline.name, issues)
                })
                .collect(),
        }
    }
}
