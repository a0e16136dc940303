/// Network adapters for the two remote APIs
mod github_client;
mod zenhub_client;

pub use github_client::GitHubClient;
pub use zenhub_client::ZenHubClient;

use crate::shared::error::ZenqError;

/// User agent sent to both services
fn user_agent() -> String {
    format!("zenq/{}", env!("CARGO_PKG_VERSION"))
}

/// Strips trailing slashes so paths can be appended with `/`
fn normalize_api_url(api_url: &str) -> String {
    api_url.trim_end_matches('/').to_string()
}

fn transport_error(service: &'static str, error: reqwest::Error) -> anyhow::Error {
    ZenqError::Transport {
        service,
        details: error.to_string(),
    }
    .into()
}

fn invalid_response(service: &'static str, details: impl ToString) -> anyhow::Error {
    ZenqError::InvalidResponse {
        service,
        details: details.to_string(),
    }
    .into()
}
