//! Tests for the GitHub and ZenHub clients against a local stub server

mod test_utilities;

use test_utilities::stub_server::{StubRoute, StubServer};
use zenq::prelude::*;

const REPOSITORY_JSON: &str = r#"{"id": 123456, "name": "storefront", "owner": {"login": "acme"}, "private": false}"#;

const BOARD_JSON: &str = r#"{
  "pipelines": [
    {"id": "p1", "name": "New Issues", "issues": [
      {"issue_number": 1, "estimate": {"value": 3}, "is_epic": false},
      {"issue_number": 2, "is_epic": false}
    ]},
    {"id": "p2", "name": "Done", "issues": [
      {"issue_number": 3, "estimate": {"value": 2.5}}
    ]}
  ]
}"#;

const EPIC_JSON: &str = r#"{
  "total_epic_estimates": {"value": 13},
  "pipeline": {"name": "In Progress", "pipeline_id": "p3"},
  "issues": [
    {"issue_number": 11, "repo_id": 123456, "estimate": {"value": 5}, "pipeline": {"name": "Done"}},
    {"issue_number": 12, "repo_id": 123456, "pipeline": {"name": "Backlog"}}
  ]
}"#;

// ============================================================
// GitHub
// ============================================================

#[test]
fn test_github_get_repository() {
    let server = StubServer::start(vec![StubRoute::json(
        "/repositories/123456",
        REPOSITORY_JSON,
    )]);
    let client = GitHubClient::with_api_url("gh-token", &server.url()).unwrap();

    let repository = client.get_repository(123456).unwrap();

    assert_eq!(repository, Repository::new(123456, "storefront", "acme"));
    let request = &server.requests()[0];
    assert_eq!(
        request.headers.get("authorization").map(String::as_str),
        Some("Bearer gh-token")
    );
    assert!(request
        .headers
        .get("user-agent")
        .is_some_and(|ua| ua.starts_with("zenq/")));
}

#[test]
fn test_github_get_issue() {
    let server = StubServer::start(vec![StubRoute::json(
        "/repos/acme/storefront/issues/42",
        r#"{"number": 42, "title": "Checkout redesign", "state": "open"}"#,
    )]);
    let client = GitHubClient::with_api_url("gh-token", &server.url()).unwrap();
    let repository = Repository::new(123456, "storefront", "acme");

    let issue = client.get_issue(&repository, 42).unwrap();

    assert_eq!(issue, Issue::new(42, "Checkout redesign"));
}

#[test]
fn test_github_rejection_carries_message() {
    let server = StubServer::start(vec![StubRoute::status(
        "/repositories/123456",
        401,
        r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com/rest"}"#,
    )]);
    let client = GitHubClient::with_api_url("bad-token", &server.url()).unwrap();

    let err = client.get_repository(123456).unwrap_err();

    assert_eq!(err.to_string(), "Bad credentials");
    match err.downcast_ref::<ZenqError>() {
        Some(ZenqError::RemoteRejection { status, .. }) => assert_eq!(*status, 401),
        other => panic!("expected a remote rejection, got {:?}", other),
    }
}

#[test]
fn test_github_unknown_repository() {
    let server = StubServer::start(vec![]);
    let client = GitHubClient::with_api_url("gh-token", &server.url()).unwrap();

    let err = client.get_repository(999).unwrap_err();

    assert_eq!(err.to_string(), "Not Found");
    assert_eq!(ExitCode::for_error(&err), ExitCode::ApplicationError);
}

#[test]
fn test_github_list_user_repositories_follows_pages() {
    let server = StubServer::start(vec![
        StubRoute::json(
            "/user/repos?per_page=100",
            r#"[{"id": 1, "name": "api", "owner": {"login": "acme"}}]"#,
        )
        .with_header(
            "Link",
            r#"<{base}/user/repos?per_page=100&page=2>; rel="next", <{base}/user/repos?per_page=100&page=2>; rel="last""#,
        ),
        StubRoute::json(
            "/user/repos?per_page=100&page=2",
            r#"[{"id": 2, "name": "web", "owner": {"login": "other"}}]"#,
        ),
    ]);
    let client = GitHubClient::with_api_url("gh-token", &server.url()).unwrap();

    let repositories = client.list_user_repositories().unwrap();

    assert_eq!(
        repositories,
        vec![
            Repository::new(1, "api", "acme"),
            Repository::new(2, "web", "other"),
        ]
    );
    assert_eq!(
        server.targets(),
        vec![
            "/user/repos?per_page=100".to_string(),
            "/user/repos?per_page=100&page=2".to_string(),
        ]
    );
}

#[test]
fn test_github_malformed_payload() {
    let server = StubServer::start(vec![StubRoute::json(
        "/repositories/123456",
        r#"{"unexpected": true}"#,
    )]);
    let client = GitHubClient::with_api_url("gh-token", &server.url()).unwrap();

    let err = client.get_repository(123456).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ZenqError>(),
        Some(ZenqError::InvalidResponse { .. })
    ));
}

#[test]
fn test_github_unreachable_host() {
    let url = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let client = GitHubClient::with_api_url("gh-token", &url).unwrap();

    let err = client.get_repository(1).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ZenqError>(),
        Some(ZenqError::Transport { .. })
    ));
}

// ============================================================
// ZenHub
// ============================================================

#[test]
fn test_zenhub_get_board() {
    let server = StubServer::start(vec![StubRoute::json(
        "/p1/repositories/123456/board",
        BOARD_JSON,
    )]);
    let client = ZenHubClient::with_api_url("zh-token", &server.url()).unwrap();

    let board = match client.get_board(123456).unwrap() {
        BoardResponse::Success(board) => board,
        other => panic!("expected a board, got {:?}", other),
    };

    assert_eq!(board.pipelines.len(), 2);
    assert_eq!(board.pipelines[0].name, "New Issues");
    assert_eq!(board.pipelines[0].issue_count(), 2);
    assert_eq!(board.pipelines[0].issues[1].estimate, None);
    assert_eq!(board.pipelines[1].total_estimate(), Estimate::new(2.5));

    let request = &server.requests()[0];
    assert_eq!(
        request
            .headers
            .get("x-authentication-token")
            .map(String::as_str),
        Some("zh-token")
    );
}

#[test]
fn test_zenhub_get_epic() {
    let server = StubServer::start(vec![StubRoute::json(
        "/p1/repositories/123456/epics/42",
        EPIC_JSON,
    )]);
    let client = ZenHubClient::with_api_url("zh-token", &server.url()).unwrap();

    let epic = match client.get_epic(123456, 42).unwrap() {
        BoardResponse::Success(epic) => epic,
        other => panic!("expected an epic, got {:?}", other),
    };

    assert_eq!(epic.estimate, None);
    assert_eq!(epic.total_epic_estimate, Some(Estimate::new(13.0)));
    assert_eq!(epic.pipeline_name, "In Progress");
    assert_eq!(
        epic.issues,
        vec![
            EpicSubIssue {
                issue_number: 11,
                estimate: Some(Estimate::new(5.0)),
                pipeline_name: "Done".to_string(),
            },
            EpicSubIssue {
                issue_number: 12,
                estimate: None,
                pipeline_name: "Backlog".to_string(),
            },
        ]
    );
}

#[test]
fn test_zenhub_list_epics() {
    let server = StubServer::start(vec![StubRoute::json(
        "/p1/repositories/123456/epics",
        r#"{"epic_issues": [{"issue_number": 42, "repo_id": 123456}, {"issue_number": 7, "repo_id": 123456}]}"#,
    )]);
    let client = ZenHubClient::with_api_url("zh-token", &server.url()).unwrap();

    let response = client.list_epics(123456).unwrap();

    assert_eq!(
        response,
        BoardResponse::Success(vec![
            EpicSummary { issue_number: 42 },
            EpicSummary { issue_number: 7 },
        ])
    );
}

#[test]
fn test_zenhub_non_ok_status_is_a_failure_response() {
    let server = StubServer::start(vec![StubRoute::status(
        "/p1/repositories/123456/board",
        404,
        r#"{"message":"Repository not found"}"#,
    )]);
    let client = ZenHubClient::with_api_url("zh-token", &server.url()).unwrap();

    let response = client.get_board(123456).unwrap();

    assert_eq!(
        response,
        BoardResponse::Failure(RawFailure {
            status: 404,
            body: r#"{"message":"Repository not found"}"#.to_string(),
        })
    );
}

#[test]
fn test_zenhub_only_200_counts_as_success() {
    let server = StubServer::start(vec![StubRoute::status(
        "/p1/repositories/123456/epics",
        202,
        "{}",
    )]);
    let client = ZenHubClient::with_api_url("zh-token", &server.url()).unwrap();

    let response = client.list_epics(123456).unwrap();

    assert!(!response.is_success());
}
