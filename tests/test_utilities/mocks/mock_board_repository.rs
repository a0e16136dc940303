use zenq::prelude::*;

/// Mock BoardRepository returning preset responses
///
/// Calls without a preset response fail, so tests notice unexpected traffic.
#[derive(Default, Clone)]
pub struct MockBoardRepository {
    pub board: Option<BoardResponse<Board>>,
    pub epic: Option<BoardResponse<EpicDetail>>,
    pub epics: Option<BoardResponse<Vec<EpicSummary>>>,
}

impl MockBoardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(BoardResponse::Success(board));
        self
    }

    pub fn with_epic(mut self, epic: EpicDetail) -> Self {
        self.epic = Some(BoardResponse::Success(epic));
        self
    }

    pub fn with_epics(mut self, issue_numbers: &[u64]) -> Self {
        let epics = issue_numbers
            .iter()
            .map(|&issue_number| EpicSummary { issue_number })
            .collect();
        self.epics = Some(BoardResponse::Success(epics));
        self
    }

    /// Every endpoint answers with the given status and raw body
    pub fn failing(status: u16, body: &str) -> Self {
        let failure = RawFailure {
            status,
            body: body.to_string(),
        };
        Self {
            board: Some(BoardResponse::Failure(failure.clone())),
            epic: Some(BoardResponse::Failure(failure.clone())),
            epics: Some(BoardResponse::Failure(failure)),
        }
    }
}

impl BoardRepository for MockBoardRepository {
    fn list_epics(&self, _repo_id: u64) -> Result<BoardResponse<Vec<EpicSummary>>> {
        match &self.epics {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock board repository: unexpected list_epics call"),
        }
    }

    fn get_epic(&self, _repo_id: u64, _epic_id: u64) -> Result<BoardResponse<EpicDetail>> {
        match &self.epic {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock board repository: unexpected get_epic call"),
        }
    }

    fn get_board(&self, _repo_id: u64) -> Result<BoardResponse<Board>> {
        match &self.board {
            Some(response) => Ok(response.clone()),
            None => anyhow::bail!("Mock board repository: unexpected get_board call"),
        }
    }
}
