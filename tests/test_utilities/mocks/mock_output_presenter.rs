use std::sync::{Arc, Mutex};
use zenq::prelude::*;

/// Mock OutputPresenter capturing report output and failure messages
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub output: Arc<Mutex<Vec<String>>>,
    pub errors: Arc<Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_output(&self) -> String {
        self.output.lock().unwrap().concat()
    }

    pub fn get_errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.output.lock().unwrap().push(content.to_string());
        Ok(())
    }

    fn present_error(&self, message: &str) -> Result<()> {
        self.errors.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
