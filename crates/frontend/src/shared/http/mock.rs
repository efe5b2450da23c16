//! Scripted [`Transport`] for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::error::ApiError;
use super::request::PreparedRequest;
use super::response::ApiResponse;
use super::transport::Transport;

/// Replays queued replies in order and records every request it was given.
#[derive(Clone, Default)]
pub struct MockTransport {
    sent: Rc<RefCell<Vec<PreparedRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, message: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
        self
    }

    pub fn sent(&self) -> Vec<PreparedRequest> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> Option<PreparedRequest> {
        self.sent.borrow().last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: PreparedRequest) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no reply queued".to_string())))
    }
}
