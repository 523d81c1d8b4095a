//! Scripted collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::store::Interaction;
use crate::transport::Transport;
use crate::types::{Pizza, Topping};

/// Replays canned responses in order and records every request it sees.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    pub requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push(Ok(HttpResponse::new(status, body)));
        transport
    }

    pub fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport.push(Err(ApiError::Transport(message.to_string())));
        transport
    }

    pub fn push(&self, response: Result<HttpResponse, ApiError>) {
        self.responses.borrow_mut().push_back(response);
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

/// Answers every prompt with `answer` and records notifications.
pub struct FakeInteraction {
    answer: bool,
    pub prompts: Cell<usize>,
    pub notices: RefCell<Vec<String>>,
}

impl FakeInteraction {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Cell::new(0),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl Interaction for FakeInteraction {
    fn confirm(&self, _message: &str) -> bool {
        self.prompts.set(self.prompts.get() + 1);
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

pub fn topping(id: i64, name: &str) -> Topping {
    Topping {
        id,
        name: name.to_string(),
    }
}

pub fn pizza(id: i64, name: &str, toppings: Vec<Topping>) -> Pizza {
    Pizza {
        id,
        name: name.to_string(),
        toppings,
    }
}
