use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::error::ExportError;
use crate::http::{HttpTransport, RequestOutcome, Sleeper};

/// Scripted transport: queue outcomes per URL, then assert on the
/// sequence of requests that was actually issued. An unscripted URL
/// fails hard so a test catches any request it did not expect.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<ScriptedInner>>,
}

#[derive(Default)]
struct ScriptedInner {
    responses: HashMap<String, VecDeque<RequestOutcome>>,
    requests: Vec<String>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        ScriptedTransport::default()
    }

    pub fn respond(&self, url: &str, outcome: RequestOutcome) {
        self.inner
            .borrow_mut()
            .responses
            .entry(url.to_string())
            .or_default()
            .push_back(outcome);
    }

    pub fn requests(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(&self, url: &str) -> Result<RequestOutcome, ExportError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(url.to_string());
        match inner.responses.get_mut(url).and_then(|q| q.pop_front()) {
            Some(outcome) => Ok(outcome),
            None => Ok(RequestOutcome::Failure {
                status: 599,
                body: format!("no scripted response for {}", url),
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingSleeper {
    slept: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        RecordingSleeper::default()
    }

    pub fn slept(&self) -> Vec<Duration> {
        self.slept.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}
