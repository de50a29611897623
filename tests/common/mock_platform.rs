//! Mock collaborators for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use ghissue::browser::BrowserOpener;
use ghissue::create::{Phase, ProgressCallback};
use ghissue::error::{Error, Result};
use ghissue::platform::IssueService;
use ghissue::types::{CreatedIssue, IssueRecord, Target};
use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_issue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueCall {
    pub target: Target,
    pub record: IssueRecord,
}

/// Simple mock issue service
///
/// Features:
/// - Auto-incrementing issue numbers
/// - Call tracking for verification
/// - Error injection on the nth call
/// - Issues created without a number
pub struct MockIssueService {
    next_number: AtomicU64,
    create_calls: Mutex<Vec<CreateIssueCall>>,
    fail_on_call: Mutex<Option<(usize, String)>>,
    numberless_calls: Mutex<HashSet<usize>>,
}

impl MockIssueService {
    /// Create a mock whose first issue gets `first_number`
    pub fn starting_at(first_number: u64) -> Self {
        Self {
            next_number: AtomicU64::new(first_number),
            create_calls: Mutex::new(Vec::new()),
            fail_on_call: Mutex::new(None),
            numberless_calls: Mutex::new(HashSet::new()),
        }
    }

    /// Make the `call`-th (1-based) `create_issue` return an error
    pub fn fail_on_call(&self, call: usize, msg: &str) {
        *self.fail_on_call.lock().unwrap() = Some((call, msg.to_string()));
    }

    /// Make the `call`-th (1-based) created issue come back without a number
    pub fn omit_number_on_call(&self, call: usize) {
        self.numberless_calls.lock().unwrap().insert(call);
    }

    /// Get all `create_issue` calls
    pub fn get_create_calls(&self) -> Vec<CreateIssueCall> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Titles passed to `create_issue`, in call order
    pub fn created_titles(&self) -> Vec<String> {
        self.get_create_calls()
            .into_iter()
            .map(|c| c.record.title)
            .collect()
    }
}

impl Default for MockIssueService {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[async_trait]
impl IssueService for MockIssueService {
    async fn create_issue(&self, target: &Target, record: &IssueRecord) -> Result<CreatedIssue> {
        let call = {
            let mut calls = self.create_calls.lock().unwrap();
            calls.push(CreateIssueCall {
                target: target.clone(),
                record: record.clone(),
            });
            calls.len()
        };

        // Check for injected error
        let injected = self.fail_on_call.lock().unwrap().clone();
        if let Some((fail_call, msg)) = injected {
            if fail_call == call {
                return Err(Error::Platform(msg));
            }
        }

        if self.numberless_calls.lock().unwrap().contains(&call) {
            return Ok(CreatedIssue::default());
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(CreatedIssue {
            number: Some(number),
            html_url: Some(format!(
                "https://github.com/{}/{}/issues/{number}",
                target.owner, target.repo
            )),
        })
    }
}

/// Mock browser recording opened URLs
#[derive(Default)]
pub struct MockBrowser {
    opened: Mutex<Vec<String>>,
    error: Mutex<Option<String>>,
}

impl MockBrowser {
    /// Make `open` fail
    pub fn fail(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    /// URLs passed to `open`
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl BrowserOpener for MockBrowser {
    async fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        match self.error.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::BrowserOpen(msg.clone())),
            None => Ok(()),
        }
    }
}

/// Progress callback recording everything it is told
#[derive(Default)]
pub struct RecordingProgress {
    phases: Mutex<Vec<Phase>>,
    created: Mutex<Vec<(usize, String, Option<u64>)>>,
    outputs: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    /// `(index, title, number)` per created issue
    pub fn created(&self) -> Vec<(usize, String, Option<u64>)> {
        self.created.lock().unwrap().clone()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_issue_created(&self, index: usize, record: &IssueRecord, issue: &CreatedIssue) {
        self.created
            .lock()
            .unwrap()
            .push((index, record.title.clone(), issue.number));
    }

    async fn on_output(&self, output: &str) {
        self.outputs.lock().unwrap().push(output.to_string());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
