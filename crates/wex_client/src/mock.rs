use crate::{FetchOutcome, QueryMode, StoreClient, SubmitOutcome};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;
use wex_model::{StoreDocument, Wellbore, WellboreFilter};

/// Scripted behavior for `fetch_wellbores`.
#[derive(Debug, Clone)]
pub enum FetchScript {
    Outcome {
        success: bool,
        wellbores: Vec<Wellbore>,
    },
    Fault(String),
}

/// Scripted behavior for `submit`.
#[derive(Debug, Clone)]
pub enum SubmitScript {
    Outcome {
        success: bool,
        reason: Option<String>,
    },
    Fault(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Fetch {
        filter: WellboreFilter,
        mode: QueryMode,
    },
    Submit(StoreDocument),
}

/// Store client stand-in that replays scripted outcomes and records every
/// call, so tests can assert ordering and the absence of a submit.
pub struct RecordingStoreClient {
    server: String,
    fetch: FetchScript,
    submit: SubmitScript,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingStoreClient {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            fetch: FetchScript::Outcome {
                success: true,
                wellbores: Vec::new(),
            },
            submit: SubmitScript::Outcome {
                success: true,
                reason: None,
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_wellbore(mut self, wellbore: Wellbore) -> Self {
        self.fetch = FetchScript::Outcome {
            success: true,
            wellbores: vec![wellbore],
        };
        self
    }

    pub fn with_failed_fetch(mut self) -> Self {
        self.fetch = FetchScript::Outcome {
            success: false,
            wellbores: Vec::new(),
        };
        self
    }

    pub fn with_fetch_fault(mut self, message: impl Into<String>) -> Self {
        self.fetch = FetchScript::Fault(message.into());
        self
    }

    pub fn with_submit_outcome(mut self, success: bool, reason: Option<&str>) -> Self {
        self.submit = SubmitScript::Outcome {
            success,
            reason: reason.map(str::to_string),
        };
        self
    }

    pub fn with_submit_fault(mut self, message: impl Into<String>) -> Self {
        self.submit = SubmitScript::Fault(message.into());
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log lock").clone()
    }

    pub fn submitted_documents(&self) -> Vec<StoreDocument> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Submit(document) => Some(document),
                RecordedCall::Fetch { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().expect("call log lock").push(call);
    }
}

#[async_trait]
impl StoreClient for RecordingStoreClient {
    fn server_name(&self) -> String {
        self.server.clone()
    }

    async fn fetch_wellbores(
        &self,
        filter: &WellboreFilter,
        mode: QueryMode,
    ) -> Result<FetchOutcome<Wellbore>> {
        self.record(RecordedCall::Fetch {
            filter: filter.clone(),
            mode,
        });
        match &self.fetch {
            FetchScript::Outcome { success, wellbores } => Ok(FetchOutcome {
                success: *success,
                items: wellbores.clone(),
            }),
            FetchScript::Fault(message) => Err(anyhow!("{message}")),
        }
    }

    async fn submit(&self, document: &StoreDocument) -> Result<SubmitOutcome> {
        self.record(RecordedCall::Submit(document.clone()));
        match &self.submit {
            SubmitScript::Outcome { success, reason } => Ok(SubmitOutcome {
                success: *success,
                reason: reason.clone(),
            }),
            SubmitScript::Fault(message) => Err(anyhow!("{message}")),
        }
    }
}
