use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type Uid = String;

/// Wellbore as resolved from the store at execution time. The store's write
/// format denormalizes the parent well's uid/name into child objects, so
/// workers look this up server-side rather than trusting the client cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wellbore {
    pub uid: Uid,
    pub name: String,
    pub well_uid: Uid,
    pub well_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageObject {
    pub well_uid: Uid,
    pub wellbore_uid: Uid,
    pub uid: Uid,
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogIndexType {
    DateTime,
    MeasuredDepth,
}

/// A log curve index value, either a timestamp or a numeric depth depending
/// on the log's declared index type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LogIndex {
    Time(DateTime<Utc>),
    Depth(f64),
}

impl fmt::Display for LogIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogIndex::Time(ts) => write!(f, "{}", ts.to_rfc3339()),
            LogIndex::Depth(depth) => write!(f, "{depth}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogObject {
    pub well_uid: Uid,
    pub wellbore_uid: Uid,
    pub uid: Uid,
    pub name: String,
    pub index_type: LogIndexType,
    pub start_index: LogIndex,
    pub end_index: LogIndex,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    CreateMessageObject,
    TrimLogObject,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobType::CreateMessageObject => f.write_str("create_message_object"),
            JobType::TrimLogObject => f.write_str("trim_log_object"),
        }
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "createmessageobject" | "create_message_object" => Ok(JobType::CreateMessageObject),
            "trimlogobject" | "trim_log_object" => Ok(JobType::TrimLogObject),
            other => Err(format!("unknown job type '{}'", other)),
        }
    }
}

/// User intent plus the typed payload needed to carry it out. Immutable once
/// constructed by the request layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub kind: JobKind,
}

impl Job {
    pub fn new(kind: JobKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JobKind {
    CreateMessageObject {
        message: MessageObject,
    },
    TrimLogObject {
        log: LogObject,
        start_index: LogIndex,
        end_index: LogIndex,
    },
}

impl JobKind {
    pub fn job_type(&self) -> JobType {
        match self {
            JobKind::CreateMessageObject { .. } => JobType::CreateMessageObject,
            JobKind::TrimLogObject { .. } => JobType::TrimLogObject,
        }
    }
}

/// Outcome of one job execution, produced exactly once per job, win or lose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkerResult {
    pub server: String,
    pub success: bool,
    pub message: String,
    pub reason: Option<String>,
}

impl WorkerResult {
    pub fn success(server: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            success: true,
            message: message.into(),
            reason: None,
        }
    }

    pub fn failure(
        server: impl Into<String>,
        message: impl Into<String>,
        reason: Option<String>,
    ) -> Self {
        Self {
            server: server.into(),
            success: false,
            message: message.into(),
            reason,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshKind {
    Add,
    Update,
    Remove,
    BatchUpdate,
}

/// Tells the client-side cache reconciler which subtree went stale. Emitted
/// only for successful jobs; a failed job must not trigger a re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum RefreshAction {
    Well {
        server: String,
        well_uid: Uid,
        refresh_kind: RefreshKind,
    },
    Wellbore {
        server: String,
        well_uid: Uid,
        wellbore_uid: Uid,
        refresh_kind: RefreshKind,
    },
}

/// Exact-match key filter used to resolve a parent wellbore.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellboreFilter {
    pub well_uid: Uid,
    pub wellbore_uid: Uid,
}

/// Write format for a message object. Carries the parent identity fields the
/// store requires alongside the object's own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageDocument {
    pub well_uid: Uid,
    pub well_name: String,
    pub wellbore_uid: Uid,
    pub wellbore_name: String,
    pub uid: Uid,
    pub name: String,
    pub text: String,
}

/// Instructs the store to retain only log data rows within the given bounds.
/// Destructive and irreversible server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrimDocument {
    pub well_uid: Uid,
    pub wellbore_uid: Uid,
    pub uid: Uid,
    pub start_index: LogIndex,
    pub end_index: LogIndex,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum StoreDocument {
    Message(MessageDocument),
    TrimLog(TrimDocument),
}
