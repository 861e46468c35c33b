mod create_message;
mod trim_log;

pub use create_message::CreateMessageWorker;
pub use trim_log::TrimLogWorker;

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use wex_model::{Job, JobType, RefreshAction, WorkerResult};

/// One worker per job kind. Expected domain failures (missing parent, store
/// rejection) are resolved into the `WorkerResult`; an `Err` means a transport
/// fault where no outcome could be determined, and the dispatcher converts it.
#[async_trait]
pub trait JobWorker: Send + Sync {
    fn job_type(&self) -> JobType;
    fn name(&self) -> &'static str;
    async fn execute(&self, job: &Job) -> Result<(WorkerResult, Option<RefreshAction>)>;
}

pub type DynJobWorker = Arc<dyn JobWorker>;
