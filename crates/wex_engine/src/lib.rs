pub mod workers;

pub use workers::{CreateMessageWorker, DynJobWorker, JobWorker, TrimLogWorker};

use std::sync::Arc;
use thiserror::Error;
use tracing::{error, instrument};
use wex_client::DynStoreClient;
use wex_model::{Job, JobType, RefreshAction, WorkerResult};

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no worker registered for job type {0}")]
    MissingWorker(JobType),
}

pub struct WorkerRegistry {
    workers: Vec<DynJobWorker>,
}

impl WorkerRegistry {
    pub fn new(workers: Vec<DynJobWorker>) -> Self {
        Self { workers }
    }

    pub fn find(&self, job_type: JobType) -> Option<DynJobWorker> {
        self.workers
            .iter()
            .find(|worker| worker.job_type() == job_type)
            .cloned()
    }
}

/// Entry point from the request layer: routes a job to the worker for its
/// kind and relays the `(result, refresh)` pair back. Transport faults and
/// unroutable jobs are converted into failure results here, so callers never
/// see an `Err` and a failed job never triggers a client re-fetch.
pub struct JobDispatcher {
    registry: WorkerRegistry,
    client: DynStoreClient,
}

impl JobDispatcher {
    pub fn new(client: DynStoreClient, registry: WorkerRegistry) -> Self {
        Self { registry, client }
    }

    /// Registry with every built-in worker, resolved once at startup.
    pub fn with_default_workers(client: DynStoreClient) -> Self {
        let registry = WorkerRegistry::new(vec![
            Arc::new(CreateMessageWorker::new(client.clone())) as DynJobWorker,
            Arc::new(TrimLogWorker::new(client.clone())) as DynJobWorker,
        ]);
        Self::new(client, registry)
    }

    #[instrument(skip(self, job), fields(job_id = %job.id, job_type = %job.kind.job_type()))]
    pub async fn execute(&self, job: &Job) -> (WorkerResult, Option<RefreshAction>) {
        let job_type = job.kind.job_type();
        let Some(worker) = self.registry.find(job_type) else {
            error!(target: "engine::dispatch", "no worker registered for {job_type}");
            let result = WorkerResult::failure(
                self.client.server_name(),
                "Job execution failed.",
                Some(DispatchError::MissingWorker(job_type).to_string()),
            );
            return (result, None);
        };

        match worker.execute(job).await {
            Ok(pair) => pair,
            Err(err) => {
                error!(
                    target: "engine::dispatch",
                    "{} failed with transport fault: {err:#}",
                    worker.name()
                );
                let result = WorkerResult::failure(
                    self.client.server_name(),
                    "Job execution failed.",
                    Some(format!("{err:#}")),
                );
                (result, None)
            }
        }
    }
}
