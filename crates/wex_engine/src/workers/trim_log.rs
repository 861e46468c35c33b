use super::JobWorker;
use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::{error, info};
use wex_client::DynStoreClient;
use wex_model::{
    Job, JobKind, JobType, RefreshAction, RefreshKind, StoreDocument, TrimDocument, WorkerResult,
};

const FAILURE_MESSAGE: &str = "Failed to adjust index range for log.";

/// Sends a retain-only-within-bounds instruction for a log. The store drops
/// data rows outside the new range permanently; there is no local buffering
/// or undo here. Bounds ordering and containment are validated by the request
/// layer before the job is constructed, and forwarded as-is.
pub struct TrimLogWorker {
    client: DynStoreClient,
}

impl TrimLogWorker {
    pub fn new(client: DynStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobWorker for TrimLogWorker {
    fn job_type(&self) -> JobType {
        JobType::TrimLogObject
    }

    fn name(&self) -> &'static str {
        "TrimLogWorker"
    }

    async fn execute(&self, job: &Job) -> Result<(WorkerResult, Option<RefreshAction>)> {
        let JobKind::TrimLogObject {
            log,
            start_index,
            end_index,
        } = &job.kind
        else {
            bail!("{} cannot handle {} jobs", self.name(), job.kind.job_type());
        };

        let document = TrimDocument {
            well_uid: log.well_uid.clone(),
            wellbore_uid: log.wellbore_uid.clone(),
            uid: log.uid.clone(),
            start_index: *start_index,
            end_index: *end_index,
        };
        let outcome = self.client.submit(&StoreDocument::TrimLog(document)).await?;
        if !outcome.success {
            error!(
                target: "engine::worker",
                "{} Target: well_uid={}, wellbore_uid={}, uid={}",
                FAILURE_MESSAGE, log.well_uid, log.wellbore_uid, log.uid
            );
            return Ok((
                WorkerResult::failure(self.client.server_name(), FAILURE_MESSAGE, outcome.reason),
                None,
            ));
        }

        info!(
            target: "engine::worker",
            "{} - job successful, log index range adjusted", self.name()
        );
        let result = WorkerResult::success(
            self.client.server_name(),
            format!(
                "Log {} adjusted to range [{} - {}]",
                log.name, start_index, end_index
            ),
        );
        let refresh = RefreshAction::Wellbore {
            server: self.client.server_name(),
            well_uid: log.well_uid.clone(),
            wellbore_uid: log.wellbore_uid.clone(),
            refresh_kind: RefreshKind::Update,
        };
        Ok((result, Some(refresh)))
    }
}
