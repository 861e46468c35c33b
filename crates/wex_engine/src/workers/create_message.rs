use super::JobWorker;
use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::{error, info, warn};
use wex_client::{DynStoreClient, QueryMode};
use wex_model::{
    Job, JobKind, JobType, MessageDocument, MessageObject, RefreshAction, RefreshKind,
    StoreDocument, Wellbore, WellboreFilter, WorkerResult,
};

const FAILURE_MESSAGE: &str = "Failed to create messageobject.";

pub struct CreateMessageWorker {
    client: DynStoreClient,
}

impl CreateMessageWorker {
    pub fn new(client: DynStoreClient) -> Self {
        Self { client }
    }

    fn build_document(message: &MessageObject, parent: &Wellbore) -> MessageDocument {
        // Parent uid/name pairs come from the store-side lookup, not the
        // client cache, so a renamed wellbore cannot produce a stale write.
        MessageDocument {
            well_uid: parent.well_uid.clone(),
            well_name: parent.well_name.clone(),
            wellbore_uid: parent.uid.clone(),
            wellbore_name: parent.name.clone(),
            uid: message.uid.clone(),
            name: message.name.clone(),
            text: message.text.clone(),
        }
    }
}

#[async_trait]
impl JobWorker for CreateMessageWorker {
    fn job_type(&self) -> JobType {
        JobType::CreateMessageObject
    }

    fn name(&self) -> &'static str {
        "CreateMessageWorker"
    }

    async fn execute(&self, job: &Job) -> Result<(WorkerResult, Option<RefreshAction>)> {
        let JobKind::CreateMessageObject { message } = &job.kind else {
            bail!("{} cannot handle {} jobs", self.name(), job.kind.job_type());
        };

        let filter = WellboreFilter {
            well_uid: message.well_uid.clone(),
            wellbore_uid: message.wellbore_uid.clone(),
        };
        let lookup = self
            .client
            .fetch_wellbores(&filter, QueryMode::Requested)
            .await?;
        let reason = if lookup.success {
            "parent wellbore not found"
        } else {
            "wellbore lookup failed"
        };
        let parent = if lookup.success {
            lookup.items.into_iter().next()
        } else {
            None
        };
        let Some(wellbore) = parent else {
            warn!(
                target: "engine::worker",
                "{} Target: well_uid={}, wellbore_uid={}",
                FAILURE_MESSAGE, message.well_uid, message.wellbore_uid
            );
            // Short-circuit before submit; a missing parent must never leave
            // an orphaned object on the server.
            return Ok((
                WorkerResult::failure(
                    self.client.server_name(),
                    FAILURE_MESSAGE,
                    Some(reason.into()),
                ),
                None,
            ));
        };

        let document = Self::build_document(message, &wellbore);
        let outcome = self.client.submit(&StoreDocument::Message(document)).await?;
        if !outcome.success {
            error!(
                target: "engine::worker",
                "{} Target: well_uid={}, wellbore_uid={}",
                FAILURE_MESSAGE, message.well_uid, message.wellbore_uid
            );
            return Ok((
                WorkerResult::failure(self.client.server_name(), FAILURE_MESSAGE, outcome.reason),
                None,
            ));
        }

        info!(
            target: "engine::worker",
            "{} - job successful, message object created", self.name()
        );
        let result = WorkerResult::success(
            self.client.server_name(),
            format!(
                "MessageObject {} created for {}",
                message.name, wellbore.name
            ),
        );
        let refresh = RefreshAction::Wellbore {
            server: self.client.server_name(),
            well_uid: message.well_uid.clone(),
            wellbore_uid: message.wellbore_uid.clone(),
            refresh_kind: RefreshKind::Update,
        };
        Ok((result, Some(refresh)))
    }
}
