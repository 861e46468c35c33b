pub mod config;
mod http;
mod mock;

pub use http::{HttpStoreClient, ServerConfig};
pub use mock::{FetchScript, RecordedCall, RecordingStoreClient, SubmitScript};

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use wex_model::{StoreDocument, Wellbore, WellboreFilter};

/// Query mode for a fetch. `Requested` asks the store to return stored data
/// values for the filtered fields; `Probe` returns the id-only/schema form.
/// Workers use `Requested` when resolving parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Requested,
    Probe,
}

impl QueryMode {
    pub fn as_param(&self) -> &'static str {
        match self {
            QueryMode::Requested => "requested",
            QueryMode::Probe => "probe",
        }
    }
}

/// Ordered matches for a fetch. A filter that matched nothing is a successful
/// fetch with an empty item list, not an error.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome<T> {
    pub success: bool,
    pub items: Vec<T>,
}

/// Outcome of a create-or-merge submit. Whether the store treats the write as
/// an idempotent upsert or a strict create is opaque at this layer; callers
/// only inspect `success` and `reason`.
#[derive(Debug, Clone, Default)]
pub struct SubmitOutcome {
    pub success: bool,
    pub reason: Option<String>,
}

/// Capability for the two primitive remote operations against one configured
/// store endpoint. Expected remote failures (nothing matched, write rejected)
/// come back inside the outcome structs; an `Err` means a transport fault and
/// no outcome could be determined.
#[async_trait]
pub trait StoreClient: Send + Sync {
    fn server_name(&self) -> String;

    async fn fetch_wellbores(
        &self,
        filter: &WellboreFilter,
        mode: QueryMode,
    ) -> Result<FetchOutcome<Wellbore>>;

    async fn submit(&self, document: &StoreDocument) -> Result<SubmitOutcome>;
}

pub type DynStoreClient = Arc<dyn StoreClient>;
