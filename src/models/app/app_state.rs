use crate::db::SampleStore;
use crate::services::ScorerKind;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SampleStore>,
    pub scorer: ScorerKind,
}
