//! Shared state for the API layer.

use std::sync::Arc;

use crate::assistant::{AiClassifier, ChatAssistant};
use crate::config::ScorerKind;
use crate::db::CaseStore;
use crate::triage::SymptomCatalogue;

/// Shared context for all API routes.
///
/// `scorer` decides which scorer handles case intake; the dedicated
/// `/triage` and `/triage/assess` routes always use their own.
#[derive(Clone)]
pub struct ApiContext {
    pub catalogue: Arc<SymptomCatalogue>,
    pub store: Arc<dyn CaseStore>,
    pub classifier: AiClassifier,
    pub chat: ChatAssistant,
    pub scorer: ScorerKind,
}

impl ApiContext {
    pub fn new(
        catalogue: Arc<SymptomCatalogue>,
        store: Arc<dyn CaseStore>,
        classifier: AiClassifier,
        chat: ChatAssistant,
        scorer: ScorerKind,
    ) -> Self {
        Self {
            catalogue,
            store,
            classifier,
            chat,
            scorer,
        }
    }
}
