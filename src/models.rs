use crate::controller::ResetOutcome;
use serde::{Deserialize, Serialize};

/// Body of the destructive menu actions. Missing means "not confirmed".
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub outcome: ResetOutcome,
    pub alert: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UsedResponse {
    pub sentences: Vec<String>,
    pub text: String,
}
