use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What a truck does on the step its progress reaches the end of the route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Progress resets to 0; status, weight and speed keep their previous values.
    #[default]
    Legacy,
    /// Progress resets to 0 and the truck re-enters the loading band on the same step.
    Restart,
}

impl WrapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapPolicy::Legacy => "legacy",
            WrapPolicy::Restart => "restart",
        }
    }
}
