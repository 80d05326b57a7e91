use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckStatus {
    Loading,
    Loaded,
    Empty,
}

impl TruckStatus {
    pub fn ts_as_str(&self) -> &'static str {
        match self {
            TruckStatus::Loading => "loading",
            TruckStatus::Loaded => "loaded",
            TruckStatus::Empty => "empty",
        }
    }

    /// A truck is hauling payload only in the `loaded` band.
    pub fn is_hauling(&self) -> bool {
        matches!(self, TruckStatus::Loaded)
    }

    /// Stationary at the shovel.
    pub fn is_at_shovel(&self) -> bool {
        matches!(self, TruckStatus::Loading)
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ts_as_str())
    }
}
