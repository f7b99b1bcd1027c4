use serde::{Deserialize, Serialize};

/// Headline figure shown on the dashboard (`ldcarddata.json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub message: String,
    pub icon: String,
}
