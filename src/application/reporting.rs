use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Cents, MemberId};

/// Point-in-time summary of a committee, for the status view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeStatus {
    pub as_of: DateTime<Utc>,
    pub member_count: usize,
    pub capacity: usize,
    pub contribution_cents: Cents,
    /// What a distribution would pay out right now.
    pub pot_cents: Cents,
    pub total_contributed_cents: Cents,
    pub total_distributed_cents: Cents,
    pub next_recipient: Option<NextRecipient>,
    pub cycle_complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextRecipient {
    pub id: MemberId,
    pub name: String,
}
