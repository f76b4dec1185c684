use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

/// Members are keyed by small sequential ids assigned in join order,
/// starting at 1. Ids are never reused or reordered.
pub type MemberId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    /// Lifetime sum of contributions paid in. Only ever increases.
    pub total_contributed_cents: Cents,
    /// Lifetime sum of payouts received. Only ever increases.
    pub total_received_cents: Cents,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn new(id: MemberId, name: String) -> Self {
        Self {
            id,
            name,
            total_contributed_cents: 0,
            total_received_cents: 0,
            joined_at: Utc::now(),
        }
    }

    /// Returns true if this member has received at least one payout.
    /// Exact because payout amounts are always positive, so a zero total
    /// unambiguously means "never paid".
    pub fn has_received(&self) -> bool {
        self.total_received_cents > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_starts_at_zero() {
        let member = Member::new(1, "Alice".into());
        assert_eq!(member.id, 1);
        assert_eq!(member.name, "Alice");
        assert_eq!(member.total_contributed_cents, 0);
        assert_eq!(member.total_received_cents, 0);
        assert!(!member.has_received());
    }

    #[test]
    fn test_has_received_after_credit() {
        let mut member = Member::new(2, "Bob".into());
        member.total_received_cents += 3000;
        assert!(member.has_received());
    }
}
