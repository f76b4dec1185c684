use chrono::Utc;

use crate::domain::{Cents, Committee, Member};

use super::{AppError, CommitteeStatus, NextRecipient};

/// Application service providing high-level operations for a committee.
/// This is the primary interface for any client (CLI, TUI, API, etc.).
pub struct CommitteeService {
    committee: Committee,
}

/// Result of collecting one round of contributions.
pub struct CollectionResult {
    /// Amount each member paid in (the committee's fixed contribution).
    pub amount_each_cents: Cents,
    /// Post-collection snapshots of every member, in roster order.
    pub members: Vec<Member>,
}

/// Result of distributing the pooled funds.
pub struct DistributionResult {
    /// Snapshot of the recipient after the payout was credited.
    pub recipient: Member,
    pub amount_cents: Cents,
    pub cycle_complete: bool,
}

impl CommitteeService {
    /// Create a service for a fresh committee.
    pub fn new(capacity: usize, contribution_cents: Cents) -> Result<Self, AppError> {
        if capacity == 0 {
            return Err(AppError::InvalidCapacity(
                "Capacity must be at least 1".to_string(),
            ));
        }
        if contribution_cents <= 0 {
            return Err(AppError::InvalidAmount(
                "Contribution must be positive".to_string(),
            ));
        }

        Ok(Self {
            committee: Committee::new(capacity, contribution_cents),
        })
    }

    /// Add a member to the roster. The name is trimmed; blank names are
    /// rejected before the roster is touched.
    pub fn add_member(&mut self, name: &str) -> Result<Member, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let id = self.committee.add_member(name.to_string())?;
        // Ids are exactly 1..=len in roster order, so the new member sits at id - 1.
        Ok(self.committee.members()[(id - 1) as usize].clone())
    }

    /// Snapshots of all members in roster order. Calling this twice with no
    /// mutation in between returns identical results.
    pub fn list_members(&self) -> Vec<Member> {
        self.committee.members().to_vec()
    }

    /// Collect the fixed contribution from every member.
    pub fn collect_contributions(&mut self) -> Result<CollectionResult, AppError> {
        let amount_each_cents = self.committee.collect_contributions()?;
        Ok(CollectionResult {
            amount_each_cents,
            members: self.committee.members().to_vec(),
        })
    }

    /// Distribute the pooled funds to the next member in the rotation.
    pub fn distribute_funds(&mut self) -> Result<DistributionResult, AppError> {
        let payout = self.committee.distribute_funds()?;
        let recipient = self.committee.members()[(payout.member_id - 1) as usize].clone();

        Ok(DistributionResult {
            recipient,
            amount_cents: payout.amount_cents,
            cycle_complete: payout.cycle_complete,
        })
    }

    /// Build the status report for the committee as it stands now.
    pub fn status(&self) -> CommitteeStatus {
        let members = self.committee.members();

        CommitteeStatus {
            as_of: Utc::now(),
            member_count: members.len(),
            capacity: self.committee.capacity(),
            contribution_cents: self.committee.contribution_cents(),
            pot_cents: self.committee.pot_cents(),
            total_contributed_cents: members.iter().map(|m| m.total_contributed_cents).sum(),
            total_distributed_cents: members.iter().map(|m| m.total_received_cents).sum(),
            next_recipient: self.committee.next_recipient().map(|m| NextRecipient {
                id: m.id,
                name: m.name.clone(),
            }),
            cycle_complete: self.committee.cycle_complete(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.committee.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.committee.is_full()
    }
}
