use super::{Cents, Member, MemberId};

/// A committee is a rotating-savings group: every member pays the same
/// fixed contribution per cycle, and the pooled total is paid out to one
/// member per cycle in round-robin order.
///
/// The committee owns the roster exclusively. The roster is append-only
/// and capped at a capacity fixed at construction time; members cannot be
/// removed and the rotation never terminates on its own.
#[derive(Debug, Clone)]
pub struct Committee {
    members: Vec<Member>,
    capacity: usize,
    contribution_cents: Cents,
    /// Index of the next payout recipient. Wraps modulo the roster length.
    payout_cursor: usize,
}

/// Result of a single distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub member_id: MemberId,
    pub member_name: String,
    pub amount_cents: Cents,
    /// True once every member on the roster has received at least one payout.
    /// Informational only; the rotation keeps going.
    pub cycle_complete: bool,
}

impl Committee {
    /// Create an empty committee. Capacity and contribution validation
    /// happens upstream; both must already be positive here.
    pub fn new(capacity: usize, contribution_cents: Cents) -> Self {
        assert!(capacity > 0, "Committee capacity must be positive");
        assert!(
            contribution_cents > 0,
            "Contribution amount must be positive"
        );
        Self {
            members: Vec::new(),
            capacity,
            contribution_cents,
            payout_cursor: 0,
        }
    }

    /// Append a new member. Ids are assigned sequentially from 1 in join
    /// order, so the roster invariant (ids are exactly 1..=len) holds by
    /// construction.
    pub fn add_member(&mut self, name: String) -> Result<MemberId, CommitteeError> {
        if self.members.len() >= self.capacity {
            return Err(CommitteeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let id = self.members.len() as MemberId + 1;
        self.members.push(Member::new(id, name));
        Ok(id)
    }

    /// Ordered view of the roster. Empty roster yields an empty slice.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Collect the fixed contribution from every member. Returns the
    /// per-member amount added. Cannot fail part-way through.
    pub fn collect_contributions(&mut self) -> Result<Cents, CommitteeError> {
        if self.members.is_empty() {
            return Err(CommitteeError::EmptyRoster);
        }

        for member in &mut self.members {
            member.total_contributed_cents += self.contribution_cents;
        }
        Ok(self.contribution_cents)
    }

    /// Pay the pooled total to the member at the payout cursor and advance
    /// the cursor.
    ///
    /// The pool is always recomputed as contribution x current roster size.
    /// It is deliberately independent of whether contributions were actually
    /// collected this cycle; collection and distribution are decoupled
    /// operations, exactly as in the paper-ledger process this models.
    pub fn distribute_funds(&mut self) -> Result<Payout, CommitteeError> {
        if self.members.is_empty() {
            return Err(CommitteeError::EmptyRoster);
        }

        let amount_cents = self.pot_cents();
        let recipient = &mut self.members[self.payout_cursor];
        recipient.total_received_cents += amount_cents;
        let member_id = recipient.id;
        let member_name = recipient.name.clone();

        self.payout_cursor = (self.payout_cursor + 1) % self.members.len();

        Ok(Payout {
            member_id,
            member_name,
            amount_cents,
            cycle_complete: self.cycle_complete(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contribution_cents(&self) -> Cents {
        self.contribution_cents
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// The pooled total a distribution would pay out right now.
    pub fn pot_cents(&self) -> Cents {
        self.contribution_cents * self.members.len() as Cents
    }

    /// The member next in line for a payout, if any.
    pub fn next_recipient(&self) -> Option<&Member> {
        self.members.get(self.payout_cursor)
    }

    /// True once every member has received at least one payout.
    pub fn cycle_complete(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(Member::has_received)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitteeError {
    /// The roster already holds as many members as the committee allows.
    CapacityExceeded { capacity: usize },
    /// The operation needs at least one member on the roster.
    EmptyRoster,
}

impl std::fmt::Display for CommitteeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitteeError::CapacityExceeded { capacity } => {
                write!(f, "Committee is full ({} members)", capacity)
            }
            CommitteeError::EmptyRoster => write!(f, "No members in the committee"),
        }
    }
}

impl std::error::Error for CommitteeError {}
