// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use kameti::application::CommitteeService;

/// Helper to create a test service with the given capacity and contribution.
pub fn test_service(capacity: usize, contribution_cents: i64) -> CommitteeService {
    CommitteeService::new(capacity, contribution_cents).expect("valid test parameters")
}

/// Test fixture: standard roster setups
pub struct StandardRoster;

impl StandardRoster {
    /// Capacity 3, contribution 10.00, members Alice, Bob, Carol.
    pub fn three_members() -> CommitteeService {
        let mut service = test_service(3, 1000);
        for name in ["Alice", "Bob", "Carol"] {
            service.add_member(name).expect("roster has room");
        }
        service
    }

    /// Capacity 1, contribution 25.00, single member Solo.
    pub fn solo() -> CommitteeService {
        let mut service = test_service(1, 2500);
        service.add_member("Solo").expect("roster has room");
        service
    }
}
