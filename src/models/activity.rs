use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activities keyed by display name, kept in seed order.
pub type ActivityCatalog = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    // Signup order; never holds the same email twice.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Seats still open; zero when an unchecked signup pushed the roster past capacity.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_and_capacity_helpers() {
        let activity = Activity::new("Chess", "Fridays", 2, &["a@mergington.edu"]);
        assert!(activity.is_enrolled("a@mergington.edu"));
        assert!(!activity.is_enrolled("b@mergington.edu"));
        assert!(!activity.is_full());
        assert_eq!(activity.spots_left(), 1);
    }

    #[test]
    fn over_capacity_roster_reports_full_with_no_spots() {
        let activity = Activity::new("Chess", "Fridays", 1, &["a@x", "b@x"]);
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn missing_participants_field_deserializes_as_empty_roster() {
        let activity: Activity = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":3}"#,
        )
        .unwrap();
        assert!(activity.participants.is_empty());
    }
}
