use std::fmt;
use std::str::FromStr;

use crate::database::RosterStore;
use crate::error::RosterError;
use crate::models::ActivityCatalog;

/// Whether signup refuses new participants once `max_participants` is reached.
///
/// `Unchecked` reproduces the historical behavior where capacity is only
/// displayed, never enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Unchecked,
    Enforce,
}

impl CapacityPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CapacityPolicy::Unchecked => "unchecked",
            CapacityPolicy::Enforce => "enforce",
        }
    }
}

impl FromStr for CapacityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unchecked" => Ok(CapacityPolicy::Unchecked),
            "enforce" => Ok(CapacityPolicy::Enforce),
            other => Err(format!("expected unchecked|enforce, got {other:?}")),
        }
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub async fn list(store: &RosterStore) -> ActivityCatalog {
    store.snapshot().await
}

pub async fn signup(
    store: &RosterStore,
    policy: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    store
        .with_activity_mut(activity_name, |activity| {
            if activity.is_enrolled(email) {
                return Err(RosterError::AlreadyEnrolled);
            }
            if policy == CapacityPolicy::Enforce && activity.is_full() {
                return Err(RosterError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(())
        })
        .await
        .ok_or(RosterError::ActivityNotFound)??;

    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn unregister(
    store: &RosterStore,
    activity_name: &str,
    email: &str,
) -> Result<String, RosterError> {
    store
        .with_activity_mut(activity_name, |activity| -> Result<(), RosterError> {
            let pos = activity
                .participants
                .iter()
                .position(|p| p == email)
                .ok_or(RosterError::NotEnrolled)?;
            activity.participants.remove(pos);
            Ok(())
        })
        .await
        .ok_or(RosterError::ActivityNotFound)??;

    Ok(format!("Unregistered {} from {}", email, activity_name))
}
