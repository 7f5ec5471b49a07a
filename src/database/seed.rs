use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::SeedError;
use crate::models::{Activity, ActivityCatalog};

// (name, description, schedule, max_participants, participants)
const DEFAULT_ACTIVITIES: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["alex@mergington.edu", "ryan@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["jordan@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["lucas@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu"],
    ),
];

/// The catalog the service starts with when no seed file is configured.
pub fn default_catalog() -> ActivityCatalog {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max, participants),
            )
        })
        .collect()
}

/// Loads a JSON object of `name -> activity`, keeping the file's key order.
pub fn load_seed_file(path: &Path) -> Result<ActivityCatalog, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: ActivityCatalog =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &ActivityCatalog) -> Result<(), SeedError> {
    for (name, activity) in catalog {
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity {
                activity: name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_catalog_is_valid_and_keeps_seed_order() {
        let catalog = default_catalog();
        validate_catalog(&catalog).unwrap();

        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Chess Club",
                "Programming Class",
                "Gym Class",
                "Soccer Team",
                "Basketball Team",
                "Art Club",
                "Drama Club",
                "Math Club",
                "Debate Team",
            ]
        );
        assert!(catalog["Soccer Team"].is_enrolled("alex@mergington.edu"));
        assert!(!catalog["Chess Club"].is_enrolled("workflow@mergington.edu"));
    }

    #[test]
    fn seed_file_loads_in_file_order() {
        let file = write_seed(
            r#"{
                "Robotics": {"description": "Build robots", "schedule": "Mondays", "max_participants": 8, "participants": ["a@mergington.edu"]},
                "Band": {"description": "Play music", "schedule": "Thursdays", "max_participants": 40}
            }"#,
        );

        let catalog = load_seed_file(file.path()).unwrap();
        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Robotics", "Band"]);
        assert_eq!(catalog["Robotics"].participants, vec!["a@mergington.edu"]);
        assert!(catalog["Band"].participants.is_empty());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let file = write_seed(
            r#"{"Empty": {"description": "d", "schedule": "s", "max_participants": 0}}"#,
        );
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::ZeroCapacity { activity } if activity == "Empty"));
    }

    #[test]
    fn duplicate_participant_is_rejected() {
        let file = write_seed(
            r#"{"Band": {"description": "d", "schedule": "s", "max_participants": 5,
                "participants": ["x@mergington.edu", "x@mergington.edu"]}}"#,
        );
        let err = load_seed_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateParticipant { email, .. } if email == "x@mergington.edu"
        ));
    }

    #[test]
    fn unreadable_and_malformed_files_are_reported() {
        let missing = Path::new("/definitely/not/here/seed.json");
        assert!(matches!(
            load_seed_file(missing),
            Err(SeedError::Read { .. })
        ));

        let file = write_seed("not json");
        assert!(matches!(
            load_seed_file(file.path()),
            Err(SeedError::Parse { .. })
        ));
    }
}
