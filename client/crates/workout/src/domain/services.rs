//! Domain Services
//!
//! Submission integrity: canonical form and digest comparison.

use platform::canonical::{CanonicalJson, CanonicalValue};
use platform::crypto::hex_digest_eq;

use crate::domain::entities::WorkoutSubmission;
use crate::domain::value_objects::IntegrityCheck;
use crate::error::WorkoutResult;

/// Canonical JSON of a submission; these are the bytes sent and hashed
pub fn canonical_submission(submission: &WorkoutSubmission) -> WorkoutResult<CanonicalJson> {
    Ok(CanonicalValue::from_serialize(submission)?.to_json())
}

/// Lowercase hex SHA-256 of the canonical submission
pub fn submission_digest(submission: &WorkoutSubmission) -> WorkoutResult<String> {
    Ok(canonical_submission(submission)?.sha256_hex())
}

/// Compare the server's digest with ours
pub fn verify_integrity(server: &str, local: &str) -> IntegrityCheck {
    if hex_digest_eq(server, local) {
        IntegrityCheck::Verified {
            hash: local.to_string(),
        }
    } else {
        IntegrityCheck::Mismatch {
            server: server.to_string(),
            local: local.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ExerciseSubmission, WorkoutSet};

    fn squat_day() -> WorkoutSubmission {
        WorkoutSubmission {
            date: "2024-01-01".into(),
            exercises: vec![ExerciseSubmission {
                name: "Squat".into(),
                sets: vec![WorkoutSet::new(135.0, 5)],
            }],
        }
    }

    #[test]
    fn test_canonical_submission_bytes() {
        let json = canonical_submission(&squat_day()).unwrap();
        assert_eq!(
            json.as_str(),
            r#"{"date":"2024-01-01","exercises":[{"name":"Squat","sets":[{"lbs":135,"reps":5}]}]}"#
        );
    }

    #[test]
    fn test_submission_digest_known_value() {
        assert_eq!(
            submission_digest(&squat_day()).unwrap(),
            "74b116084b5c11ff4d25657b6fc5c72adb6a5d75675566ee550fa80fb1b2130f"
        );
    }

    #[test]
    fn test_empty_sets_digest() {
        let submission = WorkoutSubmission {
            date: String::new(),
            exercises: vec![ExerciseSubmission {
                name: "Squat".into(),
                sets: vec![WorkoutSet::default()],
            }],
        };
        assert_eq!(
            submission_digest(&submission).unwrap(),
            "1d179955cab29ad1dd1f6b70e397e5f4fb68c4387146989fd93e4b932e141bb5"
        );
    }

    #[test]
    fn test_verify_integrity() {
        let local = submission_digest(&squat_day()).unwrap();

        assert!(verify_integrity(&local, &local).is_verified());
        assert!(verify_integrity(&local.to_uppercase(), &local).is_verified());

        let check = verify_integrity("deadbeef", &local);
        assert_eq!(
            check,
            IntegrityCheck::Mismatch {
                server: "deadbeef".into(),
                local,
            }
        );
    }
}
