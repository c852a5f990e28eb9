use crate::database::error::DatabaseError;
use crate::student::config::IdentifierConfig;
use crate::student::error::StudentError;
use crate::student::error::StudentError::IdentifierAllocationExhausted;

/// What the allocator needs to know about stored students.
pub trait IdentifierStore {
    fn count_students(&mut self) -> Result<i64, DatabaseError>;
    fn identifier_exists(&mut self, identifier: &str) -> Result<bool, DatabaseError>;
}

/// Numbers wider than `padding` are rendered in full.
pub fn format_identifier(prefix: &str, sequence: i64, padding: usize) -> String {
    format!("{prefix}-{sequence:0padding$}")
}

/// Find an identifier that no stored student uses yet.
///
/// Probing starts right after the current number of students and goes up by one
/// on each collision, with at most `max_attempts` lookups.
/// Nothing is reserved: the caller has to persist the student right away,
/// and the write still fails if a concurrent request picked the same identifier.
pub fn allocate_identifier<S>(
    store: &mut S,
    config: &IdentifierConfig,
) -> Result<String, StudentError>
where
    S: IdentifierStore + ?Sized,
{
    let mut sequence = store.count_students()? + 1;
    for _ in 0..*config.max_attempts() {
        let candidate = format_identifier(config.prefix(), sequence, *config.padding());
        if !store.identifier_exists(&candidate)? {
            debug!("Allocated student identifier [identifier: {candidate}]");
            return Ok(candidate);
        }

        debug!("Student identifier already taken [identifier: {candidate}]");
        sequence += 1;
    }

    warn!(
        "Can't allocate a student identifier [attempts: {}]",
        config.max_attempts()
    );
    Err(IdentifierAllocationExhausted(*config.max_attempts()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::error::DatabaseError::ConnectionFailed;
    use parameterized::{ide, parameterized};
    use std::collections::HashSet;

    ide!();

    #[derive(Default)]
    struct InMemoryStore {
        count: i64,
        identifiers: HashSet<String>,
        lookups: u32,
        broken: bool,
    }

    impl InMemoryStore {
        fn with(count: i64, identifiers: &[&str]) -> Self {
            Self {
                count,
                identifiers: identifiers.iter().map(|id| id.to_string()).collect(),
                ..Default::default()
            }
        }

        fn persist(&mut self, identifier: String) {
            assert!(self.identifiers.insert(identifier));
            self.count += 1;
        }
    }

    impl IdentifierStore for InMemoryStore {
        fn count_students(&mut self) -> Result<i64, DatabaseError> {
            if self.broken {
                return Err(ConnectionFailed);
            }
            Ok(self.count)
        }

        fn identifier_exists(&mut self, identifier: &str) -> Result<bool, DatabaseError> {
            self.lookups += 1;
            Ok(self.identifiers.contains(identifier))
        }
    }

    #[parameterized(
        sequence = {1, 42, 999, 1000, 123456},
        expected_identifier = {"STU-001", "STU-042", "STU-999", "STU-1000", "STU-123456"}
    )]
    fn should_format_identifier(sequence: i64, expected_identifier: &str) {
        assert_eq!(expected_identifier, format_identifier("STU", sequence, 3));
    }

    #[test]
    fn should_allocate_first_identifier_on_empty_store() {
        let mut store = InMemoryStore::default();

        let identifier = allocate_identifier(&mut store, &IdentifierConfig::default()).unwrap();

        assert_eq!("STU-001", identifier);
        assert_eq!(1, store.lookups);
    }

    #[test]
    fn should_probe_next_identifier_when_seeded_one_is_taken() {
        let mut store = InMemoryStore::with(1, &["STU-002"]);

        let identifier = allocate_identifier(&mut store, &IdentifierConfig::default()).unwrap();

        assert_eq!("STU-003", identifier);
        assert_eq!(2, store.lookups);
    }

    /// After a deletion the count goes down, so probing starts below the highest identifier.
    #[test]
    fn should_skip_every_taken_identifier_after_deletion() {
        let mut store = InMemoryStore::with(2, &["STU-002", "STU-003", "STU-004"]);

        let identifier = allocate_identifier(&mut store, &IdentifierConfig::default()).unwrap();

        assert_eq!("STU-005", identifier);
        assert_eq!(3, store.lookups);
    }

    #[test]
    fn should_reissue_identifier_of_deleted_student() {
        let mut store = InMemoryStore::with(1, &["STU-001"]);

        let identifier = allocate_identifier(&mut store, &IdentifierConfig::default()).unwrap();

        assert_eq!("STU-002", identifier);
    }

    #[test]
    fn should_fail_after_max_attempts() {
        let config = IdentifierConfig::new("STU".to_owned(), 3, 5);
        let taken = (1..=5)
            .map(|sequence| format_identifier("STU", sequence, 3))
            .collect::<Vec<_>>();
        let taken = taken.iter().map(String::as_str).collect::<Vec<_>>();
        let mut store = InMemoryStore::with(0, &taken);

        let result = allocate_identifier(&mut store, &config);

        assert_eq!(Err(IdentifierAllocationExhausted(5)), result);
        assert_eq!(5, store.lookups);
    }

    #[test]
    fn should_succeed_on_last_attempt() {
        let config = IdentifierConfig::new("STU".to_owned(), 3, 3);
        let mut store = InMemoryStore::with(0, &["STU-001", "STU-002"]);

        let identifier = allocate_identifier(&mut store, &config).unwrap();

        assert_eq!("STU-003", identifier);
        assert_eq!(3, store.lookups);
    }

    #[test]
    fn should_use_configured_prefix_and_padding() {
        let config = IdentifierConfig::new("MBR".to_owned(), 5, 10);
        let mut store = InMemoryStore::with(41, &[]);

        let identifier = allocate_identifier(&mut store, &config).unwrap();

        assert_eq!("MBR-00042", identifier);
    }

    #[test]
    fn should_allocate_distinct_identifiers_sequentially() {
        let config = IdentifierConfig::default();
        let mut store = InMemoryStore::with(0, &["STU-004", "STU-010"]);

        for _ in 0..50 {
            let identifier = allocate_identifier(&mut store, &config).unwrap();
            store.persist(identifier);
        }

        assert_eq!(52, store.identifiers.len());
    }

    #[test]
    fn should_propagate_store_failure() {
        let mut store = InMemoryStore {
            broken: true,
            ..Default::default()
        };

        let result = allocate_identifier(&mut store, &IdentifierConfig::default());

        assert_eq!(Err(StudentError::Database(ConnectionFailed)), result);
        assert_eq!(0, store.lookups);
    }
}
