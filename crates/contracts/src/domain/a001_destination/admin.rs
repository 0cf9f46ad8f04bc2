//! Admin rules for the destinations list: input validation, the
//! `(name, country)` uniqueness check, the delete guard and the list view.
//!
//! Uniqueness is enforced here, at write time, against the list the admin
//! currently sees. The store does not check it.

use serde::{Deserialize, Serialize};

use super::aggregate::{Destination, DestinationDto, DestinationId, DestinationType, DestinationTypeFilter};
use super::countries::is_known_country;
use super::store::DestinationStore;
use crate::shared::{AdminError, AdminResult};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

// ============================================================================
// Validation
// ============================================================================

/// Check required fields and normalize the form values (trimmed name).
pub fn validate_input(input: &DestinationDto) -> AdminResult<DestinationDto> {
    let name = input.name.trim();
    let country = input.country.trim();
    if name.is_empty() || country.is_empty() {
        return Err(AdminError::validation(REQUIRED_FIELDS_MESSAGE));
    }
    if !is_known_country(country) {
        return Err(AdminError::validation(format!("Unknown country: {}", country)));
    }
    Ok(DestinationDto::new(name, country))
}

/// Fail with `Duplicate` if another destination already uses the key.
///
/// `exclude` skips the record being edited.
pub fn check_duplicate(
    candidate: &DestinationDto,
    existing: &[Destination],
    exclude: Option<&DestinationId>,
) -> AdminResult<()> {
    let clash = existing
        .iter()
        .filter(|d| exclude != Some(&d.id))
        .any(|d| d.same_key(&candidate.name, &candidate.country));
    if clash {
        return Err(AdminError::Duplicate {
            name: candidate.name.clone(),
            country: candidate.country.clone(),
        });
    }
    Ok(())
}

/// Validate a new destination and create it through the store.
pub async fn validate_and_add<S>(
    store: &S,
    candidate: &DestinationDto,
    existing: &[Destination],
) -> AdminResult<Destination>
where
    S: DestinationStore + ?Sized,
{
    let input = validate_input(candidate)?;
    check_duplicate(&input, existing, None)?;

    log::debug!("creating destination {} ({})", input.name, input.country);
    store.create(&input).await
}

/// Validate an edited destination and write it through the store.
pub async fn validate_and_update<S>(
    store: &S,
    edited: &Destination,
    existing: &[Destination],
) -> AdminResult<Destination>
where
    S: DestinationStore + ?Sized,
{
    let input = validate_input(&edited.to_dto())?;
    check_duplicate(&input, existing, Some(&edited.id))?;

    let mut normalized = edited.clone();
    normalized.apply(&input);

    log::debug!("updating destination {} -> {} ({})", edited.id, input.name, input.country);
    // Packages keep their own copy of the destination label; propagating a
    // rename into them is the package store's job.
    store.update(&normalized).await
}

// ============================================================================
// Delete guard
// ============================================================================

/// A destination can be removed only while no package references it.
pub fn can_delete(destination: &Destination) -> bool {
    destination.packages == 0
}

/// What the UI shows after the delete button is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteDecision {
    /// Ask the user to confirm
    Confirm,
    /// Explain why the delete is refused
    Blocked { message: String },
}

pub fn request_delete(destination: &Destination) -> DeleteDecision {
    if can_delete(destination) {
        DeleteDecision::Confirm
    } else {
        DeleteDecision::Blocked {
            message: in_use_error(destination).user_message(),
        }
    }
}

/// Delete after confirmation. The guard is checked again so a stale
/// confirmation can never remove a destination that is still in use.
pub async fn delete_destination<S>(store: &S, destination: &Destination) -> AdminResult<()>
where
    S: DestinationStore + ?Sized,
{
    if !can_delete(destination) {
        return Err(in_use_error(destination));
    }
    log::debug!("deleting destination {}", destination.id);
    store.delete(&destination.id).await
}

fn in_use_error(destination: &Destination) -> AdminError {
    AdminError::InUse {
        name: destination.name.clone(),
        packages: destination.packages,
    }
}

// ============================================================================
// List view
// ============================================================================

/// Type filter ANDed with a case-insensitive search on name or country.
///
/// Order of `list` is preserved. An empty query matches everything.
pub fn filter_and_search(
    list: &[Destination],
    type_filter: DestinationTypeFilter,
    query: &str,
) -> Vec<Destination> {
    let needle = query.to_lowercase();
    list.iter()
        .filter(|d| type_filter.matches(d))
        .filter(|d| {
            needle.is_empty()
                || d.name.to_lowercase().contains(&needle)
                || d.country.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn classify(destination: &Destination) -> DestinationType {
    destination.destination_type()
}

pub fn find_by_id<'a>(list: &'a [Destination], id: &DestinationId) -> Option<&'a Destination> {
    list.iter().find(|d| &d.id == id)
}

pub fn find_by_name<'a>(list: &'a [Destination], name: &str) -> Option<&'a Destination> {
    let name = name.to_lowercase();
    list.iter().find(|d| d.name.to_lowercase() == name)
}

/// Counters for the overview cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DestinationStats {
    pub total: usize,
    pub national: usize,
    pub international: usize,
}

impl DestinationStats {
    pub fn from_list(list: &[Destination]) -> Self {
        let national = list
            .iter()
            .filter(|d| classify(d) == DestinationType::National)
            .count();
        Self {
            total: list.len(),
            national,
            international: list.len() - national,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockDestinationStore;
    use futures::executor::block_on;

    fn dest(id: &str, name: &str, country: &str, packages: u32) -> Destination {
        Destination::new(DestinationId::new(id), name, country).with_packages(packages)
    }

    #[test]
    fn add_to_empty_list_then_reject_case_insensitive_duplicate() {
        let store = MockDestinationStore::new();

        let created = block_on(validate_and_add(
            &store,
            &DestinationDto::new("Bali", "Indonesia"),
            &[],
        ))
        .unwrap();
        assert_eq!(created.name, "Bali");
        assert_eq!(created.packages, 0);

        let existing = block_on(store.list()).unwrap();
        let err = block_on(validate_and_add(
            &store,
            &DestinationDto::new("bali", "Indonesia"),
            &existing,
        ))
        .unwrap_err();
        assert!(matches!(err, AdminError::Duplicate { .. }));
        assert_eq!(block_on(store.list()).unwrap().len(), 1);
    }

    #[test]
    fn same_name_in_another_country_is_allowed() {
        let store = MockDestinationStore::with(vec![dest("1", "Georgia", "Georgia", 0)]);
        let existing = block_on(store.list()).unwrap();
        let created = block_on(validate_and_add(
            &store,
            &DestinationDto::new("Georgia", "United States"),
            &existing,
        ));
        assert!(created.is_ok());
    }

    #[test]
    fn add_trims_name_before_checks_and_store() {
        let store = MockDestinationStore::with(vec![dest("1", "Goa", "India", 3)]);
        let existing = block_on(store.list()).unwrap();

        let err = block_on(validate_and_add(
            &store,
            &DestinationDto::new("  goa  ", "India"),
            &existing,
        ))
        .unwrap_err();
        assert!(matches!(err, AdminError::Duplicate { .. }));

        let created = block_on(validate_and_add(
            &store,
            &DestinationDto::new("  Kerala ", "India"),
            &existing,
        ))
        .unwrap();
        assert_eq!(created.name, "Kerala");
    }

    #[test]
    fn missing_fields_are_validation_errors_and_never_reach_store() {
        let store = MockDestinationStore::new();
        for dto in [
            DestinationDto::new("   ", "India"),
            DestinationDto::new("Goa", ""),
            DestinationDto::new("Goa", "Atlantis"),
        ] {
            let err = block_on(validate_and_add(&store, &dto, &[])).unwrap_err();
            assert!(matches!(err, AdminError::Validation(_)), "{:?}", dto);
        }
        assert_eq!(store.create_calls(), 0);
    }

    #[test]
    fn store_failure_is_reported_as_operation_error() {
        let store = MockDestinationStore::new();
        store.fail_next("HTTP 500");
        let err = block_on(validate_and_add(
            &store,
            &DestinationDto::new("Bali", "Indonesia"),
            &[],
        ))
        .unwrap_err();
        assert!(matches!(err, AdminError::Operation(_)));
        assert!(block_on(store.list()).unwrap().is_empty());
    }

    #[test]
    fn update_excludes_the_edited_record_from_duplicate_check() {
        let store = MockDestinationStore::with(vec![
            dest("1", "Bali", "Indonesia", 8),
            dest("2", "Tokyo", "Japan", 12),
        ]);
        let existing = block_on(store.list()).unwrap();

        // Renaming to its own name in another case is fine
        let mut edited = existing[0].clone();
        edited.name = "BALI".into();
        let updated = block_on(validate_and_update(&store, &edited, &existing)).unwrap();
        assert_eq!(updated.name, "BALI");
        assert_eq!(updated.packages, 8);

        // Taking another record's key is not
        let mut edited = existing[1].clone();
        edited.name = "bali".into();
        edited.country = "Indonesia".into();
        let err = block_on(validate_and_update(&store, &edited, &existing)).unwrap_err();
        assert!(matches!(err, AdminError::Duplicate { .. }));
        assert_eq!(block_on(store.list()).unwrap()[1].name, "Tokyo");
    }

    #[test]
    fn accepted_writes_keep_keys_unique() {
        let store = MockDestinationStore::new();
        let inputs = [
            ("Paris", "France"),
            ("paris", "France"),
            ("Paris", "Denmark"),
            ("Nice", "France"),
            (" NICE", "France"),
        ];
        for (name, country) in inputs {
            let existing = block_on(store.list()).unwrap();
            let _ = block_on(validate_and_add(
                &store,
                &DestinationDto::new(name, country),
                &existing,
            ));
        }
        // Move "Paris, Denmark" onto "Paris, France": must be refused
        let existing = block_on(store.list()).unwrap();
        let mut moved = existing
            .iter()
            .find(|d| d.country == "Denmark")
            .cloned()
            .unwrap();
        moved.country = "France".into();
        let _ = block_on(validate_and_update(&store, &moved, &existing));

        let all = block_on(store.list()).unwrap();
        assert_eq!(all.len(), 3);
        for a in &all {
            for b in &all {
                if a.id != b.id {
                    assert!(!a.same_key(&b.name, &b.country), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn can_delete_boundary() {
        assert!(can_delete(&dest("1", "A", "India", 0)));
        assert!(!can_delete(&dest("1", "A", "India", 1)));
        assert!(!can_delete(&dest("1", "A", "India", 15)));
    }

    #[test]
    fn delete_of_used_destination_is_blocked_and_store_unchanged() {
        let goa = dest("1", "Goa", "India", 3);
        let store = MockDestinationStore::with(vec![goa.clone()]);

        assert_eq!(
            request_delete(&goa),
            DeleteDecision::Blocked {
                message: "Goa cannot be deleted because it is currently used in 3 package(s)."
                    .into()
            }
        );

        let err = block_on(delete_destination(&store, &goa)).unwrap_err();
        assert_eq!(
            err,
            AdminError::InUse {
                name: "Goa".into(),
                packages: 3
            }
        );
        assert_eq!(block_on(store.list()).unwrap(), vec![goa]);
        assert_eq!(store.delete_calls(), 0);
    }

    #[test]
    fn delete_of_unused_destination_asks_then_removes() {
        let unused = dest("9", "Hampi", "India", 0);
        let store = MockDestinationStore::with(vec![unused.clone()]);
        assert_eq!(request_delete(&unused), DeleteDecision::Confirm);
        block_on(delete_destination(&store, &unused)).unwrap();
        assert!(block_on(store.list()).unwrap().is_empty());
    }

    #[test]
    fn national_filter_with_empty_query() {
        let list = vec![dest("1", "Goa", "India", 0), dest("2", "Paris", "France", 0)];
        let out = filter_and_search(&list, DestinationTypeFilter::National, "");
        assert_eq!(out, vec![list[0].clone()]);

        let out = filter_and_search(&list, DestinationTypeFilter::International, "");
        assert_eq!(out, vec![list[1].clone()]);
    }

    #[test]
    fn search_matches_name_or_country_and_keeps_order() {
        let list = vec![
            dest("1", "Mumbai", "India", 5),
            dest("2", "Bali", "Indonesia", 8),
            dest("3", "Delhi", "India", 7),
            dest("4", "Paris", "France", 15),
        ];
        let ids = |v: Vec<Destination>| v.into_iter().map(|d| d.id.0).collect::<Vec<_>>();

        assert_eq!(ids(filter_and_search(&list, DestinationTypeFilter::All, "IND")), ["1", "2", "3"]);
        assert_eq!(ids(filter_and_search(&list, DestinationTypeFilter::National, "del")), ["3"]);
        assert_eq!(ids(filter_and_search(&list, DestinationTypeFilter::International, "ind")), ["2"]);
        assert!(filter_and_search(&list, DestinationTypeFilter::All, "zanzibar").is_empty());
        assert_eq!(filter_and_search(&list, DestinationTypeFilter::All, "").len(), 4);
    }

    #[test]
    fn filter_and_search_is_idempotent() {
        let list = vec![
            dest("1", "Mumbai", "India", 5),
            dest("2", "Bali", "Indonesia", 8),
            dest("3", "Tokyo", "Japan", 12),
        ];
        for f in DestinationTypeFilter::ALL {
            for q in ["", "a", "INDIA", "x"] {
                let once = filter_and_search(&list, f, q);
                let twice = filter_and_search(&once, f, q);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn lookups_and_stats() {
        let list = vec![
            dest("1", "Mumbai", "India", 5),
            dest("2", "Bali", "Indonesia", 8),
            dest("3", "Delhi", "India", 7),
        ];
        assert_eq!(find_by_id(&list, &DestinationId::new("2")).unwrap().name, "Bali");
        assert_eq!(find_by_name(&list, "delhi").unwrap().id, DestinationId::new("3"));
        assert!(find_by_name(&list, "Goa").is_none());
        assert_eq!(
            DestinationStats::from_list(&list),
            DestinationStats {
                total: 3,
                national: 2,
                international: 1
            }
        );
    }
}
