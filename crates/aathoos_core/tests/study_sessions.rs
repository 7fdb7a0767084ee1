use aathoos_core::{RepoError, SqliteStudySessionRepository, Store, StudySessionRepository};

#[test]
fn create_then_get_round_trips_and_assigns_started_at() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    let created = repo.create("Calculus", 600, Some("limits")).unwrap();
    assert_eq!(created.subject, "Calculus");
    assert_eq!(created.duration_secs, 600);
    assert!(created.started_at > 0);

    let fetched = repo.get_by_id(&created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_rejects_empty_subject_and_negative_duration() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    assert!(matches!(
        repo.create("", 600, None),
        Err(RepoError::Validation(_))
    ));
    assert!(matches!(
        repo.create("Calculus", -1, None),
        Err(RepoError::Validation(_))
    ));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn zero_duration_sessions_are_valid() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    let created = repo.create("Calculus", 0, None).unwrap();
    assert_eq!(created.duration_secs, 0);
}

#[test]
fn total_duration_sums_exact_subject_matches_and_is_zero_otherwise() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    repo.create("Calculus", 600, None).unwrap();
    repo.create("Calculus", 300, None).unwrap();
    repo.create("Calculus", 900, None).unwrap();
    repo.create("calculus", 450, None).unwrap();

    assert_eq!(repo.total_duration_for_subject("Calculus").unwrap(), 1800);
    assert_eq!(repo.total_duration_for_subject("calculus").unwrap(), 450);
    assert_eq!(repo.total_duration_for_subject("Physics").unwrap(), 0);
}

#[test]
fn subject_filter_is_exact_and_preserves_commit_order() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    let first = repo.create("Calculus", 600, None).unwrap();
    repo.create("Physics", 300, None).unwrap();
    let third = repo.create("Calculus", 900, None).unwrap();

    let filtered: Vec<String> = repo
        .list_by_subject("Calculus")
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(filtered, vec![first.id, third.id]);
}

#[test]
fn delete_is_final_and_totals_shrink_accordingly() {
    let store = Store::open_in_memory().unwrap();
    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);

    let created = repo.create("Calculus", 600, None).unwrap();
    repo.create("Calculus", 300, None).unwrap();

    assert!(repo.delete(&created.id).unwrap());
    assert!(repo.get_by_id(&created.id).unwrap().is_none());
    assert!(!repo.delete(&created.id).unwrap());
    assert_eq!(repo.total_duration_for_subject("Calculus").unwrap(), 300);
}
