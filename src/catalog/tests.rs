use proptest::prelude::*;

use super::*;

fn names<'a>(entries: &[&'a Entry]) -> Vec<&'a str> {
    entries.iter().map(|entry| entry.name.as_str()).collect()
}

fn catalog_with(titles: &[&str]) -> Catalog {
    let mut catalog = Catalog::new();
    for title in titles {
        catalog.add(title).expect("add should succeed");
    }
    catalog
}

#[test]
fn add_move_search_scenario() {
    let mut catalog = catalog_with(&["Dune", "Arrival", "Her"]);
    let listing = catalog.list_all();
    assert_eq!(names(&listing.pending), vec!["Her", "Arrival", "Dune"]);
    assert!(listing.watched.is_empty());
    assert!(listing.dropped.is_empty());

    let moved = catalog
        .move_title("Arrival", Status::Watched)
        .expect("move should succeed");
    assert_eq!(moved, Entry::new("Arrival", Status::Watched));

    let listing = catalog.list_all();
    assert_eq!(names(&listing.pending), vec!["Her", "Dune"]);
    assert_eq!(names(&listing.watched), vec!["Arrival"]);
    assert_eq!(
        catalog.search("Arrival").expect("Arrival should be found"),
        Entry::new("Arrival", Status::Watched)
    );

    let err = catalog
        .move_title("Ghost", Status::Watched)
        .expect_err("unknown title cannot move");
    assert!(matches!(err, CatalogError::NotFound { name } if name == "Ghost"));
    catalog
        .check_consistency()
        .expect("catalog should be consistent");
}

#[test]
fn history_keeps_last_five_added_most_recent_first() {
    let catalog = catalog_with(&["A", "B", "C", "D", "E", "F"]);
    assert_eq!(names(&catalog.history()), vec!["F", "E", "D", "C", "B"]);
}

#[test]
fn moves_do_not_touch_history() {
    let mut catalog = catalog_with(&["A", "B"]);
    catalog
        .move_title("A", Status::Dropped)
        .expect("move should succeed");
    let history = catalog.history();
    assert_eq!(names(&history), vec!["B", "A"]);
    assert_eq!(history[1].status, Status::Pending);
}

#[test]
fn add_rejects_duplicate_names() {
    let mut catalog = catalog_with(&["Dune"]);
    catalog
        .move_title("Dune", Status::Watched)
        .expect("move should succeed");

    let err = catalog
        .add("Dune")
        .expect_err("second add must be rejected");
    assert!(matches!(err, CatalogError::DuplicateName { name } if name == "Dune"));
    assert_eq!(catalog.len(), 1);
    assert!(catalog.list_all().pending.is_empty());
    assert_eq!(catalog.history().len(), 1);
    catalog
        .check_consistency()
        .expect("duplicate add must not desync lists");
}

#[test]
fn add_rejects_names_the_data_file_cannot_hold() {
    let mut catalog = Catalog::new();
    for name in ["", "  ", "Tom;Jerry", "two\nlines"] {
        let err = catalog
            .add(name)
            .expect_err("invalid name must be rejected");
        assert!(matches!(err, CatalogError::InvalidName { .. }), "{name:?}");
    }
    assert!(catalog.is_empty());
}

#[test]
fn move_to_current_status_reinserts_at_front() {
    let mut catalog = catalog_with(&["A", "B", "C"]);
    catalog
        .move_title("A", Status::Pending)
        .expect("move should succeed");
    assert_eq!(names(&catalog.list_all().pending), vec!["A", "C", "B"]);
    catalog
        .check_consistency()
        .expect("catalog should be consistent");
}

#[test]
fn every_transition_between_statuses_is_legal() {
    let mut catalog = catalog_with(&["Heat"]);
    for (from, to) in [
        (Status::Pending, Status::Watched),
        (Status::Watched, Status::Dropped),
        (Status::Dropped, Status::Pending),
        (Status::Pending, Status::Dropped),
        (Status::Dropped, Status::Watched),
        (Status::Watched, Status::Pending),
    ] {
        assert_eq!(catalog.search("Heat").expect("Heat").status, from);
        catalog.move_title("Heat", to).expect("move should succeed");
        assert_eq!(catalog.search("Heat").expect("Heat").status, to);
        assert_eq!(catalog.partition(to).len(), 1);
    }
}

#[test]
fn move_detects_and_repairs_index_without_list_entry() {
    let mut catalog = catalog_with(&["Dune", "Her"]);
    catalog.pending.remove_by_name("Dune");

    let err = catalog
        .move_title("Dune", Status::Watched)
        .expect_err("orphaned index node must be reported");
    assert!(matches!(err, CatalogError::Inconsistency { name } if name == "Dune"));
    assert!(matches!(
        catalog.search("Dune"),
        Err(CatalogError::NotFound { .. })
    ));
    catalog
        .check_consistency()
        .expect("orphan should have been dropped");
}

#[test]
fn enqueue_snapshots_current_status_without_moving_title() {
    let mut catalog = catalog_with(&["Dune", "Her"]);
    catalog
        .move_title("Her", Status::Watched)
        .expect("move should succeed");
    catalog
        .enqueue_watch_next("Her")
        .expect("enqueue should succeed");
    catalog
        .enqueue_watch_next("Dune")
        .expect("enqueue should succeed");

    let queue = catalog.watch_next_queue();
    assert_eq!(names(&queue), vec!["Her", "Dune"]);
    assert_eq!(queue[0].status, Status::Watched);
    assert_eq!(names(&catalog.list_all().watched), vec!["Her"]);
    assert_eq!(names(&catalog.list_all().pending), vec!["Dune"]);

    let err = catalog
        .enqueue_watch_next("Ghost")
        .expect_err("unknown title cannot be queued");
    assert!(matches!(err, CatalogError::NotFound { .. }));
    assert_eq!(catalog.watch_next_queue().len(), 2);
    catalog
        .check_consistency()
        .expect("catalog should be consistent");
}

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Move(u8, Status),
    Enqueue(u8),
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Pending),
        Just(Status::Watched),
        Just(Status::Dropped),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12).prop_map(Op::Add),
        (0u8..12, status_strategy()).prop_map(|(title, status)| Op::Move(title, status)),
        (0u8..12).prop_map(Op::Enqueue),
    ]
}

proptest! {
    #[test]
    fn lists_and_index_stay_in_step(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut catalog = Catalog::new();
        for op in ops {
            match op {
                Op::Add(title) => {
                    let name = format!("title-{title}");
                    let existed = catalog.search(&name).is_ok();
                    prop_assert_eq!(catalog.add(&name).is_err(), existed);
                }
                Op::Move(title, status) => {
                    let name = format!("title-{title}");
                    match catalog.move_title(&name, status) {
                        Ok(_) => {
                            let indexed = catalog.search(&name).map(|e| e.status).ok();
                            prop_assert_eq!(indexed, Some(status));
                            let listed = catalog.partition(status).iter().any(|e| e.name == name);
                            prop_assert!(listed);
                        }
                        Err(err) => {
                            let not_found = matches!(err, CatalogError::NotFound { .. });
                            prop_assert!(not_found, "unexpected error: {}", err);
                        }
                    }
                }
                Op::Enqueue(title) => {
                    let name = format!("title-{title}");
                    let before = catalog.search(&name).ok();
                    let _ = catalog.enqueue_watch_next(&name);
                    prop_assert_eq!(catalog.search(&name).ok(), before);
                }
            }
            prop_assert_eq!(catalog.check_consistency(), Ok(()));
            prop_assert!(catalog.history().len() <= history::HISTORY_SIZE);
        }
    }

    #[test]
    fn save_and_load_round_trips_every_title(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut catalog = Catalog::new();
        for op in ops {
            match op {
                Op::Add(title) => {
                    let _ = catalog.add(&format!("title {title}"));
                }
                Op::Move(title, status) => {
                    let _ = catalog.move_title(&format!("title {title}"), status);
                }
                Op::Enqueue(_) => {}
            }
        }

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("data.txt");
        catalog.save_to_file(&path).expect("save should succeed");
        let (reloaded, report) = Catalog::open(&path).expect("load should succeed");

        prop_assert_eq!(report.loaded, catalog.len());
        prop_assert_eq!(report.malformed, 0);
        let before: Vec<_> = catalog.sorted().into_iter().cloned().collect();
        let after: Vec<_> = reloaded.sorted().into_iter().cloned().collect();
        prop_assert_eq!(before, after);
    }
}
