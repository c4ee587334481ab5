//! Search tests - matching, limits and the pause between matches

mod common;

use common::Harness;

fn doc(input: &str) -> Harness {
    Harness::with_document(&["foo1", "bar", "foo2", "food", "baz"], 0, input)
}

#[test]
fn test_search_shows_all_matches_from_cursor() {
    let mut h = doc("\n\n\nNEXT\n");
    h.feed(&["foo", "search"]);
    assert_eq!(h.out(), "0: foo1\n2: foo2\n3: food\n");
    assert_eq!(h.session.cursor, 3);
    assert_eq!(h.err(), "!\n");
    // one reply read per match
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_search_pauses_after_each_match() {
    let mut h = Harness::with_document(&["foo1", "bar", "foo2"], 0, "\n\nNEXT\n");
    h.feed(&["foo", "0", "search"]);
    assert_eq!(h.out(), "0: foo1\n2: foo2\n");
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_search_limit_of_one_pauses_once() {
    let mut h = doc("\nNEXT\n");
    h.feed(&["foo", "1", "search"]);
    assert_eq!(h.out(), "0: foo1\n");
    assert_eq!(h.session.cursor, 0);
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_single_match_pauses_once() {
    let mut h = doc("\nNEXT\n");
    h.feed(&["bar", "search"]);
    assert_eq!(h.out(), "1: bar\n");
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_search_limit_counts_matches() {
    let mut h = doc("\n");
    h.feed(&["foo", "2", "search"]);
    assert_eq!(h.out(), "0: foo1\n2: foo2\n");
    assert_eq!(h.session.cursor, 2);
}

#[test]
fn test_search_starts_at_cursor() {
    let mut h = doc("\n");
    h.feed(&[":1", "foo", "search"]);
    assert_eq!(h.out(), "2: foo2\n3: food\n");
}

#[test]
fn test_negative_count_scans_from_top() {
    let mut h = doc("");
    h.feed(&[":3", "foo", "-1", "search"]);
    assert_eq!(h.out(), "0: foo1\n");
    assert_eq!(h.session.cursor, 0);
}

#[test]
fn test_q_stops_search() {
    let mut h = doc("q\nNEXT\n");
    h.feed(&["foo", "search"]);
    assert_eq!(h.out(), "0: foo1\n");
    assert_eq!(h.session.cursor, 0);
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_end_of_input_stops_search() {
    let mut h = doc("");
    h.feed(&["ba", "search"]);
    assert_eq!(h.out(), "1: bar\n");
    assert_eq!(h.session.cursor, 1);
}

#[test]
fn test_no_match_leaves_cursor() {
    let mut h = doc("NEXT\n");
    h.feed(&[":2", "nothing", "search"]);
    assert_eq!(h.out(), "");
    assert_eq!(h.session.cursor, 2);
    assert_eq!(h.err(), "!\n");
    assert_eq!(h.next_input().as_deref(), Some("NEXT"));
}

#[test]
fn test_missing_keyword() {
    let mut h = doc("");
    h.feed(&["search"]);
    assert_eq!(h.out(), "");
    assert_eq!(h.err(), "keyword missing\n");
}

#[test]
fn test_search_consumes_buffer() {
    let mut h = doc("");
    h.feed(&["bar", "search"]);
    assert!(h.session.pending.is_empty());
}

#[test]
fn test_garbage_count_means_unbounded() {
    let mut h = doc("\n\n");
    h.feed(&["foo", "lots", "search"]);
    assert_eq!(h.out(), "0: foo1\n2: foo2\n3: food\n");
}
