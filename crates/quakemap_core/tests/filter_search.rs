use quakemap_core::{
    filter_markers, CategorySelector, FilterQuery, GeoPoint, InMemoryDisplay, MarkerStore,
    SearchPanel,
};

fn seeded_store() -> MarkerStore {
    let mut display = InMemoryDisplay::default();
    let mut store = MarkerStore::new();
    store
        .add(
            &mut display,
            "disaster",
            "지진",
            "발생일: 2016-09-12 20:32:54, 위치: 8 km SSW of Gyeongju, South Korea",
            GeoPoint::new(35.77, 129.19),
        )
        .unwrap();
    store
        .add(
            &mut display,
            "crime",
            "도난 신고",
            "위치: Busan station",
            GeoPoint::new(35.11, 129.04),
        )
        .unwrap();
    store
        .add(
            &mut display,
            "protest",
            "집회",
            "위치: Gwanghwamun, Seoul",
            GeoPoint::new(37.57, 126.98),
        )
        .unwrap();
    store
        .add(
            &mut display,
            "disaster",
            "지진",
            "발생일: 2017-11-15 14:29:31, 위치: 7 km S of Heunghae, South Korea",
            GeoPoint::new(36.11, 129.37),
        )
        .unwrap();
    store
}

fn shown(store: &MarkerStore, query: &FilterQuery) -> Vec<usize> {
    filter_markers(store, query)
        .visibility
        .iter()
        .filter(|item| item.show)
        .map(|item| item.id.index())
        .collect()
}

fn result_ids(panel: &SearchPanel<'_>) -> Vec<usize> {
    panel.entries().iter().map(|entry| entry.id.index()).collect()
}

#[test]
fn every_record_gets_exactly_one_instruction_in_store_order() {
    let store = seeded_store();
    let selectors = ["all", "crime", "disaster", "protest", "weather"];
    let queries = ["", "지진", "seoul", "nothing-matches", "  "];

    for selector in selectors {
        for text in queries {
            let query = FilterQuery::new(CategorySelector::parse(selector), text);
            let outcome = filter_markers(&store, &query);
            let ids = outcome
                .visibility
                .iter()
                .map(|item| item.id.index())
                .collect::<Vec<_>>();
            assert_eq!(ids, vec![0, 1, 2, 3], "selector={selector} query={text:?}");
        }
    }
}

#[test]
fn visibility_is_conjunction_of_category_and_text() {
    let store = seeded_store();
    let needle = "south korea";

    for selector in ["all", "crime", "disaster", "protest"] {
        let query = FilterQuery::new(CategorySelector::parse(selector), needle);
        let outcome = filter_markers(&store, &query);
        for (record, instruction) in store.all().iter().zip(&outcome.visibility) {
            let category_ok = query.selector.matches(record.category());
            let text_ok = record.title().to_lowercase().contains(needle)
                || record.description().to_lowercase().contains(needle);
            assert_eq!(instruction.show, category_ok && text_ok);
        }
    }
}

#[test]
fn disaster_selector_with_empty_query_shows_disasters_and_hides_panel() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::parse("disaster"), "");

    let outcome = filter_markers(&store, &query);
    assert_eq!(shown(&store, &query), vec![0, 3]);
    assert_eq!(outcome.search, SearchPanel::Hidden);
}

#[test]
fn category_mismatch_hides_record() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::parse("crime"), "");
    assert_eq!(shown(&store, &query), vec![1]);
}

#[test]
fn lowercase_query_matches_capitalized_description() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::All, "gyeongju");

    let outcome = filter_markers(&store, &query);
    assert_eq!(shown(&store, &query), vec![0]);
    assert_eq!(result_ids(&outcome.search), vec![0]);
}

#[test]
fn uppercase_query_matches_too() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::All, "GYEONGJU");
    assert_eq!(shown(&store, &query), vec![0]);
}

#[test]
fn search_results_ignore_category_selector() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::parse("crime"), "지진");

    let outcome = filter_markers(&store, &query);
    assert!(outcome.visibility.iter().all(|item| !item.show));
    assert_eq!(result_ids(&outcome.search), vec![0, 3]);
}

#[test]
fn blank_query_hides_panel_for_every_selector() {
    let store = seeded_store();
    for selector in ["all", "crime", "disaster", "protest", "weather"] {
        for text in ["", "   ", "\t\n"] {
            let outcome =
                filter_markers(&store, &FilterQuery::new(CategorySelector::parse(selector), text));
            assert!(outcome.search.is_hidden());
            assert!(outcome.search.entries().is_empty());
        }
    }
}

#[test]
fn whitespace_only_query_matches_only_text_containing_it() {
    let store = seeded_store();

    let single = FilterQuery::new(CategorySelector::All, " ");
    assert_eq!(shown(&store, &single), vec![0, 1, 2, 3]);
    assert!(filter_markers(&store, &single).search.is_hidden());

    let triple = FilterQuery::new(CategorySelector::All, "   ");
    assert!(shown(&store, &triple).is_empty());
    assert!(filter_markers(&store, &triple).search.is_hidden());
}

#[test]
fn trailing_whitespace_in_query_is_part_of_the_match() {
    let mut display = InMemoryDisplay::default();
    let mut store = MarkerStore::new();
    store
        .add(
            &mut display,
            "disaster",
            "지진",
            "위치:Gyeongju",
            GeoPoint::new(35.77, 129.19),
        )
        .unwrap();

    let padded = filter_markers(&store, &FilterQuery::new(CategorySelector::All, "위치: "));
    assert_eq!(padded.shown_count(), 0);
    assert!(padded.search.is_hidden());

    let exact = filter_markers(&store, &FilterQuery::new(CategorySelector::All, "위치:"));
    assert_eq!(exact.shown_count(), 1);
    assert_eq!(result_ids(&exact.search), vec![0]);
}

#[test]
fn query_without_hits_hides_panel() {
    let store = seeded_store();
    let outcome = filter_markers(&store, &FilterQuery::new(CategorySelector::All, "tsunami"));
    assert_eq!(outcome.shown_count(), 0);
    assert!(outcome.search.is_hidden());
}

#[test]
fn unknown_selector_hides_all_but_still_searches() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::parse("weather"), "seoul");

    let outcome = filter_markers(&store, &query);
    assert_eq!(outcome.shown_count(), 0);
    assert_eq!(result_ids(&outcome.search), vec![2]);
}

#[test]
fn repeated_passes_are_identical() {
    let store = seeded_store();
    let query = FilterQuery::new(CategorySelector::parse("disaster"), "korea");

    let first = filter_markers(&store, &query);
    let second = filter_markers(&store, &query);
    assert_eq!(first, second);
}

#[test]
fn result_entries_carry_labels_and_handles() {
    let store = seeded_store();
    let outcome = filter_markers(&store, &FilterQuery::new(CategorySelector::All, "busan"));

    let entries = outcome.search.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label(), "도난 신고: 위치: Busan station");
    assert_eq!(entries[0].visual, store.all()[1].visual());
}

#[test]
fn empty_store_yields_empty_outcome() {
    let store = MarkerStore::new();
    let outcome = filter_markers(&store, &FilterQuery::new(CategorySelector::All, "지진"));
    assert!(outcome.visibility.is_empty());
    assert!(outcome.search.is_hidden());
}
