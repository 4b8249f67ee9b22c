use quakemap_core::{
    Category, FeedConfig, FeedSource, FilterQuery, CategorySelector, GeoPoint, IngestError,
    InMemoryDisplay, MapSession, MapViewConfig,
};
use serde_json::json;

fn session() -> MapSession<InMemoryDisplay> {
    let view = MapViewConfig::default();
    MapSession::new(InMemoryDisplay::new(&view), view)
}

fn seeded_session() -> MapSession<InMemoryDisplay> {
    let mut session = session();
    session
        .add_marker(
            "disaster",
            "지진",
            "발생일: 2016-09-12 20:32:54, 위치: Gyeongju, South Korea",
            GeoPoint::new(35.77, 129.19),
        )
        .unwrap();
    session
        .add_marker("crime", "도난", "위치: Busan", GeoPoint::new(35.11, 129.04))
        .unwrap();
    session
        .add_marker("protest", "집회", "위치: Seoul", GeoPoint::new(37.57, 126.98))
        .unwrap();
    session
}

fn shown_flags(session: &MapSession<InMemoryDisplay>) -> Vec<bool> {
    session
        .store()
        .all()
        .iter()
        .map(|record| session.display().visual(record.visual()).unwrap().shown)
        .collect()
}

#[test]
fn category_change_resyncs_every_marker() {
    let mut session = seeded_session();

    session.on_category_change("crime");
    assert_eq!(shown_flags(&session), vec![false, true, false]);

    session.on_category_change("all");
    assert_eq!(shown_flags(&session), vec![true, true, true]);

    session.on_category_change("weather");
    assert_eq!(shown_flags(&session), vec![false, false, false]);
}

#[test]
fn query_change_renders_and_hides_result_list() {
    let mut session = seeded_session();

    session.on_query_change("SEOUL");
    assert_eq!(shown_flags(&session), vec![false, false, true]);
    let lines = session.display().result_list().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].label, "집회: 위치: Seoul");

    session.on_query_change("  ");
    assert!(session.display().result_list().is_none());
    assert_eq!(shown_flags(&session), vec![false, false, false]);

    session.on_query_change("");
    assert!(session.display().result_list().is_none());
    assert_eq!(shown_flags(&session), vec![true, true, true]);
}

#[test]
fn selector_and_query_combine() {
    let mut session = seeded_session();
    session.on_category_change("disaster");
    session.on_query_change("busan");

    assert_eq!(shown_flags(&session), vec![false, false, false]);
    assert_eq!(session.display().result_list().unwrap().len(), 1);
    assert_eq!(
        session.query(),
        &FilterQuery::new(CategorySelector::Only(Category::Disaster), "busan")
    );
}

#[test]
fn repeated_refresh_is_stable() {
    let mut session = seeded_session();
    session.apply_query(FilterQuery::new(CategorySelector::All, "위치"));
    let first = (shown_flags(&session), session.display().result_list().map(<[_]>::to_vec));
    session.refresh();
    let second = (shown_flags(&session), session.display().result_list().map(<[_]>::to_vec));
    assert_eq!(first, second);
}

#[test]
fn selecting_result_focuses_marker_and_closes_list() {
    let mut session = seeded_session();
    session.on_query_change("gyeongju");
    assert!(session.display().result_list().is_some());

    let id = session.store().all()[0].id();
    assert!(session.select_result(id));

    let display = session.display();
    assert_eq!(display.center(), GeoPoint::new(35.77, 129.19));
    assert_eq!(display.zoom(), 12);
    assert_eq!(
        display.open_popup(),
        Some(session.store().all()[0].visual().raw())
    );
    assert!(display.result_list().is_none());
}

#[test]
fn selecting_unknown_result_is_ignored() {
    let mut session = seeded_session();
    let stranger = {
        let mut other = seeded_session();
        other
            .add_marker("crime", "extra", "", GeoPoint::new(36.0, 127.0))
            .unwrap()
    };
    assert!(!session.select_result(stranger));
    assert_eq!(session.display().zoom(), 7);
}

#[tokio::test]
async fn load_feed_from_file_renders_legend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed.geojson");
    let body = json!({
        "type": "FeatureCollection",
        "features": [
            { "geometry": { "coordinates": [129.19, 35.77, 12.0] },
              "properties": { "place": "Gyeongju, South Korea", "time": 1_473_679_974_920_i64 } },
            { "geometry": { "coordinates": [135.5, 34.7, 10.0] },
              "properties": { "place": "Osaka, Japan", "time": 0 } }
        ]
    });
    std::fs::write(&path, body.to_string()).unwrap();

    let mut session = session();
    let report = session
        .load_feed(&FeedSource::File(path), &FeedConfig::default())
        .await
        .unwrap();

    assert_eq!(report.accepted, 1);
    assert_eq!(report.out_of_bounds, 1);
    let legend = session.display().legend().unwrap();
    assert_eq!(legend.get(Category::Disaster), 1);
    assert_eq!(legend.legend_label(Category::Crime), "(0건)");
    assert_eq!(legend, &session.legend());
}

#[tokio::test]
async fn failed_load_still_renders_zero_legend() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.geojson");
    std::fs::write(&path, "not json").unwrap();

    let mut session = session();
    let err = session
        .load_feed(&FeedSource::File(path), &FeedConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Decode(_)));
    assert!(session.store().is_empty());
    assert_eq!(session.display().legend().unwrap().total(), 0);
}
