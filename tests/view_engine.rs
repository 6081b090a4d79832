//! Integration tests for the filter → sort → paginate pipeline.

use eventcatalog::core::event_record::{CulturalEvent, MediaKind, Schedule};
use eventcatalog::core::filter::{filter_by_query, filter_rows, FilterState};
use eventcatalog::core::pagination::{PageSize, PageWindow};
use eventcatalog::core::sort::{sort_indices, sort_key, SortDirection, SortField, SortKey};
use eventcatalog::core::table_view::{compute_view, HeaderIndicator, ViewState};

fn event(name: &str, publish: bool) -> CulturalEvent {
    CulturalEvent {
        name_left: Some(name.into()),
        publish,
        ..Default::default()
    }
}

fn dated(name: &str, year: i32, month: i32, day: i32) -> CulturalEvent {
    CulturalEvent {
        schedules: vec![Schedule {
            year: Some(year),
            month: Some(month),
            day_of_month: Some(day),
            ..Default::default()
        }],
        ..event(name, true)
    }
}

fn names(rows: &[CulturalEvent], idx: &[usize]) -> Vec<String> {
    idx.iter().map(|&i| rows[i].display_name().to_owned()).collect()
}

fn fruit() -> Vec<CulturalEvent> {
    vec![event("Banana", false), event("Apple", true), event("Cherry", true)]
}

#[test]
fn default_view_sorts_by_name_ascending() {
    let rows = fruit();
    let mut state = ViewState::default();
    let view = state.refresh(&rows);
    assert_eq!(names(&rows, &view.indices), ["Apple", "Banana", "Cherry"]);
    assert_eq!(view.window.page_count, 1);
}

#[test]
fn publish_descending_keeps_ties_in_prior_order() {
    let rows = fruit();
    let mut state = ViewState::default();
    let by_name = state.refresh(&rows);
    assert_eq!(names(&rows, &by_name.indices), ["Apple", "Banana", "Cherry"]);

    // Re-sort the name-ordered list by publish, descending.
    let mut idx = by_name.indices.clone();
    sort_indices(&rows, &mut idx, &SortField::Publish, SortDirection::Descending);
    assert_eq!(names(&rows, &idx), ["Apple", "Cherry", "Banana"]);
}

#[test]
fn clicking_headers_toggles_and_switches_columns() {
    let rows = fruit();
    let mut state = ViewState::default();

    state.click_header(SortField::Name);
    assert_eq!(state.sort_direction, SortDirection::Descending);
    let view = state.refresh(&rows);
    assert_eq!(names(&rows, &view.indices), ["Cherry", "Banana", "Apple"]);

    state.click_header(SortField::Publish);
    assert_eq!(state.sort_field, Some(SortField::Publish));
    assert_eq!(state.sort_direction, SortDirection::Ascending);
    let view = state.refresh(&rows);
    assert_eq!(names(&rows, &view.indices)[0], "Banana");
}

#[test]
fn hovered_header_previews_next_direction() {
    let mut state = ViewState::default();
    assert_eq!(
        state.header_indicator(&SortField::Name),
        HeaderIndicator::Active(SortDirection::Ascending)
    );

    state.set_hover(Some(SortField::Name));
    assert_eq!(
        state.header_indicator(&SortField::Name),
        HeaderIndicator::Preview(SortDirection::Descending)
    );

    state.set_hover(Some(SortField::Type));
    assert_eq!(
        state.header_indicator(&SortField::Type),
        HeaderIndicator::Preview(SortDirection::Ascending)
    );
    assert_eq!(
        state.header_indicator(&SortField::Name),
        HeaderIndicator::Active(SortDirection::Ascending)
    );
    assert_eq!(state.header_indicator(&SortField::Publish), HeaderIndicator::None);
}

#[test]
fn query_matches_left_description_case_insensitively() {
    let rows = vec![
        CulturalEvent {
            description_table_left: Some("Arabic poetry".into()),
            ..Default::default()
        },
        CulturalEvent {
            description_table_right: Some("شعر".into()),
            ..Default::default()
        },
    ];
    assert_eq!(filter_by_query(&rows, "arab"), vec![0]);
    assert_eq!(filter_by_query(&rows, "شعر"), vec![1]);
    assert_eq!(filter_by_query(&rows, ""), vec![0, 1]);
}

#[test]
fn filtering_is_idempotent() {
    let rows = vec![
        event("Poetry night", true),
        event("Jazz", true),
        event("poetry reading", false),
        event("Film", true),
    ];
    let once = filter_by_query(&rows, "POETRY");
    let kept: Vec<CulturalEvent> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = filter_by_query(&kept, "POETRY");
    assert_eq!(once.len(), twice.len());
    assert_eq!(names(&kept, &twice), names(&rows, &once));
}

#[test]
fn sorting_twice_matches_sorting_once() {
    let rows = vec![
        dated("b", 2024, 5, 1),
        event("undated", true),
        dated("a", 2023, 1, 9),
        dated("c", 2024, 5, 1),
    ];
    for field in [SortField::Name, SortField::StartDateTime, SortField::Publish] {
        for dir in [SortDirection::Ascending, SortDirection::Descending] {
            let mut once: Vec<usize> = (0..rows.len()).collect();
            sort_indices(&rows, &mut once, &field, dir);
            let mut twice = once.clone();
            sort_indices(&rows, &mut twice, &field, dir);
            assert_eq!(once, twice, "{field:?} {dir:?}");
        }
    }
}

#[test]
fn undated_rows_sort_first_by_date() {
    let rows = vec![dated("later", 2025, 3, 1), event("undated", true), dated("sooner", 2024, 12, 31)];
    let mut idx: Vec<usize> = (0..rows.len()).collect();
    sort_indices(&rows, &mut idx, &SortField::StartDateTime, SortDirection::Ascending);
    assert_eq!(names(&rows, &idx), ["undated", "sooner", "later"]);
}

#[test]
fn malformed_schedules_never_panic() {
    let with_time = |name: &str, time: &str| {
        let mut e = dated(name, 2024, 6, 1);
        e.schedules[0].start_time = Some(time.into());
        e
    };
    let rows = vec![
        dated("later", 2025, 3, 1),
        with_time("huge hour", "9999999999999999:00"),
        with_time("huge minute", "00:9999999999999999"),
        dated("min month", 2024, i32::MIN, 1),
        dated("sooner", 2024, 12, 31),
        dated("max month", 2024, i32::MAX, 1),
        dated("max day", 2024, 6, i32::MAX),
        dated("min day", 2024, 6, i32::MIN),
        dated("max year", i32::MAX, 6, 1),
    ];
    let malformed = ["huge hour", "huge minute", "min month", "max month", "max day", "min day", "max year"];

    for row in &rows {
        let key = sort_key(row, &SortField::StartDateTime);
        if malformed.contains(&row.display_name()) {
            assert_eq!(key, SortKey::Text(String::new()), "{}", row.display_name());
        } else {
            assert!(matches!(key, SortKey::Number(_)), "{}", row.display_name());
        }
    }

    let mut idx: Vec<usize> = (0..rows.len()).collect();
    sort_indices(&rows, &mut idx, &SortField::StartDateTime, SortDirection::Ascending);
    let mut expected: Vec<&str> = malformed.to_vec();
    expected.extend(["sooner", "later"]);
    assert_eq!(names(&rows, &idx), expected);

    let mut idx: Vec<usize> = (0..rows.len()).collect();
    sort_indices(&rows, &mut idx, &SortField::StartDateTime, SortDirection::Descending);
    let mut expected = vec!["later", "sooner"];
    expected.extend(malformed);
    assert_eq!(names(&rows, &idx), expected);
}

#[test]
fn type_column_sorts_by_priority() {
    let mut rows = vec![event("v", true), event("p", true), event("x", true)];
    rows[0].kind = MediaKind::Video;
    rows[1].kind = MediaKind::Pdf;
    rows[2].kind = MediaKind::Other("hologram".into());
    let mut idx = vec![0, 1, 2];
    sort_indices(&rows, &mut idx, &SortField::Type, SortDirection::Ascending);
    assert_eq!(names(&rows, &idx), ["p", "v", "x"]);
}

#[test]
fn pages_partition_the_rows() {
    for total in [0usize, 1, 2, 7, 50, 51] {
        for size in [1usize, 2, 3, 10, 50] {
            let window = PageWindow::new(0, total, PageSize::Rows(size));
            let mut covered = 0;
            let mut expected_start = 0;
            for page in 0..window.page_count {
                let w = PageWindow::new(page, total, PageSize::Rows(size));
                assert_eq!(w.start, expected_start, "pages must not overlap");
                covered += w.end - w.start;
                expected_start = w.end;
            }
            assert_eq!(covered, total, "total={total} size={size}");
        }
    }
}

#[test]
fn page_size_two_over_five_rows() {
    let rows: Vec<CulturalEvent> = ["a", "b", "c", "d", "e"].iter().map(|n| event(n, true)).collect();
    let mut state = ViewState::default();
    state.set_page_size(PageSize::Rows(2));

    let view = state.refresh(&rows);
    assert_eq!(view.window.page_count, 3);
    assert_eq!(names(&rows, view.page_indices()), ["a", "b"]);

    state.go_to_page(2);
    let view = state.refresh(&rows);
    let last: Vec<&str> = view.page_rows(&rows).iter().map(|(_, e)| e.display_name()).collect();
    assert_eq!(last, ["e"]);
    assert_eq!(view.window.range_label(), "5-5 of 5");

    state.go_to_page(5);
    assert_eq!(state.page_index, 2);
}

#[test]
fn switching_to_all_resets_to_first_page() {
    let rows: Vec<CulturalEvent> = (0..120).map(|i| event(&format!("event {i:03}"), true)).collect();
    let mut state = ViewState::default();
    assert_eq!(state.page_size, PageSize::Rows(50));
    state.refresh(&rows);
    state.next_page();
    assert_eq!(state.page_index, 1);

    state.set_page_size(PageSize::All);
    assert_eq!(state.page_index, 0);
    let view = state.refresh(&rows);
    assert_eq!(view.window.page_count, 1);
    assert_eq!(view.page_indices().len(), 120);
}

#[test]
fn narrowing_the_filter_resets_an_out_of_range_page() {
    let mut rows: Vec<CulturalEvent> = (0..30).map(|i| event(&format!("row {i:02}"), true)).collect();
    rows.push(event("needle", true));
    let mut state = ViewState::default();
    state.set_page_size(PageSize::Rows(10));
    state.refresh(&rows);
    state.last_page();
    assert_eq!(state.page_index, 3);

    state.set_filter_text("needle");
    let view = state.refresh(&rows);
    assert_eq!(state.page_index, 0);
    assert_eq!(names(&rows, view.page_indices()), ["needle"]);
}

#[test]
fn empty_result_still_has_one_page() {
    let rows = fruit();
    let mut state = ViewState::default();
    state.set_filter_text("nothing matches this");
    let view = state.refresh(&rows);
    assert!(view.is_empty());
    assert_eq!(view.window.page_count, 1);
    assert_eq!(view.window.range_label(), "0 of 0");
    assert!(!view.window.has_next());
}

#[test]
fn flag_filters_combine() {
    let mut rows = fruit();
    rows[2].show_in_home = true;
    rows[0].show_in_home = true;
    let filter = FilterState {
        home_only: true,
        published_only: true,
        ..Default::default()
    };
    assert_eq!(names(&rows, &filter_rows(&rows, &filter)), ["Cherry"]);
}

#[test]
fn compute_view_does_not_touch_state() {
    let rows = fruit();
    let mut state = ViewState::default();
    state.page_index = 9;
    let view = compute_view(&rows, &state);
    assert_eq!(view.window.page_index, 0);
    assert_eq!(state.page_index, 9);
}
