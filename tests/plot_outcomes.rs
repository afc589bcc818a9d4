// tests/plot_outcomes.rs
//
// Runner outcomes, from empty stores to written charts.
//
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use nick_rec::config::options::{PlotOptions, View};
use nick_rec::runner::{run, Outcome};
use nick_rec::store::Store;
use nick_rec::Error;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("nick_rec_plot_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn options(dir: &PathBuf, view: View) -> PlotOptions {
    PlotOptions { view, db_path: dir.join("data.db"), out_dir: dir.join("charts") }
}

fn seeded(dir: &PathBuf) {
    let store = Store::open(dir.join("data.db")).unwrap();
    store.initialize().unwrap();
    for (d, h, occ) in [(24, 9, 10), (25, 12, 20), (26, 18, 30)] {
        let ts = NaiveDate::from_ymd_opt(2021, 3, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
        store.append(ts, occ).unwrap();
    }
}

#[test]
fn empty_store_asks_for_collection_first() {
    let dir = tmp_dir("empty");
    Store::open(dir.join("data.db")).unwrap().initialize().unwrap();

    for view in [View::Day(None), View::Heatmap, View::All] {
        assert_eq!(run(&options(&dir, view)).unwrap(), Outcome::NoData);
    }
    assert!(!dir.join("charts").exists());
}

#[test]
fn date_without_samples_renders_nothing() {
    let dir = tmp_dir("nodate");
    seeded(&dir);
    let date = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();

    let outcome = run(&options(&dir, View::Day(Some(date)))).unwrap();
    assert_eq!(outcome, Outcome::NoDataForDate(date));
    assert!(!dir.join("charts").exists());
}

#[test]
fn dump_lists_rows_in_insertion_order() {
    let dir = tmp_dir("dump");
    seeded(&dir);

    let Outcome::Dumped(rows) = run(&options(&dir, View::Dump)).unwrap() else {
        panic!("expected a dump");
    };
    let occ: Vec<Option<i64>> = rows.iter().map(|r| r.occupancy).collect();
    assert_eq!(occ, vec![Some(10), Some(20), Some(30)]);
    assert_eq!(rows[0].timestamp, "2021-03-24 09:00:00.000000");
}

#[test]
fn missing_database_is_fatal() {
    let dir = tmp_dir("missing");
    assert!(matches!(
        run(&options(&dir, View::Heatmap)),
        Err(Error::StorageUnavailable { .. })
    ));
}

#[test]
fn corrupt_history_is_fatal() {
    let dir = tmp_dir("corrupt");
    seeded(&dir);
    let conn = rusqlite::Connection::open(dir.join("data.db")).unwrap();
    conn.execute(
        "INSERT INTO OCCUPANCY (DATETIME, OCCUPANCY) VALUES ('26/03/2021 10am', 5)",
        [],
    )
    .unwrap();
    drop(conn);

    match run(&options(&dir, View::All)) {
        Err(Error::MalformedTimestamp { value }) => assert_eq!(value, "26/03/2021 10am"),
        other => panic!("expected MalformedTimestamp, got {other:?}"),
    }
}

fn assert_png(outcome: Outcome, expected: PathBuf) {
    assert_eq!(outcome, Outcome::Rendered(expected.clone()));
    let len = fs::metadata(&expected).unwrap().len();
    assert!(len > 0, "{} is empty", expected.display());
}

#[test]
fn latest_day_is_rendered() {
    let dir = tmp_dir("day");
    seeded(&dir);

    let outcome = run(&options(&dir, View::Day(None))).unwrap();
    assert_png(outcome, dir.join("charts").join("day_2021-03-26.png"));
}

#[test]
fn heatmap_is_rendered() {
    let dir = tmp_dir("heatmap");
    seeded(&dir);

    let outcome = run(&options(&dir, View::Heatmap)).unwrap();
    assert_png(outcome, dir.join("charts").join("heatmap.png"));
}

#[test]
fn all_data_is_rendered() {
    let dir = tmp_dir("all");
    seeded(&dir);

    let outcome = run(&options(&dir, View::All)).unwrap();
    assert_png(outcome, dir.join("charts").join("all.png"));
}
