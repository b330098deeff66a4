mod common;

use common::{cli, feed_entry, write_feed};
use mars_weather::{
    app::{settings::ViewSettings, state::DetailsState},
    data::feed::load_feed,
    domain::{
        chart::SeriesKind, detail::WeatherDetailKind, range::TimeRange, report::PressureTrend,
    },
};

#[test]
fn feed_on_disk_drives_a_daylight_screen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(
        dir.path(),
        vec![
            feed_entry(3820, "2023-04-30", "05:24", "17:20"),
            feed_entry(3821, "2023-05-01", "05:23", "17:21"),
        ],
    );

    let reports = load_feed(&path).expect("feed loads");
    assert_eq!(reports[0].sol, 3821);
    assert_eq!(reports[0].pressure_relative, PressureTrend::Higher);

    let mut state = DetailsState::new(WeatherDetailKind::Daylight, &reports);
    assert!(state.selected_reports().is_err());
    assert!(state.set_range(TimeRange::All));

    // 718 and 716 minutes of daylight.
    assert_eq!(state.summary().expect("summary"), "11 Hours 57 Minutes");

    assert!(state.toggle_sunset());
    let series: Vec<_> = state
        .chart_data()
        .expect("chart")
        .iter()
        .map(|point| point.series)
        .collect();
    assert_eq!(
        series,
        vec![
            SeriesKind::Sunrise,
            SeriesKind::Sunset,
            SeriesKind::Sunrise,
            SeriesKind::Sunset,
        ]
    );
}

#[test]
fn settings_from_cli_configure_the_screen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(dir.path(), vec![feed_entry(1, "2012-08-07", "05:30", "17:30")]);
    let mut args = cli(path);
    args.no_air_temp = true;
    args.ground_temp = true;

    let reports = load_feed(&args.feed).expect("feed loads");
    let settings = ViewSettings::from_cli(&args);
    let state = DetailsState::with_settings(&reports, &settings);

    // Ground only: -5 and -83.
    assert_eq!(state.summary().expect("summary"), "-44.0 °C");
}

#[test]
fn run_reports_missing_feed_with_context() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.json");

    let err = mars_weather::run(&cli(missing)).expect_err("no feed on disk");
    assert!(format!("{err:#}").contains("absent.json"), "got: {err:#}");
}

#[test]
fn run_rejects_hiding_every_temperature_series() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(dir.path(), vec![feed_entry(1, "2012-08-07", "05:30", "17:30")]);
    let mut args = cli(path);
    args.no_air_temp = true;

    assert!(mars_weather::run(&args).is_err());
}

#[test]
fn run_surfaces_short_feed_for_fixed_ranges() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(dir.path(), vec![feed_entry(1, "2012-08-07", "05:30", "17:30")]);
    let mut args = cli(path);
    args.range = mars_weather::cli::RangeArg::Year;

    let err = mars_weather::run(&args).expect_err("one report is not a year");
    assert!(
        format!("{err:#}").contains("1 Year needs 365 reports but only 1 are loaded"),
        "got: {err:#}"
    );
}

#[test]
fn run_prints_list_and_details_for_a_valid_feed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(dir.path(), vec![feed_entry(1, "2012-08-07", "05:30", "17:30")]);
    let mut args = cli(path);

    assert!(mars_weather::run(&args).is_ok());
    args.list = true;
    assert!(mars_weather::run(&args).is_ok());
}

#[test]
fn run_prints_a_single_sol_and_rejects_unknown_ones() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_feed(
        dir.path(),
        vec![
            feed_entry(2, "2012-08-08", "05:30", "17:30"),
            feed_entry(1, "2012-08-07", "05:30", "17:30"),
        ],
    );
    let mut args = cli(path);

    args.sol = Some(1);
    assert!(mars_weather::run(&args).is_ok());

    args.sol = Some(7);
    let err = mars_weather::run(&args).expect_err("sol 7 is not loaded");
    assert!(format!("{err:#}").contains("sol 7 is not in the feed"), "got: {err:#}");
}

#[test]
fn feed_with_null_reading_still_loads_every_sol() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut broken = feed_entry(1, "2012-08-07", "05:30", "17:30");
    broken["min_temp"] = serde_json::Value::Null;
    let path = write_feed(
        dir.path(),
        vec![feed_entry(2, "2012-08-08", "05:30", "17:30"), broken],
    );

    let reports = load_feed(&path).expect("feed loads");
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1].min_temp, "--");
}
