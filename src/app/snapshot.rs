#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::{
    app::state::DetailsState,
    cli::IconMode,
    domain::{
        error::ReportError,
        parse::{DateFormat, format_date},
        report::Report,
        summary::temperature_extremes,
    },
};

const LIST_BAR_WIDTH: usize = 20;

/// Plain-text rendering of one detail screen.
pub fn render_details(
    state: &DetailsState<'_>,
    mode: IconMode,
    max_points: usize,
) -> Result<String, ReportError> {
    let selected = state.selected_reports()?;
    let points = state.chart_data()?;

    let mut lines = vec![
        format!(
            "{} {} · {} ({} reports)",
            state.icon(mode),
            state.kind.title(),
            state.range(),
            selected.len()
        ),
        format!("{}: {}", state.summary_title(), state.summary()?),
        String::new(),
        state.description().to_string(),
        String::new(),
        format!("Chart ({} points)", points.len()),
    ];
    lines.extend(points.iter().take(max_points).map(|point| {
        format!(
            "  {}  {:<16} {}",
            point.x_axis,
            point.series.label(),
            point.y_axis.display()
        )
    }));
    if points.len() > max_points {
        lines.push(format!("  ... {} more", points.len() - max_points));
    }

    Ok(join_lines(lines))
}

/// Single-report view: air and ground temperature tiles, pressure with its
/// trend, then daylight, conditions and UV.
#[must_use]
pub fn render_report(report: &Report, mode: IconMode) -> String {
    let date = format_date(&report.terrestrial_date, DateFormat::Full);
    let header = if report.season.is_empty() {
        format!("Sol {} · {}", report.sol, date)
    } else {
        format!("Sol {} · {} · {}", report.sol, date, report.season)
    };
    let uv = report
        .uv_index()
        .map_or_else(|_| report.uv_irradiance.clone(), |uv| uv.label().to_string());

    join_lines([
        header,
        temperature_tile("Air", report.air_temps()),
        temperature_tile("Ground", report.ground_temps()),
        format!(
            "{:<10} {} {} Pa",
            "Pressure",
            report.pressure_relative.icon(mode),
            report.pressure
        ),
        format!(
            "{:<10} {}  Sunset {}",
            "Sunrise", report.sunrise, report.sunset
        ),
        format!("{:<10} {}", "Conditions", report.atmo_opacity),
        format!("{:<10} {}", "UV", uv),
    ])
}

fn temperature_tile(label: &str, temps: Result<(i32, i32), ReportError>) -> String {
    let (max, min) = temps.map_or_else(
        |_| ("--".to_string(), "--".to_string()),
        |(max, min)| (max.to_string(), min.to_string()),
    );
    format!("{label:<10} Max {max:>4} °C  Min {min:>4} °C")
}

fn join_lines(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

/// One row per report: sol, date and the air temperature range drawn against
/// the extremes of the whole list.
#[must_use]
pub fn render_report_list(reports: &[Report], mode: IconMode) -> String {
    let extremes = temperature_extremes(reports);

    join_lines(reports.iter().map(|report| {
        let date = format_date(&report.terrestrial_date, DateFormat::Abbreviated);
        let trend = report.pressure_relative.icon(mode);
        let row = match (report.air_temps(), extremes) {
            (Ok((max, min)), Some((lowest, highest))) => format!(
                "{:>4}° {} {:>4}°",
                min,
                range_bar(min, max, lowest, highest, mode),
                max
            ),
            _ => format!("{:>4}° {} {:>4}°", "--", " ".repeat(LIST_BAR_WIDTH), "--"),
        };
        format!(
            "Sol {:<5} {:<13} {}  {} {} Pa",
            report.sol, date, row, trend, report.pressure
        )
    }))
}

fn range_bar(min: i32, max: i32, lowest: i32, highest: i32, mode: IconMode) -> String {
    let (fill, empty) = match mode {
        IconMode::Ascii => ('=', '.'),
        IconMode::Unicode | IconMode::Emoji => ('█', '·'),
    };
    let (start, end) = bar_bounds(min, max, lowest, highest, LIST_BAR_WIDTH);
    (0..LIST_BAR_WIDTH)
        .map(|idx| if (start..end).contains(&idx) { fill } else { empty })
        .collect()
}

/// Cell span `[start, end)` of `min..max` inside a `width` wide bar scaled to
/// `lowest..highest`.
#[must_use]
pub fn bar_bounds(min: i32, max: i32, lowest: i32, highest: i32, width: usize) -> (usize, usize) {
    let span = (f64::from(highest) - f64::from(lowest)).max(1.0);
    let scale = |value: i32| {
        (((f64::from(value) - f64::from(lowest)) / span) * width as f64)
            .round()
            .clamp(0.0, width as f64) as usize
    };
    let start = scale(min);
    (start, scale(max).max(start))
}
