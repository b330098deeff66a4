use crate::{
    app::settings::ViewSettings,
    cli::IconMode,
    domain::{
        chart::{ChartPoint, SeriesToggles, build_series},
        detail::WeatherDetailKind,
        error::ReportError,
        range::{TimeRange, select},
        report::Report,
        summary::summarize,
    },
};

/// State behind one weather detail screen.
///
/// The screen borrows the loaded reports and owns only the range and series
/// toggles. Chart data and the summary are recomputed on every call; callers
/// that cache them should invalidate when [`DetailsState::revision`] moves.
#[derive(Debug, Clone)]
pub struct DetailsState<'a> {
    pub kind: WeatherDetailKind,
    reports: &'a [Report],
    range: TimeRange,
    toggles: SeriesToggles,
    revision: u64,
}

impl<'a> DetailsState<'a> {
    pub fn new(kind: WeatherDetailKind, reports: &'a [Report]) -> Self {
        Self {
            kind,
            reports,
            range: TimeRange::default(),
            toggles: SeriesToggles::default(),
            revision: 0,
        }
    }

    pub fn with_settings(reports: &'a [Report], settings: &ViewSettings) -> Self {
        Self {
            kind: settings.kind,
            reports,
            range: settings.range,
            toggles: settings.toggles,
            revision: 0,
        }
    }

    pub fn reports(&self) -> &'a [Report] {
        self.reports
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn toggles(&self) -> SeriesToggles {
        self.toggles
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn available_ranges(&self) -> Vec<TimeRange> {
        TimeRange::available(self.reports.len())
    }

    pub fn selected_reports(&self) -> Result<&'a [Report], ReportError> {
        select(self.reports, self.range)
    }

    pub fn chart_data(&self) -> Result<Vec<ChartPoint>, ReportError> {
        Ok(build_series(
            self.kind,
            self.selected_reports()?,
            self.toggles,
        ))
    }

    pub fn summary(&self) -> Result<String, ReportError> {
        Ok(summarize(self.kind, self.selected_reports()?, self.toggles))
    }

    pub fn summary_title(&self) -> &'static str {
        self.kind.summary_title()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    pub fn icon(&self, mode: IconMode) -> &'static str {
        self.kind.icon(mode)
    }

    pub fn set_range(&mut self, range: TimeRange) -> bool {
        if self.range == range {
            return false;
        }
        self.range = range;
        self.bump();
        true
    }

    pub fn toggle_air_temp(&mut self) -> bool {
        let partner = self.toggles.ground_temp;
        let changed = flip_unless_last(&mut self.toggles.air_temp, partner);
        self.bump_if(changed)
    }

    pub fn toggle_ground_temp(&mut self) -> bool {
        let partner = self.toggles.air_temp;
        let changed = flip_unless_last(&mut self.toggles.ground_temp, partner);
        self.bump_if(changed)
    }

    pub fn toggle_sunrise(&mut self) -> bool {
        let partner = self.toggles.sunset;
        let changed = flip_unless_last(&mut self.toggles.sunrise, partner);
        self.bump_if(changed)
    }

    pub fn toggle_sunset(&mut self) -> bool {
        let partner = self.toggles.sunrise;
        let changed = flip_unless_last(&mut self.toggles.sunset, partner);
        self.bump_if(changed)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn bump_if(&mut self, changed: bool) -> bool {
        if changed {
            self.bump();
        }
        changed
    }
}

/// A visible series stays on while its partner is hidden.
fn flip_unless_last(target: &mut bool, partner_visible: bool) -> bool {
    if *target && !partner_visible {
        log::debug!("refusing to hide the last visible series");
        return false;
    }
    *target = !*target;
    true
}
