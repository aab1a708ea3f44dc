//! Planner session state and its transitions.
//!
//! `PlannerState` is an immutable snapshot. Every interaction (`select_day`,
//! `submit_event`, `set_search`, ...) returns a new snapshot and leaves the
//! receiver untouched, so the view can swap snapshots inside a signal and tests
//! can compare before/after without a renderer.
//!
//! Day-records are shared through `Rc`. Adding an event replaces exactly one
//! record; every other record in the new snapshot is the same allocation as
//! before.

use std::rc::Rc;

use rand::{rngs::StdRng, Rng, SeedableRng};
use time::Date;
use tracing::debug;

use crate::core::{color::HeatPalette, PlannerConfig, PlannerError};

use super::data::{generate_analytics_with, generate_days_with, ChartDatasets, DayRecord};
use super::search::{self, SearchHit};

/// Whether the day editor is showing, and for which day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Date),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn selected(&self) -> Option<Date> {
        match self {
            ModalState::Open(date) => Some(*date),
            ModalState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    pub days: Rc<[Rc<DayRecord>]>,
    pub analytics: Rc<ChartDatasets>,
    pub modal: ModalState,
    pub draft: String,
    pub search: String,
    pub dark_mode: bool,
    pub intensity_step: f64,
    pub palette: HeatPalette,
}

impl PlannerState {
    /// Build a fresh session from `config`, seeding the generator if asked to.
    pub fn new(config: &PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let state = match config.seed {
            Some(seed) => Self::generate(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(config, &mut StdRng::from_entropy()),
        };
        debug!(
            days = state.days.len(),
            seeded = config.seed.is_some(),
            "planner session generated"
        );
        Ok(state)
    }

    /// Build a session from an explicit random source. Does not validate `config`.
    pub fn generate<R: Rng + ?Sized>(config: &PlannerConfig, rng: &mut R) -> Self {
        let days = generate_days_with(rng, config.epoch, config.day_count);
        let analytics = generate_analytics_with(rng);
        Self::from_parts(config, days, analytics)
    }

    pub fn from_parts(
        config: &PlannerConfig,
        days: Vec<DayRecord>,
        analytics: ChartDatasets,
    ) -> Self {
        Self {
            days: days.into_iter().map(Rc::new).collect(),
            analytics: Rc::new(analytics),
            modal: ModalState::Closed,
            draft: String::new(),
            search: String::new(),
            dark_mode: false,
            intensity_step: config.intensity_step,
            palette: HeatPalette::from_config(config),
        }
    }

    pub fn day(&self, date: Date) -> Option<&Rc<DayRecord>> {
        // Days are sorted by date, so a binary search finds the record.
        self.days
            .binary_search_by(|day| day.date.cmp(&date))
            .ok()
            .map(|idx| &self.days[idx])
    }

    /// The day shown in the editor, if the editor is open.
    pub fn selected_day(&self) -> Option<&Rc<DayRecord>> {
        self.modal.selected().and_then(|date| self.day(date))
    }

    pub fn select_day(&self, date: Date) -> Result<Self, PlannerError> {
        if self.day(date).is_none() {
            return Err(PlannerError::UnknownDay(date));
        }
        debug!(%date, "day selected");
        Ok(Self {
            modal: ModalState::Open(date),
            ..self.clone()
        })
    }

    /// Hide the editor and discard whatever was typed.
    pub fn close_modal(&self) -> Self {
        Self {
            modal: ModalState::Closed,
            draft: String::new(),
            ..self.clone()
        }
    }

    pub fn set_draft(&self, draft: impl Into<String>) -> Self {
        Self {
            draft: draft.into(),
            ..self.clone()
        }
    }

    /// Record `text` on the selected day and close the editor.
    ///
    /// Blank text, or no open editor, leaves the snapshot unchanged.
    pub fn submit_event(&self, text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }
        let Some(date) = self.modal.selected() else {
            return self.clone();
        };
        let Ok(idx) = self.days.binary_search_by(|day| day.date.cmp(&date)) else {
            return self.clone();
        };

        let days: Rc<[Rc<DayRecord>]> = self
            .days
            .iter()
            .enumerate()
            .map(|(pos, day)| {
                if pos == idx {
                    Rc::new(day.with_event(trimmed.to_string(), self.intensity_step))
                } else {
                    Rc::clone(day)
                }
            })
            .collect();

        debug!(
            %date,
            events = days[idx].event_count(),
            intensity = days[idx].intensity,
            "event recorded"
        );

        Self {
            days,
            modal: ModalState::Closed,
            draft: String::new(),
            ..self.clone()
        }
    }

    /// Submit the current draft.
    pub fn submit_draft(&self) -> Self {
        self.submit_event(&self.draft)
    }

    pub fn set_search(&self, query: impl Into<String>) -> Self {
        Self {
            search: query.into(),
            ..self.clone()
        }
    }

    pub fn toggle_theme(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self.clone()
        }
    }

    /// Whether the search-results panel should render at all.
    pub fn search_active(&self) -> bool {
        !self.search.is_empty()
    }

    pub fn filtered_days(&self) -> Vec<Rc<DayRecord>> {
        search::filtered_days(&self.days, &self.search)
    }

    pub fn search_results(&self) -> Vec<SearchHit> {
        search::search_results(&self.days, &self.search)
    }
}
