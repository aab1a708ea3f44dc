//! Day-records and synthetic chart datasets.

use std::iter;

use rand::Rng;
use time::Date;

use crate::core::config::DEFAULT_EPOCH;

/// One calendar day on the heatmap strip. Identity is `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: Date,
    /// Busyness score in `[0, 1]`.
    pub intensity: f64,
    pub events: Vec<String>,
}

impl DayRecord {
    pub fn new(date: Date, intensity: f64) -> Self {
        Self {
            date,
            intensity: intensity.clamp(0.0, 1.0),
            events: Vec::new(),
        }
    }

    /// Copy of this record with `event` appended and intensity nudged by `step`.
    pub fn with_event(&self, event: String, step: f64) -> Self {
        let mut events = Vec::with_capacity(self.events.len() + 1);
        events.extend(self.events.iter().cloned());
        events.push(event);
        Self {
            date: self.date,
            intensity: (self.intensity + step).clamp(0.0, 1.0),
            events,
        }
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPoint {
    /// Calendar month, 1 through 12.
    pub month: u8,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: f64,
}

/// Read-only datasets behind the three analytics panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDatasets {
    /// Monthly completion rate in `[0, 100)`.
    pub task_completion: Vec<MonthlyPoint>,
    /// Fixed category shares summing to 100.
    pub category_breakdown: Vec<CategoryShare>,
    /// Monthly productivity score in `[50, 100)`.
    pub productivity_trend: Vec<MonthlyPoint>,
}

pub const MONTHS: u8 = 12;

/// `n` contiguous days from the default epoch with random intensity.
pub fn generate_days(n: usize) -> Vec<DayRecord> {
    generate_days_with(&mut rand::thread_rng(), DEFAULT_EPOCH, n)
}

/// `n` contiguous days from `epoch`, each with an intensity drawn from `[0, 1)`
/// and no events. Stops early only if the calendar runs out of dates.
pub fn generate_days_with<R: Rng + ?Sized>(rng: &mut R, epoch: Date, n: usize) -> Vec<DayRecord> {
    iter::successors(Some(epoch), |date| date.next_day())
        .take(n)
        .map(|date| DayRecord::new(date, rng.gen::<f64>()))
        .collect()
}

pub fn generate_analytics() -> ChartDatasets {
    generate_analytics_with(&mut rand::thread_rng())
}

pub fn generate_analytics_with<R: Rng + ?Sized>(rng: &mut R) -> ChartDatasets {
    let task_completion = (1..=MONTHS)
        .map(|month| MonthlyPoint {
            month,
            value: rng.gen_range(0.0..100.0),
        })
        .collect();

    let category_breakdown = vec![
        CategoryShare {
            name: "Work",
            value: 40.0,
        },
        CategoryShare {
            name: "Fitness",
            value: 30.0,
        },
        CategoryShare {
            name: "Personal",
            value: 30.0,
        },
    ];

    let productivity_trend = (1..=MONTHS)
        .map(|month| MonthlyPoint {
            month,
            value: rng.gen_range(50.0..100.0),
        })
        .collect();

    ChartDatasets {
        task_completion,
        category_breakdown,
        productivity_trend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::{macros::date, Duration};

    #[test]
    fn days_are_contiguous_from_epoch() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in [0usize, 1, 31, 366, 400] {
            let days = generate_days_with(&mut rng, DEFAULT_EPOCH, n);
            assert_eq!(days.len(), n);
            for (offset, day) in days.iter().enumerate() {
                assert_eq!(day.date, DEFAULT_EPOCH + Duration::days(offset as i64));
                assert!((0.0..1.0).contains(&day.intensity));
                assert!(day.events.is_empty());
            }
        }
    }

    #[test]
    fn leap_day_is_included() {
        let mut rng = StdRng::seed_from_u64(3);
        let days = generate_days_with(&mut rng, DEFAULT_EPOCH, 366);
        assert!(days.iter().any(|day| day.date == date!(2024 - 02 - 29)));
        assert_eq!(days.last().map(|day| day.date), Some(date!(2024 - 12 - 31)));
    }

    #[test]
    fn generation_stops_at_calendar_end() {
        let mut rng = StdRng::seed_from_u64(5);
        let days = generate_days_with(&mut rng, Date::MAX, 10);
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn unseeded_generator_uses_default_epoch() {
        let days = generate_days(3);
        assert_eq!(days[0].date, DEFAULT_EPOCH);
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn analytics_shapes_and_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let data = generate_analytics_with(&mut rng);

        assert_eq!(data.task_completion.len(), 12);
        assert_eq!(data.productivity_trend.len(), 12);
        for (idx, point) in data.task_completion.iter().enumerate() {
            assert_eq!(point.month as usize, idx + 1);
            assert!((0.0..100.0).contains(&point.value));
        }
        for point in &data.productivity_trend {
            assert!((50.0..100.0).contains(&point.value));
        }

        let names: Vec<_> = data.category_breakdown.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Work", "Fitness", "Personal"]);
        let total: f64 = data.category_breakdown.iter().map(|c| c.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn with_event_clamps_intensity() {
        let day = DayRecord::new(DEFAULT_EPOCH, 0.95);
        let next = day.with_event("Run".into(), 0.2);
        assert_eq!(next.intensity, 1.0);
        assert_eq!(next.events, vec!["Run".to_string()]);
        assert!(day.events.is_empty());
    }
}
