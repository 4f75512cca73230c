//! Day/night cycle. Shares the tick contract (`update(time)`) with the rest
//! of the core; lighting and sky color belong to the render collaborator,
//! which reads `day_progress`/`is_night` from here.

/// Tracks where the current day stands.
#[derive(Debug)]
pub struct DayNightCycle {
    /// Length of one full day in seconds.
    day_duration: f32,
    /// Progress through the current day, [0, 1).
    day_progress: f32,
}

impl Default for DayNightCycle {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl DayNightCycle {
    pub fn new(day_duration: f32) -> Self {
        Self {
            day_duration,
            day_progress: 0.0,
        }
    }

    /// Update from total elapsed time in seconds.
    pub fn update(&mut self, time: f32) {
        self.day_progress = (time % self.day_duration) / self.day_duration;
    }

    /// Day is the middle half of the cycle; the rest is night.
    pub fn is_night(&self) -> bool {
        self.day_progress < 0.25 || self.day_progress > 0.75
    }

    pub fn day_progress(&self) -> f32 {
        self.day_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_wraps_each_day() {
        let mut cycle = DayNightCycle::new(20.0);
        cycle.update(5.0);
        assert!((cycle.day_progress() - 0.25).abs() < 1e-6);
        cycle.update(25.0);
        assert!((cycle.day_progress() - 0.25).abs() < 1e-6);
        cycle.update(19.9);
        assert!(cycle.day_progress() < 1.0);
    }

    #[test]
    fn night_spans_the_outer_quarters() {
        let mut cycle = DayNightCycle::new(20.0);
        cycle.update(0.0);
        assert!(cycle.is_night());
        cycle.update(10.0); // midday
        assert!(!cycle.is_night());
        cycle.update(16.0); // progress 0.8
        assert!(cycle.is_night());
    }
}
