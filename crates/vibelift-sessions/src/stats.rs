//! Training insights computed over a history snapshot.
//!
//! Every function here is pure: it reads a slice of finalized sessions and
//! returns a new value.

use crate::types::{BestPerformance, Dashboard, LastActivity, VolumePoint, WorkoutSession};

/// Milliseconds in one week.
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Number of trailing weeks shown on the volume chart.
pub const WEEKS: usize = 6;

/// Best working set from the most recent session that contains `exercise_name`.
///
/// `history` must be ordered newest first; it is scanned as given and never
/// sorted here. [`crate::HistoryStore`] keeps that order on load and insert.
///
/// Returns `None` when the exercise was never logged or when the matching
/// session has no working sets. A session whose working sets are all zero
/// still yields `Some` with a zero volume.
pub fn resolve_best(exercise_name: &str, history: &[WorkoutSession]) -> Option<BestPerformance> {
    let exercise = history.iter().find_map(|s| s.exercise(exercise_name))?;

    let mut best: Option<BestPerformance> = None;
    for set in exercise.sets.iter().filter(|s| s.is_working()) {
        let volume = set.volume();
        // Ties keep the earlier set.
        if best.map_or(true, |b| volume > b.volume) {
            best = Some(BestPerformance {
                weight: set.weight,
                reps: set.reps,
                volume,
            });
        }
    }

    best
}

/// Total volume of a session, warmups included.
pub fn session_volume(session: &WorkoutSession) -> f64 {
    session.exercises.iter().map(|ex| ex.volume()).sum()
}

/// Volume per trailing week relative to `now` (epoch millis).
///
/// Always returns [`WEEKS`] points labeled `W1`..`W6`, oldest first; `W6` is
/// the current week. Sessions older than six weeks, or dated after `now`,
/// are left out.
pub fn weekly_volume(history: &[WorkoutSession], now: i64) -> Vec<VolumePoint> {
    let mut buckets = [0.0_f64; WEEKS];

    for session in history {
        let weeks_ago = now.saturating_sub(session.date).div_euclid(WEEK_MS);
        if (0..WEEKS as i64).contains(&weeks_ago) {
            buckets[weeks_ago as usize] += session_volume(session);
        }
    }

    (0..WEEKS)
        .rev()
        .map(|offset| VolumePoint {
            label: format!("W{}", WEEKS - offset),
            volume: buckets[offset],
        })
        .collect()
}

/// Weekly chart plus a summary of the newest session.
pub fn dashboard(history: &[WorkoutSession], now: i64) -> Dashboard {
    let last = history.first().map(|s| LastActivity {
        id: s.id.clone(),
        day_name: s.day_name.clone(),
        date: s.date,
        volume: session_volume(s),
        exercise_count: s.exercises.len(),
    });

    Dashboard {
        weekly: weekly_volume(history, now),
        last,
    }
}
