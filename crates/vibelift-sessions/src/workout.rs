use crate::error::WorkoutError;
use crate::split::DayConfig;
use crate::types::{ExerciseLog, SetEntry, SetType, WorkoutSession};

/// Number of sets every exercise starts with: one warmup, three working.
pub const SETS_PER_EXERCISE: usize = 4;

fn blank_sets() -> Vec<SetEntry> {
    vec![
        SetEntry::new(SetType::Warmup, "Warmup", 0.0, 0),
        SetEntry::new(SetType::Working, "Working Set 1", 0.0, 0),
        SetEntry::new(SetType::Working, "Working Set 2", 0.0, 0),
        SetEntry::new(SetType::Working, "Working Set 3", 0.0, 0),
    ]
}

/// An in-progress workout. It only becomes part of history through
/// [`WorkoutLog::finish`].
#[derive(Debug, Clone)]
pub struct WorkoutLog {
    day_name: String,
    logs: Vec<ExerciseLog>,
}

impl WorkoutLog {
    pub fn new(day: &DayConfig, exercises: &[String]) -> Result<Self, WorkoutError> {
        if exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }
        for (i, name) in exercises.iter().enumerate() {
            if exercises[..i].contains(name) {
                return Err(WorkoutError::DuplicateExercise(name.clone()));
            }
        }

        let logs = exercises
            .iter()
            .map(|name| ExerciseLog {
                name: name.clone(),
                sets: blank_sets(),
            })
            .collect();

        Ok(Self {
            day_name: day.title.clone(),
            logs,
        })
    }

    pub fn day_name(&self) -> &str {
        &self.day_name
    }

    pub fn exercises(&self) -> &[ExerciseLog] {
        &self.logs
    }

    pub fn update_set(
        &mut self,
        exercise: usize,
        set: usize,
        weight: f64,
        reps: i64,
    ) -> Result<(), WorkoutError> {
        if !weight.is_finite() {
            return Err(WorkoutError::NonFiniteWeight);
        }
        let log = self
            .logs
            .get_mut(exercise)
            .ok_or(WorkoutError::ExerciseOutOfRange(exercise))?;
        let entry = log
            .sets
            .get_mut(set)
            .ok_or(WorkoutError::SetOutOfRange { exercise, set })?;

        entry.weight = weight;
        entry.reps = reps;
        Ok(())
    }

    /// Freeze the workout into a session dated `now` (epoch millis).
    /// Exercises where nothing was entered are dropped.
    pub fn finish(self, now: i64) -> WorkoutSession {
        let exercises = self
            .logs
            .into_iter()
            .filter(|l| l.sets.iter().any(SetEntry::is_performed))
            .collect();

        WorkoutSession {
            id: now.to_string(),
            date: now,
            day_name: self.day_name,
            exercises,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::{default_split, find_day};

    fn legs() -> DayConfig {
        find_day(&default_split(), 3).unwrap().clone()
    }

    #[test]
    fn test_new_uses_four_set_template() {
        let day = legs();
        let log = WorkoutLog::new(&day, &day.pool).unwrap();

        assert_eq!(log.day_name(), "Day 3 (Legs)");
        assert_eq!(log.exercises().len(), 4);
        for ex in log.exercises() {
            assert_eq!(ex.sets.len(), SETS_PER_EXERCISE);
            assert_eq!(ex.sets[0].set_type, SetType::Warmup);
            assert!(ex.sets[1..].iter().all(|s| s.is_working()));
            assert!(ex.sets.iter().all(|s| !s.is_performed()));
        }
        assert_eq!(log.exercises()[0].sets[3].label, "Working Set 3");
    }

    #[test]
    fn test_new_rejects_empty_selection() {
        let err = WorkoutLog::new(&legs(), &[]).unwrap_err();
        assert_eq!(err, WorkoutError::NoExercises);
    }

    #[test]
    fn test_update_set_out_of_range() {
        let day = legs();
        let mut log = WorkoutLog::new(&day, &day.pool[..1]).unwrap();

        assert_eq!(
            log.update_set(1, 0, 10.0, 5),
            Err(WorkoutError::ExerciseOutOfRange(1))
        );
        assert_eq!(
            log.update_set(0, 4, 10.0, 5),
            Err(WorkoutError::SetOutOfRange {
                exercise: 0,
                set: 4
            })
        );
    }

    #[test]
    fn test_new_rejects_repeated_exercise() {
        let names = vec!["RDL".to_string(), "Leg Curl".to_string(), "RDL".to_string()];
        let err = WorkoutLog::new(&legs(), &names).unwrap_err();
        assert_eq!(err, WorkoutError::DuplicateExercise("RDL".to_string()));
    }

    #[test]
    fn test_update_set_rejects_non_finite_weight() {
        let day = legs();
        let mut log = WorkoutLog::new(&day, &day.pool[..1]).unwrap();

        for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                log.update_set(0, 1, weight, 5),
                Err(WorkoutError::NonFiniteWeight)
            );
        }
        // The set keeps its previous value.
        assert_eq!(log.exercises()[0].sets[1].weight, 0.0);
        assert!(log.update_set(0, 1, -2.5, -3).is_ok());
        assert_eq!(log.exercises()[0].sets[1].reps, -3);
    }

    #[test]
    fn test_finish_drops_untouched_exercises() {
        let day = legs();
        let mut log = WorkoutLog::new(&day, &day.pool).unwrap();
        log.update_set(1, 1, 90.0, 10).unwrap();
        // Reps without weight still counts as performed.
        log.update_set(3, 2, 0.0, 12).unwrap();

        let session = log.finish(1_700_000_000_000);

        assert_eq!(session.id, "1700000000000");
        assert_eq!(session.date, 1_700_000_000_000);
        assert_eq!(session.day_name, "Day 3 (Legs)");
        let names: Vec<&str> = session.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Leg Curl", "RDL"]);
        assert_eq!(session.exercises[0].sets[1].weight, 90.0);
        assert_eq!(session.exercises[0].sets.len(), SETS_PER_EXERCISE);
    }
}
