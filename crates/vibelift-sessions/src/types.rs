use serde::{Deserialize, Serialize};

/// Whether a set counts toward training effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Warmup,
    Working,
}

impl SetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::Warmup => "warmup",
            SetType::Working => "working",
        }
    }
}

impl std::fmt::Display for SetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    pub weight: f64,
    pub reps: i64,
    #[serde(rename = "type")]
    pub set_type: SetType,
    pub label: String,
}

impl SetEntry {
    pub fn new(set_type: SetType, label: impl Into<String>, weight: f64, reps: i64) -> Self {
        Self {
            weight,
            reps,
            set_type,
            label: label.into(),
        }
    }

    pub fn is_working(&self) -> bool {
        self.set_type == SetType::Working
    }

    /// A zero-weight, zero-rep set was left blank by the user.
    pub fn is_performed(&self) -> bool {
        self.reps > 0 || self.weight > 0.0
    }

    pub fn volume(&self) -> f64 {
        self.weight * self.reps as f64
    }
}

/// Sets logged for one exercise within a session, warmups first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub name: String,
    pub sets: Vec<SetEntry>,
}

impl ExerciseLog {
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }

    pub fn performed_sets(&self) -> usize {
        self.sets.iter().filter(|s| s.is_performed()).count()
    }
}

/// A completed workout. Sessions are only ever stored finalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    /// Epoch milliseconds.
    pub date: i64,
    pub day_name: String,
    pub exercises: Vec<ExerciseLog>,
}

impl WorkoutSession {
    pub fn exercise(&self, name: &str) -> Option<&ExerciseLog> {
        self.exercises.iter().find(|ex| ex.name == name)
    }
}

/// Highest-volume working set of an exercise within one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestPerformance {
    pub weight: f64,
    pub reps: i64,
    pub volume: f64,
}

/// One bar of the weekly volume chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumePoint {
    pub label: String,
    pub volume: f64,
}

/// Summary of the newest session, shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastActivity {
    pub id: String,
    pub day_name: String,
    pub date: i64,
    pub volume: f64,
    pub exercise_count: usize,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub weekly: Vec<VolumePoint>,
    pub last: Option<LastActivity>,
}
