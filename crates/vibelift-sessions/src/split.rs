use serde::{Deserialize, Serialize};

/// A training day and the exercises it can include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayConfig {
    pub id: u32,
    pub title: String,
    pub pool: Vec<String>,
}

impl DayConfig {
    pub fn new(id: u32, title: &str, pool: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            pool: pool.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The built-in five-day split.
pub fn default_split() -> Vec<DayConfig> {
    vec![
        DayConfig::new(
            1,
            "Day 1 (Chest/Back)",
            &[
                "Seated Machine Row",
                "Lat Pulldown",
                "Incline DB Chest Press",
                "Pec Deck",
                "Incline Smith Bench",
                "Seated Chest Press",
                "Low to High Cable Fly",
            ],
        ),
        DayConfig::new(
            2,
            "Day 2 (Shoulder/Arms)",
            &[
                "Tricep Pushdown Bar",
                "Bicep Curl Rope",
                "Incline DB Curl",
                "Tricep OHP Cable",
                "Cable Fly Shoulder",
                "Machine Shoulder Press",
            ],
        ),
        DayConfig::new(
            3,
            "Day 3 (Legs)",
            &["Seated Leg Press", "Leg Curl", "Quad Extension", "RDL"],
        ),
        DayConfig::new(
            4,
            "Day 4 (Upper)",
            &[
                "Incline DB Press",
                "Seated Cable Row",
                "Machine Shoulder Press",
                "Lat Pulldown",
                "Pec Deck",
                "Low to High Cable Fly",
                "Reverse Pec Deck",
                "Incline DB Curl",
                "Tricep Pushdown Bar",
                "Preacher Curl",
                "Tricep OHP Cable",
            ],
        ),
        DayConfig::new(
            5,
            "Day 5 (Legs)",
            &[
                "Smith Squat",
                "Leg Press Seated",
                "Leg Extension",
                "Bulgarian Split Squat",
            ],
        ),
    ]
}

pub fn find_day(split: &[DayConfig], id: u32) -> Option<&DayConfig> {
    split.iter().find(|d| d.id == id)
}
