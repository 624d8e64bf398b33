pub mod error;
pub mod export;
pub mod split;
pub mod stats;
pub mod store;
pub mod types;
pub mod workout;

pub use error::{StoreError, WorkoutError};
pub use export::{default_export_name, export_csv, format_date, write_csv};
pub use split::{default_split, find_day, DayConfig};
pub use stats::{dashboard, resolve_best, session_volume, weekly_volume, WEEKS, WEEK_MS};
pub use store::{HistoryStore, HISTORY_FILE_NAME};
pub use types::{
    BestPerformance, Dashboard, ExerciseLog, LastActivity, SetEntry, SetType, VolumePoint,
    WorkoutSession,
};
pub use workout::{WorkoutLog, SETS_PER_EXERCISE};
