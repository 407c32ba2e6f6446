pub mod goal;
pub mod profile;
pub mod stats;
pub mod workout;

pub use goal::{Goal, NewGoal};
pub use profile::UserProfile;
pub use stats::{MonthStats, WorkoutSummary};
pub use workout::{NewWorkout, Workout, WorkoutType};
