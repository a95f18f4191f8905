//! Seed records and demo configuration.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Seed data for a demo account.
pub struct UserSeed {
    pub email: String,
    pub password_hash: String,
}

/// One exercise row of a seeded workout.
pub struct WorkoutRowSeed {
    pub exercise_id: Uuid,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
}

/// Seed data for a workout and its rows.
pub struct WorkoutSeed {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub rows: Vec<WorkoutRowSeed>,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub users: usize,
    pub workouts_per_user: usize,
    /// Upper bound on exercise rows per workout.
    pub max_exercises_per_workout: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            users: 10,
            workouts_per_user: 5,
            max_exercises_per_workout: 4,
        }
    }
}

impl DemoConfig {
    pub fn new(users: usize) -> Self {
        Self {
            users,
            ..Default::default()
        }
    }

    pub fn with_workouts(mut self, workouts_per_user: usize) -> Self {
        self.workouts_per_user = workouts_per_user;
        self
    }

    pub fn total_workouts(&self) -> usize {
        self.users * self.workouts_per_user
    }
}
