pub mod admin;
pub mod auth;
pub mod categories;
pub mod exercises;
pub mod health;
pub mod progress;
pub mod users;
pub mod workouts;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
