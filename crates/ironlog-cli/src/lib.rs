//! # Ironlog CLI
//!
//! Database seeding utilities for Ironlog development and testing.
//!
//! The binary wraps these functions; integration tests call
//! [`seeder::ensure_default_admin`] directly to get the seeded admin account.
//!
//! ```ignore
//! use ironlog_cli::seeder::{self, DemoConfig};
//!
//! seeder::seed_defaults(&pool).await?;
//! seeder::seed_demo(&pool, DemoConfig::new(20)).await?;
//! ```

pub mod seeder;
