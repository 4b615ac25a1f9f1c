//! API routes

pub mod actions;
pub mod admin;
pub mod bills;
pub mod health;
pub mod leaderboard;
pub mod notifications;
pub mod rewards;
pub mod users;
