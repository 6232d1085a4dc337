//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetches (through `state::remote`) and renders inside
//! the guard's layout. The three dashboard bodies are separate pages picked
//! by `dashboard::DashboardPage`.

pub mod capture;
pub mod command_center;
pub mod contacts;
pub mod daemon_terminal;
pub mod dashboard;
pub mod guide;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod punishments;
pub mod reports;
pub mod resistance_hub;
pub mod users;
