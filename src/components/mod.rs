pub mod app;
pub mod character_stats;
pub mod contact_boss;
pub mod landing;
pub mod navigation;
pub mod progress_bar;
pub mod project_battles;
pub mod skill_tree;
pub mod timeline;

pub use app::{App, GameContext};
