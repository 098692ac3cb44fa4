//! Daily discovery checklist and quick activity recommendations.

pub mod activities;
pub mod tasks;

pub use activities::{find_activity, Activity, ActivityType, EnergyLevel, ACTIVITIES};
pub use tasks::{
    daily_discovery_tasks, day_hash, discovery_mood, recommended_activities, DiscoveryTask,
    TaskCategory, TARGET_COUNT,
};
