//! Domain records exchanged with the API
//!
//! Plain serde data types. Unknown JSON properties are ignored everywhere
//! and enum-like fields tolerate unrecognized server values.

pub mod assignment;
pub mod pool;
pub mod project;
pub mod skill;
pub mod task;

pub use assignment::{Assignment, AssignmentField, AssignmentStatus};
pub use pool::{Pool, PoolField, PoolPatch, PoolStatus};
pub use project::{Project, ProjectField, ProjectPatch, ProjectStatus};
pub use skill::{Skill, SkillField};
pub use task::{Task, TaskField, TaskPatch};
