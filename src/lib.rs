pub mod archive;
pub mod engine;
pub mod entry;
pub mod export;
pub mod follow;
pub mod html;
pub mod report;
pub mod stats;

pub mod prelude {
    pub use crate::follow::{FollowRecord, Relation, RelationRow};
}
