pub mod discipline_review;
pub mod journal;

pub use discipline_review::{BucketStats, DisciplineReview, ReviewDimension};
pub use journal::{JournalSnapshot, ProtocolReport};
