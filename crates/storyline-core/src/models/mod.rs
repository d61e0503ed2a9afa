pub mod date;
pub mod entity;
pub mod event;
pub mod granularity;
pub mod sentence;
pub mod topic;

pub use date::{DateOrder, DateSettings, SubDate};
pub use entity::{Entity, EntityLabel, EntitySpan};
pub use event::Event;
pub use granularity::Granularity;
pub use sentence::AnnotatedSentence;
pub use topic::TopicId;
