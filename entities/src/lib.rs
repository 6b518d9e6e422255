//! SeaORM entities for the Virtuoso store.

pub mod prelude;

pub mod bookmark;
pub mod care_guide;
pub mod lesson;
pub mod practice_log;
pub mod progress;
pub mod schedule_entry;
pub mod sheet_music;
pub mod theory_topic;
