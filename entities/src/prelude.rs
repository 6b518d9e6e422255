pub use super::bookmark::Entity as Bookmark;
pub use super::care_guide::Entity as CareGuide;
pub use super::lesson::Entity as Lesson;
pub use super::practice_log::Entity as PracticeLog;
pub use super::progress::Entity as Progress;
pub use super::schedule_entry::Entity as ScheduleEntry;
pub use super::sheet_music::Entity as SheetMusic;
pub use super::theory_topic::Entity as TheoryTopic;
