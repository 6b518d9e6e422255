// Mapping from stored entities to API DTOs

use entities::{
    bookmark, care_guide, lesson, practice_log, progress, schedule_entry, sheet_music,
    theory_topic,
};
use sea_orm::entity::prelude::Json;

use super::models::ContentBlock;
use super::statistics::StatisticsSnapshot;
use crate::api::models::{
    BookmarkDto, CareGuideDto, LessonDto, PracticeLogDto, ProgressDto, ScheduleEntryDto,
    SheetMusicDto, StatisticsDto, TheoryTopicDto,
};

/// Decodes a stored content column; malformed content renders as empty.
pub fn content_blocks(item_id: &str, content: Json) -> Vec<ContentBlock> {
    match serde_json::from_value(content) {
        Ok(blocks) => blocks,
        Err(e) => {
            tracing::warn!(item_id, error = %e, "stored content is not a list of blocks");
            Vec::new()
        }
    }
}

pub fn map_lesson(model: lesson::Model) -> LessonDto {
    let content = content_blocks(&model.id, model.content);
    LessonDto {
        id: model.id,
        title: model.title,
        description: model.description,
        level: model.level,
        order: model.display_order,
        duration_minutes: model.duration_minutes,
        category: model.category,
        youtube_id: model.youtube_id,
        content,
    }
}

pub fn map_theory_topic(model: theory_topic::Model) -> TheoryTopicDto {
    let content = content_blocks(&model.id, model.content);
    TheoryTopicDto {
        id: model.id,
        title: model.title,
        description: model.description,
        order: model.display_order,
        category: model.category,
        content,
    }
}

pub fn map_sheet_music(model: sheet_music::Model) -> SheetMusicDto {
    SheetMusicDto {
        id: model.id,
        title: model.title,
        composer: model.composer,
        difficulty: model.difficulty,
        order: model.display_order,
        genre: model.genre,
        key: model.music_key,
        time_signature: model.time_signature,
        description: model.description,
        notes: model.notes,
        attribution: model.attribution,
    }
}

pub fn map_care_guide(model: care_guide::Model) -> CareGuideDto {
    let content = content_blocks(&model.id, model.content);
    CareGuideDto {
        id: model.id,
        title: model.title,
        description: model.description,
        order: model.display_order,
        icon: model.icon,
        content,
    }
}

pub fn map_practice_log(model: practice_log::Model) -> PracticeLogDto {
    PracticeLogDto {
        id: model.id,
        date: model.date,
        duration_minutes: model.duration_minutes,
        notes: model.notes,
        lesson_id: model.lesson_id,
        created_at: model.created_at,
    }
}

pub fn map_progress(model: progress::Model) -> ProgressDto {
    ProgressDto {
        id: model.id,
        item_id: model.item_id,
        item_type: model.item_type,
        completed: model.completed,
        updated_at: model.updated_at,
    }
}

pub fn map_bookmark(model: bookmark::Model) -> BookmarkDto {
    BookmarkDto {
        id: model.id,
        item_id: model.item_id,
        item_type: model.item_type,
        title: model.title,
        created_at: model.created_at,
    }
}

pub fn map_schedule_entry(model: schedule_entry::Model) -> ScheduleEntryDto {
    ScheduleEntryDto {
        id: model.id,
        day_of_week: model.day_of_week,
        time: model.time,
        duration_minutes: model.duration_minutes,
        focus_area: model.focus_area,
        created_at: model.created_at,
    }
}

pub fn map_statistics(snapshot: StatisticsSnapshot) -> StatisticsDto {
    StatisticsDto {
        total_lessons: snapshot.total_lessons,
        completed_lessons: snapshot.completed_lessons,
        total_theory: snapshot.total_theory,
        completed_theory: snapshot.completed_theory,
        total_practice_minutes: snapshot.total_practice_minutes,
        practice_streak: snapshot.practice_streak,
        total_sheet_music: snapshot.total_sheet_music,
        bookmarks_count: snapshot.bookmarks_count,
    }
}
