// First-start catalog seeding from the embedded YAML document

use anyhow::Context;
use entities::{
    care_guide, lesson,
    prelude::{CareGuide, Lesson, SheetMusic, TheoryTopic},
    sheet_music, theory_topic,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set, TransactionTrait};
use serde::Deserialize;

use crate::domain::models::ContentBlock;

const CATALOG_YAML: &str = include_str!("../../seed/catalog.yaml");

#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    pub lessons: Vec<LessonSeed>,
    pub theory: Vec<TheorySeed>,
    pub sheet_music: Vec<SheetMusicSeed>,
    pub care_guides: Vec<CareGuideSeed>,
}

#[derive(Debug, Deserialize)]
pub struct LessonSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: String,
    pub order: i32,
    pub duration_minutes: i32,
    pub category: String,
    pub youtube_id: Option<String>,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct TheorySeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub category: String,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct SheetMusicSeed {
    pub id: String,
    pub title: String,
    pub composer: String,
    pub difficulty: String,
    pub order: i32,
    pub genre: String,
    pub key: String,
    pub time_signature: String,
    pub description: String,
    pub notes: String,
    pub attribution: String,
}

#[derive(Debug, Deserialize)]
pub struct CareGuideSeed {
    pub id: String,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub icon: String,
    pub content: Vec<ContentBlock>,
}

pub fn load_catalog() -> anyhow::Result<SeedCatalog> {
    serde_yml::from_str(CATALOG_YAML).with_context(|| "Failed to parse embedded seed catalog")
}

/// Inserts the catalog when the lessons table is empty.
///
/// Returns whether anything was written. All four tables are filled in one
/// transaction.
#[tracing::instrument(level = "debug", skip(db))]
pub async fn seed_catalog(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let existing = Lesson::find()
        .count(db)
        .await
        .with_context(|| "Failed to count lessons")?;
    if existing > 0 {
        tracing::debug!(existing, "catalog already present, skipping seed");
        return Ok(false);
    }

    let catalog = load_catalog()?;
    let counts = (
        catalog.lessons.len(),
        catalog.theory.len(),
        catalog.sheet_music.len(),
        catalog.care_guides.len(),
    );

    let lessons = catalog
        .lessons
        .into_iter()
        .map(|l| {
            Ok(lesson::ActiveModel {
                id: Set(l.id),
                title: Set(l.title),
                description: Set(l.description),
                level: Set(l.level),
                display_order: Set(l.order),
                duration_minutes: Set(l.duration_minutes),
                category: Set(l.category),
                youtube_id: Set(l.youtube_id),
                content: Set(serde_json::to_value(l.content)?),
            })
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let theory = catalog
        .theory
        .into_iter()
        .map(|t| {
            Ok(theory_topic::ActiveModel {
                id: Set(t.id),
                title: Set(t.title),
                description: Set(t.description),
                display_order: Set(t.order),
                category: Set(t.category),
                content: Set(serde_json::to_value(t.content)?),
            })
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let sheet_music = catalog
        .sheet_music
        .into_iter()
        .map(|s| sheet_music::ActiveModel {
            id: Set(s.id),
            title: Set(s.title),
            composer: Set(s.composer),
            difficulty: Set(s.difficulty),
            display_order: Set(s.order),
            genre: Set(s.genre),
            music_key: Set(s.key),
            time_signature: Set(s.time_signature),
            description: Set(s.description),
            notes: Set(s.notes),
            attribution: Set(s.attribution),
        })
        .collect::<Vec<_>>();

    let care_guides = catalog
        .care_guides
        .into_iter()
        .map(|g| {
            Ok(care_guide::ActiveModel {
                id: Set(g.id),
                title: Set(g.title),
                description: Set(g.description),
                display_order: Set(g.order),
                icon: Set(g.icon),
                content: Set(serde_json::to_value(g.content)?),
            })
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    let txn = db.begin().await?;
    Lesson::insert_many(lessons)
        .exec_without_returning(&txn)
        .await?;
    TheoryTopic::insert_many(theory)
        .exec_without_returning(&txn)
        .await?;
    SheetMusic::insert_many(sheet_music)
        .exec_without_returning(&txn)
        .await?;
    CareGuide::insert_many(care_guides)
        .exec_without_returning(&txn)
        .await?;
    txn.commit()
        .await
        .with_context(|| "Failed to commit seed catalog")?;

    tracing::info!(
        lessons = counts.0,
        theory = counts.1,
        sheet_music = counts.2,
        care_guides = counts.3,
        "seeded catalog"
    );
    Ok(true)
}
