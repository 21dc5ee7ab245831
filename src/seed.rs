// src/seed.rs

//! Loads the curated content under `seed/` into empty tables.
//! A table that already holds rows is never touched, so this runs on every start.

use serde::de::DeserializeOwned;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        assessment::AssessmentQuestion, blog::Blog, career::Career, college::College,
        roadmap::CareerRoadmap,
    },
};

const CAREERS: &str = include_str!("../seed/careers.json");
const COLLEGES: &str = include_str!("../seed/colleges.json");
const ROADMAPS: &str = include_str!("../seed/roadmaps.json");
const ASSESSMENT_QUESTIONS: &str = include_str!("../seed/assessment_questions.json");
const BLOGS: &str = include_str!("../seed/blogs.json");

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::InternalServerError(format!("Invalid seed file {}: {}", name, e)))
}

/// `table` is always one of the constants in this module, never user input.
async fn is_empty(pool: &SqlitePool, table: &str) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

/// Seeds every content table that is still empty.
pub async fn seed_content(pool: &SqlitePool) -> Result<(), AppError> {
    seed_careers(pool).await?;
    seed_colleges(pool).await?;
    seed_roadmaps(pool).await?;
    seed_assessment_questions(pool).await?;
    seed_blogs(pool).await?;
    Ok(())
}

pub async fn seed_careers(pool: &SqlitePool) -> Result<(), AppError> {
    if !is_empty(pool, "careers").await? {
        return Ok(());
    }
    let careers: Vec<Career> = parse("careers.json", CAREERS)?;

    let mut tx = pool.begin().await?;
    for career in &careers {
        sqlx::query(
            r#"
            INSERT INTO careers
                (title, description, education_level, subjects, skills,
                 salary, duration, requirements, opportunities)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&career.title)
        .bind(&career.description)
        .bind(&career.education_level)
        .bind(&career.subjects)
        .bind(&career.skills)
        .bind(&career.salary)
        .bind(&career.duration)
        .bind(&career.requirements)
        .bind(&career.opportunities)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} careers", careers.len());
    Ok(())
}

pub async fn seed_colleges(pool: &SqlitePool) -> Result<(), AppError> {
    if !is_empty(pool, "colleges").await? {
        return Ok(());
    }
    let colleges: Vec<College> = parse("colleges.json", COLLEGES)?;

    let mut tx = pool.begin().await?;
    for college in &colleges {
        sqlx::query(
            r#"
            INSERT INTO colleges
                (name, location, region, college_type, nirf_rank, established,
                 website, contact, address, facilities, specializations,
                 mhtcet_cutoffs, fees, placement, admission_process, documents,
                 important_dates, image)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&college.name)
        .bind(&college.location)
        .bind(&college.region)
        .bind(&college.college_type)
        .bind(college.nirf_rank)
        .bind(college.established)
        .bind(&college.website)
        .bind(&college.contact)
        .bind(&college.address)
        .bind(&college.facilities)
        .bind(&college.specializations)
        .bind(&college.mhtcet_cutoffs)
        .bind(&college.fees)
        .bind(&college.placement)
        .bind(&college.admission_process)
        .bind(&college.documents)
        .bind(&college.important_dates)
        .bind(&college.image)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} colleges", colleges.len());
    Ok(())
}

pub async fn seed_roadmaps(pool: &SqlitePool) -> Result<(), AppError> {
    if !is_empty(pool, "career_roadmaps").await? {
        return Ok(());
    }
    let roadmaps: Vec<CareerRoadmap> = parse("roadmaps.json", ROADMAPS)?;

    let mut tx = pool.begin().await?;
    for roadmap in &roadmaps {
        insert_roadmap(&mut tx, roadmap).await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} career roadmaps", roadmaps.len());
    Ok(())
}

/// Inserts one roadmap and returns its new id.
pub async fn insert_roadmap(
    conn: &mut sqlx::SqliteConnection,
    roadmap: &CareerRoadmap,
) -> Result<i64, AppError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO career_roadmaps
            (career_title, current_position, target_position, total_steps,
             estimated_duration, steps, prerequisites, success_rate,
             difficulty, investment, alternatives)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&roadmap.career_title)
    .bind(&roadmap.current_position)
    .bind(&roadmap.target_position)
    .bind(roadmap.total_steps)
    .bind(&roadmap.estimated_duration)
    .bind(&roadmap.steps)
    .bind(&roadmap.prerequisites)
    .bind(&roadmap.success_rate)
    .bind(&roadmap.difficulty)
    .bind(&roadmap.investment)
    .bind(&roadmap.alternatives)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

pub async fn seed_assessment_questions(pool: &SqlitePool) -> Result<(), AppError> {
    if !is_empty(pool, "assessment_questions").await? {
        return Ok(());
    }
    let questions: Vec<AssessmentQuestion> =
        parse("assessment_questions.json", ASSESSMENT_QUESTIONS)?;

    let mut tx = pool.begin().await?;
    for question in &questions {
        sqlx::query(
            "INSERT INTO assessment_questions (question, options, category, weight) VALUES (?, ?, ?, ?)",
        )
        .bind(&question.question)
        .bind(&question.options)
        .bind(&question.category)
        .bind(question.weight)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} assessment questions", questions.len());
    Ok(())
}

pub async fn seed_blogs(pool: &SqlitePool) -> Result<(), AppError> {
    if !is_empty(pool, "blogs").await? {
        return Ok(());
    }
    let blogs: Vec<Blog> = parse("blogs.json", BLOGS)?;

    let mut tx = pool.begin().await?;
    for blog in &blogs {
        insert_blog(&mut tx, blog).await?;
    }
    tx.commit().await?;

    tracing::info!("Seeded {} blogs", blogs.len());
    Ok(())
}

/// Inserts one blog post and returns its new id. Views and likes are carried over.
pub async fn insert_blog(conn: &mut sqlx::SqliteConnection, blog: &Blog) -> Result<i64, AppError> {
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO blogs
            (title, excerpt, content, category, author, date, read_time,
             featured, tags, image, views, likes)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&blog.title)
    .bind(blog.excerpt.trim())
    .bind(blog.content.trim())
    .bind(&blog.category)
    .bind(&blog.author)
    .bind(blog.date)
    .bind(&blog.read_time)
    .bind(blog.featured)
    .bind(&blog.tags)
    .bind(&blog.image)
    .bind(blog.views)
    .bind(blog.likes)
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}
