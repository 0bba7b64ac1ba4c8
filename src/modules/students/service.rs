use std::collections::{BTreeMap, HashMap};

use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;

use super::model::{CreateStudentDto, Student, UpdateStudentDto};
use super::search::{SearchField, SearchTerm};

pub struct StudentService;

impl StudentService {
    /// Idempotent bootstrap of the students table.
    pub async fn ensure_schema(db: &PgPool) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                email TEXT NOT NULL,
                birth_date DATE NOT NULL
            )
            "#,
        )
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(())
    }

    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, age, email, birth_date)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, age, email, birth_date",
        )
        .bind(&dto.name)
        .bind(dto.age)
        .bind(&dto.email)
        .bind(dto.birth_date)
        .fetch_one(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, age, email, birth_date FROM students ORDER BY id",
        )
        .fetch_all(db)
        .await
        .map_err(AppError::database)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &PgPool, id: i32) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, age, email, birth_date FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)
    }

    /// Returns the number of rows written; 0 means no such student.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        dto: UpdateStudentDto,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE students SET name = $1, age = $2, email = $3, birth_date = $4 WHERE id = $5",
        )
        .bind(&dto.name)
        .bind(dto.age)
        .bind(&dto.email)
        .bind(dto.birth_date)
        .bind(id)
        .execute(db)
        .await
        .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed; 0 means no such student.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(AppError::database)?;

        Ok(result.rows_affected())
    }

    /// Search one whitelisted field. The column identifier in every arm is
    /// fixed in the statement text; the value always travels as a bound
    /// parameter. `name` matches substrings (case-insensitive), all other
    /// fields match exactly.
    #[instrument(skip(db))]
    pub async fn search_by_field(
        db: &PgPool,
        field_name: &str,
        value: &str,
    ) -> Result<Vec<Student>, AppError> {
        let field = SearchField::resolve(field_name)?;
        let term = field.coerce(value)?;

        let students = match term {
            SearchTerm::Id(id) => {
                sqlx::query_as::<_, Student>(
                    "SELECT id, name, age, email, birth_date FROM students
                     WHERE id = $1 ORDER BY id",
                )
                .bind(id)
                .fetch_all(db)
                .await
            }
            SearchTerm::Name(name) => {
                sqlx::query_as::<_, Student>(
                    "SELECT id, name, age, email, birth_date FROM students
                     WHERE name ILIKE $1 ORDER BY id",
                )
                .bind(format!("%{}%", name))
                .fetch_all(db)
                .await
            }
            SearchTerm::Age(age) => {
                sqlx::query_as::<_, Student>(
                    "SELECT id, name, age, email, birth_date FROM students
                     WHERE age = $1 ORDER BY id",
                )
                .bind(age)
                .fetch_all(db)
                .await
            }
            SearchTerm::Email(email) => {
                sqlx::query_as::<_, Student>(
                    "SELECT id, name, age, email, birth_date FROM students
                     WHERE email = $1 ORDER BY id",
                )
                .bind(email)
                .fetch_all(db)
                .await
            }
            SearchTerm::BirthDate(birth_date) => {
                sqlx::query_as::<_, Student>(
                    "SELECT id, name, age, email, birth_date FROM students
                     WHERE birth_date = $1 ORDER BY id",
                )
                .bind(birth_date)
                .fetch_all(db)
                .await
            }
        }
        .map_err(AppError::database)?;

        Ok(students)
    }

    /// Union of independent single-field searches, de-duplicated by id and
    /// returned in ascending id order. An empty filter set is the full
    /// listing.
    #[instrument(skip(db, filters))]
    pub async fn search_students(
        db: &PgPool,
        filters: &HashMap<String, String>,
    ) -> Result<Vec<Student>, AppError> {
        if filters.is_empty() {
            return Self::list_students(db).await;
        }

        let mut merged: BTreeMap<i32, Student> = BTreeMap::new();

        for (field, value) in filters {
            for student in Self::search_by_field(db, field, value).await? {
                merged.insert(student.id, student);
            }
        }

        Ok(merged.into_values().collect())
    }
}
