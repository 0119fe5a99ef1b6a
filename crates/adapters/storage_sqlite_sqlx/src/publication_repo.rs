//! `SQLite` implementation of [`PublicationRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use labhub_app::ports::PublicationRepository;
use labhub_domain::error::LabHubError;
use labhub_domain::id::{PublicationId, ResearcherId};
use labhub_domain::publication::{Publication, PublicationFields};

use crate::error::{StorageError, decode};
use crate::like;

/// Wrapper for converting database rows into domain [`Publication`].
struct Wrapper(Publication);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let date: Option<String> = row.try_get("date")?;
        let date = date
            .as_deref()
            .map(NaiveDate::from_str)
            .transpose()
            .map_err(decode)?;

        Ok(Self(Publication {
            id: PublicationId::new(row.try_get("pubno")?),
            fields: PublicationFields {
                title: row.try_get("titre")?,
                theme: row.try_get("theme")?,
                kind: row.try_get("type")?,
                volume: row.try_get("volume")?,
                date,
                venue: row.try_get("apparition")?,
                editor: row.try_get("editeur")?,
            },
        }))
    }
}

const INSERT: &str = r#"
    INSERT INTO publication (titre, theme, "type", volume, "date", apparition, editeur, titre_fold)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING *
"#;

const SELECT_ALL: &str = "SELECT * FROM publication ORDER BY pubno";
const SELECT_BY_TITLE: &str =
    r"SELECT * FROM publication WHERE titre_fold LIKE ? ESCAPE '\' ORDER BY pubno";
const SELECT_BY_AUTHOR: &str = r"
    SELECT pub.*
    FROM publier p
    JOIN publication pub ON p.pubno = pub.pubno
    WHERE p.chno = ?
    ORDER BY pub.pubno
";

/// `SQLite`-backed publication repository.
pub struct SqlitePublicationRepository {
    pool: SqlitePool,
}

impl SqlitePublicationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PublicationRepository for SqlitePublicationRepository {
    fn create(
        &self,
        fields: PublicationFields,
    ) -> impl Future<Output = Result<Publication, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let folded = like::fold(fields.title.as_deref());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(fields.title)
                .bind(fields.theme)
                .bind(fields.kind)
                .bind(fields.volume)
                .bind(fields.date.map(|d| d.to_string()))
                .bind(fields.venue)
                .bind(fields.editor)
                .bind(folded)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_title(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_TITLE)
                .bind(like::contains(&term))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_author(
        &self,
        researcher_id: ResearcherId,
    ) -> impl Future<Output = Result<Vec<Publication>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_AUTHOR)
                .bind(researcher_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
