//! `SQLite` implementation of [`FacultyRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use labhub_app::ports::FacultyRepository;
use labhub_domain::error::LabHubError;
use labhub_domain::faculty::{Faculty, FacultyFields};
use labhub_domain::id::FacultyId;

use crate::error::StorageError;
use crate::like;

/// Wrapper for converting database rows into domain [`Faculty`].
struct Wrapper(Faculty);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Faculty> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Faculty {
            id: FacultyId::new(row.try_get("facno")?),
            fields: FacultyFields {
                name: row.try_get("facnom")?,
                address: row.try_get("adresse")?,
                label: row.try_get("libelle")?,
            },
        }))
    }
}

const INSERT: &str = "INSERT INTO faculte (facnom, adresse, libelle, facnom_fold) VALUES (?, ?, ?, ?) RETURNING *";
const SELECT_ALL: &str = "SELECT * FROM faculte ORDER BY facno";
const SELECT_BY_NAME: &str = r"SELECT * FROM faculte WHERE facnom_fold LIKE ? ESCAPE '\' ORDER BY facno";
const UPDATE: &str = r"
    UPDATE faculte SET facnom = ?, adresse = ?, libelle = ?, facnom_fold = ?
    WHERE facno = ?
    RETURNING *
";
const DELETE_BY_ID: &str = "DELETE FROM faculte WHERE facno = ? RETURNING *";

/// `SQLite`-backed faculty repository.
pub struct SqliteFacultyRepository {
    pool: SqlitePool,
}

impl SqliteFacultyRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FacultyRepository for SqliteFacultyRepository {
    fn create(
        &self,
        fields: FacultyFields,
    ) -> impl Future<Output = Result<Faculty, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let folded = like::fold(fields.name.as_deref());
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(fields.name)
                .bind(fields.address)
                .bind(fields.label)
                .bind(folded)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Faculty>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_name(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Faculty>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(like::contains(&term))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: FacultyId,
        fields: FacultyFields,
    ) -> impl Future<Output = Result<Option<Faculty>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let folded = like::fold(fields.name.as_deref());
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(fields.name)
                .bind(fields.address)
                .bind(fields.label)
                .bind(folded)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: FacultyId,
    ) -> impl Future<Output = Result<Option<Faculty>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
