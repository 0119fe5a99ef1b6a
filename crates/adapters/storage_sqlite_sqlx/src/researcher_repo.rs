//! `SQLite` implementation of [`ResearcherRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Row, Sqlite, SqlitePool};

use labhub_app::ports::ResearcherRepository;
use labhub_domain::error::LabHubError;
use labhub_domain::id::{FacultyId, LaboratoryId, ResearcherId};
use labhub_domain::researcher::{Researcher, ResearcherFields};
use labhub_domain::search::SearchColumn;

use crate::error::{StorageError, decode};
use crate::like;

/// Wrapper for converting database rows into domain [`Researcher`].
struct Wrapper(Researcher);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Researcher> {
        value.map(|w| w.0)
    }

    fn all(rows: Vec<Self>) -> Vec<Researcher> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let recruited_on: String = row.try_get("daterecrut")?;
        let recruited_on = NaiveDate::from_str(&recruited_on).map_err(decode)?;

        Ok(Self(Researcher {
            id: ResearcherId::new(row.try_get("chno")?),
            fields: ResearcherFields {
                name: row.try_get("chnom")?,
                grade: row.try_get("grade")?,
                status: row.try_get("statut")?,
                recruited_on,
                salary: row.try_get("salaire")?,
                bonus: row.try_get("prime")?,
                email: row.try_get("email")?,
                supervisor_id: row.try_get::<Option<i64>, _>("supno")?.map(ResearcherId::new),
                laboratory_id: row.try_get::<Option<i64>, _>("labno")?.map(LaboratoryId::new),
                faculty_id: row.try_get::<Option<i64>, _>("facno")?.map(FacultyId::new),
            },
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO chercheur (
        chnom, grade, statut, daterecrut, salaire, prime, email, supno, labno, facno,
        chnom_fold, grade_fold, statut_fold, email_fold
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING *
";

const SELECT_BY_ID: &str = "SELECT * FROM chercheur WHERE chno = ?";
const SELECT_ALL: &str = "SELECT * FROM chercheur ORDER BY chno";
const SELECT_BY_NAME_OR_EMAIL: &str = r"
    SELECT * FROM chercheur
    WHERE chnom_fold LIKE ? ESCAPE '\' OR email_fold LIKE ? ESCAPE '\'
    ORDER BY chno
";

const SELECT_BY_NAME: &str =
    r"SELECT * FROM chercheur WHERE chnom_fold LIKE ? ESCAPE '\' ORDER BY chno";
const SELECT_BY_GRADE: &str =
    r"SELECT * FROM chercheur WHERE grade_fold LIKE ? ESCAPE '\' ORDER BY chno";
const SELECT_BY_STATUS: &str =
    r"SELECT * FROM chercheur WHERE statut_fold LIKE ? ESCAPE '\' ORDER BY chno";
const SELECT_BY_EMAIL: &str =
    r"SELECT * FROM chercheur WHERE email_fold LIKE ? ESCAPE '\' ORDER BY chno";

const UPDATE: &str = r"
    UPDATE chercheur
    SET chnom = ?, grade = ?, statut = ?, daterecrut = ?, salaire = ?, prime = ?,
        email = ?, supno = ?, labno = ?, facno = ?,
        chnom_fold = ?, grade_fold = ?, statut_fold = ?, email_fold = ?
    WHERE chno = ?
    RETURNING *
";

const DELETE_BY_ID: &str = "DELETE FROM chercheur WHERE chno = ? RETURNING *";

/// Statement searching a single allow-listed column.
const fn select_by_column(column: SearchColumn) -> &'static str {
    match column {
        SearchColumn::Name => SELECT_BY_NAME,
        SearchColumn::Grade => SELECT_BY_GRADE,
        SearchColumn::Status => SELECT_BY_STATUS,
        SearchColumn::Email => SELECT_BY_EMAIL,
    }
}

/// Bind every non-key column in table order, then the folded search copies.
fn bind_fields<'q>(
    query: QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>>,
    fields: &'q ResearcherFields,
) -> QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>> {
    query
        .bind(fields.name.as_deref())
        .bind(fields.grade.as_deref())
        .bind(fields.status.as_deref())
        .bind(fields.recruited_on.to_string())
        .bind(fields.salary)
        .bind(fields.bonus)
        .bind(fields.email.as_deref())
        .bind(fields.supervisor_id.map(ResearcherId::get))
        .bind(fields.laboratory_id.map(LaboratoryId::get))
        .bind(fields.faculty_id.map(FacultyId::get))
        .bind(like::fold(fields.name.as_deref()))
        .bind(like::fold(fields.grade.as_deref()))
        .bind(like::fold(fields.status.as_deref()))
        .bind(like::fold(fields.email.as_deref()))
}

/// `SQLite`-backed researcher repository.
pub struct SqliteResearcherRepository {
    pool: SqlitePool,
}

impl SqliteResearcherRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ResearcherRepository for SqliteResearcherRepository {
    fn create(
        &self,
        fields: ResearcherFields,
    ) -> impl Future<Output = Result<Researcher, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = bind_fields(sqlx::query_as(INSERT), &fields)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: ResearcherId,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn find_by_name_or_email(
        &self,
        term: String,
    ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let pattern = like::contains(&term);
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_NAME_OR_EMAIL)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn find_by_column(
        &self,
        column: SearchColumn,
        value: String,
    ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(select_by_column(column))
                .bind(like::contains(&value))
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::all(rows))
        }
    }

    fn update(
        &self,
        id: ResearcherId,
        fields: ResearcherFields,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = bind_fields(sqlx::query_as(UPDATE), &fields)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(
        &self,
        id: ResearcherId,
    ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
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
