//! `SQLite` implementation of [`LaboratoryRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use labhub_app::ports::LaboratoryRepository;
use labhub_domain::error::LabHubError;
use labhub_domain::id::{FacultyId, LaboratoryId, ResearcherId};
use labhub_domain::laboratory::{HierarchyNode, Laboratory};

use crate::error::StorageError;

struct LaboratoryRow(Laboratory);

impl<'r> FromRow<'r, SqliteRow> for LaboratoryRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Laboratory {
            id: LaboratoryId::new(row.try_get("labno")?),
            name: row.try_get("labnom")?,
            faculty_id: row.try_get::<Option<i64>, _>("facno")?.map(FacultyId::new),
        }))
    }
}

struct NodeRow(HierarchyNode);

impl<'r> FromRow<'r, SqliteRow> for NodeRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(HierarchyNode {
            researcher_id: ResearcherId::new(row.try_get("chno")?),
            name: row.try_get("chnom")?,
            grade: row.try_get("grade")?,
            supervisor_id: row.try_get::<Option<i64>, _>("supno")?.map(ResearcherId::new),
            laboratory_id: row.try_get::<Option<i64>, _>("labno")?.map(LaboratoryId::new),
            level: row.try_get("niveau")?,
        }))
    }
}

const SELECT_ALL: &str = "SELECT * FROM laboratoire ORDER BY labno";

/// Roots are the laboratory's unsupervised researchers; every researcher whose
/// supervisor is already in the tree joins it one level deeper. A node reached
/// this way has a supervisor chain ending at a root, so supervision cycles are
/// never entered and depth needs no bound.
const SELECT_HIERARCHY: &str = r"
    WITH RECURSIVE hierarchie (chno, chnom, grade, supno, labno, niveau) AS (
        SELECT ch.chno, ch.chnom, ch.grade, ch.supno, ch.labno, 0
        FROM chercheur ch
        WHERE ch.labno = ? AND ch.supno IS NULL
        UNION
        SELECT ch.chno, ch.chnom, ch.grade, ch.supno, ch.labno, h.niveau + 1
        FROM chercheur ch
        INNER JOIN hierarchie h ON ch.supno = h.chno
    )
    SELECT * FROM hierarchie ORDER BY niveau, chno
";

/// `SQLite`-backed laboratory repository.
pub struct SqliteLaboratoryRepository {
    pool: SqlitePool,
}

impl SqliteLaboratoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LaboratoryRepository for SqliteLaboratoryRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Laboratory>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<LaboratoryRow> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }

    fn hierarchy(
        &self,
        id: LaboratoryId,
    ) -> impl Future<Output = Result<Vec<HierarchyNode>, LabHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<NodeRow> = sqlx::query_as(SELECT_HIERARCHY)
                .bind(id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|r| r.0).collect())
        }
    }
}
