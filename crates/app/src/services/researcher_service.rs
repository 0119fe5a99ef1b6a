//! Researcher service — use-cases for managing researchers.

use labhub_domain::error::{LabHubError, NotFoundError};
use labhub_domain::id::ResearcherId;
use labhub_domain::researcher::{Researcher, ResearcherDraft};
use labhub_domain::search::SearchColumn;

use crate::ports::ResearcherRepository;

/// Application service for researcher CRUD and search.
pub struct ResearcherService<R> {
    repo: R,
}

fn not_found(id: ResearcherId) -> LabHubError {
    NotFoundError {
        entity: "Researcher",
        id: id.to_string(),
    }
    .into()
}

impl<R: ResearcherRepository> ResearcherService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List researchers, optionally filtered on name or email.
    ///
    /// A blank `search` term is the same as no term.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_researchers(
        &self,
        search: Option<String>,
    ) -> Result<Vec<Researcher>, LabHubError> {
        match super::search_term(search) {
            Some(term) => self.repo.find_by_name_or_email(term).await,
            None => self.repo.get_all().await,
        }
    }

    /// Look up a researcher by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::NotFound`] when no researcher with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_researcher(&self, id: ResearcherId) -> Result<Researcher, LabHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a researcher once the recruitment date is known to be present.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::Validation`] if `daterecrut` is missing (the
    /// repository is not called), or a storage error from the repository.
    pub async fn create_researcher(
        &self,
        draft: ResearcherDraft,
    ) -> Result<Researcher, LabHubError> {
        let fields = draft.into_fields()?;
        let created = self.repo.create(fields).await?;
        tracing::debug!(id = %created.id, "researcher created");
        Ok(created)
    }

    /// Overwrite every column of an existing researcher.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::Validation`] if `daterecrut` is missing,
    /// [`LabHubError::NotFound`] if no row matched, or a storage error.
    pub async fn update_researcher(
        &self,
        id: ResearcherId,
        draft: ResearcherDraft,
    ) -> Result<Researcher, LabHubError> {
        let fields = draft.into_fields()?;
        self.repo
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a researcher, returning the removed row.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::NotFound`] if no row matched, or a storage error.
    pub async fn delete_researcher(&self, id: ResearcherId) -> Result<Researcher, LabHubError> {
        let deleted = self.repo.delete(id).await?.ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, "researcher deleted");
        Ok(deleted)
    }

    /// Search on a single allow-listed column.
    ///
    /// `column` is checked against [`SearchColumn`] before anything reaches
    /// the repository.
    ///
    /// # Errors
    ///
    /// Returns [`LabHubError::Validation`] for a column outside the allow-list,
    /// or a storage error from the repository.
    pub async fn search_researchers(
        &self,
        column: &str,
        value: String,
    ) -> Result<Vec<Researcher>, LabHubError> {
        let column: SearchColumn = column.parse()?;
        self.repo.find_by_column(column, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use labhub_domain::error::ValidationError;
    use labhub_domain::researcher::ResearcherFields;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct InMemoryResearcherRepo {
        store: Mutex<BTreeMap<ResearcherId, Researcher>>,
        next_id: AtomicUsize,
        calls: AtomicUsize,
    }

    impl InMemoryResearcherRepo {
        fn touch(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        fn filter(&self, pred: impl Fn(&Researcher) -> bool) -> Vec<Researcher> {
            let store = self.store.lock().unwrap();
            store.values().filter(|r| pred(r)).cloned().collect()
        }
    }

    fn contains(haystack: Option<&String>, needle: &str) -> bool {
        haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
    }

    impl ResearcherRepository for InMemoryResearcherRepo {
        fn create(
            &self,
            fields: ResearcherFields,
        ) -> impl Future<Output = Result<Researcher, LabHubError>> + Send {
            self.touch();
            let next = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let researcher = Researcher {
                id: ResearcherId::new(i64::try_from(next).unwrap()),
                fields,
            };
            let mut store = self.store.lock().unwrap();
            store.insert(researcher.id, researcher.clone());
            async { Ok(researcher) }
        }

        fn get_by_id(
            &self,
            id: ResearcherId,
        ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
            self.touch();
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
            self.touch();
            let result = self.filter(|_| true);
            async { Ok(result) }
        }

        fn find_by_name_or_email(
            &self,
            term: String,
        ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
            self.touch();
            let result = self.filter(|r| {
                contains(r.fields.name.as_ref(), &term) || contains(r.fields.email.as_ref(), &term)
            });
            async { Ok(result) }
        }

        fn find_by_column(
            &self,
            column: SearchColumn,
            value: String,
        ) -> impl Future<Output = Result<Vec<Researcher>, LabHubError>> + Send {
            self.touch();
            let result = self.filter(|r| {
                let cell = match column {
                    SearchColumn::Name => r.fields.name.as_ref(),
                    SearchColumn::Grade => r.fields.grade.as_ref(),
                    SearchColumn::Status => r.fields.status.as_ref(),
                    SearchColumn::Email => r.fields.email.as_ref(),
                };
                contains(cell, &value)
            });
            async { Ok(result) }
        }

        fn update(
            &self,
            id: ResearcherId,
            fields: ResearcherFields,
        ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
            self.touch();
            let mut store = self.store.lock().unwrap();
            let result = store.get_mut(&id).map(|existing| {
                existing.fields = fields;
                existing.clone()
            });
            async { Ok(result) }
        }

        fn delete(
            &self,
            id: ResearcherId,
        ) -> impl Future<Output = Result<Option<Researcher>, LabHubError>> + Send {
            self.touch();
            let mut store = self.store.lock().unwrap();
            let result = store.remove(&id);
            async { Ok(result) }
        }
    }

    fn make_service() -> ResearcherService<InMemoryResearcherRepo> {
        ResearcherService::new(InMemoryResearcherRepo::default())
    }

    fn draft(name: &str, email: &str) -> ResearcherDraft {
        ResearcherDraft {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            grade: Some("MCF".to_string()),
            recruited_on: NaiveDate::from_ymd_opt(2020, 1, 15),
            ..ResearcherDraft::default()
        }
    }

    #[tokio::test]
    async fn should_create_researcher_when_recruitment_date_present() {
        let svc = make_service();

        let created = svc
            .create_researcher(draft("Ada", "ada@uni.fr"))
            .await
            .unwrap();
        let fetched = svc.get_researcher(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.fields.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn should_reject_create_without_touching_repo_when_date_missing() {
        let svc = make_service();
        let mut payload = draft("Ada", "ada@uni.fr");
        payload.recruited_on = None;

        let result = svc.create_researcher(payload).await;

        assert!(matches!(
            result,
            Err(LabHubError::Validation(
                ValidationError::MissingRecruitmentDate
            ))
        ));
        assert_eq!(svc.repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_not_found_when_researcher_missing() {
        let svc = make_service();
        let result = svc.get_researcher(ResearcherId::new(99)).await;
        assert!(matches!(result, Err(LabHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_all_when_search_is_blank() {
        let svc = make_service();
        svc.create_researcher(draft("Ada", "ada@uni.fr"))
            .await
            .unwrap();
        svc.create_researcher(draft("Alan", "alan@uni.fr"))
            .await
            .unwrap();

        assert_eq!(svc.list_researchers(None).await.unwrap().len(), 2);
        assert_eq!(
            svc.list_researchers(Some("   ".to_string()))
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn should_filter_on_name_or_email_when_search_given() {
        let svc = make_service();
        svc.create_researcher(draft("Ada", "countess@uni.fr"))
            .await
            .unwrap();
        svc.create_researcher(draft("Alan", "turing@uni.fr"))
            .await
            .unwrap();

        let by_name = svc.list_researchers(Some("ADA".to_string())).await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_email = svc
            .list_researchers(Some("turing".to_string()))
            .await
            .unwrap();
        assert_eq!(by_email[0].fields.name.as_deref(), Some("Alan"));
    }

    #[tokio::test]
    async fn should_update_every_field_when_researcher_exists() {
        let svc = make_service();
        let created = svc
            .create_researcher(draft("Ada", "ada@uni.fr"))
            .await
            .unwrap();

        let mut replacement = draft("Ada Lovelace", "ada@uni.fr");
        replacement.grade = None;
        let updated = svc
            .update_researcher(created.id, replacement)
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.name.as_deref(), Some("Ada Lovelace"));
        assert!(updated.fields.grade.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_researcher() {
        let svc = make_service();
        let result = svc
            .update_researcher(ResearcherId::new(5), draft("Ghost", "g@uni.fr"))
            .await;
        assert!(matches!(result, Err(LabHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_deleted_row_and_forget_it() {
        let svc = make_service();
        let created = svc
            .create_researcher(draft("Ada", "ada@uni.fr"))
            .await
            .unwrap();

        let deleted = svc.delete_researcher(created.id).await.unwrap();
        assert_eq!(deleted.id, created.id);

        let again = svc.delete_researcher(created.id).await;
        assert!(matches!(again, Err(LabHubError::NotFound(_))));
        assert!(svc.list_researchers(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_search_on_column_outside_allow_list() {
        let svc = make_service();

        let result = svc.search_researchers("password", "a".to_string()).await;

        assert!(matches!(
            result,
            Err(LabHubError::Validation(ValidationError::InvalidSearchColumn(c))) if c == "password"
        ));
        assert_eq!(svc.repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_search_on_allowed_column() {
        let svc = make_service();
        svc.create_researcher(draft("Ada", "ada@uni.fr"))
            .await
            .unwrap();
        svc.create_researcher(draft("Bob", "bob@uni.fr"))
            .await
            .unwrap();

        let found = svc
            .search_researchers("chnom", "a".to_string())
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields.name.as_deref(), Some("Ada"));
    }
}
