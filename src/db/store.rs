use std::path::PathBuf;

use uuid::Uuid;

use crate::models::Case;

use super::repository;
use super::sqlite::open_database;
use super::DatabaseError;

/// Persistence seam for triage cases. Handlers depend on this trait so
/// storage can be swapped without touching them.
pub trait CaseStore: Send + Sync {
    /// Persist a case and return its id.
    fn append(&self, case: &Case) -> Result<Uuid, DatabaseError>;

    /// All cases, newest first.
    fn list_all(&self) -> Result<Vec<Case>, DatabaseError>;

    /// Cases for one contact, newest first.
    fn list_by_contact(&self, contact: &str) -> Result<Vec<Case>, DatabaseError>;

    /// Delete a case. Returns false when the id was unknown.
    fn delete(&self, id: &Uuid) -> Result<bool, DatabaseError>;
}

/// File-backed store. Opens a fresh connection per call; rusqlite
/// connections are not Sync.
pub struct SqliteCaseStore {
    path: PathBuf,
}

impl SqliteCaseStore {
    /// Open the database at `path`, running migrations if needed.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DatabaseError> {
        let path = path.into();
        open_database(&path)?;
        Ok(Self { path })
    }

    fn conn(&self) -> Result<rusqlite::Connection, DatabaseError> {
        open_database(&self.path)
    }
}

impl CaseStore for SqliteCaseStore {
    fn append(&self, case: &Case) -> Result<Uuid, DatabaseError> {
        let conn = self.conn()?;
        repository::insert_case(&conn, case)?;
        Ok(case.id)
    }

    fn list_all(&self) -> Result<Vec<Case>, DatabaseError> {
        repository::list_cases(&self.conn()?)
    }

    fn list_by_contact(&self, contact: &str) -> Result<Vec<Case>, DatabaseError> {
        repository::list_cases_by_contact(&self.conn()?, contact)
    }

    fn delete(&self, id: &Uuid) -> Result<bool, DatabaseError> {
        repository::delete_case(&self.conn()?, id)
    }
}
