//! In-memory person store.
//!
//! A single map from id to record behind one `RwLock`. Writers take the write lock, readers the
//! read lock, and no lock is held for longer than the map access: [`PersonStore::list_all`]
//! hands back an owned copy so sorting and paging happen after the lock is released.
//!
//! A poisoned lock (a panic while it was held) is reported as [`PersonError::LockPoisoned`]
//! rather than propagated as a panic.

use crate::{PersonError, PersonResult};
use api_shared::Person;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct PersonStore {
    persons: RwLock<HashMap<String, Person>>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> PersonResult<RwLockReadGuard<'_, HashMap<String, Person>>> {
        self.persons
            .read()
            .map_err(|_| PersonError::LockPoisoned("read"))
    }

    fn write(&self) -> PersonResult<RwLockWriteGuard<'_, HashMap<String, Person>>> {
        self.persons
            .write()
            .map_err(|_| PersonError::LockPoisoned("write"))
    }

    /// Writes `person` under `person.id`, overwriting any record with the same id.
    pub fn insert_or_replace(&self, person: Person) -> PersonResult<()> {
        let mut persons = self.write()?;
        tracing::debug!("storing person {}", person.id);
        persons.insert(person.id.clone(), person);
        Ok(())
    }

    /// Replaces the record stored under `person.id`.
    ///
    /// The existence check and the write happen under the same lock.
    ///
    /// # Errors
    ///
    /// Returns [`PersonError::NotFound`] if no record has that id; nothing is written.
    pub fn replace_existing(&self, person: Person) -> PersonResult<()> {
        let mut persons = self.write()?;
        match persons.get_mut(&person.id) {
            Some(slot) => {
                tracing::debug!("replacing person {}", person.id);
                *slot = person;
                Ok(())
            }
            None => Err(PersonError::NotFound(person.id)),
        }
    }

    /// Returns a copy of the record stored under `id`.
    pub fn get(&self, id: &str) -> PersonResult<Person> {
        self.read()?
            .get(id)
            .cloned()
            .ok_or_else(|| PersonError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> PersonResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    /// Snapshot of every record, in no particular order.
    pub fn list_all(&self) -> PersonResult<Vec<Person>> {
        Ok(self.read()?.values().cloned().collect())
    }

    #[cfg(test)]
    pub fn len(&self) -> PersonResult<usize> {
        Ok(self.read()?.len())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> PersonResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
