//! Person service.
//!
//! Composes the identifier generator, validator, store and pagination into the operations the
//! API exposes. The service is cheap to clone; clones share one store.

use crate::config::CoreConfig;
use crate::page::Page;
use crate::pagination::paginate;
use crate::store::PersonStore;
use crate::validation::validate_person;
use crate::{PersonError, PersonResult};
use api_shared::{Person, PersonReq};
use persons_uuid::{IdGenerator, UuidIdGenerator};
use std::sync::Arc;

/// Pure person data operations - no API concerns
#[derive(Clone)]
pub struct PersonService {
    cfg: Arc<CoreConfig>,
    store: Arc<PersonStore>,
    ids: Arc<dyn IdGenerator>,
}

impl PersonService {
    /// Creates a service with an empty store and random UUID identifiers.
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self::with_id_generator(cfg, Arc::new(UuidIdGenerator))
    }

    /// Creates a service with an empty store and the given identifier generator.
    pub fn with_id_generator(cfg: Arc<CoreConfig>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            cfg,
            store: Arc::new(PersonStore::new()),
            ids,
        }
    }

    /// Creates a person from `req` under a freshly allocated id.
    ///
    /// # Errors
    ///
    /// Returns `PersonError::Validation` if the record fails validation; nothing is stored.
    pub fn create(&self, req: PersonReq) -> PersonResult<Person> {
        let person = Person {
            id: self.ids.generate(),
            name: req.name,
            age: req.age,
        };
        validate_person(&person)?;

        self.store.insert_or_replace(person.clone())?;
        tracing::info!("created person {}", person.id);
        Ok(person)
    }

    pub fn get(&self, id: &str) -> PersonResult<Person> {
        self.store.get(id)
    }

    /// Fails with `PersonError::NotFound` unless a person with `id` is stored.
    pub fn ensure_exists(&self, id: &str) -> PersonResult<()> {
        if self.store.contains(id)? {
            Ok(())
        } else {
            Err(PersonError::NotFound(id.to_string()))
        }
    }

    /// Replaces every field of person `id` with `req`, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `PersonError::NotFound` if `id` is unknown
    /// - `PersonError::Validation` if the replacement fails validation
    pub fn update(&self, id: &str, req: PersonReq) -> PersonResult<Person> {
        let person = Person {
            id: id.to_string(),
            name: req.name,
            age: req.age,
        };
        validate_person(&person)?;

        self.store.replace_existing(person.clone())?;
        tracing::info!("updated person {}", person.id);
        Ok(person)
    }

    /// Returns one page of all persons in the configured sort order.
    ///
    /// The store is copied under its lock; sorting and slicing happen on that copy.
    pub fn list(&self, page: &Page) -> PersonResult<Vec<Person>> {
        let records = self.store.list_all()?;
        Ok(paginate(records, page, self.cfg.sort_order()))
    }

    /// Builds a [`Page`] from raw query values using the configured default page size.
    pub fn page_from_params(&self, number: Option<&str>, size: Option<&str>) -> Page {
        Page::from_params(number, size, self.cfg.default_page_size())
    }

    #[cfg(test)]
    pub fn count(&self) -> PersonResult<usize> {
        self.store.len()
    }
}
