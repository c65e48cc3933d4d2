//! In-process store with the same ordering and filter semantics as the SQL store.

use super::AnimalStore;
use crate::error::AppError;
use crate::model::{check_age, Animal, AnimalFilter, NewAnimal};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Animal>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryAnimalStore {
    inner: RwLock<Inner>,
}

impl MemoryAnimalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given rows. Later inserts continue after the highest id.
    pub fn with_animals(animals: impl IntoIterator<Item = Animal>) -> Self {
        let mut inner = Inner::default();
        for a in animals {
            inner.last_id = inner.last_id.max(a.animal_id);
            inner.rows.insert(a.animal_id, a);
        }
        MemoryAnimalStore {
            inner: RwLock::new(inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::Internal("animal store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::Internal("animal store lock poisoned".into()))
    }
}

#[async_trait]
impl AnimalStore for MemoryAnimalStore {
    async fn count(&self, filter: &AnimalFilter) -> Result<i64, AppError> {
        let guard = self.read()?;
        Ok(guard.rows.values().filter(|a| filter.matches(a)).count() as i64)
    }

    async fn page(&self, filter: &AnimalFilter, offset: i64, limit: i64) -> Result<Vec<Animal>, AppError> {
        let guard = self.read()?;
        Ok(guard
            .rows
            .values()
            .filter(|a| filter.matches(a))
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Animal>, AppError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.read()?.rows.contains_key(&id))
    }

    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AppError> {
        check_age(animal.age)?;
        let mut guard = self.write()?;
        guard.last_id += 1;
        let stored = animal.clone().with_id(guard.last_id);
        guard.rows.insert(stored.animal_id, stored.clone());
        Ok(stored)
    }

    async fn replace(&self, animal: &Animal) -> Result<(), AppError> {
        check_age(animal.age)?;
        let mut guard = self.write()?;
        match guard.rows.get_mut(&animal.animal_id) {
            Some(row) => {
                *row = animal.clone();
                Ok(())
            }
            None => Err(AppError::ConcurrencyConflict { id: animal.animal_id }),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
