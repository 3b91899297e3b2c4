//! Id-ordered storage owned by a [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use std::collections::BTreeMap;

/// The entities managed by one actor, iterated in ascending id order.
///
/// The store also owns the id counter, so a store action can insert entities under
/// the same numbering as `Create`.
pub struct EntityStore<T: ActorEntity> {
    items: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> EntityStore<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Hands out the next id. Ids are never reused, even if the build that
    /// requested one fails.
    pub(crate) fn allocate_id(&mut self) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        id
    }

    /// Builds an entity under a fresh id and inserts it.
    ///
    /// Meant for store actions that create as part of a larger atomic step. Unlike
    /// `Create`, the entity's `on_create` hook is not run.
    pub fn insert_new<E>(&mut self, build: impl FnOnce(T::Id) -> Result<T, E>) -> Result<T::Id, E> {
        let id = self.allocate_id();
        let item = build(id.clone())?;
        self.items.insert(id.clone(), item);
        Ok(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.get_mut(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T::Id, &T)> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&T::Id, &mut T)> {
        self.items.iter_mut()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn insert(&mut self, id: T::Id, item: T) {
        self.items.insert(id, item);
    }

    pub(crate) fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.remove(id)
    }
}
