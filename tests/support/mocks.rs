// tests/support/mocks.rs
use async_trait::async_trait;
use loteria_api::domain::{
    errors::{DomainError, DomainResult},
    participant::{
        NewParticipant, Participant, ParticipantId, ParticipantReadRepository,
        ParticipantWriteRepository,
    },
};
use std::collections::BTreeMap;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// In-memory participant table shared by the read and write traits.
#[derive(Default)]
pub struct InMemoryParticipants {
    rows: Mutex<BTreeMap<i32, Participant>>,
    next_id: Mutex<i32>,
    updates: AtomicUsize,
}

impl InMemoryParticipants {
    pub fn seeded(rows: Vec<Participant>) -> Self {
        let max = rows.iter().map(|p| i32::from(p.id)).max().unwrap_or(0);
        let table = rows.into_iter().map(|p| (i32::from(p.id), p)).collect();
        Self {
            rows: Mutex::new(table),
            next_id: Mutex::new(max),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn get(&self, id: i32) -> Option<Participant> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Number of `update` calls that reached the store.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ParticipantWriteRepository for InMemoryParticipants {
    async fn insert(&self, participant: NewParticipant) -> DomainResult<Participant> {
        let mut rows = self.rows.lock().unwrap();
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let stored = participant.with_id(ParticipantId::new(*next)?);
        rows.insert(*next, stored.clone());
        Ok(stored)
    }

    async fn update(&self, participant: Participant) -> DomainResult<Participant> {
        let mut rows = self.rows.lock().unwrap();
        let key = i32::from(participant.id);
        if !rows.contains_key(&key) {
            return Err(DomainError::NotFound("participant not found".into()));
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        rows.insert(key, participant.clone());
        Ok(participant)
    }

    async fn delete(&self, id: ParticipantId) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&i32::from(id))
            .map(drop)
            .ok_or_else(|| DomainError::NotFound("participant not found".into()))
    }
}

#[async_trait]
impl ParticipantReadRepository for InMemoryParticipants {
    async fn list(&self) -> DomainResult<Vec<Participant>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: ParticipantId) -> DomainResult<Option<Participant>> {
        Ok(self.get(i32::from(id)))
    }

    async fn exists(&self, id: ParticipantId) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().contains_key(&i32::from(id)))
    }
}

/// Read repository whose every call fails like a lost database connection.
pub struct BrokenParticipants;

#[async_trait]
impl ParticipantReadRepository for BrokenParticipants {
    async fn list(&self) -> DomainResult<Vec<Participant>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn find_by_id(&self, _id: ParticipantId) -> DomainResult<Option<Participant>> {
        Err(DomainError::Persistence("connection refused".into()))
    }

    async fn exists(&self, _id: ParticipantId) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}
