//! In-memory student store
//!
//! Holds the student collection of one account and exchanges it as a JSON array of student
//! records, the shape used by the document store.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use gym_domain as domain;
use log::debug;

use crate::record::{self, RecordError};

#[derive(Default)]
pub struct MemoryStorage {
    students: Mutex<BTreeMap<domain::StudentID, domain::Student>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new(students: Vec<domain::Student>) -> Self {
        Self {
            students: Mutex::new(students.into_iter().map(|s| (s.id, s)).collect()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let records = serde_json::from_str::<Vec<record::Student>>(json)?;
        let students = records
            .into_iter()
            .map(domain::Student::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("loaded {} students", students.len());
        Ok(Self::new(students))
    }

    pub fn to_json(&self) -> Result<String, domain::ReadError> {
        let students = self.lock()?;
        let records = students
            .values()
            .map(record::Student::from)
            .collect::<Vec<_>>();
        serde_json::to_string(&records).map_err(|err| domain::ReadError::Other(err.into()))
    }

    pub fn insert(&self, student: domain::Student) -> Result<(), domain::StorageError> {
        self.lock()?.insert(student.id, student);
        Ok(())
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, BTreeMap<domain::StudentID, domain::Student>>, domain::StorageError>
    {
        self.students
            .lock()
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }
}

impl domain::StudentRepository for MemoryStorage {
    async fn read_students(&self) -> Result<Vec<domain::Student>, domain::ReadError> {
        Ok(self.lock()?.values().cloned().collect())
    }

    async fn read_student(
        &self,
        id: domain::StudentID,
    ) -> Result<domain::Student, domain::ReadError> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)
    }

    async fn replace_workout(
        &self,
        id: domain::StudentID,
        workout: domain::WorkoutPlan,
    ) -> Result<domain::WorkoutPlan, domain::UpdateError> {
        let mut students = self.lock()?;
        let student = students.get_mut(&id).ok_or(domain::UpdateError::NotFound)?;
        debug!("storing workout \"{}\" for {}", workout.name, student.name);
        student.workout = Some(workout.clone());
        Ok(workout)
    }
}
