use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, ReadError, StudentProfile, UpdateError, WorkoutPlan};

#[allow(async_fn_in_trait)]
pub trait StudentRepository {
    async fn read_students(&self) -> Result<Vec<Student>, ReadError>;
    async fn read_student(&self, id: StudentID) -> Result<Student, ReadError>;
    async fn replace_workout(
        &self,
        id: StudentID,
        workout: WorkoutPlan,
    ) -> Result<WorkoutPlan, UpdateError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentID,
    pub name: Name,
    pub profile: StudentProfile,
    pub workout: Option<WorkoutPlan>,
}

impl Student {
    /// Whether the stored workout sheet is missing or has no exercises.
    #[must_use]
    pub fn has_empty_workout(&self) -> bool {
        self.workout.as_ref().is_none_or(WorkoutPlan::is_empty)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct StudentID(Uuid);

impl StudentID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for StudentID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for StudentID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use crate::{Division, Exercise};

    use super::*;

    #[test]
    fn test_student_id_nil() {
        assert!(StudentID::nil().is_nil());
        assert_eq!(StudentID::nil(), StudentID::default());
        assert!(!StudentID::from(1).is_nil());
    }

    #[test]
    fn test_student_has_empty_workout() {
        let mut student = Student {
            id: 1.into(),
            name: Name::new("Ana").unwrap(),
            profile: StudentProfile::default(),
            workout: None,
        };
        assert!(student.has_empty_workout());

        let mut workout = WorkoutPlan {
            name: "Plano".to_string(),
            divisions: BTreeMap::from([('A', Division::new("Treino A", vec![]))]),
            needs_professional_review: false,
            review_reason: String::new(),
        };
        student.workout = Some(workout.clone());
        assert!(student.has_empty_workout());

        workout
            .divisions
            .entry('A')
            .or_insert_with(|| Division::new("Treino A", vec![]))
            .exercises
            .push(Exercise::fixed("Prancha", 3, "30 seg"));
        student.workout = Some(workout);
        assert!(!student.has_empty_workout());
    }
}
