use std::fmt;

use derive_more::Deref;
use uuid::Uuid;

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub sets: Sets,
    pub reps: String,
    pub weight: String,
    pub notes: Option<String>,
}

impl Exercise {
    /// Creates an exercise with a fresh ID and without weight or notes.
    #[must_use]
    pub fn new(name: Name, sets: Sets, reps: &str) -> Self {
        Self {
            id: ExerciseID::new(),
            name,
            sets,
            reps: reps.to_string(),
            weight: String::new(),
            notes: None,
        }
    }

    pub(crate) fn fixed(name: &'static str, sets: u32, reps: &str) -> Self {
        Self::new(Name::from_static(name), Sets::Count(sets), reps)
    }

    #[must_use]
    pub fn with_weight(mut self, weight: &str) -> Self {
        self.weight = weight.to_string();
        self
    }

    pub(crate) fn rename(&mut self, name: &'static str) {
        self.name = Name::from_static(name);
    }

    pub(crate) fn append_note(&mut self, note: &str) {
        match &mut self.notes {
            Some(notes) if !notes.is_empty() => {
                notes.push_str(". ");
                notes.push_str(note);
            }
            _ => self.notes = Some(note.to_string()),
        }
    }
}

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sets {
    Count(u32),
    Text(String),
}

impl Default for Sets {
    fn default() -> Self {
        Sets::Count(0)
    }
}

impl From<u32> for Sets {
    fn from(value: u32) -> Self {
        Sets::Count(value)
    }
}

impl From<&str> for Sets {
    fn from(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.parse::<u32>() {
            Ok(count) => Sets::Count(count),
            Err(_) => Sets::Text(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Sets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sets::Count(count) => write!(f, "{count}"),
            Sets::Text(text) => write!(f, "{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_exercise_new() {
        let exercise = Exercise::new(Name::new("Remada Baixa").unwrap(), Sets::Count(3), "12");
        assert!(!exercise.id.is_nil());
        assert_eq!(exercise.name.as_str(), "Remada Baixa");
        assert_eq!(exercise.reps, "12");
        assert_eq!(exercise.weight, "");
        assert_eq!(exercise.notes, None);
    }

    #[test]
    fn test_exercise_ids_are_unique() {
        assert_ne!(
            Exercise::fixed("Prancha", 3, "30 seg").id,
            Exercise::fixed("Prancha", 3, "30 seg").id
        );
    }

    #[test]
    fn test_exercise_append_note() {
        let mut exercise = Exercise::fixed("Leg Press 45°", 3, "12");
        exercise.append_note("A");
        assert_eq!(exercise.notes, Some("A".to_string()));
        exercise.append_note("B");
        assert_eq!(exercise.notes, Some("A. B".to_string()));
    }

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseID::nil().is_nil());
        assert!(!ExerciseID::from(1).is_nil());
    }

    #[rstest]
    #[case("4", Sets::Count(4))]
    #[case(" 3 ", Sets::Count(3))]
    #[case("MAX", Sets::Text("MAX".to_string()))]
    fn test_sets_from_str(#[case] value: &str, #[case] expected: Sets) {
        assert_eq!(Sets::from(value), expected);
    }

    #[rstest]
    #[case(Sets::Count(4), "4")]
    #[case(Sets::Text("MAX".to_string()), "MAX")]
    fn test_sets_display(#[case] sets: Sets, #[case] string: &str) {
        assert_eq!(sets.to_string(), string);
    }
}
