use std::collections::BTreeMap;

use crate::Exercise;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub name: String,
    pub divisions: BTreeMap<char, Division>,
    pub needs_professional_review: bool,
    pub review_reason: String,
}

impl WorkoutPlan {
    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.divisions.values().flat_map(|d| d.exercises.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises().next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Division {
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Division {
    #[must_use]
    pub fn new(name: &str, exercises: Vec<Exercise>) -> Self {
        Self {
            name: name.to_string(),
            exercises,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_plan_is_empty() {
        let mut plan = WorkoutPlan {
            name: "A".to_string(),
            divisions: BTreeMap::from([('A', Division::new("Treino A", vec![]))]),
            needs_professional_review: false,
            review_reason: String::new(),
        };
        assert!(plan.is_empty());

        plan.divisions.insert(
            'B',
            Division::new("Treino B", vec![Exercise::fixed("Prancha", 3, "30 seg")]),
        );
        assert!(!plan.is_empty());
        assert_eq!(plan.exercises().count(), 1);
    }
}
