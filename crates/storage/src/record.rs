use std::collections::BTreeMap;

use gym_domain as domain;
use serde_json::Value;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error("Division key must be a single letter ({0:?})")]
    InvalidDivisionKey(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub age: Value,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, alias = "sex")]
    pub gender: String,
    #[serde(default)]
    pub training_frequency: Value,
    #[serde(default)]
    pub limitations: String,
    #[serde(default)]
    pub diseases: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<WorkoutPlan>,
}

impl From<&domain::Student> for Student {
    fn from(value: &domain::Student) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            age: Value::String(value.profile.age.clone()),
            objective: value.profile.objective.clone(),
            level: value.profile.level.clone(),
            gender: value.profile.gender.clone(),
            training_frequency: Value::String(value.profile.training_frequency.clone()),
            limitations: value.profile.limitations.clone(),
            diseases: value.profile.diseases.clone(),
            workout: value.workout.as_ref().map(WorkoutPlan::from),
        }
    }
}

impl TryFrom<Student> for domain::Student {
    type Error = RecordError;

    fn try_from(value: Student) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            profile: domain::StudentProfile {
                age: text(&value.age),
                objective: value.objective,
                level: value.level,
                gender: value.gender,
                training_frequency: text(&value.training_frequency),
                limitations: value.limitations,
                diseases: value.diseases,
            },
            workout: value.workout.map(domain::WorkoutPlan::try_from).transpose()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub name: String,
    pub divisions: BTreeMap<String, Division>,
    #[serde(default)]
    pub needs_professional_review: bool,
    #[serde(default)]
    pub review_reason: String,
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            name: value.name.clone(),
            divisions: value
                .divisions
                .iter()
                .map(|(key, division)| (key.to_string(), Division::from(division)))
                .collect(),
            needs_professional_review: value.needs_professional_review,
            review_reason: value.review_reason.clone(),
        }
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = RecordError;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            divisions: value
                .divisions
                .into_iter()
                .map(|(key, division)| {
                    Ok((division_key(&key)?, domain::Division::try_from(division)?))
                })
                .collect::<Result<_, RecordError>>()?,
            needs_professional_review: value.needs_professional_review,
            review_reason: value.review_reason,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Division {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl From<&domain::Division> for Division {
    fn from(value: &domain::Division) -> Self {
        Self {
            name: value.name.clone(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Division> for domain::Division {
    type Error = RecordError;

    fn try_from(value: Division) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub sets: Sets,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            sets: Sets::from(&value.sets),
            reps: value.reps.clone(),
            weight: value.weight.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = RecordError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            sets: value.sets.into(),
            reps: value.reps,
            weight: value.weight,
            notes: value.notes,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Sets {
    Count(u32),
    Text(String),
}

impl From<&domain::Sets> for Sets {
    fn from(value: &domain::Sets) -> Self {
        match value {
            domain::Sets::Count(count) => Sets::Count(*count),
            domain::Sets::Text(text) => Sets::Text(text.clone()),
        }
    }
}

impl From<Sets> for domain::Sets {
    fn from(value: Sets) -> Self {
        match value {
            Sets::Count(count) => domain::Sets::Count(count),
            Sets::Text(text) => domain::Sets::from(text.as_str()),
        }
    }
}

fn division_key(key: &str) -> Result<char, RecordError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(RecordError::InvalidDivisionKey(key.to_string())),
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(string) => string.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_student_deserialize() {
        let record: Student = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "Ana",
            "age": 25,
            "objective": "Hipertrofia",
            "level": "avançado",
            "sex": "female",
            "trainingFrequency": "5x",
            "limitations": "",
            "diseases": "nenhuma"
        }))
        .unwrap();
        let student = domain::Student::try_from(record).unwrap();
        assert_eq!(
            student,
            domain::Student {
                id: 1.into(),
                name: domain::Name::new("Ana").unwrap(),
                profile: domain::StudentProfile {
                    age: "25".to_string(),
                    objective: "Hipertrofia".to_string(),
                    level: "avançado".to_string(),
                    gender: "female".to_string(),
                    training_frequency: "5x".to_string(),
                    limitations: String::new(),
                    diseases: "nenhuma".to_string(),
                },
                workout: None,
            }
        );
    }

    #[test]
    fn test_student_deserialize_missing_fields() {
        let record: Student = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000002",
            "name": "Bruno",
            "trainingFrequency": 4
        }))
        .unwrap();
        let student = domain::Student::try_from(record).unwrap();
        assert_eq!(student.profile.age, "");
        assert_eq!(student.profile.training_frequency, "4");
        assert_eq!(student.profile.gender, "");
    }

    #[test]
    fn test_student_invalid_name() {
        let record: Student = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000003",
            "name": " "
        }))
        .unwrap();
        assert!(matches!(
            domain::Student::try_from(record),
            Err(RecordError::InvalidName(domain::NameError::Empty))
        ));
    }

    #[test]
    fn test_workout_plan_serialize() {
        let plan = domain::WorkoutPlan {
            name: "Hipertrofia PPL (Adaptado)".to_string(),
            divisions: BTreeMap::from([(
                'A',
                domain::Division::new(
                    "Treino A",
                    vec![domain::Exercise {
                        id: 1.into(),
                        name: domain::Name::new("Mesa Flexora").unwrap(),
                        sets: domain::Sets::Count(3),
                        reps: "12".to_string(),
                        weight: String::new(),
                        notes: Some("Sem dor".to_string()),
                    }],
                ),
            )]),
            needs_professional_review: true,
            review_reason: "Joelho".to_string(),
        };
        let value = serde_json::to_value(WorkoutPlan::from(&plan)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Hipertrofia PPL (Adaptado)",
                "divisions": {
                    "A": {
                        "name": "Treino A",
                        "exercises": [{
                            "id": "00000000-0000-0000-0000-000000000001",
                            "name": "Mesa Flexora",
                            "sets": 3,
                            "reps": "12",
                            "weight": "",
                            "notes": "Sem dor"
                        }]
                    }
                },
                "needsProfessionalReview": true,
                "reviewReason": "Joelho"
            })
        );
        assert_eq!(
            domain::WorkoutPlan::try_from(serde_json::from_value::<WorkoutPlan>(value).unwrap())
                .unwrap(),
            plan
        );
    }

    #[rstest]
    #[case(json!(4), domain::Sets::Count(4))]
    #[case(json!("4"), domain::Sets::Count(4))]
    #[case(json!("MAX"), domain::Sets::Text("MAX".to_string()))]
    fn test_sets_deserialize(#[case] value: Value, #[case] expected: domain::Sets) {
        assert_eq!(
            domain::Sets::from(serde_json::from_value::<Sets>(value).unwrap()),
            expected
        );
    }

    #[rstest]
    #[case("A", Some('A'))]
    #[case("b", Some('B'))]
    #[case("", None)]
    #[case("AB", None)]
    #[case("1", None)]
    fn test_division_key(#[case] key: &str, #[case] expected: Option<char>) {
        assert_eq!(division_key(key).ok(), expected);
    }

    #[rstest]
    #[case(Value::Null, "")]
    #[case(json!(30), "30")]
    #[case(json!("30 anos"), "30 anos")]
    #[case(json!(true), "true")]
    fn test_text(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(text(&value), expected);
    }
}
