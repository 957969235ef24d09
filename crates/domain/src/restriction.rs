use log::{debug, info};

use crate::{Exercise, WorkoutPlan, cardio::HIIT_CARDIO, profile::capitalize};

pub const SPRAWL: &str = "Sprawl (Sem salto)";
pub const WALL_ISOMETRIC_SQUAT: &str = "Agachamento Isométrico na Parede";
pub const LOW_IMPACT_JACK: &str = "Polichinelo Adaptado (Sem Salto)";
pub const STATIONARY_MARCH: &str = "Marcha Estacionária";
pub const SIDE_STEP: &str = "Step Lateral (Sem Salto)";
pub const MODERATE_BIKE: &str = "Bike Ergométrica (Ritmo Moderado)";
pub const SHORT_CRUNCH: &str = "Abdominal Supra (Curto)";
pub const CONTINUOUS_WALK: &str = "Caminhada Contínua (Ritmo Moderado)";
pub const MACHINE_CRUNCH: &str = "Abdominal na Máquina (Sentado)";
pub const WALL_BALL_SQUAT: &str = "Agachamento com Bola na Parede";
pub const HAMSTRING_CURL: &str = "Mesa Flexora";
pub const SEATED_HAMSTRING_CURL: &str = "Cadeira Flexora";
pub const ISOMETRIC_LEG_EXTENSION: &str = "Cadeira Extensora (Isometria)";
pub const REDUCED_BALL_SQUAT: &str = "Agachamento com Bola (Amplitude Reduzida)";
pub const BAND_ABDUCTION: &str = "Abdução em Pé com Elástico";
pub const SEATED_CALF_RAISE: &str = "Panturrilha Sentado";
pub const HIGH_FEET_LEG_PRESS: &str = "Leg Press (Pés Altos na Plataforma)";
pub const NEUTRAL_SHOULDER_PRESS: &str = "Desenvolvimento com Halteres (Pegada Neutra)";
pub const BAND_FRONT_RAISE: &str = "Elevação Frontal com Elástico";
pub const NEUTRAL_DUMBBELL_PRESS: &str = "Supino com Halteres (Pegada Neutra)";
pub const VERTICAL_PRESS_MACHINE: &str = "Supino Vertical na Máquina (Pegada Neutra)";
pub const SUPPORTED_LEG_PRESS: &str = "Leg Press 45° (Lombar Apoiada)";
pub const MACHINE_HIP_THRUST: &str = "Elevação Pélvica na Máquina";
pub const CHEST_SUPPORTED_ROW: &str = "Remada Sentada na Máquina (Peito Apoiado)";
pub const SEATED_FRONT_RAISE: &str = "Elevação Frontal Sentado";

pub const BREATHING_NOTE: &str = "Não prender a respiração (evitar manobra de Valsalva)";
pub const POSITION_CHANGE_NOTE: &str = "Evitar mudanças bruscas de posição";
pub const COMFORT_ANGLE_NOTE: &str = "Manter ângulo confortável, sem dor";
pub const BRACING_NOTE: &str = "Manter abdômen contraído e coluna neutra";

/// Substitutes that may stand in for one another when a division already holds one of them.
const EQUIVALENTS: &[&[&str]] = &[&[HAMSTRING_CURL, SEATED_HAMSTRING_CURL]];

const KNEE: &[&str] = &["joelho"];
const ANKLE: &[&str] = &["tornozelo"];
const HIP: &[&str] = &["quadril"];
const SHOULDER: &[&str] = &["ombro"];
const SPINE: &[&str] = &["coluna", "lombar", "hérnia", "hernia"];
const VERTIGO: &[&str] = &["labirintite", "vertigem", "tontura"];
const CARDIOVASCULAR: &[&str] = &[
    "hipertens",
    "pressão alta",
    "pressao alta",
    "cardíac",
    "cardiac",
    "cardiopatia",
    "coração",
    "coracao",
    "arritmia",
];

/// Declared limitations and conditions of a student.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Restrictions {
    pub limitations: Vec<String>,
    pub diseases: Vec<String>,
}

impl Restrictions {
    #[must_use]
    pub fn new(limitations: Vec<String>, diseases: Vec<String>) -> Self {
        Self {
            limitations,
            diseases,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.limitations.is_empty() && self.diseases.is_empty()
    }

    /// Any declared limitation or condition requires review, even without a matching rule.
    #[must_use]
    pub fn needs_professional_review(&self) -> bool {
        !self.is_empty()
    }

    #[must_use]
    pub fn review_reason(&self) -> String {
        self.limitations
            .iter()
            .chain(&self.diseases)
            .map(|t| capitalize(t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns a copy of the plan with contraindicated exercises substituted.
    #[must_use]
    pub fn adapt(&self, plan: &WorkoutPlan) -> WorkoutPlan {
        let mut adapted = plan.clone();
        let conditions = Conditions::from(self);
        for division in adapted.divisions.values_mut() {
            let mut exercises: Vec<Exercise> = Vec::with_capacity(division.exercises.len());
            for mut exercise in std::mem::take(&mut division.exercises) {
                conditions.adapt(&mut exercise);
                if exercises.iter().any(|e| e.name == exercise.name) {
                    let Some(substitute) = equivalent(&exercise, &exercises) else {
                        debug!("dropping repeated {} from {}", exercise.name, division.name);
                        continue;
                    };
                    replace(&mut exercise, substitute, "repeated");
                }
                exercises.push(exercise);
            }
            division.exercises = exercises;
        }
        adapted.needs_professional_review = self.needs_professional_review();
        adapted.review_reason = self.review_reason();
        if adapted.needs_professional_review {
            info!("professional review required: {}", adapted.review_reason);
        }
        adapted
    }

    fn mentions(&self, needles: &[&str]) -> bool {
        self.limitations
            .iter()
            .chain(&self.diseases)
            .any(|t| needles.iter().any(|n| t.contains(n)))
    }
}

#[allow(clippy::struct_excessive_bools)]
struct Conditions {
    knee: bool,
    ankle: bool,
    hip: bool,
    shoulder: bool,
    spine: bool,
    vertigo: bool,
    cardiovascular: bool,
}

impl From<&Restrictions> for Conditions {
    fn from(value: &Restrictions) -> Self {
        Self {
            knee: value.mentions(KNEE),
            ankle: value.mentions(ANKLE),
            hip: value.mentions(HIP),
            shoulder: value.mentions(SHOULDER),
            spine: value.mentions(SPINE),
            vertigo: value.mentions(VERTIGO),
            cardiovascular: value.mentions(CARDIOVASCULAR),
        }
    }
}

impl Conditions {
    fn adapt(&self, exercise: &mut Exercise) {
        if self.knee || self.ankle || self.hip || self.vertigo {
            self.avoid_impact(exercise);
        }
        if self.cardiovascular {
            cardiovascular(exercise);
        }
        if self.vertigo {
            vertigo(exercise);
        }
        if self.knee {
            knee(exercise);
        }
        if self.hip {
            hip(exercise);
        }
        if self.ankle {
            ankle(exercise);
        }
        if self.shoulder {
            shoulder(exercise);
        }
        if self.spine {
            spine(exercise);
        }
    }

    fn avoid_impact(&self, exercise: &mut Exercise) {
        let name = exercise.name.as_str().to_lowercase();
        if name.contains("burpee") {
            if self.vertigo {
                replace(exercise, WALL_ISOMETRIC_SQUAT, "impact");
                exercise.reps = "30 seg".to_string();
            } else {
                replace(exercise, SPRAWL, "impact");
            }
        } else if name.contains("polichinelo") {
            replace(exercise, LOW_IMPACT_JACK, "impact");
        } else if name.contains("corrida") {
            replace(exercise, STATIONARY_MARCH, "impact");
        } else if name.contains("saltos") {
            replace(exercise, SIDE_STEP, "impact");
        } else if name == HIIT_CARDIO.to_lowercase() {
            replace(exercise, MODERATE_BIKE, "impact");
            exercise.reps = "20 min".to_string();
        }
    }
}

fn cardiovascular(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if name.contains("burpee") || name.contains("sprawl") {
        replace(exercise, LOW_IMPACT_JACK, "cardiovascular");
    } else if name.contains("prancha") {
        replace(exercise, SHORT_CRUNCH, "cardiovascular");
        exercise.reps = "15".to_string();
    } else if name.contains("leg press") {
        debug!("adding breathing note to {}", exercise.name);
        exercise.append_note(BREATHING_NOTE);
    } else if name == HIIT_CARDIO.to_lowercase() {
        replace(exercise, CONTINUOUS_WALK, "cardiovascular");
        exercise.reps = "20-30 min".to_string();
    }
}

fn vertigo(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if (name.contains("abdominal") || name.contains("prancha")) && !name.contains("máquina") {
        replace(exercise, MACHINE_CRUNCH, "vertigo");
        exercise.append_note(POSITION_CHANGE_NOTE);
    } else if name.contains("burpee") || name.contains("sprawl") {
        replace(exercise, WALL_ISOMETRIC_SQUAT, "vertigo");
        exercise.reps = "30 seg".to_string();
    }
}

fn knee(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if name.contains("agachamento") && !name.contains("bola") {
        replace(exercise, WALL_BALL_SQUAT, "knee");
        exercise.weight = "Leve".to_string();
    } else if ["afundo", "passada", "stiff"]
        .iter()
        .any(|p| name.contains(p))
    {
        replace(exercise, HAMSTRING_CURL, "knee");
    } else if name.contains("extensora") {
        replace(exercise, ISOMETRIC_LEG_EXTENSION, "knee");
        exercise.reps = "30 seg".to_string();
        exercise.append_note(COMFORT_ANGLE_NOTE);
    }
}

fn hip(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if (name.contains("agachamento") && !name.contains("bola")) || name.contains("leg press") {
        replace(exercise, REDUCED_BALL_SQUAT, "hip");
    } else if name.contains("abdutora") {
        replace(exercise, BAND_ABDUCTION, "hip");
    }
}

fn ankle(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if name.contains("panturrilha") && name.contains("em pé") {
        replace(exercise, SEATED_CALF_RAISE, "ankle");
    } else if name.contains("agachamento") && !name.contains("bola") {
        replace(exercise, HIGH_FEET_LEG_PRESS, "ankle");
    }
}

fn shoulder(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if name.contains("desenvolvimento") && !name.contains("pegada neutra") {
        replace(exercise, NEUTRAL_SHOULDER_PRESS, "shoulder");
    } else if name.contains("elevação lateral") {
        replace(exercise, BAND_FRONT_RAISE, "shoulder");
    } else if name.contains("supino inclinado") {
        replace(exercise, NEUTRAL_DUMBBELL_PRESS, "shoulder");
    } else if name.contains("flexão de braço") {
        replace(exercise, VERTICAL_PRESS_MACHINE, "shoulder");
    }
}

fn spine(exercise: &mut Exercise) {
    let name = exercise.name.as_str().to_lowercase();
    if name.contains("agachamento livre") {
        replace(exercise, SUPPORTED_LEG_PRESS, "spine");
        exercise.append_note(BRACING_NOTE);
    } else if name.contains("levantamento terra") {
        replace(exercise, MACHINE_HIP_THRUST, "spine");
        exercise.append_note(BRACING_NOTE);
    } else if name.contains("remada curvada") {
        replace(exercise, CHEST_SUPPORTED_ROW, "spine");
        exercise.append_note(BRACING_NOTE);
    } else if name.contains("stiff") {
        replace(exercise, HAMSTRING_CURL, "spine");
        exercise.append_note(BRACING_NOTE);
    } else if name.contains("desenvolvimento") {
        replace(exercise, SEATED_FRONT_RAISE, "spine");
    }
}

fn equivalent(exercise: &Exercise, taken: &[Exercise]) -> Option<&'static str> {
    EQUIVALENTS
        .iter()
        .find(|group| group.contains(&exercise.name.as_str()))?
        .iter()
        .copied()
        .find(|name| taken.iter().all(|e| e.name.as_str() != *name))
}

fn replace(exercise: &mut Exercise, name: &'static str, rule: &str) {
    debug!("replacing {} with {name} ({rule})", exercise.name);
    exercise.rename(name);
}
