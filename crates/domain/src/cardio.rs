use crate::Exercise;

pub const HIIT_CARDIO: &str = "Cardio HIIT (Bike ou Esteira)";
pub const MODERATE_CARDIO: &str = "Caminhada ou Bike Leve (Ritmo Moderado)";
pub const FREE_CARDIO: &str = "Cardio Livre (Esteira, Bike ou Elíptico)";

/// Whether the goal aims at weight loss.
#[must_use]
pub fn is_weight_loss(objective: &str) -> bool {
    let objective = objective.to_lowercase();
    objective.contains("emagreci") || objective.contains("perda")
}

/// Chooses the cardio finisher appended to a division.
///
/// Weight loss goals take precedence over age.
#[must_use]
pub fn select_cardio(objective: &str, age: u32, elderly_age: u32) -> Exercise {
    if is_weight_loss(objective) {
        Exercise::fixed(HIIT_CARDIO, 1, "20 min")
    } else if age > elderly_age {
        Exercise::fixed(MODERATE_CARDIO, 1, "15-20 min").with_weight("Leve")
    } else {
        Exercise::fixed(FREE_CARDIO, 1, "15 min")
    }
}
