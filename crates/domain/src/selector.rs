use crate::{Gender, Level, Profile, Template, cardio::is_weight_loss};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub template: Template,
    pub name: &'static str,
}

/// Maps the profile to a split template, first matching rule wins.
#[must_use]
pub fn select_template(profile: &Profile, elderly_age: u32) -> Selection {
    let (template, name) = if profile.age > elderly_age {
        (Template::Elderly, "Melhor Idade / Adaptação")
    } else if is_weight_loss(&profile.objective) {
        (Template::WeightLoss, "Emagrecimento & Metabólico")
    } else if profile.level == Level::Beginner {
        (Template::Adaptation, "Adaptação / Iniciante")
    } else {
        match profile.frequency {
            0..=2 => (Template::FullBody, "Fullbody (2x Semana)"),
            3 if profile.gender == Gender::Female => {
                (Template::Split3, "Hipertrofia (Foco Inferiores)")
            }
            3 => (Template::Split3, "Hipertrofia PPL"),
            4 => (Template::Split4, "Hipertrofia ABCD"),
            _ => (Template::Split5, "Hipertrofia ABCDE (Intenso)"),
        }
    };
    Selection { template, name }
}
