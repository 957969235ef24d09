use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    Profile, Restrictions, Settings, StudentProfile, WorkoutPlan, cardio::select_cardio,
    selector::select_template,
};

pub const ADAPTED_SUFFIX: &str = " (Adaptado)";

#[derive(Debug, Default, Clone)]
pub struct Generator {
    settings: Settings,
}

impl Generator {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generates a plan using the configured seed or the thread-local generator.
    #[must_use]
    pub fn generate_workout(
        &self,
        profile: &StudentProfile,
        override_level: Option<&str>,
    ) -> WorkoutPlan {
        match self.settings.seed {
            Some(seed) => self.generate_workout_with_rng(
                profile,
                override_level,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => self.generate_workout_with_rng(profile, override_level, &mut rand::thread_rng()),
        }
    }

    #[must_use]
    pub fn generate_workout_with_rng<R: Rng + ?Sized>(
        &self,
        profile: &StudentProfile,
        override_level: Option<&str>,
        rng: &mut R,
    ) -> WorkoutPlan {
        let profile = Profile::normalize(
            profile,
            override_level,
            self.settings.default_age,
            self.settings.default_frequency,
        );
        let selection = select_template(&profile, self.settings.elderly_age);
        debug!(
            "selected {:?} ({}) for age {}, level {}, frequency {}",
            selection.template, selection.name, profile.age, profile.level, profile.frequency
        );

        let mut divisions = selection.template.build(profile.gender, rng);
        if !selection.template.includes_cardio() {
            for division in divisions.values_mut() {
                division.exercises.push(select_cardio(
                    &profile.objective,
                    profile.age,
                    self.settings.elderly_age,
                ));
            }
        }

        let plan = WorkoutPlan {
            name: selection.name.to_string(),
            divisions,
            needs_professional_review: false,
            review_reason: String::new(),
        };

        let restrictions = Restrictions::new(profile.limitations, profile.diseases);
        if restrictions.is_empty() {
            return plan;
        }

        let mut adapted = restrictions.adapt(&plan);
        adapted.name.push_str(ADAPTED_SUFFIX);
        adapted
    }
}

/// Generates a plan with default settings.
#[must_use]
pub fn generate_workout(profile: &StudentProfile, override_level: Option<&str>) -> WorkoutPlan {
    Generator::default().generate_workout(profile, override_level)
}
