use std::fmt;

/// Profile fields as stored with the student, all free text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub age: String,
    pub objective: String,
    pub level: String,
    pub gender: String,
    pub training_frequency: String,
    pub limitations: String,
    pub diseases: String,
}

/// Normalized view of a [`StudentProfile`] used for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub age: u32,
    pub objective: String,
    pub level: Level,
    pub gender: Gender,
    pub frequency: u32,
    pub limitations: Vec<String>,
    pub diseases: Vec<String>,
}

impl Profile {
    #[must_use]
    pub fn normalize(
        profile: &StudentProfile,
        override_level: Option<&str>,
        default_age: u32,
        default_frequency: u32,
    ) -> Self {
        Self {
            age: parse_leading_integer(&profile.age).unwrap_or(default_age),
            objective: profile.objective.trim().to_lowercase(),
            level: Level::from(
                override_level
                    .filter(|level| !level.trim().is_empty())
                    .unwrap_or(&profile.level),
            ),
            gender: Gender::from(profile.gender.as_str()),
            frequency: parse_first_integer(&profile.training_frequency)
                .unwrap_or(default_frequency),
            limitations: tokens(&profile.limitations),
            diseases: tokens(&profile.diseases),
        }
    }

    #[must_use]
    pub fn has_restrictions(&self) -> bool {
        !self.limitations.is_empty() || !self.diseases.is_empty()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "iniciante" => Level::Beginner,
            "avançado" | "avancado" => Level::Advanced,
            _ => Level::Intermediate,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Level::Beginner => "iniciante",
                Level::Intermediate => "intermediário",
                Level::Advanced => "avançado",
            }
        )
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Gender {
    Female,
    Male,
    #[default]
    Unspecified,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "female" | "feminino" => Gender::Female,
            "male" | "masculino" => Gender::Male,
            _ => Gender::Unspecified,
        }
    }
}

/// Splits a comma separated list into lower-cased tokens, dropping "nenhuma" and "nenhum".
#[must_use]
pub fn tokens(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty() && t != "nenhuma" && t != "nenhum")
        .collect()
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn parse_leading_integer(value: &str) -> Option<u32> {
    let digits = value
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    digits.parse().ok()
}

fn parse_first_integer(value: &str) -> Option<u32> {
    let digits = value
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_profile_normalize() {
        let profile = StudentProfile {
            age: "45".to_string(),
            objective: " Hipertrofia ".to_string(),
            level: "Avançado".to_string(),
            gender: "Feminino".to_string(),
            training_frequency: "4 vezes por semana".to_string(),
            limitations: "Joelho, nenhuma, Ombro".to_string(),
            diseases: "Hipertensão".to_string(),
        };
        assert_eq!(
            Profile::normalize(&profile, None, 30, 3),
            Profile {
                age: 45,
                objective: "hipertrofia".to_string(),
                level: Level::Advanced,
                gender: Gender::Female,
                frequency: 4,
                limitations: vec!["joelho".to_string(), "ombro".to_string()],
                diseases: vec!["hipertensão".to_string()],
            }
        );
    }

    #[test]
    fn test_profile_normalize_defaults() {
        let profile = Profile::normalize(&StudentProfile::default(), None, 30, 3);
        assert_eq!(profile.age, 30);
        assert_eq!(profile.objective, "");
        assert_eq!(profile.level, Level::Beginner);
        assert_eq!(profile.gender, Gender::Unspecified);
        assert_eq!(profile.frequency, 3);
        assert!(!profile.has_restrictions());
    }

    #[rstest]
    #[case("iniciante", Some("intermediário"), Level::Intermediate)]
    #[case("iniciante", None, Level::Beginner)]
    #[case("avançado", Some(""), Level::Advanced)]
    #[case("avançado", Some("  "), Level::Advanced)]
    #[case("avançado", Some("iniciante"), Level::Beginner)]
    fn test_profile_normalize_override_level(
        #[case] level: &str,
        #[case] override_level: Option<&str>,
        #[case] expected: Level,
    ) {
        let profile = StudentProfile {
            level: level.to_string(),
            ..StudentProfile::default()
        };
        assert_eq!(
            Profile::normalize(&profile, override_level, 30, 3).level,
            expected
        );
    }

    #[rstest]
    #[case("", None)]
    #[case("abc", None)]
    #[case("30", Some(30))]
    #[case(" 62 anos", Some(62))]
    #[case("-5", None)]
    fn test_parse_leading_integer(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_leading_integer(value), expected);
    }

    #[rstest]
    #[case("", None)]
    #[case("todos os dias", None)]
    #[case("5x", Some(5))]
    #[case("treino 3 vezes, 2 horas", Some(3))]
    #[case("99999999999", None)]
    fn test_parse_first_integer(#[case] value: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_first_integer(value), expected);
    }

    #[rstest]
    #[case("", Vec::<&str>::new())]
    #[case("Nenhuma", Vec::<&str>::new())]
    #[case("nenhum, NENHUMA", Vec::<&str>::new())]
    #[case("Joelho", vec!["joelho"])]
    #[case(" Joelho ,, Coluna Lombar ", vec!["joelho", "coluna lombar"])]
    fn test_tokens(#[case] value: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokens(value), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("joelho", "Joelho")]
    #[case("ombro direito", "Ombro direito")]
    #[case("élbow", "Élbow")]
    fn test_capitalize(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(capitalize(token), expected);
    }

    #[rstest]
    #[case("iniciante", Level::Beginner)]
    #[case("INICIANTE", Level::Beginner)]
    #[case("", Level::Beginner)]
    #[case("intermediário", Level::Intermediate)]
    #[case("Avançado", Level::Advanced)]
    #[case("avancado", Level::Advanced)]
    fn test_level_from_str(#[case] value: &str, #[case] expected: Level) {
        assert_eq!(Level::from(value), expected);
    }

    #[rstest]
    #[case("female", Gender::Female)]
    #[case("Feminino", Gender::Female)]
    #[case("male", Gender::Male)]
    #[case("masculino", Gender::Male)]
    #[case("", Gender::Unspecified)]
    fn test_gender_from_str(#[case] value: &str, #[case] expected: Gender) {
        assert_eq!(Gender::from(value), expected);
    }
}
