use std::collections::BTreeMap;

use rand::{Rng, seq::SliceRandom};

use crate::{Exercise, Name, Sets};

/// Interchangeable variants of one movement pattern.
pub struct Pattern {
    pub key: &'static str,
    pub variants: &'static [&'static str],
}

/// Fallback exercise and load parameters of a template slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prescription {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
}

impl Prescription {
    #[must_use]
    pub const fn new(name: &'static str, sets: u32, reps: &'static str) -> Self {
        Self { name, sets, reps }
    }
}

pub(crate) static PATTERNS: std::sync::LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    std::sync::LazyLock::new(|| {
        CATALOG
            .iter()
            .map(|p| (p.key, p.variants))
            .collect::<BTreeMap<_, _>>()
    });

/// Returns a random variant of the pattern with the prescribed sets and reps.
///
/// Unknown keys yield the exercise named by the prescription.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, key: &str, prescription: Prescription) -> Exercise {
    let name = variants(key)
        .choose(rng)
        .copied()
        .unwrap_or(prescription.name);
    Exercise::new(
        Name::from_static(name),
        Sets::Count(prescription.sets),
        prescription.reps,
    )
}

/// Variant names of a pattern, empty for unknown keys.
#[must_use]
pub fn variants(key: &str) -> &'static [&'static str] {
    PATTERNS.get(key).copied().unwrap_or_default()
}

const CATALOG: [Pattern; 20] = [
    Pattern {
        key: "abdominal",
        variants: &[
            "Abdominal Infra",
            "Abdominal Remador",
            "Abdominal Supra",
            "Prancha Isométrica",
        ],
    },
    Pattern {
        key: "abdutora",
        variants: &["Abdução na Polia", "Cadeira Abdutora"],
    },
    Pattern {
        key: "afundo",
        variants: &[
            "Afundo com Halteres",
            "Agachamento Búlgaro",
            "Passada (Avanço)",
        ],
    },
    Pattern {
        key: "agachamento",
        variants: &[
            "Agachamento Goblet",
            "Agachamento Hack",
            "Agachamento Livre",
            "Agachamento no Smith",
        ],
    },
    Pattern {
        key: "biceps",
        variants: &[
            "Rosca Alternada com Halteres",
            "Rosca Direta com Barra",
            "Rosca Martelo",
            "Rosca Scott",
        ],
    },
    Pattern {
        key: "crucifixo",
        variants: &[
            "Crossover na Polia",
            "Crucifixo com Halteres",
            "Crucifixo na Máquina (Peck Deck)",
        ],
    },
    Pattern {
        key: "desenvolvimento",
        variants: &[
            "Desenvolvimento com Barra",
            "Desenvolvimento com Halteres",
            "Desenvolvimento na Máquina",
        ],
    },
    Pattern {
        key: "elevacao_lateral",
        variants: &["Elevação Lateral com Halteres", "Elevação Lateral na Polia"],
    },
    Pattern {
        key: "elevacao_pelvica",
        variants: &[
            "Elevação Pélvica com Barra",
            "Elevação Pélvica na Máquina",
            "Glúteo 4 Apoios na Polia",
        ],
    },
    Pattern {
        key: "extensora",
        variants: &["Cadeira Extensora", "Cadeira Extensora Unilateral"],
    },
    Pattern {
        key: "flexao",
        variants: &["Flexão de Braço", "Flexão de Braço Inclinada"],
    },
    Pattern {
        key: "flexora",
        variants: &["Cadeira Flexora", "Mesa Flexora"],
    },
    Pattern {
        key: "leg_press",
        variants: &["Leg Press 45°", "Leg Press Horizontal"],
    },
    Pattern {
        key: "panturrilha",
        variants: &["Panturrilha em Pé", "Panturrilha no Smith em Pé"],
    },
    Pattern {
        key: "puxada",
        variants: &["Puxada Frontal", "Puxada Supinada", "Puxada com Triângulo"],
    },
    Pattern {
        key: "remada",
        variants: &[
            "Remada Baixa na Polia",
            "Remada Curvada com Barra",
            "Remada Unilateral com Halter",
            "Remada na Máquina",
        ],
    },
    Pattern {
        key: "stiff",
        variants: &["Stiff com Barra", "Stiff com Halteres"],
    },
    Pattern {
        key: "supino_inclinado",
        variants: &[
            "Supino Inclinado com Barra",
            "Supino Inclinado com Halteres",
            "Supino Inclinado na Máquina",
        ],
    },
    Pattern {
        key: "supino_reto",
        variants: &[
            "Supino Reto com Barra",
            "Supino Reto com Halteres",
            "Supino Reto na Máquina",
        ],
    },
    Pattern {
        key: "triceps",
        variants: &[
            "Tríceps Corda",
            "Tríceps Francês",
            "Tríceps Pulley",
            "Tríceps Testa",
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_pick_known_key() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..20 {
            let exercise = pick(
                &mut rng,
                "agachamento",
                Prescription::new("Agachamento Livre", 4, "8-10"),
            );
            assert!(variants("agachamento").contains(&exercise.name.as_str()));
            assert_eq!(exercise.sets, Sets::Count(4));
            assert_eq!(exercise.reps, "8-10");
            assert_eq!(exercise.weight, "");
            assert_eq!(exercise.notes, None);
        }
    }

    #[test]
    fn test_pick_varies() {
        let mut rng = StdRng::seed_from_u64(1);
        let names = (0..50)
            .map(|_| pick(&mut rng, "remada", Prescription::new("Remada", 3, "10")).name)
            .collect::<HashSet<_>>();
        assert!(names.len() > 1);
    }

    #[test]
    fn test_pick_unknown_key() {
        let mut rng = StdRng::seed_from_u64(0);
        let exercise = pick(&mut rng, "unknown", Prescription::new("Burpee", 3, "10"));
        assert_eq!(exercise.name.as_str(), "Burpee");
        assert_eq!(exercise.sets, Sets::Count(3));
        assert_eq!(exercise.reps, "10");
        assert_eq!(exercise.weight, "");
        assert!(!exercise.id.is_nil());
    }

    #[test]
    fn test_variants_unknown_key() {
        assert!(variants("unknown").is_empty());
    }

    #[test]
    fn test_catalog_order() {
        let keys = CATALOG.iter().map(|p| p.key).collect::<Vec<_>>();
        let mut keys_sorted = keys.clone();
        keys_sorted.sort_unstable();
        assert_eq!(keys, keys_sorted, "unsorted");

        for pattern in CATALOG {
            let mut variants_sorted = pattern.variants.to_vec();
            variants_sorted.sort_unstable();
            assert_eq!(pattern.variants.to_vec(), variants_sorted, "unsorted");
        }
    }

    #[test]
    fn test_catalog_duplicate_names() {
        let mut names = HashSet::new();

        for pattern in CATALOG {
            assert!(!pattern.variants.is_empty(), "no variants for {}", pattern.key);
            for name in pattern.variants {
                assert!(names.insert(*name), "duplicate name {name}");
            }
        }
    }

    #[test]
    fn test_catalog_valid_names() {
        for pattern in CATALOG {
            for name in pattern.variants {
                assert_eq!(Name::new(name).unwrap().as_str(), *name);
            }
        }
    }
}
