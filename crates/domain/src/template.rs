use std::collections::BTreeMap;

use rand::Rng;

use crate::{
    Division, Exercise, Gender,
    cardio::HIIT_CARDIO,
    catalog::{Prescription, pick},
};

/// Weekly split layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Template {
    Adaptation,
    Elderly,
    WeightLoss,
    FullBody,
    Split3,
    Split4,
    Split5,
}

impl Template {
    /// Builds the divisions with freshly drawn exercise variants.
    pub fn build<R: Rng + ?Sized>(self, gender: Gender, rng: &mut R) -> BTreeMap<char, Division> {
        let female = gender == Gender::Female;
        let mut slots = Slots { rng };
        let divisions = match self {
            Template::Adaptation => adaptation(&mut slots, female),
            Template::Elderly => elderly(&mut slots, female),
            Template::WeightLoss => weight_loss(&mut slots, female),
            Template::FullBody => full_body(&mut slots, female),
            Template::Split3 if female => split_3_lower_body(&mut slots),
            Template::Split3 => split_3_push_pull_legs(&mut slots),
            Template::Split4 if female => split_4_lower_body(&mut slots),
            Template::Split4 => split_4(&mut slots),
            Template::Split5 if female => split_5_lower_body(&mut slots),
            Template::Split5 => split_5(&mut slots),
        };
        ('A'..='Z').zip(divisions).collect()
    }

    /// Whether the divisions already contain cardio circuits.
    #[must_use]
    pub fn includes_cardio(self) -> bool {
        self == Template::WeightLoss
    }
}

struct Slots<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> Slots<'_, R> {
    fn pick(&mut self, key: &str, name: &'static str, sets: u32, reps: &'static str) -> Exercise {
        pick(self.rng, key, Prescription::new(name, sets, reps))
    }
}

fn elderly<R: Rng + ?Sized>(s: &mut Slots<R>, female: bool) -> Vec<Division> {
    let mut a = vec![
        Exercise::fixed("Sentar e Levantar do Banco", 3, "10").with_weight("Peso corporal"),
        s.pick("leg_press", "Leg Press 45°", 2, "12"),
        s.pick("puxada", "Puxada Frontal", 2, "12"),
        s.pick("remada", "Remada na Máquina", 2, "12"),
    ];
    if female {
        a.push(s.pick("abdutora", "Cadeira Abdutora", 2, "15"));
    }
    a.extend([
        Exercise::fixed("Elevação de Calcanhares com Apoio", 2, "15"),
        Exercise::fixed("Equilíbrio Unipodal com Apoio", 2, "20 seg cada perna"),
    ]);
    vec![Division::new("Treino A - Funcional e Mobilidade", a)]
}

fn adaptation<R: Rng + ?Sized>(s: &mut Slots<R>, female: bool) -> Vec<Division> {
    let mut a = vec![
        s.pick("leg_press", "Leg Press 45°", 3, "15"),
        s.pick("extensora", "Cadeira Extensora", 3, "15"),
        s.pick("flexora", "Mesa Flexora", 3, "15"),
    ];
    if female {
        a.push(s.pick("elevacao_pelvica", "Elevação Pélvica na Máquina", 3, "15"));
        a.push(s.pick("abdutora", "Cadeira Abdutora", 3, "15"));
    } else {
        a.push(s.pick("panturrilha", "Panturrilha em Pé", 3, "20"));
    }
    a.push(s.pick("abdominal", "Abdominal Supra", 3, "15"));
    let b = vec![
        s.pick("puxada", "Puxada Frontal", 3, "15"),
        s.pick("supino_reto", "Supino Reto na Máquina", 3, "15"),
        s.pick("remada", "Remada na Máquina", 3, "15"),
        s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 3, "12"),
        s.pick("biceps", "Rosca Direta com Barra", 2, "15"),
        s.pick("triceps", "Tríceps Pulley", 2, "15"),
    ];
    vec![
        Division::new("Treino A - Adaptação Inferiores e Core", a),
        Division::new("Treino B - Adaptação Superiores", b),
    ]
}

fn weight_loss<R: Rng + ?Sized>(s: &mut Slots<R>, female: bool) -> Vec<Division> {
    let mut a = vec![
        s.pick("agachamento", "Agachamento Goblet", 3, "15"),
        Exercise::fixed("Polichinelo", 3, "45 seg"),
        s.pick("afundo", "Afundo com Halteres", 3, "12 cada perna"),
        Exercise::fixed("Burpee", 3, "10"),
    ];
    if female {
        a.push(s.pick("elevacao_pelvica", "Elevação Pélvica com Barra", 3, "15"));
    }
    a.extend([
        s.pick("abdominal", "Abdominal Supra", 3, "20"),
        Exercise::fixed(HIIT_CARDIO, 1, "20 min"),
    ]);
    let mut b = vec![
        s.pick("puxada", "Puxada Frontal", 3, "15"),
        Exercise::fixed("Corrida Estacionária", 3, "45 seg"),
        s.pick("supino_reto", "Supino Reto com Halteres", 3, "12"),
        Exercise::fixed("Saltos Laterais", 3, "30 seg"),
        s.pick("remada", "Remada Baixa na Polia", 3, "12"),
    ];
    if female {
        b.push(s.pick("abdutora", "Cadeira Abdutora", 3, "20"));
    }
    b.extend([
        Exercise::fixed("Prancha", 3, "30 seg"),
        Exercise::fixed(HIIT_CARDIO, 1, "20 min"),
    ]);
    vec![
        Division::new("Treino A - Circuito Metabólico Inferiores", a),
        Division::new("Treino B - Circuito Metabólico Superiores", b),
    ]
}

fn full_body<R: Rng + ?Sized>(s: &mut Slots<R>, female: bool) -> Vec<Division> {
    let mut a = vec![
        s.pick("agachamento", "Agachamento Livre", 3, "10-12"),
        s.pick("supino_reto", "Supino Reto com Barra", 3, "10-12"),
        s.pick("puxada", "Puxada Frontal", 3, "10-12"),
        s.pick("desenvolvimento", "Desenvolvimento com Halteres", 3, "10-12"),
    ];
    if female {
        a.push(s.pick("elevacao_pelvica", "Elevação Pélvica com Barra", 3, "12"));
    }
    a.extend([
        s.pick("flexora", "Mesa Flexora", 3, "12"),
        s.pick("abdominal", "Abdominal Supra", 3, "15"),
    ]);
    vec![Division::new("Treino A - Fullbody", a)]
}

fn split_3_push_pull_legs<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Empurrar (Peito, Ombro e Tríceps)",
            vec![
                s.pick("supino_reto", "Supino Reto com Barra", 4, "8-10"),
                s.pick("supino_inclinado", "Supino Inclinado com Halteres", 3, "10"),
                s.pick("crucifixo", "Crucifixo com Halteres", 3, "12"),
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 3, "10"),
                s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 3, "12-15"),
                s.pick("triceps", "Tríceps Pulley", 3, "12"),
            ],
        ),
        Division::new(
            "Treino B - Puxar (Costas e Bíceps)",
            vec![
                s.pick("puxada", "Puxada Frontal", 4, "8-10"),
                s.pick("remada", "Remada Curvada com Barra", 4, "10"),
                Exercise::fixed("Face Pull na Polia", 3, "15"),
                s.pick("biceps", "Rosca Direta com Barra", 3, "10-12"),
                s.pick("abdominal", "Abdominal Supra", 3, "15"),
            ],
        ),
        Division::new(
            "Treino C - Pernas",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "8-10"),
                s.pick("leg_press", "Leg Press 45°", 4, "12"),
                s.pick("extensora", "Cadeira Extensora", 3, "12"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                s.pick("stiff", "Stiff com Barra", 3, "10"),
                s.pick("panturrilha", "Panturrilha em Pé", 4, "15-20"),
            ],
        ),
    ]
}

fn split_3_lower_body<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Quadríceps e Glúteos",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "10"),
                s.pick("leg_press", "Leg Press 45°", 4, "12"),
                s.pick("afundo", "Afundo com Halteres", 3, "10 cada perna"),
                s.pick("extensora", "Cadeira Extensora", 3, "15"),
                s.pick("abdutora", "Cadeira Abdutora", 3, "15"),
                s.pick("panturrilha", "Panturrilha em Pé", 3, "20"),
            ],
        ),
        Division::new(
            "Treino B - Superiores",
            vec![
                s.pick("puxada", "Puxada Frontal", 3, "10-12"),
                s.pick("remada", "Remada Baixa na Polia", 3, "12"),
                s.pick("supino_reto", "Supino Reto com Halteres", 3, "10-12"),
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 3, "12"),
                s.pick("biceps", "Rosca Alternada com Halteres", 3, "12"),
                s.pick("triceps", "Tríceps Corda", 3, "12"),
            ],
        ),
        Division::new(
            "Treino C - Posterior e Glúteos",
            vec![
                s.pick("elevacao_pelvica", "Elevação Pélvica com Barra", 4, "10-12"),
                s.pick("stiff", "Stiff com Halteres", 4, "10"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                Exercise::fixed("Coice na Polia", 3, "15"),
                s.pick("abdominal", "Abdominal Supra", 3, "15"),
            ],
        ),
    ]
}

fn split_4<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Peito e Tríceps",
            vec![
                s.pick("supino_reto", "Supino Reto com Barra", 4, "8-10"),
                s.pick("supino_inclinado", "Supino Inclinado com Halteres", 3, "10"),
                s.pick("crucifixo", "Crucifixo com Halteres", 3, "12"),
                s.pick("flexao", "Flexão de Braço", 3, "MAX"),
                s.pick("triceps", "Tríceps Pulley", 3, "12"),
            ],
        ),
        Division::new(
            "Treino B - Costas e Bíceps",
            vec![
                s.pick("puxada", "Puxada Frontal", 4, "8-10"),
                s.pick("remada", "Remada Curvada com Barra", 4, "10"),
                Exercise::fixed("Levantamento Terra", 3, "8"),
                s.pick("biceps", "Rosca Direta com Barra", 3, "10-12"),
                s.pick("abdominal", "Abdominal Supra", 3, "15"),
            ],
        ),
        Division::new(
            "Treino C - Pernas",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "8-10"),
                s.pick("leg_press", "Leg Press 45°", 4, "12"),
                s.pick("extensora", "Cadeira Extensora", 3, "12"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                s.pick("panturrilha", "Panturrilha em Pé", 4, "15-20"),
            ],
        ),
        Division::new(
            "Treino D - Ombros e Core",
            vec![
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 4, "10"),
                s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 3, "12-15"),
                Exercise::fixed("Crucifixo Inverso", 3, "15"),
                Exercise::fixed("Encolhimento com Halteres", 3, "15"),
                Exercise::fixed("Prancha", 3, "40 seg"),
            ],
        ),
    ]
}

fn split_4_lower_body<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Quadríceps",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "10"),
                s.pick("leg_press", "Leg Press 45°", 4, "12"),
                s.pick("afundo", "Afundo com Halteres", 3, "10 cada perna"),
                s.pick("extensora", "Cadeira Extensora", 3, "15"),
                s.pick("panturrilha", "Panturrilha em Pé", 3, "20"),
            ],
        ),
        Division::new(
            "Treino B - Costas e Bíceps",
            vec![
                s.pick("puxada", "Puxada Frontal", 3, "10-12"),
                s.pick("remada", "Remada Baixa na Polia", 3, "12"),
                s.pick("biceps", "Rosca Alternada com Halteres", 3, "12"),
                s.pick("abdominal", "Abdominal Supra", 3, "15"),
            ],
        ),
        Division::new(
            "Treino C - Posterior e Glúteos",
            vec![
                s.pick("elevacao_pelvica", "Elevação Pélvica com Barra", 4, "10-12"),
                s.pick("stiff", "Stiff com Halteres", 4, "10"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                s.pick("abdutora", "Cadeira Abdutora", 3, "15"),
                Exercise::fixed("Coice na Polia", 3, "15"),
            ],
        ),
        Division::new(
            "Treino D - Peito, Ombros e Tríceps",
            vec![
                s.pick("supino_reto", "Supino Reto com Halteres", 3, "12"),
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 3, "12"),
                s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 3, "15"),
                s.pick("triceps", "Tríceps Corda", 3, "12"),
                Exercise::fixed("Prancha", 3, "30 seg"),
            ],
        ),
    ]
}

fn split_5<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Peito",
            vec![
                s.pick("supino_reto", "Supino Reto com Barra", 4, "8-10"),
                s.pick("supino_inclinado", "Supino Inclinado com Halteres", 4, "10"),
                s.pick("crucifixo", "Crucifixo com Halteres", 3, "12"),
                s.pick("flexao", "Flexão de Braço", 3, "MAX"),
            ],
        ),
        Division::new(
            "Treino B - Costas",
            vec![
                s.pick("puxada", "Puxada Frontal", 4, "8-10"),
                s.pick("remada", "Remada Curvada com Barra", 4, "10"),
                Exercise::fixed("Levantamento Terra", 3, "6-8"),
                Exercise::fixed("Pulldown na Polia", 3, "12"),
            ],
        ),
        Division::new(
            "Treino C - Pernas",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "8"),
                s.pick("leg_press", "Leg Press 45°", 4, "10-12"),
                s.pick("afundo", "Afundo com Halteres", 3, "10 cada perna"),
                s.pick("extensora", "Cadeira Extensora", 3, "12"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                s.pick("panturrilha", "Panturrilha em Pé", 4, "15-20"),
            ],
        ),
        Division::new(
            "Treino D - Ombros",
            vec![
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 4, "8-10"),
                s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 4, "12-15"),
                Exercise::fixed("Crucifixo Inverso", 3, "15"),
                Exercise::fixed("Encolhimento com Halteres", 3, "12"),
            ],
        ),
        Division::new(
            "Treino E - Braços e Abdômen",
            vec![
                s.pick("biceps", "Rosca Direta com Barra", 4, "10-12"),
                s.pick("triceps", "Tríceps Pulley", 4, "10-12"),
                Exercise::fixed("Rosca Concentrada", 3, "12"),
                Exercise::fixed("Mergulho no Banco", 3, "MAX"),
                s.pick("abdominal", "Abdominal Supra", 3, "20"),
                Exercise::fixed("Prancha", 3, "45 seg"),
            ],
        ),
    ]
}

fn split_5_lower_body<R: Rng + ?Sized>(s: &mut Slots<R>) -> Vec<Division> {
    vec![
        Division::new(
            "Treino A - Quadríceps",
            vec![
                s.pick("agachamento", "Agachamento Livre", 4, "10"),
                s.pick("leg_press", "Leg Press 45°", 4, "12"),
                s.pick("afundo", "Afundo com Halteres", 3, "10 cada perna"),
                s.pick("extensora", "Cadeira Extensora", 3, "15"),
                s.pick("panturrilha", "Panturrilha em Pé", 3, "20"),
            ],
        ),
        Division::new(
            "Treino B - Costas e Bíceps",
            vec![
                s.pick("puxada", "Puxada Frontal", 4, "10-12"),
                s.pick("remada", "Remada Baixa na Polia", 3, "12"),
                s.pick("biceps", "Rosca Alternada com Halteres", 3, "12"),
                s.pick("abdominal", "Abdominal Supra", 3, "15"),
            ],
        ),
        Division::new(
            "Treino C - Posterior e Glúteos",
            vec![
                s.pick("elevacao_pelvica", "Elevação Pélvica com Barra", 4, "10-12"),
                s.pick("stiff", "Stiff com Halteres", 4, "10"),
                s.pick("flexora", "Mesa Flexora", 3, "12"),
                Exercise::fixed("Coice na Polia", 3, "15"),
            ],
        ),
        Division::new(
            "Treino D - Peito, Ombros e Tríceps",
            vec![
                s.pick("supino_reto", "Supino Reto com Halteres", 3, "12"),
                s.pick("desenvolvimento", "Desenvolvimento com Halteres", 3, "12"),
                s.pick("elevacao_lateral", "Elevação Lateral com Halteres", 3, "15"),
                s.pick("triceps", "Tríceps Corda", 3, "12"),
            ],
        ),
        Division::new(
            "Treino E - Glúteos e Core",
            vec![
                s.pick("abdutora", "Cadeira Abdutora", 4, "15"),
                Exercise::fixed("Elevação Pélvica Unilateral", 3, "12 cada perna"),
                Exercise::fixed("Agachamento Sumô com Halter", 3, "12"),
                Exercise::fixed("Prancha", 3, "40 seg"),
            ],
        ),
    ]
}
