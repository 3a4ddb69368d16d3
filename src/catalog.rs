// ABOUTME: Static exercise catalog grouped by muscle with pattern, role and environment tags
// ABOUTME: Filters the catalog by training location and joint restrictions for the generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Catalog
//!
//! Environment compatibility is carried as a tag on each entry. Eligibility
//! rules per requested location:
//!
//! | Location | Eligible tags |
//! |---|---|
//! | gym (or unspecified) | every tag |
//! | home | `home`, `both` |
//! | outdoor | `outdoor`, `both` |
//!
//! Machines, cables and barbells are tagged `gym`, so home and outdoor plans
//! never contain them.

use fitplan_core::models::{
    Environment::{self, Both, Gym, Home, Outdoor},
    Exercise,
    ExerciseRole::{Isolated, Structural},
    JointStress,
    MovementPattern::{
        HipDominant, HorizontalPull, HorizontalPush, KneeDominant, Other, VerticalPull,
        VerticalPush,
    },
    MuscleGroup::{
        self, Abs, Back, Biceps, Calves, Chest, Glutes, Posterior, Quadriceps, Shoulders,
        Triceps,
    },
    TrainingLocation,
};

/// Built-in exercise reference data, grouped by primary muscle
pub static EXERCISE_CATALOG: &[Exercise] = &[
    // Chest
    Exercise::new(
        "Supino reto com barra",
        Chest,
        HorizontalPush,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Supino inclinado com halteres",
        Chest,
        HorizontalPush,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Supino no chão com halteres",
        Chest,
        HorizontalPush,
        Structural,
        Home,
    ),
    Exercise::new("Flexão de braços", Chest, HorizontalPush, Structural, Both),
    Exercise::new(
        "Flexão com pés elevados",
        Chest,
        HorizontalPush,
        Structural,
        Both,
    ),
    Exercise::new(
        "Flexão declinada no banco da praça",
        Chest,
        HorizontalPush,
        Structural,
        Outdoor,
    ),
    Exercise::new(
        "Flexão inclinada com mãos elevadas",
        Chest,
        HorizontalPush,
        Structural,
        Both,
    ),
    Exercise::new("Crucifixo com halteres", Chest, Other, Isolated, Gym),
    Exercise::new("Crossover na polia", Chest, Other, Isolated, Gym),
    Exercise::new("Voador (peck deck)", Chest, Other, Isolated, Gym),
    Exercise::new(
        "Crucifixo no chão com garrafas",
        Chest,
        Other,
        Isolated,
        Home,
    ),
    // Back
    Exercise::new(
        "Puxada frontal na polia",
        Back,
        VerticalPull,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Remada baixa na polia",
        Back,
        HorizontalPull,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Remada curvada com barra",
        Back,
        HorizontalPull,
        Structural,
        Gym,
    ),
    Exercise::new("Barra fixa", Back, VerticalPull, Structural, Both),
    Exercise::new("Remada invertida", Back, HorizontalPull, Structural, Both),
    Exercise::new(
        "Barra australiana no parque",
        Back,
        HorizontalPull,
        Structural,
        Outdoor,
    ),
    Exercise::new(
        "Remada unilateral com halter",
        Back,
        HorizontalPull,
        Structural,
        Home,
    ),
    Exercise::new("Remada com mochila", Back, HorizontalPull, Structural, Home),
    Exercise::new("Tração com elástico", Back, VerticalPull, Structural, Home),
    Exercise::new("Pullover com halter", Back, Other, Isolated, Gym),
    Exercise::new("Superman no solo", Back, Other, Isolated, Both),
    // Shoulders
    Exercise::new(
        "Desenvolvimento com halteres",
        Shoulders,
        VerticalPush,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Desenvolvimento militar com barra",
        Shoulders,
        VerticalPush,
        Structural,
        Gym,
    ),
    Exercise::new("Flexão pike", Shoulders, VerticalPush, Structural, Both),
    Exercise::new(
        "Elevação lateral com halteres",
        Shoulders,
        Other,
        Isolated,
        Home,
    ),
    Exercise::new(
        "Crucifixo inverso com halteres",
        Shoulders,
        Other,
        Isolated,
        Home,
    ),
    Exercise::new(
        "Elevação lateral com elástico",
        Shoulders,
        Other,
        Isolated,
        Both,
    ),
    Exercise::new("Y-T-W no solo", Shoulders, Other, Isolated, Both),
    Exercise::new(
        "Elevação frontal com anilha",
        Shoulders,
        Other,
        Isolated,
        Gym,
    ),
    Exercise::new("Face pull na polia", Shoulders, Other, Isolated, Gym),
    // Biceps
    Exercise::new(
        "Barra fixa supinada",
        Biceps,
        VerticalPull,
        Structural,
        Both,
    ),
    Exercise::new("Rosca direta com barra", Biceps, Other, Isolated, Gym),
    Exercise::new("Rosca na polia", Biceps, Other, Isolated, Gym),
    Exercise::new(
        "Rosca alternada com halteres",
        Biceps,
        Other,
        Isolated,
        Home,
    ),
    Exercise::new("Rosca martelo", Biceps, Other, Isolated, Home),
    Exercise::new("Rosca com elástico", Biceps, Other, Isolated, Both),
    Exercise::new("Rosca isométrica com toalha", Biceps, Other, Isolated, Both),
    // Triceps
    Exercise::new("Flexão diamante", Triceps, HorizontalPush, Structural, Both),
    Exercise::new(
        "Mergulho nas paralelas do parque",
        Triceps,
        HorizontalPush,
        Structural,
        Outdoor,
    ),
    Exercise::new("Tríceps na polia", Triceps, Other, Isolated, Gym),
    Exercise::new("Tríceps testa com barra", Triceps, Other, Isolated, Gym),
    Exercise::new("Tríceps francês com halter", Triceps, Other, Isolated, Home),
    Exercise::new("Mergulho no banco", Triceps, Other, Isolated, Both),
    Exercise::new("Tríceps coice com elástico", Triceps, Other, Isolated, Both),
    // Quadriceps
    Exercise::new(
        "Agachamento livre com barra",
        Quadriceps,
        KneeDominant,
        Structural,
        Gym,
    ),
    Exercise::new("Leg press 45", Quadriceps, KneeDominant, Structural, Gym),
    Exercise::new(
        "Agachamento hack na máquina",
        Quadriceps,
        KneeDominant,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Agachamento goblet",
        Quadriceps,
        KneeDominant,
        Structural,
        Home,
    ),
    Exercise::new(
        "Agachamento búlgaro com halteres",
        Quadriceps,
        KneeDominant,
        Structural,
        Home,
    ),
    Exercise::new(
        "Agachamento com peso corporal",
        Quadriceps,
        KneeDominant,
        Structural,
        Both,
    ),
    Exercise::new(
        "Afundo alternado",
        Quadriceps,
        KneeDominant,
        Structural,
        Both,
    ),
    Exercise::new(
        "Subida no banco",
        Quadriceps,
        KneeDominant,
        Structural,
        Both,
    ),
    Exercise::new(
        "Subida de escadas",
        Quadriceps,
        KneeDominant,
        Structural,
        Outdoor,
    ),
    Exercise::new("Cadeira extensora", Quadriceps, KneeDominant, Isolated, Gym),
    Exercise::new(
        "Agachamento isométrico na parede",
        Quadriceps,
        KneeDominant,
        Isolated,
        Both,
    ),
    // Posterior chain
    Exercise::new("Stiff com barra", Posterior, HipDominant, Structural, Gym),
    Exercise::new(
        "Levantamento terra romeno com halteres",
        Posterior,
        HipDominant,
        Structural,
        Home,
    ),
    Exercise::new(
        "Stiff unilateral com halter",
        Posterior,
        HipDominant,
        Structural,
        Home,
    ),
    Exercise::new(
        "Good morning com elástico",
        Posterior,
        HipDominant,
        Structural,
        Both,
    ),
    Exercise::new("Mesa flexora", Posterior, Other, Isolated, Gym),
    Exercise::new("Cadeira flexora", Posterior, Other, Isolated, Gym),
    Exercise::new(
        "Ponte de isquiotibiais com pés elevados",
        Posterior,
        HipDominant,
        Isolated,
        Both,
    ),
    Exercise::new(
        "Nórdico para isquiotibiais",
        Posterior,
        Other,
        Isolated,
        Both,
    ),
    Exercise::new(
        "Flexão de joelhos deslizante com toalha",
        Posterior,
        Other,
        Isolated,
        Home,
    ),
    Exercise::new(
        "Ponte unilateral no banco do parque",
        Posterior,
        HipDominant,
        Isolated,
        Outdoor,
    ),
    // Glutes
    Exercise::new(
        "Elevação pélvica com barra",
        Glutes,
        HipDominant,
        Structural,
        Gym,
    ),
    Exercise::new(
        "Elevação pélvica unilateral",
        Glutes,
        HipDominant,
        Structural,
        Both,
    ),
    Exercise::new("Glúteo na polia", Glutes, Other, Isolated, Gym),
    Exercise::new("Cadeira abdutora", Glutes, Other, Isolated, Gym),
    Exercise::new("Ponte de glúteo", Glutes, HipDominant, Isolated, Both),
    Exercise::new(
        "Coice de glúteo com elástico",
        Glutes,
        Other,
        Isolated,
        Both,
    ),
    Exercise::new("Abdução com elástico", Glutes, Other, Isolated, Both),
    // Calves
    Exercise::new("Panturrilha em pé na máquina", Calves, Other, Isolated, Gym),
    Exercise::new("Panturrilha sentado", Calves, Other, Isolated, Gym),
    Exercise::new("Panturrilha no degrau", Calves, Other, Isolated, Both),
    Exercise::new(
        "Panturrilha unilateral com halter",
        Calves,
        Other,
        Isolated,
        Home,
    ),
    Exercise::new("Panturrilha no meio-fio", Calves, Other, Isolated, Outdoor),
    // Abs
    Exercise::new("Prancha", Abs, Other, Isolated, Both),
    Exercise::new("Abdominal supra", Abs, Other, Isolated, Both),
    Exercise::new("Prancha lateral", Abs, Other, Isolated, Both),
    Exercise::new("Abdominal bicicleta", Abs, Other, Isolated, Both),
    Exercise::new("Elevação de pernas na barra", Abs, Other, Isolated, Both),
    Exercise::new("Roda abdominal", Abs, Other, Isolated, Home),
    Exercise::new("Abdominal na polia", Abs, Other, Isolated, Gym),
];

/// Whether an exercise tagged `environment` can be done at `location`
///
/// `None` means the caller did not state a location, which behaves like a gym.
#[must_use]
pub const fn is_compatible(environment: Environment, location: Option<TrainingLocation>) -> bool {
    match (environment, location) {
        (Both, _) | (_, None | Some(TrainingLocation::Gym)) => true,
        (Home, Some(TrainingLocation::Home)) | (Outdoor, Some(TrainingLocation::Outdoor)) => true,
        _ => false,
    }
}

/// Location and injury filter applied before selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Requested training location
    pub location: Option<TrainingLocation>,
    /// Joints that must not be loaded
    pub restrictions: JointStress,
}

impl CatalogFilter {
    /// Filter for a location and the restricted joints
    #[must_use]
    pub const fn new(location: Option<TrainingLocation>, restrictions: JointStress) -> Self {
        Self {
            location,
            restrictions,
        }
    }

    /// Whether `exercise` passes the filter
    #[must_use]
    pub fn admits(&self, exercise: &Exercise) -> bool {
        is_compatible(exercise.environment, self.location)
            && !exercise.joint_stress().intersects(self.restrictions)
    }

    /// Eligible exercises for `muscle`, structural first, in catalog order
    #[must_use]
    pub fn pool(&self, muscle: MuscleGroup) -> Vec<&'static Exercise> {
        let mut pool: Vec<&'static Exercise> = EXERCISE_CATALOG
            .iter()
            .filter(|e| e.primary_muscle == muscle && self.admits(e))
            .collect();
        // Stable sort keeps catalog order within each role
        pool.sort_by_key(|e| e.role == Isolated);
        pool
    }
}

/// Look up a catalog entry by exact name
#[must_use]
pub fn find_exercise(name: &str) -> Option<&'static Exercise> {
    EXERCISE_CATALOG.iter().find(|e| e.name == name)
}
