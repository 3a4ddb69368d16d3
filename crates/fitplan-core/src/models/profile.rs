// ABOUTME: Read-only user profile plus the coarse labels it carries
// ABOUTME: Activity level, gender and training location parse leniently from product labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse training level, ordered from the most conservative upward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Older adults
    Idoso,
    /// Beginners
    Iniciante,
    /// Intermediate
    Moderado,
    /// Trained athletes
    Atleta,
    /// High-performance athletes
    #[serde(rename = "Atleta Alto Rendimento")]
    AtletaAltoRendimento,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [Self; 5] = [
        Self::Idoso,
        Self::Iniciante,
        Self::Moderado,
        Self::Atleta,
        Self::AtletaAltoRendimento,
    ];

    /// Level used whenever a label cannot be recognised
    pub const MOST_CONSERVATIVE: Self = Self::Idoso;

    /// Product label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idoso => "Idoso",
            Self::Iniciante => "Iniciante",
            Self::Moderado => "Moderado",
            Self::Atleta => "Atleta",
            Self::AtletaAltoRendimento => "Atleta Alto Rendimento",
        }
    }

    /// Parse a product label, returning `None` when it is not recognised
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "idoso" | "idosa" | "senior" | "elderly" => Some(Self::Idoso),
            "iniciante" | "beginner" | "novato" => Some(Self::Iniciante),
            "moderado" | "intermediario" | "intermediate" => Some(Self::Moderado),
            "atleta" | "avancado" | "advanced" | "athlete" => Some(Self::Atleta),
            "atletaaltorendimento" | "altorendimento" | "elite" => {
                Some(Self::AtletaAltoRendimento)
            }
            _ => None,
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender used to pick body-composition curves and caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Not stated or non-binary
    Other,
}

impl Gender {
    /// Parse a Portuguese or English gender label; anything else is `Other`
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "masculino" | "homem" | "male" | "m" => Self::Male,
            "feminino" | "mulher" | "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Training environment requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingLocation {
    /// Home training
    #[serde(rename = "casa")]
    Home,
    /// Gym training
    #[serde(rename = "academia")]
    Gym,
    /// Outdoor training
    #[serde(rename = "ar_livre")]
    Outdoor,
}

impl TrainingLocation {
    /// Parse a location label; unknown or empty labels are `None`
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "casa" | "home" => Some(Self::Home),
            "academia" | "gym" => Some(Self::Gym),
            "arlivre" | "outdoor" | "parque" => Some(Self::Outdoor),
            _ => None,
        }
    }
}

/// Read-only user profile owned by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters (values below 3 are read as meters)
    pub height: f64,
    /// Age in years
    pub age: u32,
    /// Gender label
    pub gender: String,
    /// Body mass index, if already computed by the caller
    #[serde(default)]
    pub imc: Option<f64>,
    /// Activity level label (training level or lifestyle, e.g. "Sedentário")
    pub nivel_atividade: String,
    /// Stated objective, e.g. "Ganho de Massa"
    pub objective: String,
    /// Strength sessions per week
    #[serde(default)]
    pub training_frequency: Option<u8>,
    /// Requested cardio sessions per week
    #[serde(default)]
    pub cardio_frequency: Option<u8>,
    /// Requested cardio intensity
    #[serde(default)]
    pub cardio_intensity: Option<String>,
}

impl UserProfile {
    /// Body mass index, computed from weight and height when not provided
    #[must_use]
    pub fn imc(&self) -> f64 {
        if let Some(imc) = self.imc.filter(|v| v.is_finite() && *v > 0.0) {
            return imc;
        }
        let height_m = if self.height > 3.0 {
            self.height / 100.0
        } else {
            self.height
        };
        if height_m <= 0.0 {
            return 0.0;
        }
        self.weight / (height_m * height_m)
    }

    /// Parsed gender
    #[must_use]
    pub fn gender(&self) -> Gender {
        Gender::from_label(&self.gender)
    }
}
