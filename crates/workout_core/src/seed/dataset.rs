//! Seed datasets: the built-in records and JSON-file loading.

use crate::model::athlete::Sex;
use crate::service::athlete_service::NewAthlete;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingCenterSeed {
    pub name: String,
    pub address: String,
    pub owner: String,
}

/// Three ordered batches of records to seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<CategorySeed>,
    #[serde(default)]
    pub training_centers: Vec<TrainingCenterSeed>,
    #[serde(default)]
    pub athletes: Vec<NewAthlete>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid dataset JSON: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

const CATEGORIES: &[&str] = &[
    "Scale", "RX", "Teens", "Masters", "Elite", "Kids", "Adaptive",
];

const TRAINING_CENTERS: &[(&str, &str, &str)] = &[
    ("CT King", "Rua das Flores, 123, Centro", "Marcos Silva"),
    (
        "CT Champions",
        "Av. Paulista, 1000, Bela Vista",
        "Ana Paula Costa",
    ),
    (
        "CT Warriors",
        "Rua dos Campeões, 456, Zona Sul",
        "Roberto Santos",
    ),
    (
        "CT Evolution",
        "Av. Independência, 789, Centro",
        "Juliana Mendes",
    ),
    ("CT Strong", "Rua da Força, 321, Zona Norte", "Carlos Oliveira"),
    ("CT Performance", "Av. Brasil, 2000, Zona Oeste", "Patricia Lima"),
    ("CT Victory", "Rua Vitória, 555, Centro", "Fernando Rocha"),
    (
        "CT Elite Fitness",
        "Av. das Nações, 1500, Bairro Novo",
        "Luciana Ferreira",
    ),
];

type AthleteRow = (&'static str, &'static str, u32, f64, f64, Sex, &'static str, &'static str);

const ATHLETES: &[AthleteRow] = &[
    ("João Silva", "12345678222", 25, 75.5, 1.75, Sex::Male, "RX", "CT King"),
    ("Maria Santos", "98765432109", 28, 62.3, 1.65, Sex::Female, "RX", "CT Champions"),
    ("Pedro Oliveira", "11122233344", 32, 85.0, 1.82, Sex::Male, "Masters", "CT Warriors"),
    ("Ana Costa", "55566677788", 22, 58.7, 1.68, Sex::Female, "Scale", "CT Evolution"),
    ("Carlos Mendes", "99988877766", 35, 90.5, 1.78, Sex::Male, "Elite", "CT Strong"),
    ("Juliana Ferreira", "44455566677", 27, 65.2, 1.70, Sex::Female, "RX", "CT Performance"),
    ("Roberto Lima", "33344455566", 29, 78.9, 1.80, Sex::Male, "RX", "CT Victory"),
    ("Patricia Souza", "22233344455", 16, 55.0, 1.62, Sex::Female, "Teens", "CT Elite Fitness"),
    ("Fernando Rocha", "66677788899", 42, 82.3, 1.76, Sex::Male, "Masters", "CT King"),
    ("Luciana Alves", "77788899900", 24, 60.5, 1.66, Sex::Female, "Scale", "CT Champions"),
    ("André Barbosa", "88899900011", 31, 88.7, 1.85, Sex::Male, "Elite", "CT Warriors"),
    ("Camila Dias", "10011122233", 26, 57.8, 1.64, Sex::Female, "RX", "CT Evolution"),
    ("Gabriel Martins", "20022233344", 12, 45.5, 1.55, Sex::Male, "Kids", "CT Strong"),
    ("Beatriz Cardoso", "30033344455", 38, 68.9, 1.69, Sex::Female, "Masters", "CT Performance"),
    ("Ricardo Pereira", "40044455566", 33, 92.1, 1.88, Sex::Male, "Elite", "CT Victory"),
    ("Daniela Nunes", "50055566677", 23, 59.3, 1.67, Sex::Female, "Scale", "CT Elite Fitness"),
    ("Thiago Ramos", "60066677788", 30, 80.0, 1.79, Sex::Male, "RX", "CT King"),
    ("Mariana Torres", "70077788899", 17, 56.2, 1.63, Sex::Female, "Teens", "CT Champions"),
    ("Bruno Azevedo", "80088899900", 45, 86.5, 1.77, Sex::Male, "Masters", "CT Warriors"),
    ("Sofia Moreira", "90099900011", 25, 61.8, 1.71, Sex::Female, "RX", "CT Evolution"),
];

impl Dataset {
    /// Returns the built-in dataset: 7 categories, 8 centers, 20 athletes.
    pub fn builtin() -> Self {
        Self {
            categories: CATEGORIES
                .iter()
                .map(|name| CategorySeed {
                    name: (*name).to_string(),
                })
                .collect(),
            training_centers: TRAINING_CENTERS
                .iter()
                .map(|(name, address, owner)| TrainingCenterSeed {
                    name: (*name).to_string(),
                    address: (*address).to_string(),
                    owner: (*owner).to_string(),
                })
                .collect(),
            athletes: ATHLETES
                .iter()
                .map(
                    |&(name, taxpayer_id, age, weight, height, sex, category, center)| NewAthlete {
                        name: name.to_string(),
                        taxpayer_id: taxpayer_id.to_string(),
                        age,
                        weight,
                        height,
                        sex,
                        category_name: category.to_string(),
                        training_center_name: center.to_string(),
                    },
                )
                .collect(),
        }
    }

    /// Parses a dataset from JSON with `categories`, `training_centers` and
    /// `athletes` arrays; missing arrays are empty.
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn total_records(&self) -> usize {
        self.categories.len() + self.training_centers.len() + self.athletes.len()
    }
}
