//! Purchasable report modules and the SKUs that grant them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    DeepReport,
    Aspects,
    Suffix,
    Level,
}

impl ModuleId {
    pub const fn ordered() -> [Self; 4] {
        [Self::DeepReport, Self::Aspects, Self::Suffix, Self::Level]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::DeepReport => "deep_report",
            Self::Aspects => "aspects",
            Self::Suffix => "suffix",
            Self::Level => "level",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DeepReport => "Deep report",
            Self::Aspects => "Aspect breakdown",
            Self::Suffix => "A/T suffix",
            Self::Level => "Level card",
        }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ModuleId {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|module| module.key() == raw.trim())
            .ok_or_else(|| raw.to_string())
    }
}

/// A product that unlocks a fixed set of modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sku {
    pub id: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    /// Price in the currency's smallest unit.
    pub unit_amount: u32,
    pub modules: &'static [ModuleId],
}

pub const DEEP_REPORT_V1: Sku = Sku {
    id: "deep_report_v1",
    name: "RG16 deep report",
    currency: "cny",
    unit_amount: 999,
    modules: &[
        ModuleId::DeepReport,
        ModuleId::Aspects,
        ModuleId::Suffix,
        ModuleId::Level,
    ],
};

pub const CATALOGUE: &[Sku] = &[DEEP_REPORT_V1];

pub fn find_sku(id: &str) -> Option<&'static Sku> {
    CATALOGUE.iter().find(|sku| sku.id == id.trim())
}
