use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Schema;

/// Relic set entry in `/hsr/data/relicset.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefRelicSet {
    pub icon: String,
    pub en: String,
    /// Set bonuses by required piece count.
    pub set: BTreeMap<u32, BriefRelicSetDesc>,
    pub kr: String,
    pub cn: String,
    pub jp: String,
}

impl Schema for BriefRelicSet {
    const ENTITY: &'static str = "BriefRelicSet";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefRelicSetDesc {
    pub en: String,
    #[serde(rename = "ParamList")]
    pub param_list: Vec<f64>,
    pub kr: String,
    pub cn: String,
    pub jp: String,
}

/// Full relic set document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelicSet {
    pub name: String,
    pub icon: String,
    /// Pieces by slot.
    pub parts: BTreeMap<u32, Relic>,
    /// Set bonuses by required piece count (2 or 4).
    pub require_num: BTreeMap<u32, RelicSetSkill>,
}

impl Schema for RelicSet {
    const ENTITY: &'static str = "RelicSet";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Relic {
    pub name: String,
    pub desc: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelicSetSkill {
    pub desc: String,
    pub param_list: Vec<f64>,
}
