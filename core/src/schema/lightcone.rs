use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ItemPair, Schema};

/// Light cone entry in `/hsr/data/lightcone.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefLightcone {
    pub rank: String,
    pub base_type: String,
    pub en: String,
    pub desc: String,
    pub kr: String,
    pub cn: String,
    pub jp: String,
}

impl Schema for BriefLightcone {
    const ENTITY: &'static str = "BriefLightcone";
}

/// Full light cone document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lightcone {
    pub name: String,
    pub desc: String,
    pub rarity: String,
    pub base_type: String,
    pub refinements: LightconeSkill,
    /// Promotion stages, not served for every light cone.
    pub stats: Option<Vec<LightconePromotion>>,
}

impl Schema for Lightcone {
    const ENTITY: &'static str = "Lightcone";
}

/// The passive skill, with parameters by superimposition level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LightconeSkill {
    pub name: String,
    pub desc: String,
    pub level: BTreeMap<u32, LightconeSkillLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LightconeSkillLevel {
    pub param_list: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LightconePromotion {
    pub base_attack: f64,
    pub base_attack_add: f64,
    pub base_defence: f64,
    pub base_defence_add: f64,
    #[serde(rename = "BaseHP")]
    pub base_hp: f64,
    #[serde(rename = "BaseHPAdd")]
    pub base_hp_add: f64,
    #[serde(rename = "EquipmentID")]
    pub equipment_id: u32,
    pub max_level: u32,
    pub promotion: Option<u32>,
    pub player_level_require: Option<u32>,
    pub promotion_cost_list: Vec<ItemPair>,
    pub world_level_require: Option<u32>,
}
