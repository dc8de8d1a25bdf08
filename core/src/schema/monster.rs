use serde::{Deserialize, Serialize};

use super::Schema;

/// Monster entry in `/hsr/data/monster.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefMonster {
    pub rank: String,
    pub camp: Option<u32>,
    pub icon: String,
    /// Variant ids.
    pub child: Vec<u32>,
    /// Weakness damage types.
    pub weak: Vec<String>,
    pub en: String,
    pub desc: String,
    pub kr: String,
    pub cn: String,
    pub jp: String,
}

impl Schema for BriefMonster {
    const ENTITY: &'static str = "BriefMonster";
}

/// Full monster document: shared base stats, variants and drop tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterTemplate {
    pub id: u32,
    pub name: String,
    pub desc: String,
    #[serde(rename = "MonsterCampID")]
    pub monster_camp_id: Option<u32>,
    pub attack_base: f64,
    pub critical_damage_base: f64,
    pub defence_base: f64,
    #[serde(rename = "HPBase")]
    pub hp_base: f64,
    pub initial_delay_ratio: f64,
    pub image_path: String,
    pub minimum_fatigue_ratio: f64,
    pub rank: String,
    pub speed_base: f64,
    pub stance_base: f64,
    pub stance_count: u32,
    pub status_resistance_base: f64,
    pub child: Vec<Monster>,
    pub drop: Vec<MonsterDrop>,
}

impl Schema for MonsterTemplate {
    const ENTITY: &'static str = "MonsterTemplate";
}

impl MonsterTemplate {
    pub fn variant(&self, id: u32) -> Option<&Monster> {
        self.child.iter().find(|m| m.id == id)
    }

    /// Base HP scaled by a variant's modifier.
    pub fn variant_hp(&self, variant: &Monster) -> f64 {
        self.hp_base * variant.hp_modify_ratio
    }
}

/// A variant of a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Monster {
    pub id: u32,
    pub attack_modify_ratio: f64,
    pub defence_modify_ratio: f64,
    pub elite_group: u32,
    #[serde(rename = "HPModifyRatio")]
    pub hp_modify_ratio: f64,
    pub speed_modify_ratio: f64,
    pub speed_modify_value: Option<f64>,
    pub stance_modify_ratio: f64,
    pub stance_weak_list: Vec<String>,
    pub hard_level_group: u32,
    pub damage_type_resistance: Vec<ElementResistance>,
    pub skill_list: Vec<MonsterSkill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementResistance {
    pub damage_type: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterSkill {
    pub id: u32,
    pub skill_name: String,
    pub skill_desc: String,
    pub damage_type: String,
    #[serde(rename = "SPHitBase")]
    pub sp_hit_base: SpHitBase,
}

/// Energy granted on hit. Upstream serves a number, or `""` when the skill
/// grants none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpHitBase {
    Number(f64),
    Text(String),
}

impl SpHitBase {
    pub fn value(&self) -> Option<f64> {
        match self {
            SpHitBase::Number(v) => Some(*v),
            SpHitBase::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// Rewards for one world level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MonsterDrop {
    #[serde(rename = "MonsterTemplateID")]
    pub monster_template_id: u32,
    pub world_level: Option<u32>,
    pub avatar_exp_reward: Option<u32>,
    pub display_item_list: Vec<ItemDrop>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDrop {
    #[serde(rename = "ID")]
    pub id: u32,
}
