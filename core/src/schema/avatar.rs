use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ItemPair, Schema};

/// Character entry in `/hsr/data/character.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefAvatar {
    pub icon: String,
    pub rank: String,
    pub base_type: String,
    pub damage_type: String,
    pub en: String,
    pub desc: String,
    pub kr: String,
    pub cn: String,
    pub jp: String,
}

impl Schema for BriefAvatar {
    const ENTITY: &'static str = "BriefAvatar";
}

/// Full character document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Avatar {
    pub name: String,
    pub desc: String,
    pub chara_info: AvatarFetter,
    pub rarity: String,
    #[serde(rename = "AvatarVOTag")]
    pub avatar_vo_tag: String,
    #[serde(rename = "SPNeed")]
    pub sp_need: u32,
    pub base_type: String,
    pub damage_type: String,
    /// Eidolons by rank tier.
    pub ranks: BTreeMap<u32, AvatarRank>,
    pub skills: BTreeMap<u32, AvatarSkill>,
    /// Trace nodes by branch anchor, then point id.
    pub skill_trees: BTreeMap<String, BTreeMap<u32, AvatarSkillTree>>,
    /// Stat growth by promotion stage.
    pub stats: BTreeMap<u32, AvatarPromotion>,
    pub relics: AvatarRelicRecommend,
}

impl Schema for Avatar {
    const ENTITY: &'static str = "Avatar";
}

impl Avatar {
    /// Every trace node across all branches.
    pub fn skill_tree_points(&self) -> impl Iterator<Item = &AvatarSkillTree> {
        self.skill_trees.values().flat_map(|points| points.values())
    }
}

/// Voice and story data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarFetter {
    pub camp: String,
    /// Voice actor by language.
    #[serde(rename = "VA")]
    pub va: BTreeMap<String, String>,
    pub stories: BTreeMap<u32, String>,
    pub voicelines: Vec<AvatarVoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarVoice {
    #[serde(rename = "VoiceID")]
    pub voice_id: u32,
    pub voice_title: String,
    pub voice_m: String,
    pub unlock_desc: Option<String>,
    pub is_battle_voice: bool,
}

/// One eidolon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarRank {
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub param_list: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarSkill {
    pub name: String,
    pub desc: String,
    #[serde(rename = "Type")]
    pub skill_type: Option<String>,
    pub tag: String,
    #[serde(rename = "SPBase")]
    pub sp_base: Option<i32>,
    pub show_stance_list: Vec<i32>,
    pub skill_combo_value_delta: Option<i32>,
    pub level: BTreeMap<u32, AvatarSkillLevel>,
}

impl AvatarSkill {
    /// Parameters at `level`, if the skill has that level.
    pub fn params_at(&self, level: u32) -> Option<&[f64]> {
        self.level.get(&level).map(|l| l.param_list.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarSkillLevel {
    pub level: u32,
    pub param_list: Vec<f64>,
}

/// A trace node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarSkillTree {
    pub anchor: String,
    pub avatar_promotion_limit: Option<u32>,
    pub avatar_level_limit: Option<u32>,
    pub default_unlock: bool,
    pub icon: String,
    #[serde(rename = "LevelUpSkillID")]
    pub level_up_skill_id: Vec<u32>,
    pub material_list: Vec<ItemPair>,
    pub max_level: u32,
    pub param_list: Vec<f64>,
    #[serde(rename = "PointID")]
    pub point_id: u32,
    pub point_name: Option<String>,
    pub point_desc: Option<String>,
    pub point_trigger_key: i64,
    pub point_type: u32,
    pub pre_point: Vec<u32>,
    pub status_add_list: Vec<PropertyPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyPair {
    pub property_type: String,
    pub value: f64,
}

/// Base stats and growth for one promotion stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarPromotion {
    pub attack_base: f64,
    pub attack_add: f64,
    pub defence_base: f64,
    pub defence_add: f64,
    #[serde(rename = "HPBase")]
    pub hp_base: f64,
    #[serde(rename = "HPAdd")]
    pub hp_add: f64,
    pub speed_base: u32,
    pub critical_chance: f64,
    pub critical_damage: f64,
    pub base_aggro: u32,
    pub cost: Vec<ItemPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelicPropertyPair {
    pub property_type: String,
    pub relic_type: String,
}

/// Recommended main stats and relic sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AvatarRelicRecommend {
    #[serde(rename = "AvatarID")]
    pub avatar_id: u32,
    pub property_list: Vec<RelicPropertyPair>,
    #[serde(rename = "Set2IDList")]
    pub set2_id_list: Vec<u32>,
    #[serde(rename = "Set4IDList")]
    pub set4_id_list: Vec<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const AVATAR: &str = include_str!("../../../test-vectors/fixtures/hsr/data/cn/character/1212.json");

    fn brief() -> Value {
        json!({
            "icon": "/hsr/UI/avatarshopicon/1212.webp",
            "rank": "CombatPowerAvatarRarityType5",
            "baseType": "Warrior",
            "damageType": "Ice",
            "en": "Jingliu",
            "desc": "Former Sword Champion of the Xianzhou Luofu.",
            "kr": "경류",
            "cn": "镜流",
            "jp": "鏡流",
        })
    }

    #[test]
    fn brief_fields_round_trip() {
        let value = brief();
        let avatar = BriefAvatar::from_json(&value).unwrap();
        assert_eq!(avatar.base_type, "Warrior");
        assert_eq!(avatar.damage_type, "Ice");
        assert_eq!(serde_json::to_value(&avatar).unwrap(), value);
    }

    #[test]
    fn brief_fails_without_any_required_field() {
        let full = brief();
        for key in full.as_object().unwrap().keys() {
            let mut value = full.clone();
            value.as_object_mut().unwrap().remove(key);
            let err = BriefAvatar::from_json(&value).unwrap_err();
            assert_eq!(err.entity, "BriefAvatar");
            assert!(err.message.contains(key.as_str()), "{key}: {}", err.message);
        }
    }

    #[test]
    fn parses_full_avatar() {
        let value: Value = serde_json::from_str(AVATAR).unwrap();
        let avatar = Avatar::from_json(&value).unwrap();
        assert_eq!(avatar.name, "镜流");
        assert_eq!(avatar.sp_need, 140);
        assert_eq!(avatar.ranks.len(), 6);
        assert_eq!(avatar.ranks[&4].id, 121204);
        assert_eq!(avatar.chara_info.va["en"], "Emily Woo Zeller");
        assert!(avatar.chara_info.voicelines[1].unlock_desc.is_none());
        assert_eq!(avatar.relics.set4_id_list, vec![104]);
        assert_eq!(avatar.skill_tree_points().count(), 3);
        assert_eq!(avatar.stats[&0].speed_base, 96);
    }

    #[test]
    fn skill_level_keys_may_have_gaps() {
        let value = json!({
            "Name": "Frost Strike",
            "Desc": "Deals Ice DMG.",
            "Type": null,
            "Tag": "SingleAttack",
            "SPBase": 20,
            "ShowStanceList": [30],
            "Level": {
                "1": {"Level": 1, "ParamList": [0.5]},
                "9": {"Level": 9, "ParamList": [1.3]},
            },
        });
        let skill: AvatarSkill = super::super::parse_as("AvatarSkill", &value).unwrap();
        assert!(skill.skill_type.is_none());
        assert!(skill.skill_combo_value_delta.is_none());
        assert_eq!(skill.params_at(9), Some(&[1.3][..]));
        assert!(skill.params_at(5).is_none());
    }

    #[test]
    fn skill_level_key_must_be_integer() {
        let value = json!({
            "Name": "Frost Strike",
            "Desc": "",
            "Tag": "SingleAttack",
            "ShowStanceList": [],
            "Level": {"max": {"Level": 1, "ParamList": []}},
        });
        let err = super::super::parse_as::<AvatarSkill>("AvatarSkill", &value).unwrap_err();
        assert_eq!(err.entity, "AvatarSkill");
        assert!(err.path.starts_with("Level"), "{}", err.path);
    }

    #[test]
    fn trace_node_optional_fields() {
        let value = json!({
            "Anchor": "Point01",
            "DefaultUnlock": true,
            "Icon": "SpriteOutput/SkillIcons/1212/SkillIcon_1212_Normal.png",
            "LevelUpSkillID": [121201],
            "MaterialList": [],
            "MaxLevel": 6,
            "ParamList": [],
            "PointID": 1212001,
            "PointName": null,
            "PointTriggerKey": -1,
            "PointType": 2,
            "PrePoint": [],
            "StatusAddList": [{"PropertyType": "CriticalDamageBase", "Value": 0.053}],
        });
        let node: AvatarSkillTree = super::super::parse_as("AvatarSkillTree", &value).unwrap();
        assert!(node.avatar_promotion_limit.is_none());
        assert!(node.point_name.is_none());
        assert!(node.point_desc.is_none());
        assert_eq!(node.point_trigger_key, -1);
        assert_eq!(node.status_add_list[0].value, 0.053);
    }
}
