//! Typed records for every document the API serves, and the single
//! boundary that turns JSON into them.
//!
//! # Design
//! Each record declares its shape with serde derives: required fields are
//! plain types, optional fields are `Option` (absent means `None`), numeric
//! object keys are `BTreeMap<u32, _>` keys. `parse` runs the derive through
//! `serde_path_to_error` so a failure names the record and the JSON path of
//! the offending value. Unknown upstream keys are ignored.
//!
//! Nothing in this module performs I/O.

mod achievement;
mod avatar;
mod changelog;
mod item;
mod lightcone;
mod monster;
mod relicset;

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SchemaError;

pub use achievement::{Achievement, AchievementSeries};
pub use avatar::{
    Avatar, AvatarFetter, AvatarPromotion, AvatarRank, AvatarRelicRecommend, AvatarSkill,
    AvatarSkillLevel, AvatarSkillTree, AvatarVoice, BriefAvatar, PropertyPair, RelicPropertyPair,
};
pub use changelog::Changelog;
pub use item::{BriefItem, Item, ItemComefrom};
pub use lightcone::{BriefLightcone, Lightcone, LightconePromotion, LightconeSkill, LightconeSkillLevel};
pub use monster::{
    BriefMonster, ElementResistance, ItemDrop, Monster, MonsterDrop, MonsterSkill, MonsterTemplate,
    SpHitBase,
};
pub use relicset::{BriefRelicSet, BriefRelicSetDesc, Relic, RelicSet, RelicSetSkill};

/// A record that can be validated out of a JSON document.
pub trait Schema: DeserializeOwned {
    /// Record name used in `SchemaError`.
    const ENTITY: &'static str;

    fn from_json(value: &Value) -> Result<Self, SchemaError> {
        parse(value)
    }
}

/// Validate `value` as a `T`.
pub fn parse<T: Schema>(value: &Value) -> Result<T, SchemaError> {
    parse_as(T::ENTITY, value)
}

/// Decode `bytes` as JSON and validate it as a `T`.
pub fn parse_slice<T: Schema>(bytes: &[u8]) -> Result<T, SchemaError> {
    parse(&to_value(T::ENTITY, bytes)?)
}

/// Validate an index document: a JSON object keyed by entity id whose values
/// are all `T`. A single bad key or entry fails the whole index.
pub fn parse_index<T: Schema>(value: &Value) -> Result<BTreeMap<u32, T>, SchemaError> {
    parse_as(T::ENTITY, value)
}

pub(crate) fn to_value(entity: &'static str, bytes: &[u8]) -> Result<Value, SchemaError> {
    serde_json::from_slice(bytes).map_err(|e| SchemaError {
        entity,
        path: String::new(),
        message: e.to_string(),
    })
}

/// Validate `value` as any deserializable shape, reporting failures under
/// `entity`. Useful for nested records that are never fetched on their own.
pub fn parse_as<T: DeserializeOwned>(entity: &'static str, value: &Value) -> Result<T, SchemaError> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        SchemaError {
            entity,
            path: if path == "." { String::new() } else { path },
            message: e.into_inner().to_string(),
        }
    })
}

/// An item id and a count, used for costs and materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPair {
    #[serde(rename = "ItemID")]
    pub item_id: u32,
    #[serde(rename = "ItemNum")]
    pub item_num: u32,
}
