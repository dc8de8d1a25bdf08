use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Schema;

/// Item entry in `/hsr/data/{lang}/item.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BriefItem {
    pub item_name: String,
    pub item_sub_type: String,
    pub rarity: String,
    pub item_figure_icon_path: String,
}

impl Schema for BriefItem {
    const ENTITY: &'static str = "BriefItem";
}

/// Full item document. `use_method` and `use_data_id` are only served for
/// consumables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ID")]
    pub id: u32,
    pub item_main_type: String,
    pub item_sub_type: String,
    pub inventory_display_tag: u32,
    pub rarity: String,
    pub purpose_type: Option<u32>,
    pub item_name: String,
    pub item_desc: String,
    #[serde(rename = "ItemBGDesc")]
    pub item_bg_desc: String,
    pub item_icon_path: String,
    pub item_figure_icon_path: String,
    pub item_currency_icon_path: String,
    pub item_avatar_icon_path: String,
    pub pile_limit: u32,
    pub use_method: Option<String>,
    #[serde(rename = "UseDataID")]
    pub use_data_id: Option<u32>,
    pub custom_data_list: Vec<i64>,
    /// Upstream has only ever served `[]` here; element shape is unknown.
    #[serde(rename = "ReturnItemIDList")]
    pub return_item_id_list: Option<Vec<Value>>,
    pub item_group: Option<u32>,
    pub sell_type: Option<String>,
    pub item_comefrom: Vec<ItemComefrom>,
}

impl Schema for Item {
    const ENTITY: &'static str = "Item";
}

impl Item {
    pub fn is_consumable(&self) -> bool {
        self.use_method.is_some()
    }
}

/// Where an item can be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemComefrom {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Desc")]
    pub desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn material() -> Value {
        json!({
            "ID": 110101,
            "ItemMainType": "Material",
            "ItemSubType": "Material",
            "InventoryDisplayTag": 2,
            "Rarity": "Rare",
            "PurposeType": 2,
            "ItemName": "Gelid Chitin",
            "ItemDesc": "",
            "ItemBGDesc": "",
            "ItemIconPath": "SpriteOutput/ItemIcon/110101.png",
            "ItemFigureIconPath": "SpriteOutput/ItemFigures/110101.png",
            "ItemCurrencyIconPath": "",
            "ItemAvatarIconPath": "",
            "PileLimit": 999999999,
            "CustomDataList": [],
            "ItemComefrom": [{"ID": 1, "Desc": "Stagnant Shadow: Shape of Rime"}],
        })
    }

    #[test]
    fn optional_fields_absent() {
        let item = Item::from_json(&material()).unwrap();
        assert!(item.use_method.is_none());
        assert!(item.use_data_id.is_none());
        assert!(item.return_item_id_list.is_none());
        assert!(item.item_group.is_none());
        assert!(item.sell_type.is_none());
        assert!(!item.is_consumable());
        assert_eq!(item.purpose_type, Some(2));
        assert_eq!(item.item_comefrom[0].id, 1);
    }

    #[test]
    fn empty_return_list_is_present() {
        let mut value = material();
        value["ReturnItemIDList"] = json!([]);
        let item = Item::from_json(&value).unwrap();
        assert_eq!(item.return_item_id_list, Some(Vec::new()));
    }

    #[test]
    fn consumable_carries_use_fields() {
        let mut value = material();
        value["UseMethod"] = json!("AutoConversionItem");
        value["UseDataID"] = json!(211);
        let item = Item::from_json(&value).unwrap();
        assert_eq!(item.use_method.as_deref(), Some("AutoConversionItem"));
        assert_eq!(item.use_data_id, Some(211));
        assert!(item.is_consumable());
    }

    #[test]
    fn mistyped_pile_limit_fails() {
        let mut value = material();
        value["PileLimit"] = json!("lots");
        let err = Item::from_json(&value).unwrap_err();
        assert_eq!(err.entity, "Item");
        assert_eq!(err.path, "PileLimit");
    }

    #[test]
    fn brief_fails_without_any_required_field() {
        let full = json!({
            "ItemName": "Gelid Chitin",
            "ItemSubType": "Material",
            "Rarity": "Rare",
            "ItemFigureIconPath": "SpriteOutput/ItemFigures/110101.png",
        });
        let brief = BriefItem::from_json(&full).unwrap();
        assert_eq!(brief.item_sub_type, "Material");
        for key in full.as_object().unwrap().keys() {
            let mut value = full.clone();
            value.as_object_mut().unwrap().remove(key);
            let err = BriefItem::from_json(&value).unwrap_err();
            assert!(err.message.contains(key.as_str()), "{key}: {}", err.message);
        }
    }
}
