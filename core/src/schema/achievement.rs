use serde::{Deserialize, Serialize};

use super::Schema;

/// An achievement series with its achievements in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AchievementSeries {
    pub id: u32,
    pub priority: u32,
    pub name: String,
    pub list: Vec<Achievement>,
}

impl Schema for AchievementSeries {
    const ENTITY: &'static str = "AchievementSeries";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Achievement {
    pub id: u32,
    pub name: String,
    pub desc: String,
    pub param_list: Vec<f64>,
    pub rarity: String,
    pub show_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_keeps_upstream_order() {
        let value = json!({
            "Id": 1,
            "Priority": 1,
            "Name": "Trailblazer",
            "List": [
                {"Id": 4010102, "Name": "B", "Desc": "", "ParamList": [], "Rarity": "Mid", "ShowType": ""},
                {"Id": 4010101, "Name": "A", "Desc": "", "ParamList": [10], "Rarity": "Low", "ShowType": "ShowAfterFinish"},
            ],
        });
        let series = AchievementSeries::from_json(&value).unwrap();
        let ids: Vec<u32> = series.list.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![4010102, 4010101]);
        assert_eq!(series.list[1].param_list, vec![10.0]);
    }

    #[test]
    fn achievement_field_missing_names_position() {
        let value = json!({
            "Id": 1,
            "Priority": 1,
            "Name": "Trailblazer",
            "List": [{"Id": 4010101, "Name": "A", "Desc": "", "ParamList": [], "ShowType": ""}],
        });
        let err = AchievementSeries::from_json(&value).unwrap_err();
        assert_eq!(err.path, "List[0]");
        assert!(err.message.contains("Rarity"), "{}", err.message);
    }
}
