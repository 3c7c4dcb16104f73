use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single printing as it appears in a set's `cards` list.
///
/// Only `name` is typed. The fields carried into [`OutputCard`] are kept as
/// raw JSON so that whatever shape the source uses survives untouched, and
/// everything else in the source record is skipped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub name: String,
    pub uuid: Option<Value>,
    pub border_color: Option<Value>,
    pub colors: Option<Value>,
    pub converted_mana_cost: Option<Value>,
    pub legalities: Option<Value>,
    pub mana_cost: Option<Value>,
    pub mana_value: Option<Value>,
    pub keywords: Option<Value>,
    pub original_text: Option<Value>,
    pub rarity: Option<Value>,
    pub rulings: Option<Value>,
    pub types: Option<Value>,
    pub subtypes: Option<Value>,
    pub toughness: Option<Value>,
    pub power: Option<Value>,
    pub identifiers: Option<Value>,
}

impl RawCard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `identifiers.multiverseId`, if it holds a non-empty string or a number.
    pub fn multiverse_id(&self) -> Option<String> {
        match self.identifiers.as_ref()?.get("multiverseId")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// The reduced record written to the cleaned output.
///
/// Field order here is the key order of every serialized record. Absent
/// pass-through fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputCard {
    pub uuid: Option<Value>,
    pub border_color: Option<Value>,
    pub colors: Option<Value>,
    pub converted_mana_cost: Option<Value>,
    pub legalities: Option<Value>,
    pub mana_cost: Option<Value>,
    pub mana_value: Option<Value>,
    pub name: String,
    pub keywords: Option<Value>,
    pub original_text: Option<Value>,
    pub rarity: Option<Value>,
    pub rulings: Option<Value>,
    pub types: Option<Value>,
    pub subtypes: Option<Value>,
    pub toughness: Option<Value>,
    pub power: Option<Value>,
    pub multiverse_id: String,
}

impl From<RawCard> for OutputCard {
    fn from(value: RawCard) -> Self {
        let multiverse_id = value.multiverse_id().unwrap_or_default();

        Self {
            uuid: value.uuid,
            border_color: value.border_color,
            colors: value.colors,
            converted_mana_cost: value.converted_mana_cost,
            legalities: value.legalities,
            mana_cost: value.mana_cost,
            mana_value: value.mana_value,
            name: value.name,
            keywords: value.keywords,
            original_text: value.original_text,
            rarity: value.rarity,
            rulings: value.rulings,
            types: value.types,
            subtypes: value.subtypes,
            toughness: value.toughness,
            power: value.power,
            multiverse_id,
        }
    }
}
