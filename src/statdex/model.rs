use crate::error::{Result, StatdexError};
use serde::Serialize;
use serde_json::{Map, Value};

/// The six stat fields every record must carry, in column order.
pub const STAT_FIELDS: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special_attack",
    "special_defense",
    "speed",
];

/// One creature entry.
///
/// Records are immutable once loaded and only ever built by
/// [`Record::from_value`]. The JSON shape uses `type` for the tag list;
/// `types` is accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl Record {
    /// Builds a record from one element of the raw collection.
    ///
    /// `position` is only used to label the fault when the element has no
    /// usable `id`.
    pub fn from_value(position: usize, value: &Value) -> Result<Self> {
        let fallback_label = format!("#{}", position);
        let Some(obj) = value.as_object() else {
            return Err(StatdexError::integrity(fallback_label, "<object>"));
        };

        let id = obj
            .get("id")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| StatdexError::integrity(fallback_label, "id"))?;
        let label = id.to_string();

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| StatdexError::integrity(label.as_str(), "name"))?
            .to_string();

        let types = read_types(obj).ok_or_else(|| StatdexError::integrity(label.as_str(), "type"))?;

        let mut stats = [0u32; 6];
        for (slot, field) in stats.iter_mut().zip(STAT_FIELDS) {
            *slot = obj
                .get(field)
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| StatdexError::integrity(label.as_str(), field))?;
        }
        let [hp, attack, defense, special_attack, special_defense, speed] = stats;

        Ok(Record {
            id,
            name,
            types,
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        })
    }

    /// Stat values in [`STAT_FIELDS`] order.
    pub fn stats(&self) -> [u32; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }

    /// Type tags joined for display, e.g. `"Grass, Poison"`.
    pub fn type_label(&self) -> String {
        self.types.join(", ")
    }
}

fn read_types(obj: &Map<String, Value>) -> Option<Vec<String>> {
    let raw = obj.get("type").or_else(|| obj.get("types"))?.as_array()?;
    let types: Option<Vec<String>> = raw
        .iter()
        .map(|t| t.as_str().map(str::to_string))
        .collect();
    types.filter(|t| !t.is_empty())
}
