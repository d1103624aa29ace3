use super::RecordSource;
use crate::error::{Result, StatdexError};
use serde_json::Value;

/// In-memory source for testing and development.
#[derive(Default)]
pub struct InMemorySource {
    values: Vec<Value>,
    failure: Option<String>,
}

impl InMemorySource {
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            values,
            failure: None,
        }
    }

    /// A source whose fetch always fails with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            values: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

impl RecordSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Value>> {
        match &self.failure {
            Some(reason) => Err(StatdexError::Source(reason.clone())),
            None => Ok(self.values.clone()),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Record;

    pub fn record_with_stats(id: u32, name: &str, stats: [u32; 6]) -> Record {
        let [hp, attack, defense, special_attack, special_defense, speed] = stats;
        Record {
            id,
            name: name.to_string(),
            types: vec!["Normal".to_string()],
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// A record whose power is exactly `power`, carried entirely by `hp`.
    pub fn record_with_power(id: u32, name: &str, power: u64) -> Record {
        let hp = u32::try_from(power).expect("fixture power fits in u32");
        record_with_stats(id, name, [hp, 0, 0, 0, 0, 0])
    }

    /// `count` records with ids `1..=count` and power `100 * id`.
    pub fn numbered_records(count: u32) -> Vec<Record> {
        (1..=count)
            .map(|id| record_with_power(id, &format!("Creature {}", id), 100 * u64::from(id)))
            .collect()
    }

    /// The first few entries of a real creature list.
    pub fn sample_records() -> Vec<Record> {
        let mut records = vec![
            record_with_stats(1, "Bulbasaur", [45, 49, 49, 65, 65, 45]),
            record_with_stats(2, "Ivysaur", [60, 62, 63, 80, 80, 60]),
            record_with_stats(3, "Venusaur", [80, 82, 83, 100, 100, 80]),
            record_with_stats(4, "Charmander", [39, 52, 43, 60, 50, 65]),
            record_with_stats(5, "Charmeleon", [58, 64, 58, 80, 65, 80]),
            record_with_stats(6, "Charizard", [78, 84, 78, 109, 85, 100]),
            record_with_stats(7, "Squirtle", [44, 48, 65, 50, 64, 43]),
        ];
        for record in records.iter_mut().take(3) {
            record.types = vec!["Grass".to_string(), "Poison".to_string()];
        }
        for record in records.iter_mut().skip(3).take(3) {
            record.types = vec!["Fire".to_string()];
        }
        records[5].types.push("Flying".to_string());
        records[6].types = vec!["Water".to_string()];
        records
    }
}
