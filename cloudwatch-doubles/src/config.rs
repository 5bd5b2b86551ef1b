// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use typed_builder::TypedBuilder;

pub const DEFAULT_REGION_KEY: &str = "defaultRegion";
pub const DEFAULT_REGION: &str = "default";
pub const DEFAULT_DATABASE: &str = "default";
pub const DEFAULT_DATA_SOURCE_ID: i64 = 1;

/// Free-form data source settings.
///
/// Always holds a `defaultRegion` entry: it is inserted on construction and on
/// deserialization, and there is no way to remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct JsonData(Map<String, Value>);

impl JsonData {
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Region used when a query does not name one.
    ///
    /// Falls back to the sentinel if the entry was overwritten with a non-string value.
    pub fn default_region(&self) -> &str {
        self.get_str(DEFAULT_REGION_KEY).unwrap_or(DEFAULT_REGION)
    }
}

impl Default for JsonData {
    fn default() -> Self {
        Self::from(Map::new())
    }
}

impl From<Map<String, Value>> for JsonData {
    fn from(mut map: Map<String, Value>) -> Self {
        map.entry(DEFAULT_REGION_KEY).or_insert_with(|| Value::from(DEFAULT_REGION));
        JsonData(map)
    }
}

impl From<JsonData> for Map<String, Value> {
    fn from(data: JsonData) -> Self {
        data.0
    }
}

/// Persisted data source configuration, in the shape the query layer reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    #[builder(default = DEFAULT_DATA_SOURCE_ID)]
    pub id: i64,

    /// Default namespace queried when none is given
    #[builder(default = DEFAULT_DATABASE.to_string(), setter(into))]
    pub database: String,

    #[builder(default)]
    #[serde(default)]
    pub json_data: JsonData,

    #[builder(default)]
    #[serde(default)]
    pub secure_json_data: BTreeMap<String, String>,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id={}", self.id)?;
        writeln!(f, "database={}", self.database)?;
        writeln!(f, "default_region={}", self.json_data.default_region())?;
        writeln!(f, "settings={}", self.json_data.len())?;
        // secrets are never printed
        write!(f, "secure_settings={}", self.secure_json_data.len())
    }
}

/// Minimal valid data source for use as test input.
pub fn fake_data_source() -> DataSource {
    DataSource::builder().build()
}
