use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct JRecord {
    pub key: String,
    pub attrs: HashMap<String, String>,
    #[serde(deserialize_with = "deserialize_value")]
    pub value: f64,
}

#[derive(Deserialize, Debug)]
pub struct JScrape {
    pub name: String,
    pub input: String,
    pub records: Option<Vec<JRecord>>,
    pub error: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct TestJson {
    pub scrapes: Vec<JScrape>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JValue {
    Number(f64),
    Text(String),
}

// JSON has no NaN, so it is written as a string.
fn deserialize_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match JValue::deserialize(deserializer)? {
        JValue::Number(value) => Ok(value),
        JValue::Text(text) if text == "NaN" => Ok(f64::NAN),
        JValue::Text(text) => Err(serde::de::Error::custom(format!(
            "unexpected value: {}",
            text
        ))),
    }
}

pub static TEST_DATA: Lazy<TestJson> = Lazy::new(|| {
    let file_content = include_str!("test_data.json");
    serde_json::from_str(file_content).expect("Failed to parse test_data.json")
});
