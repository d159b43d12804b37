use serde::Deserialize;

/// Raw score form as submitted by the browser. Parsing into a checked
/// submission happens in the domain layer.
#[derive(Deserialize, Debug, Default)]
pub struct AddScoreParams {
    #[serde(default, alias = "tries", alias = "score")]
    pub value: String,
    pub date: Option<String>,
}
