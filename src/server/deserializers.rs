use serde::{Deserialize, Deserializer};

// older clients send ids as strings, e.g. `["12", 13]`
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseId {
    Number(i64),
    Text(String),
}

impl TryFrom<LooseId> for i64 {
    type Error = String;

    fn try_from(value: LooseId) -> Result<Self, Self::Error> {
        match value {
            LooseId::Number(v) => Ok(v),
            LooseId::Text(text) => text
                .parse::<i64>()
                .map_err(|_| format!("Wrong value {text}, can not parse to i64")),
        }
    }
}

pub fn deserialize_ids<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<LooseId>::deserialize(deserializer)?
        .into_iter()
        .map(|id| i64::try_from(id).map_err(serde::de::Error::custom))
        .collect()
}
