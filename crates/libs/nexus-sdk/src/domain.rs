use crate::query::unescape_value;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Fields the node sent that the typed record does not name.
pub type Extra = BTreeMap<String, JsonValue>;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResult {
    pub genesis: String,
    pub session: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UserCreated {
    #[serde(default)]
    pub genesis: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Answer to any register-creating or value-moving call.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TxReceipt {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ClaimReceipt {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub claimed: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub address: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub modified: Option<u64>,
    #[serde(default)]
    pub data: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AssetRecord {
    pub address: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: Option<u64>,
    #[serde(default)]
    pub modified: Option<u64>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub owner: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub modified: Option<u64>,
    #[serde(default)]
    pub checksum: Option<JsonValue>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl HistoryEntry {
    pub fn is_claim(&self) -> bool {
        self.kind.eq_ignore_ascii_case("claim")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenRecord {
    pub address: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub maxsupply: f64,
    #[serde(default)]
    pub currentsupply: f64,
    #[serde(default)]
    pub digits: Option<u8>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountRecord {
    pub address: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default)]
    pub balance: f64,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Records whose text payload comes back in its query-escaped form.
pub(crate) trait OpaqueText {
    fn unescape_text(self) -> Self;
}

impl OpaqueText for ItemRecord {
    fn unescape_text(mut self) -> Self {
        self.data = unescape_value(&self.data);
        self
    }
}

impl OpaqueText for AssetRecord {
    fn unescape_text(mut self) -> Self {
        self.data = self.data.as_deref().map(unescape_value);
        self
    }
}

impl OpaqueText for HistoryEntry {
    fn unescape_text(mut self) -> Self {
        self.data = self.data.as_deref().map(unescape_value);
        self
    }
}

impl<T: OpaqueText> OpaqueText for Vec<T> {
    fn unescape_text(self) -> Self {
        self.into_iter().map(OpaqueText::unescape_text).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_keeps_unknown_fields() {
        let item: ItemRecord = serde_json::from_value(json!({
            "address": "8b1f",
            "owner": "a1b2",
            "created": 1_570_000_000u64,
            "data": "0xdeadbeef",
            "checksum": 42
        }))
        .expect("item");
        assert_eq!(item.data, "0xdeadbeef");
        assert_eq!(item.extra.get("checksum"), Some(&json!(42)));
    }

    #[test]
    fn history_entries_unescape_their_data() {
        let history: Vec<HistoryEntry> = serde_json::from_value(json!([
            {"type": "CREATE", "owner": "alice", "data": "a%26b"},
            {"type": "CLAIM", "owner": "bob"}
        ]))
        .expect("history");
        let history = history.unescape_text();
        assert_eq!(history[0].data.as_deref(), Some("a&b"));
        assert!(history[1].is_claim());
        assert_eq!(history[1].data, None);
    }

    #[test]
    fn account_balance_accepts_fractions() {
        let account: AccountRecord = serde_json::from_value(json!({
            "address": "88",
            "name": "savings",
            "token_name": "music-token",
            "balance": 12.5
        }))
        .expect("account");
        assert_eq!(account.balance, 12.5);
        assert_eq!(account.token_name.as_deref(), Some("music-token"));
    }
}
