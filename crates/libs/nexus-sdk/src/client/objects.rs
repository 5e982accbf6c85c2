use super::*;
use crate::domain::TxReceipt;

impl<T: Transport> NexusClient<T> {
    /// Registers a JSON schema object. `json` is sent as given.
    pub fn objects_create_schema(&self, name: &str, json: &str) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("objects_create_schema")?
            .text("name", name)
            .text("format", "json")
            .text("json", json);
        self.request("objects", "create/schema", query)
    }

    pub fn objects_get_schema_by_name(&self, name: &str) -> ApiResult<JsonValue> {
        self.get_schema(Query::new().text("name", name))
    }

    pub fn objects_get_schema_by_address(&self, address: &str) -> ApiResult<JsonValue> {
        self.get_schema(Query::new().text("address", address))
    }

    fn get_schema(&self, query: Query) -> ApiResult<JsonValue> {
        self.fetch("objects", "get/schema", &query.text("format", "json"))
    }
}
