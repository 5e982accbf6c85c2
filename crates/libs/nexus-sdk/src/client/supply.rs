use super::*;
use crate::domain::{ClaimReceipt, HistoryEntry, ItemRecord, OpaqueText, TxReceipt};

impl<T: Transport> NexusClient<T> {
    pub fn supply_create_item(&self, name: &str, data: &str) -> ApiResult<TxReceipt> {
        let query = self.signed_query("supply_create_item")?.text("name", name).text("data", data);
        self.request("supply", "create/item", query)
    }

    pub fn supply_get_item_by_name(&self, name: &str) -> ApiResult<ItemRecord> {
        self.get_item(Query::new().text("name", name))
    }

    pub fn supply_get_item_by_address(&self, address: &str) -> ApiResult<ItemRecord> {
        self.get_item(Query::new().text("address", address))
    }

    pub fn supply_update_item_by_address(&self, address: &str, data: &str) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("supply_update_item_by_address")?
            .text("address", address)
            .text("data", data);
        self.request("supply", "update/item", query)
    }

    /// Hands the item named `name` to the user called `username`.
    pub fn supply_transfer_item_by_name(&self, name: &str, username: &str) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("supply_transfer_item_by_name")?
            .text("username", username)
            .text("name", name);
        self.request("supply", "transfer/item", query)
    }

    /// Hands the item at `address` to the genesis id `destination`.
    pub fn supply_transfer_item_by_address(
        &self,
        address: &str,
        destination: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("supply_transfer_item_by_address")?
            .text("address", address)
            .text("destination", destination);
        self.request("supply", "transfer/item", query)
    }

    pub fn supply_claim_item(&self, txid: &str) -> ApiResult<ClaimReceipt> {
        let query = self.signed_query("supply_claim_item")?.text("txid", txid);
        self.request("supply", "claim/item", query)
    }

    pub fn supply_list_item_history_by_name(&self, name: &str) -> ApiResult<Vec<HistoryEntry>> {
        self.item_history(Query::new().text("name", name))
    }

    pub fn supply_list_item_history_by_address(
        &self,
        address: &str,
    ) -> ApiResult<Vec<HistoryEntry>> {
        self.item_history(Query::new().text("address", address))
    }

    fn get_item(&self, query: Query) -> ApiResult<ItemRecord> {
        self.request::<ItemRecord>("supply", "get/item", query).map(OpaqueText::unescape_text)
    }

    fn item_history(&self, query: Query) -> ApiResult<Vec<HistoryEntry>> {
        self.request::<Vec<HistoryEntry>>("supply", "list/item/history", query)
            .map(OpaqueText::unescape_text)
    }
}
