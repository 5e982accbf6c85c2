use super::*;
use crate::domain::{AssetRecord, ClaimReceipt, HistoryEntry, OpaqueText, TxReceipt};

impl<T: Transport> NexusClient<T> {
    /// Stores `data` as a raw-format asset.
    pub fn assets_create_asset(&self, name: &str, data: &str) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("assets_create_asset")?
            .text("name", name)
            .text("format", "raw")
            .text("data", data);
        self.request("assets", "create/asset", query)
    }

    pub fn assets_get_asset_by_name(&self, name: &str) -> ApiResult<AssetRecord> {
        self.get_asset(Query::new().text("name", name))
    }

    pub fn assets_get_asset_by_address(&self, address: &str) -> ApiResult<AssetRecord> {
        self.get_asset(Query::new().text("address", address))
    }

    pub fn assets_update_asset_by_address(
        &self,
        address: &str,
        data: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("assets_update_asset_by_address")?
            .text("address", address)
            .text("data", data);
        self.request("assets", "update/asset", query)
    }

    pub fn assets_transfer_asset_by_name(
        &self,
        name: &str,
        username: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("assets_transfer_asset_by_name")?
            .text("username", username)
            .text("name", name);
        self.request("assets", "transfer/asset", query)
    }

    pub fn assets_transfer_asset_by_address(
        &self,
        address: &str,
        destination: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("assets_transfer_asset_by_address")?
            .text("address", address)
            .text("destination", destination);
        self.request("assets", "transfer/asset", query)
    }

    pub fn assets_claim_asset(&self, txid: &str) -> ApiResult<ClaimReceipt> {
        let query = self.signed_query("assets_claim_asset")?.text("txid", txid);
        self.request("assets", "claim/asset", query)
    }

    /// Binds the asset `asset_name` to the token `token_name`, making token
    /// holders its partial owners.
    pub fn assets_tokenize_asset_by_name(
        &self,
        asset_name: &str,
        token_name: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("assets_tokenize_asset_by_name")?
            .text("token_name", token_name)
            .text("asset_name", asset_name);
        self.request("assets", "tokenize/asset", query)
    }

    pub fn assets_list_asset_history_by_name(&self, name: &str) -> ApiResult<Vec<HistoryEntry>> {
        self.asset_history(Query::new().text("name", name))
    }

    pub fn assets_list_asset_history_by_address(
        &self,
        address: &str,
    ) -> ApiResult<Vec<HistoryEntry>> {
        self.asset_history(Query::new().text("address", address))
    }

    fn get_asset(&self, query: Query) -> ApiResult<AssetRecord> {
        self.request::<AssetRecord>("assets", "get/asset", query).map(OpaqueText::unescape_text)
    }

    fn asset_history(&self, query: Query) -> ApiResult<Vec<HistoryEntry>> {
        self.request::<Vec<HistoryEntry>>("assets", "list/asset/history", query)
            .map(OpaqueText::unescape_text)
    }
}
