use super::*;

impl<T: Transport> NexusClient<T> {
    pub fn ledger_get_blockhash(&self, height: u64) -> ApiResult<JsonValue> {
        self.fetch("ledger", "get/blockhash", &Query::new().number("height", height))
    }

    pub fn ledger_get_block_by_height(
        &self,
        height: u64,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query = Query::new().number("height", height).verbosity(verbosity);
        self.fetch("ledger", "get/block", &query)
    }

    pub fn ledger_get_block_by_hash(
        &self,
        hash: &str,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query = Query::new().text("hash", hash).verbosity(verbosity);
        self.fetch("ledger", "get/block", &query)
    }

    pub fn ledger_get_transaction(
        &self,
        hash: &str,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query = Query::new().text("hash", hash).verbosity(verbosity);
        self.fetch("ledger", "get/transaction", &query)
    }

    pub fn ledger_get_mininginfo(&self) -> ApiResult<JsonValue> {
        self.fetch("ledger", "get/mininginfo", &Query::new())
    }

    /// Submits a serialized transaction in the node's hex encoding.
    pub fn ledger_submit_transaction(&self, data: &str) -> ApiResult<JsonValue> {
        self.fetch("ledger", "submit/transaction", &Query::new().text("data", data))
    }

    pub fn ledger_list_blocks_by_height(
        &self,
        height: u64,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query =
            Query::new().number("height", height).number("limit", limit).verbosity(verbosity);
        self.fetch("ledger", "list/blocks", &query)
    }

    pub fn ledger_list_blocks_by_hash(
        &self,
        hash: &str,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query = Query::new().text("hash", hash).number("limit", limit).verbosity(verbosity);
        self.fetch("ledger", "list/blocks", &query)
    }
}
