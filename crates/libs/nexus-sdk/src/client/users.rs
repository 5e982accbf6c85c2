use super::*;

/// Listing calls keyed either by the logged in account's genesis id or by its
/// username. The username variants need no session.
impl<T: Transport> NexusClient<T> {
    pub fn users_list_transactions_by_genesis(
        &self,
        page: u32,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let genesis = self.require_genesis("users_list_transactions_by_genesis")?;
        let query = Self::page_query("genesis", genesis, page, limit).verbosity(verbosity);
        self.fetch("users", "list/transactions", &query)
    }

    pub fn users_list_transactions_by_username(
        &self,
        page: u32,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query =
            Self::page_query("username", self.username(), page, limit).verbosity(verbosity);
        self.fetch("users", "list/transactions", &query)
    }

    pub fn users_list_notifications_by_genesis(
        &self,
        page: u32,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let genesis = self.require_genesis("users_list_notifications_by_genesis")?;
        let query = Self::page_query("genesis", genesis, page, limit).verbosity(verbosity);
        self.fetch("users", "list/notifications", &query)
    }

    pub fn users_list_notifications_by_username(
        &self,
        page: u32,
        limit: u32,
        verbosity: Option<&str>,
    ) -> ApiResult<JsonValue> {
        let verbosity = Self::verbosity(verbosity)?;
        let query =
            Self::page_query("username", self.username(), page, limit).verbosity(verbosity);
        self.fetch("users", "list/notifications", &query)
    }

    pub fn users_list_assets_by_genesis(&self, page: u32, limit: u32) -> ApiResult<JsonValue> {
        let genesis = self.require_genesis("users_list_assets_by_genesis")?;
        self.fetch("users", "list/assets", &Self::page_query("genesis", genesis, page, limit))
    }

    pub fn users_list_tokens_by_genesis(&self) -> ApiResult<JsonValue> {
        let genesis = self.require_genesis("users_list_tokens_by_genesis")?;
        self.fetch("users", "list/tokens", &Query::new().text("genesis", genesis))
    }

    pub fn users_list_accounts_by_genesis(&self) -> ApiResult<JsonValue> {
        let genesis = self.require_genesis("users_list_accounts_by_genesis")?;
        self.fetch("users", "list/accounts", &Query::new().text("genesis", genesis))
    }

    fn page_query(key: &str, value: &str, page: u32, limit: u32) -> Query {
        Query::new().text(key, value).number("page", page).number("limit", limit)
    }
}
