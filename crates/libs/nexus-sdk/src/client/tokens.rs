use super::*;
use crate::domain::{AccountRecord, TokenRecord, TxReceipt};

impl<T: Transport> NexusClient<T> {
    /// Mints a token with a fixed `supply`. `digits` sets the decimal places
    /// and is left to the node's default when `None`.
    pub fn tokens_create_token(
        &self,
        name: &str,
        supply: u64,
        digits: Option<u8>,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_create_token")?
            .text("name", name)
            .number("supply", supply)
            .optional_number("digits", digits);
        self.request("tokens", "create/token", query)
    }

    /// Opens an account named `name` that holds units of `token_name`.
    pub fn tokens_create_account(&self, name: &str, token_name: &str) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_create_account")?
            .text("name", name)
            .text("token_name", token_name);
        self.request("tokens", "create/account", query)
    }

    pub fn tokens_get_token_by_name(&self, name: &str) -> ApiResult<TokenRecord> {
        self.request("tokens", "get/token", Query::new().text("name", name))
    }

    pub fn tokens_get_token_by_address(&self, address: &str) -> ApiResult<TokenRecord> {
        self.request("tokens", "get/token", Query::new().text("address", address))
    }

    pub fn tokens_get_account_by_name(&self, name: &str) -> ApiResult<AccountRecord> {
        self.request("tokens", "get/account", Query::new().text("name", name))
    }

    pub fn tokens_get_account_by_address(&self, address: &str) -> ApiResult<AccountRecord> {
        self.request("tokens", "get/account", Query::new().text("address", address))
    }

    pub fn tokens_debit_token_by_name(
        &self,
        name: &str,
        name_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_debit_token_by_name")?
            .text("name", name)
            .text("name_to", name_to)
            .number("amount", amount);
        self.request("tokens", "debit/token", query)
    }

    pub fn tokens_debit_token_by_address(
        &self,
        address: &str,
        address_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_debit_token_by_address")?
            .text("address", address)
            .text("address_to", address_to)
            .number("amount", amount);
        self.request("tokens", "debit/token", query)
    }

    pub fn tokens_credit_token_by_name(
        &self,
        name: &str,
        amount: f64,
        txid: &str,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_credit_token_by_name")?
            .text("name", name)
            .number("amount", amount)
            .text("txid", txid);
        self.request("tokens", "credit/token", query)
    }

    pub fn tokens_debit_account_by_name(
        &self,
        name: &str,
        name_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_debit_account_by_name")?
            .number("amount", amount)
            .text("name", name)
            .text("name_to", name_to);
        self.request("tokens", "debit/account", query)
    }

    pub fn tokens_debit_account_by_address(
        &self,
        address: &str,
        address_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_debit_account_by_address")?
            .number("amount", amount)
            .text("address", address)
            .text("address_to", address_to);
        self.request("tokens", "debit/account", query)
    }

    /// Claims the value of debit `txid` into account `name`. `name_proof`
    /// names the account that proves ownership when the debit came from a
    /// token rather than another account.
    pub fn tokens_credit_account_by_name(
        &self,
        name: &str,
        amount: f64,
        txid: &str,
        name_proof: Option<&str>,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_credit_account_by_name")?
            .text("txid", txid)
            .number("amount", amount)
            .text("name", name)
            .optional_text("name_proof", name_proof);
        self.request("tokens", "credit/account", query)
    }

    pub fn tokens_credit_account_by_address(
        &self,
        address: &str,
        amount: f64,
        txid: &str,
        address_proof: Option<&str>,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("tokens_credit_account_by_address")?
            .text("txid", txid)
            .number("amount", amount)
            .text("address", address)
            .optional_text("address_proof", address_proof);
        self.request("tokens", "credit/account", query)
    }
}
