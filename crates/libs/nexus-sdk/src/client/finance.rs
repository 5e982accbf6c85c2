use super::*;
use crate::domain::{AccountRecord, TxReceipt};

impl<T: Transport> NexusClient<T> {
    pub fn finance_create_account(&self, name: &str) -> ApiResult<TxReceipt> {
        let query = self.signed_query("finance_create_account")?.text("name", name);
        self.request("finance", "create/account", query)
    }

    pub fn finance_get_account_by_name(&self, name: &str) -> ApiResult<AccountRecord> {
        self.request("finance", "get/account", Query::new().text("name", name))
    }

    pub fn finance_get_account_by_address(&self, address: &str) -> ApiResult<AccountRecord> {
        self.request("finance", "get/account", Query::new().text("address", address))
    }

    pub fn finance_debit_account_by_name(
        &self,
        name_from: &str,
        name_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("finance_debit_account_by_name")?
            .number("amount", amount)
            .text("name_from", name_from)
            .text("name_to", name_to);
        self.request("finance", "debit/account", query)
    }

    pub fn finance_debit_account_by_address(
        &self,
        address_from: &str,
        address_to: &str,
        amount: f64,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("finance_debit_account_by_address")?
            .number("amount", amount)
            .text("address_from", address_from)
            .text("address_to", address_to);
        self.request("finance", "debit/account", query)
    }

    pub fn finance_credit_account_by_name(
        &self,
        name_to: &str,
        amount: f64,
        txid: &str,
        name_proof: Option<&str>,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("finance_credit_account_by_name")?
            .text("txid", txid)
            .number("amount", amount)
            .text("name_to", name_to)
            .optional_text("name_proof", name_proof);
        self.request("finance", "credit/account", query)
    }

    pub fn finance_credit_account_by_address(
        &self,
        address_to: &str,
        amount: f64,
        txid: &str,
        address_proof: Option<&str>,
    ) -> ApiResult<TxReceipt> {
        let query = self
            .signed_query("finance_credit_account_by_address")?
            .text("txid", txid)
            .number("amount", amount)
            .text("address_to", address_to)
            .optional_text("address_proof", address_proof);
        self.request("finance", "credit/account", query)
    }

    /// Accounts owned by the logged in user. Only the session is sent.
    pub fn finance_list_accounts(&self) -> ApiResult<Vec<AccountRecord>> {
        let session = self.require_session("finance_list_accounts")?;
        self.request("finance", "list/accounts", Query::new().text("session", session))
    }
}
