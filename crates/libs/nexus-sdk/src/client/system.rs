use super::*;

impl<T: Transport> NexusClient<T> {
    pub fn system_get_info(&self) -> ApiResult<JsonValue> {
        self.fetch("system", "get/info", &Query::new())
    }

    pub fn system_list_peers(&self) -> ApiResult<JsonValue> {
        self.fetch("system", "list/peers", &Query::new())
    }

    pub fn system_list_lisp_eids(&self) -> ApiResult<JsonValue> {
        self.fetch("system", "list/lisp-eids", &Query::new())
    }
}
