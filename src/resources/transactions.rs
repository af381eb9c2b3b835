//! Transaction records and order management.

use http::Method;
use serde_json::Value;

use crate::client::Client;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{ApiError, ContentType, HttpClient, ReqwestClient, RequestDescriptor};

use super::ObjectApi;

/// Transaction-specific endpoints live under the lowercase singular
/// path.
const TRANSACTION_ENDPOINT: &str = "transaction";

const CONVERT_COLLECTIONS: &str = "convertToCollections";
const CONVERT_DECLINE: &str = "convertToDecline";
const MARK_PAID: &str = "markPaid";
const ORDER: &str = "order";
const PROCESS_MANUAL: &str = "processManual";
const REFUND: &str = "refund";
const RERUN: &str = "rerun";
const RERUN_COMMISSION: &str = "rerunCommission";
const RESEND_INVOICE: &str = "resendInvoice";
const VOID: &str = "void";
const WRITE_OFF: &str = "writeOff";

/// API wrapper for transaction objects.
///
/// Manual transactions are charged or logged via
/// [`process_manual`](Self::process_manual) with a payload built by
/// [`Transaction`](crate::models::Transaction); the remaining calls act
/// on stored transactions selected by id or criteria.
#[derive(Debug)]
pub struct Transactions<'a, H = ReqwestClient, S = TokioSleeper> {
    api: ObjectApi<'a, H, S>,
}

impl<'a, H, S> Transactions<'a, H, S> {
    pub(crate) const fn new(client: &'a Client<H, S>) -> Self {
        Self {
            api: ObjectApi::new(client, "Transaction", "Transactions"),
        }
    }
}

impl<H: HttpClient, S: Sleeper> Transactions<'_, H, S> {
    /// Retrieves a single transaction. Requires `id`.
    pub async fn retrieve_single(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_single(params).await
    }

    /// Retrieves transactions matching the given criteria.
    pub async fn retrieve_multiple(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple(params).await
    }

    /// Retrieves matching transactions page by page.
    pub async fn retrieve_multiple_paginated(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_multiple_paginated(params).await
    }

    /// Retrieves collection info for the given criteria.
    pub async fn retrieve_collection_info(&self, params: Value) -> Result<String, ApiError> {
        self.api.retrieve_collection_info(params).await
    }

    /// Retrieves the transaction object's meta.
    pub async fn retrieve_meta(&self) -> Result<String, ApiError> {
        self.api.retrieve_meta().await
    }

    /// Converts one or more transactions to collections. Requires `id`.
    pub async fn convert_to_collections(&self, params: Value) -> Result<String, ApiError> {
        self.form_call(Method::PUT, CONVERT_COLLECTIONS, params, &["id"]).await
    }

    /// Converts one or more transactions to declined. Requires `id`.
    pub async fn convert_to_declined(&self, params: Value) -> Result<String, ApiError> {
        self.form_call(Method::PUT, CONVERT_DECLINE, params, &["id"]).await
    }

    /// Marks a transaction as paid. Requires `id`.
    pub async fn mark_as_paid(&self, params: Value) -> Result<String, ApiError> {
        self.form_call(Method::PUT, MARK_PAID, params, &["id"]).await
    }

    /// Retrieves information about an order. Requires `id`.
    pub async fn retrieve_order(&self, params: Value) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(Method::GET, format!("{TRANSACTION_ENDPOINT}/{ORDER}"))
                .with_params(params)
                .with_required(&["id"]);
        self.api.client().request(&descriptor).await
    }

    /// Updates order information. Requires `offer`.
    pub async fn update_order(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::PUT, ORDER, params, &["offer"]).await
    }

    /// Charges or logs a manual transaction for a contact. Requires
    /// `contact_id`, `chargeNow` and `offer`.
    pub async fn process_manual(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(
            Method::POST,
            PROCESS_MANUAL,
            params,
            &["contact_id", "chargeNow", "offer"],
        )
        .await
    }

    /// Refunds one or more transactions. Requires `objectID`.
    pub async fn refund(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::PUT, REFUND, params, &["objectID"]).await
    }

    /// Reruns one or more transactions. Requires `objectID`.
    pub async fn rerun(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::POST, RERUN, params, &["objectID"]).await
    }

    /// Reruns a partner commission. Requires `objectID`.
    pub async fn rerun_commission(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::PUT, RERUN_COMMISSION, params, &["objectID"])
            .await
    }

    /// Resends a transaction invoice. Requires `objectID`.
    pub async fn resend_invoice(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::POST, RESEND_INVOICE, params, &["objectID"])
            .await
    }

    /// Voids one or more transactions. Requires `objectID`.
    pub async fn void(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::PUT, VOID, params, &["objectID"]).await
    }

    /// Writes off one or more transactions. Requires `objectID`.
    pub async fn write_off(&self, params: Value) -> Result<String, ApiError> {
        self.json_call(Method::PUT, WRITE_OFF, params, &["objectID"]).await
    }

    async fn form_call(
        &self,
        method: Method,
        operation: &str,
        params: Value,
        required: &'static [&'static str],
    ) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(method, format!("{TRANSACTION_ENDPOINT}/{operation}"))
                .with_params(params)
                .with_required(required)
                .with_content_type(ContentType::Form);
        self.api.client().request(&descriptor).await
    }

    async fn json_call(
        &self,
        method: Method,
        operation: &str,
        params: Value,
        required: &'static [&'static str],
    ) -> Result<String, ApiError> {
        let descriptor =
            RequestDescriptor::new(method, format!("{TRANSACTION_ENDPOINT}/{operation}"))
                .with_params(params)
                .with_required(required)
                .with_content_type(ContentType::Json);
        self.api.client().request(&descriptor).await
    }
}
