//! Manual transaction model for the `transaction/processManual`
//! endpoint.

use serde_json::{Map, Value, json};

use super::{ModelError, Offer};

/// Whether the transaction is charged immediately or only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeType {
    /// Charge the payer now through a gateway.
    ChargeNow,
    /// Record the transaction without charging.
    Log,
}

impl ChargeType {
    /// The wire value of the `chargeNow` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChargeNow => "chargeNow",
            Self::Log => "chargeLog",
        }
    }
}

/// Card details for a payer without a saved card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayer {
    /// Card number.
    pub ccnumber: String,
    /// Verification code, where the gateway wants one.
    pub code: Option<String>,
    /// Expiry month (1–12).
    pub expire_month: u32,
    /// Four-digit expiry year.
    pub expire_year: u32,
}

/// Who pays: a saved card on file or fresh card details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payer {
    /// Id of a card already stored on the contact.
    SavedCard(i64),
    /// Full card details.
    Card(CardPayer),
}

/// Billing address for gateways that require one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingAddress {
    pub address: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// Builder for manual transaction payloads.
///
/// # Example
///
/// ```
/// use ontraport::models::{ChargeType, Offer, Product, Transaction};
///
/// # fn main() -> Result<(), ontraport::models::ModelError> {
/// let widget = Product::new("Widget", 9.99).with_id(4);
/// let mut offer = Offer::new("One widget");
/// offer.add_product(&widget, 1, false, false)?;
///
/// let mut transaction = Transaction::new(7, ChargeType::Log, None)?;
/// transaction.load_offer(offer)?;
/// let params = transaction.to_request_params()?;
/// assert_eq!(params["chargeNow"], "chargeLog");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    contact_id: i64,
    charge_type: ChargeType,
    gateway_id: Option<i64>,
    invoice_template: i64,
    recurring_invoice: bool,
    payer: Option<Payer>,
    billing_address: Option<BillingAddress>,
    offer: Option<Offer>,
}

impl Transaction {
    /// Creates a transaction for a contact.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::MissingGateway`] when charging now
    /// without a gateway id.
    pub const fn new(
        contact_id: i64,
        charge_type: ChargeType,
        gateway_id: Option<i64>,
    ) -> Result<Self, ModelError> {
        if matches!(charge_type, ChargeType::ChargeNow) && gateway_id.is_none() {
            return Err(ModelError::MissingGateway);
        }
        Ok(Self {
            contact_id,
            charge_type,
            gateway_id,
            invoice_template: super::offer::DEFAULT_INVOICE_TEMPLATE,
            recurring_invoice: false,
            payer: None,
            billing_address: None,
            offer: None,
        })
    }

    /// Loads the offer to charge and adopts its invoice template.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::MissingProducts`] when the offer has no
    /// products.
    pub fn load_offer(&mut self, offer: Offer) -> Result<(), ModelError> {
        if !offer.has_products() {
            return Err(ModelError::MissingProducts);
        }
        self.invoice_template = offer.invoice_template();
        self.offer = Some(offer);
        Ok(())
    }

    /// Sets the payer. A saved card clears previously set card details
    /// and vice versa.
    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = Some(payer);
    }

    /// Sets the billing address.
    pub fn set_billing_address(&mut self, address: BillingAddress) {
        self.billing_address = Some(address);
    }

    /// Selects the invoice template;
    /// [`SUPPRESS_INVOICE`](super::SUPPRESS_INVOICE) disables invoices.
    pub const fn set_invoice_template(&mut self, template_id: i64) {
        self.invoice_template = template_id;
    }

    /// Sends an invoice for every recurring payment of this
    /// transaction.
    pub const fn send_recurring_invoice(&mut self, recurring: bool) {
        self.recurring_invoice = recurring;
    }

    /// Converts the transaction to parameters for
    /// [`process_manual`](crate::resources::Transactions::process_manual).
    ///
    /// The embedded offer data is stripped of fields that only matter
    /// to stored offers (`name`, `invoice_template`) and gains the
    /// recurring-invoice flag.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::MissingOffer`] before an offer is
    /// loaded, or with the offer's own serialization errors.
    pub fn to_request_params(&self) -> Result<Value, ModelError> {
        let offer = self.offer.as_ref().ok_or(ModelError::MissingOffer)?;
        let mut offer_data = match offer.data_value()? {
            Value::Object(map) => map,
            _ => return Err(ModelError::MissingProducts),
        };
        offer_data.remove("name");
        offer_data.remove("invoice_template");
        offer_data.insert(
            "send_recurring_invoice".to_string(),
            json!(self.recurring_invoice),
        );

        let mut params = Map::new();
        params.insert("contact_id".to_string(), json!(self.contact_id));
        params.insert("chargeNow".to_string(), json!(self.charge_type.as_str()));
        params.insert("invoice_template".to_string(), json!(self.invoice_template));
        params.insert("gateway_id".to_string(), json!(self.gateway_id));

        match &self.payer {
            Some(Payer::SavedCard(cc_id)) => {
                params.insert("cc_id".to_string(), json!(cc_id));
            }
            Some(Payer::Card(card)) => {
                let mut payer = Map::new();
                payer.insert("ccnumber".to_string(), json!(card.ccnumber));
                if let Some(code) = &card.code {
                    payer.insert("code".to_string(), json!(code));
                }
                payer.insert("expire_month".to_string(), json!(card.expire_month));
                payer.insert("expire_year".to_string(), json!(card.expire_year));
                params.insert("payer".to_string(), Value::Object(payer));
            }
            None => {}
        }

        params.insert("offer".to_string(), Value::Object(offer_data));

        if let Some(address) = &self.billing_address {
            let mut billing = Map::new();
            billing.insert("address".to_string(), json!(address.address));
            if let Some(address2) = &address.address2 {
                billing.insert("address2".to_string(), json!(address2));
            }
            billing.insert("city".to_string(), json!(address.city));
            billing.insert("state".to_string(), json!(address.state));
            billing.insert("zip".to_string(), json!(address.zip));
            billing.insert("country".to_string(), json!(address.country));
            params.insert("billing_address".to_string(), Value::Object(billing));
        }

        Ok(Value::Object(params))
    }
}
