//! Offer model: products, pricing plans, taxes and shipping.

use serde_json::{Map, Value, json};

use super::{ModelError, Product, RequestModel, lenient_bool, lenient_f64, lenient_i64};

/// Billing units accepted for subscriptions, payment plans and trials.
pub const DAY: &str = "day";
pub const WEEK: &str = "week";
pub const MONTH: &str = "month";
pub const QUARTER: &str = "quarter";
pub const YEAR: &str = "year";

/// Invoice template id that suppresses invoices entirely.
pub const SUPPRESS_INVOICE: i64 = -1;

/// Default invoice template id.
pub const DEFAULT_INVOICE_TEMPLATE: i64 = 1;

/// One recurring price: amount, number of payments and billing unit.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTerm {
    /// Price per billing unit.
    pub price: f64,
    /// Number of payments (1 for open-ended subscriptions).
    pub payment_count: i64,
    /// Billing unit, one of [`DAY`], [`WEEK`], [`MONTH`], [`QUARTER`],
    /// [`YEAR`].
    pub unit: String,
}

impl PriceTerm {
    fn as_json(&self) -> Value {
        json!({
            "price": self.price,
            "payment_count": self.payment_count,
            "unit": self.unit,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PricePlan {
    Subscription(PriceTerm),
    PaymentPlan(PriceTerm),
}

#[derive(Debug, Clone, PartialEq)]
struct OfferProduct {
    id: i64,
    name: String,
    quantity: i64,
    price: Option<f64>,
    shipping: bool,
    tax: bool,
    plan: Option<PricePlan>,
    trial: Option<PriceTerm>,
}

#[derive(Debug, Clone, PartialEq)]
struct Tax {
    id: i64,
    rate: f64,
    name: String,
    tax_shipping: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Shipping {
    id: i64,
    price: f64,
    name: String,
}

/// Builder for offer payloads.
///
/// An offer bundles products with their pricing (one-off, subscription
/// or payment plan, optionally with a trial), taxes and shipping. It
/// serializes to `{name, public, id?, data}` where `data` is a
/// JSON-encoded string, which is what the Offers endpoints expect.
///
/// # Example
///
/// ```
/// use ontraport::models::{Offer, Product, RequestModel};
///
/// # fn main() -> Result<(), ontraport::models::ModelError> {
/// let widget = Product::new("Widget", 9.99).with_id(4);
/// let mut offer = Offer::new("Starter bundle");
/// offer.add_product(&widget, 2, false, true)?;
/// let params = offer.to_request_params()?;
/// assert_eq!(params["name"], "Starter bundle");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    name: String,
    id: Option<i64>,
    products: Vec<OfferProduct>,
    taxes: Vec<Tax>,
    shipping: Option<Shipping>,
    invoice_template: i64,
    shipping_charge_recurring_orders: bool,
}

impl Offer {
    /// Creates an empty offer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            products: Vec::new(),
            taxes: Vec::new(),
            shipping: None,
            invoice_template: DEFAULT_INVOICE_TEMPLATE,
            shipping_charge_recurring_orders: false,
        }
    }

    /// Sets the id of an already stored offer.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The offer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored offer id, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// The configured invoice template id.
    #[must_use]
    pub const fn invoice_template(&self) -> i64 {
        self.invoice_template
    }

    /// Whether the offer has any products yet.
    #[must_use]
    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    /// Renames the offer.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Selects the invoice template; [`SUPPRESS_INVOICE`] disables
    /// invoices.
    pub const fn set_invoice_template(&mut self, template_id: i64) {
        self.invoice_template = template_id;
    }

    /// Charges shipping on every recurring order rather than the first.
    pub const fn charge_shipping_for_recurring_orders(&mut self, charge: bool) {
        self.shipping_charge_recurring_orders = charge;
    }

    /// Adds a saved product to the offer.
    ///
    /// Re-adding a product id replaces the previous entry, pricing plan
    /// included.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::MissingProductId`] for unsaved products.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: i64,
        shipping: bool,
        taxable: bool,
    ) -> Result<(), ModelError> {
        let id = product.id().ok_or(ModelError::MissingProductId)?;
        let entry = OfferProduct {
            id,
            name: product.name().to_string(),
            quantity,
            price: Some(product.price()),
            shipping,
            tax: taxable,
            plan: None,
            trial: None,
        };
        if let Ok(existing) = self.product_mut(id) {
            *existing = entry;
        } else {
            self.products.push(entry);
        }
        Ok(())
    }

    /// Removes a product and any plan or trial attached to it.
    pub fn delete_product(&mut self, product_id: i64) {
        self.products.retain(|product| product.id != product_id);
    }

    /// Adds a trial period to a product.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::UnknownProduct`] when the product is not
    /// part of this offer.
    pub fn add_trial(
        &mut self,
        product_id: i64,
        price: f64,
        payment_count: i64,
        unit: &str,
    ) -> Result<(), ModelError> {
        let product = self.product_mut(product_id)?;
        product.trial = Some(PriceTerm {
            price,
            payment_count,
            unit: unit.to_string(),
        });
        Ok(())
    }

    /// Removes a product's trial.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::UnknownProduct`] when the product is not
    /// part of this offer.
    pub fn delete_trial(&mut self, product_id: i64) -> Result<(), ModelError> {
        self.product_mut(product_id)?.trial = None;
        Ok(())
    }

    /// Makes a product bill as an open-ended subscription.
    ///
    /// Without an explicit `price` the product's own price is used.
    ///
    /// # Errors
    ///
    /// Fails when the product is unknown, already carries a payment
    /// plan, or has no usable price.
    pub fn add_subscription(
        &mut self,
        product_id: i64,
        unit: &str,
        price: Option<f64>,
    ) -> Result<(), ModelError> {
        let product = self.product_mut(product_id)?;
        if matches!(product.plan, Some(PricePlan::PaymentPlan(_))) {
            return Err(ModelError::ConflictingPricePlan);
        }
        let price = price.or(product.price).ok_or(ModelError::MissingPrice)?;
        product.plan = Some(PricePlan::Subscription(PriceTerm {
            price,
            payment_count: 1,
            unit: unit.to_string(),
        }));
        Ok(())
    }

    /// Removes a product's subscription.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::UnknownProduct`] when the product is not
    /// part of this offer.
    pub fn delete_subscription(&mut self, product_id: i64) -> Result<(), ModelError> {
        let product = self.product_mut(product_id)?;
        if matches!(product.plan, Some(PricePlan::Subscription(_))) {
            product.plan = None;
        }
        Ok(())
    }

    /// Makes a product bill as a fixed-length payment plan.
    ///
    /// # Errors
    ///
    /// Fails when the product is unknown or already carries a
    /// subscription.
    pub fn add_payment_plan(
        &mut self,
        product_id: i64,
        price: f64,
        payment_count: i64,
        unit: &str,
    ) -> Result<(), ModelError> {
        let product = self.product_mut(product_id)?;
        if matches!(product.plan, Some(PricePlan::Subscription(_))) {
            return Err(ModelError::ConflictingPricePlan);
        }
        product.plan = Some(PricePlan::PaymentPlan(PriceTerm {
            price,
            payment_count,
            unit: unit.to_string(),
        }));
        Ok(())
    }

    /// Removes a product's payment plan.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::UnknownProduct`] when the product is not
    /// part of this offer.
    pub fn delete_payment_plan(&mut self, product_id: i64) -> Result<(), ModelError> {
        let product = self.product_mut(product_id)?;
        if matches!(product.plan, Some(PricePlan::PaymentPlan(_))) {
            product.plan = None;
        }
        Ok(())
    }

    /// Adds a tax line to the offer.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::ZeroTaxId`] for the reserved id 0.
    pub fn add_tax(
        &mut self,
        tax_id: i64,
        rate: f64,
        tax_shipping: bool,
        name: Option<&str>,
    ) -> Result<(), ModelError> {
        if tax_id == 0 {
            return Err(ModelError::ZeroTaxId);
        }
        self.taxes.push(Tax {
            id: tax_id,
            rate,
            name: name.unwrap_or("Tax").to_string(),
            tax_shipping,
        });
        Ok(())
    }

    /// Removes every tax line with the given id.
    pub fn delete_tax(&mut self, tax_id: i64) {
        self.taxes.retain(|tax| tax.id != tax_id);
    }

    /// Sets the offer's shipping selection, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Fails with [`ModelError::ZeroShippingId`] for the reserved id 0.
    pub fn set_shipping(
        &mut self,
        shipping_id: i64,
        price: f64,
        name: Option<&str>,
    ) -> Result<(), ModelError> {
        if shipping_id == 0 {
            return Err(ModelError::ZeroShippingId);
        }
        self.shipping = Some(Shipping {
            id: shipping_id,
            price,
            name: name.unwrap_or("Shipping").to_string(),
        });
        Ok(())
    }

    /// Clears the shipping selection.
    pub fn unset_shipping(&mut self) {
        self.shipping = None;
    }

    /// The offer's `data` payload as a JSON object.
    ///
    /// Transactions embed this object directly; the Offers endpoints
    /// take it JSON-encoded into a string (see
    /// [`to_request_params`](RequestModel::to_request_params)).
    pub(crate) fn data_value(&self) -> Result<Value, ModelError> {
        if self.products.is_empty() {
            return Err(ModelError::MissingProducts);
        }

        let products: Vec<Value> = self.products.iter().map(product_json).collect();

        let mut data = Map::new();
        data.insert("products".to_string(), Value::Array(products));
        if let Some(shipping) = &self.shipping {
            data.insert(
                "shipping".to_string(),
                json!({"id": shipping.id, "name": shipping.name, "price": shipping.price}),
            );
            data.insert("hasShipping".to_string(), json!(true));
        }
        if !self.taxes.is_empty() {
            let taxes: Vec<Value> = self
                .taxes
                .iter()
                .map(|tax| {
                    json!({
                        "id": tax.id,
                        "rate": tax.rate,
                        "name": tax.name,
                        "taxShipping": tax.tax_shipping,
                    })
                })
                .collect();
            data.insert("taxes".to_string(), Value::Array(taxes));
            data.insert("hasTaxes".to_string(), json!(true));
        }
        data.insert("invoice_template".to_string(), json!(self.invoice_template));
        data.insert(
            "shipping_charge_reoccurring_orders".to_string(),
            json!(self.shipping_charge_recurring_orders),
        );
        data.insert("name".to_string(), json!(self.name));
        Ok(Value::Object(data))
    }

    fn product_mut(&mut self, product_id: i64) -> Result<&mut OfferProduct, ModelError> {
        self.products
            .iter_mut()
            .find(|product| product.id == product_id)
            .ok_or(ModelError::UnknownProduct(product_id))
    }
}

fn product_json(product: &OfferProduct) -> Value {
    let mut entry = Map::new();
    entry.insert("id".to_string(), json!(product.id));
    entry.insert("name".to_string(), json!(product.name));
    entry.insert("quantity".to_string(), json!(product.quantity));
    entry.insert("shipping".to_string(), json!(product.shipping));
    entry.insert("tax".to_string(), json!(product.tax));

    let (kind, price) = match &product.plan {
        Some(PricePlan::Subscription(term)) => ("subscription", Some(term.as_json())),
        Some(PricePlan::PaymentPlan(term)) => ("payment_plan", Some(term.as_json())),
        None => (
            "single",
            product.price.map(|price| json!({ "price": price })),
        ),
    };
    entry.insert("type".to_string(), json!(kind));
    if let Some(price) = price {
        entry.insert("price".to_string(), json!([price]));
    }
    if let Some(trial) = &product.trial {
        entry.insert("trial".to_string(), trial.as_json());
    }
    Value::Object(entry)
}

impl RequestModel for Offer {
    fn from_response(data: &Value) -> Result<Self, ModelError> {
        let name = data
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ModelError::InvalidResponse("name"))?;
        let mut offer = Self::new(name);
        if let Some(id) = lenient_i64(data.get("id")) {
            offer = offer.with_id(id);
        }

        let raw = data
            .get("data")
            .and_then(Value::as_str)
            .ok_or(ModelError::InvalidResponse("data"))?;
        let decoded: Value =
            serde_json::from_str(raw).map_err(|_| ModelError::InvalidResponse("data"))?;

        if let Some(template) = lenient_i64(decoded.get("invoice_template")) {
            offer.set_invoice_template(template);
        }
        offer.charge_shipping_for_recurring_orders(lenient_bool(
            decoded.get("shipping_charge_reoccurring_orders"),
        ));

        if let Some(taxes) = decoded.get("taxes").and_then(Value::as_array) {
            for tax in taxes {
                let id =
                    lenient_i64(tax.get("id")).ok_or(ModelError::InvalidResponse("taxes"))?;
                let rate = lenient_f64(tax.get("rate")).unwrap_or(0.0);
                let tax_shipping = lenient_bool(
                    tax.get("taxShipping").or_else(|| tax.get("tax_shipping")),
                );
                offer.add_tax(id, rate, tax_shipping, tax.get("name").and_then(Value::as_str))?;
            }
        }

        if let Some(shipping) = decoded.get("shipping").filter(|s| s.is_object()) {
            let id = lenient_i64(shipping.get("id"))
                .ok_or(ModelError::InvalidResponse("shipping"))?;
            let price = lenient_f64(shipping.get("price")).unwrap_or(0.0);
            offer.set_shipping(id, price, shipping.get("name").and_then(Value::as_str))?;
        }

        let products = decoded
            .get("products")
            .and_then(Value::as_array)
            .ok_or(ModelError::InvalidResponse("products"))?;
        for product in products {
            offer.load_response_product(product)?;
        }
        Ok(offer)
    }

    fn to_request_params(&self) -> Result<Value, ModelError> {
        let data = self.data_value()?;
        let mut params = Map::new();
        params.insert("name".to_string(), json!(self.name));
        params.insert("public".to_string(), json!(1));
        if let Some(id) = self.id {
            params.insert("id".to_string(), json!(id));
        }
        params.insert("data".to_string(), json!(data.to_string()));
        Ok(Value::Object(params))
    }
}

impl Offer {
    fn load_response_product(&mut self, product: &Value) -> Result<(), ModelError> {
        let id = lenient_i64(product.get("id")).ok_or(ModelError::InvalidResponse("products"))?;
        let name = product
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let quantity = lenient_i64(product.get("quantity")).unwrap_or(1);
        let shipping = lenient_bool(product.get("shipping"));
        let tax = lenient_bool(product.get("tax"));

        let price_entry = product.get("price").and_then(Value::as_array).and_then(|p| p.first());
        let price = lenient_f64(price_entry.and_then(|entry| entry.get("price")));

        let saved = Product::new(name, price.unwrap_or(0.0)).with_id(id);
        self.add_product(&saved, quantity, shipping, tax)?;

        match product.get("type").and_then(Value::as_str) {
            Some("subscription") => {
                let unit = price_entry
                    .and_then(|entry| entry.get("unit"))
                    .and_then(Value::as_str)
                    .unwrap_or(MONTH);
                self.add_subscription(id, unit, price)?;
            }
            Some("payment_plan") => {
                let entry = price_entry.ok_or(ModelError::InvalidResponse("products"))?;
                let unit = entry.get("unit").and_then(Value::as_str).unwrap_or(MONTH);
                let payment_count = lenient_i64(entry.get("payment_count")).unwrap_or(1);
                self.add_payment_plan(id, price.unwrap_or(0.0), payment_count, unit)?;
            }
            _ => {}
        }

        if let Some(trial) = product.get("trial").filter(|t| t.is_object()) {
            self.add_trial(
                id,
                lenient_f64(trial.get("price")).unwrap_or(0.0),
                lenient_i64(trial.get("payment_count")).unwrap_or(1),
                trial.get("unit").and_then(Value::as_str).unwrap_or(MONTH),
            )?;
        }
        Ok(())
    }
}
