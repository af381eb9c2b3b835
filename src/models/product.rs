//! Product model.

use serde_json::{Value, json};

use super::{ModelError, RequestModel, lenient_f64, lenient_i64};

/// A product, as sold on its own or inside an offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    id: Option<i64>,
}

impl Product {
    /// Creates a product that has not been saved yet.
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            id: None,
        }
    }

    /// Sets the id of an already saved product.
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// The product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product price.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// The saved product id, if any.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    /// Renames the product.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Reprices the product.
    pub const fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl RequestModel for Product {
    fn from_response(data: &Value) -> Result<Self, ModelError> {
        let name = data
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ModelError::InvalidResponse("name"))?;
        let price =
            lenient_f64(data.get("price")).ok_or(ModelError::InvalidResponse("price"))?;
        let mut product = Self::new(name, price);
        if let Some(id) = lenient_i64(data.get("id")) {
            product = product.with_id(id);
        }
        Ok(product)
    }

    fn to_request_params(&self) -> Result<Value, ModelError> {
        let mut params = json!({
            "name": self.name,
            "price": self.price,
        });
        if let Some(id) = self.id {
            params["id"] = json!(id);
        }
        Ok(params)
    }
}
