//! Tests for the manual transaction model.

use super::transaction::{BillingAddress, CardPayer, ChargeType, Payer, Transaction};
use super::{ModelError, Offer, Product};
use serde_json::json;

fn paid_offer() -> Offer {
    let product = Product::new("Widget", 9.99).with_id(4);
    let mut offer = Offer::new("One widget");
    offer.add_product(&product, 1, false, false).unwrap();
    offer.set_invoice_template(3);
    offer
}

fn logged_transaction() -> Transaction {
    let mut transaction = Transaction::new(7, ChargeType::Log, None).unwrap();
    transaction.load_offer(paid_offer()).unwrap();
    transaction
}

#[test]
fn charging_now_requires_a_gateway() {
    let err = Transaction::new(7, ChargeType::ChargeNow, None).unwrap_err();
    assert!(matches!(err, ModelError::MissingGateway));

    assert!(Transaction::new(7, ChargeType::ChargeNow, Some(2)).is_ok());
    assert!(Transaction::new(7, ChargeType::Log, None).is_ok());
}

#[test]
fn loading_an_offer_requires_products_and_adopts_its_template() {
    let mut transaction = Transaction::new(7, ChargeType::Log, None).unwrap();

    let err = transaction.load_offer(Offer::new("empty")).unwrap_err();
    assert!(matches!(err, ModelError::MissingProducts));

    transaction.load_offer(paid_offer()).unwrap();
    let params = transaction.to_request_params().unwrap();
    assert_eq!(params["invoice_template"], 3);
}

#[test]
fn serialization_requires_a_loaded_offer() {
    let transaction = Transaction::new(7, ChargeType::Log, None).unwrap();
    assert!(matches!(
        transaction.to_request_params().unwrap_err(),
        ModelError::MissingOffer
    ));
}

#[test]
fn the_embedded_offer_is_trimmed_for_the_transaction() {
    let mut transaction = logged_transaction();
    transaction.send_recurring_invoice(true);

    let params = transaction.to_request_params().unwrap();
    let offer = &params["offer"];

    assert!(offer.get("name").is_none());
    assert!(offer.get("invoice_template").is_none());
    assert_eq!(offer["send_recurring_invoice"], true);
    assert_eq!(offer["products"][0]["id"], 4);
}

#[test]
fn basic_fields_serialize_with_the_charge_type_string() {
    let params = logged_transaction().to_request_params().unwrap();

    assert_eq!(params["contact_id"], 7);
    assert_eq!(params["chargeNow"], "chargeLog");
    assert_eq!(params["gateway_id"], json!(null));
    assert!(params.get("cc_id").is_none());
    assert!(params.get("payer").is_none());
    assert!(params.get("billing_address").is_none());
}

#[test]
fn a_saved_card_becomes_cc_id() {
    let mut transaction = logged_transaction();
    transaction.set_payer(Payer::SavedCard(12));

    let params = transaction.to_request_params().unwrap();
    assert_eq!(params["cc_id"], 12);
    assert!(params.get("payer").is_none());
}

#[test]
fn card_details_become_the_payer_object() {
    let mut transaction = logged_transaction();
    transaction.set_payer(Payer::Card(CardPayer {
        ccnumber: "4111111111111111".to_string(),
        code: None,
        expire_month: 9,
        expire_year: 2030,
    }));

    let params = transaction.to_request_params().unwrap();
    assert_eq!(
        params["payer"],
        json!({
            "ccnumber": "4111111111111111",
            "expire_month": 9,
            "expire_year": 2030,
        })
    );
    assert!(params.get("cc_id").is_none());
}

#[test]
fn the_billing_address_serializes_without_an_empty_address2() {
    let mut transaction = logged_transaction();
    transaction.set_billing_address(BillingAddress {
        address: "1 Main St".to_string(),
        address2: None,
        city: "Reno".to_string(),
        state: "NV".to_string(),
        zip: "89501".to_string(),
        country: "US".to_string(),
    });

    let params = transaction.to_request_params().unwrap();
    assert_eq!(params["billing_address"]["city"], "Reno");
    assert!(params["billing_address"].get("address2").is_none());
}
