//! Per-resource API wrappers.
//!
//! Each wrapper is a thin pass-through: it assembles a parameter map,
//! picks a verb and endpoint, and forwards to the transport via the
//! shared [`ObjectApi`](base) engine. Response bodies are returned as
//! raw JSON text for the caller to interpret.

mod base;

mod campaign_builder_items;
mod contacts;
mod credit_cards;
mod custom_objects;
mod forms;
mod groups;
mod landing_pages;
mod messages;
mod objects;
mod offers;
mod products;
mod purchase_logs;
mod purchases;
mod rules;
mod tags;
mod tasks;
mod transactions;
mod webhooks;


pub(crate) use base::ObjectApi;

pub use campaign_builder_items::CampaignBuilderItems;
pub use contacts::Contacts;
pub use credit_cards::CreditCards;
pub use custom_objects::CustomObjects;
pub use forms::Forms;
pub use groups::Groups;
pub use landing_pages::LandingPages;
pub use messages::Messages;
pub use objects::Objects;
pub use offers::Offers;
pub use products::Products;
pub use purchase_logs::PurchaseLogs;
pub use purchases::Purchases;
pub use rules::Rules;
pub use tags::Tags;
pub use tasks::Tasks;
pub use transactions::Transactions;
pub use webhooks::Webhooks;
