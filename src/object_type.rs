//! Object type ids used across the API.
//!
//! Every record in an account belongs to one of these numeric object
//! types. Custom objects occupy ids of 10000 and above.

pub const CONTACT: i64 = 0;
pub const TASK: i64 = 1;
pub const USER: i64 = 2;
pub const GROUP: i64 = 3;
pub const LOG: i64 = 4;
pub const SEQUENCE: i64 = 5;
pub const RULE: i64 = 6;
pub const MESSAGE: i64 = 7;
pub const SEQUENCE_SUBSCRIBER: i64 = 8;
pub const NOTE: i64 = 12;
pub const BLAST: i64 = 13;
pub const TAG: i64 = 14;
pub const PRODUCT: i64 = 16;
pub const PURCHASE: i64 = 17;
pub const FULFILLMENT: i64 = 19;
pub const LANDINGPAGE: i64 = 20;
pub const LEGACY_FORM: i64 = 22;
pub const QUEUED_MESSAGE: i64 = 23;
pub const PENDING_MAIL: i64 = 27;
pub const PURCHASE_LOG: i64 = 30;
pub const PARTNER_PROGRAM: i64 = 35;
pub const PARTNER: i64 = 36;
pub const REFERRAL: i64 = 37;
pub const COMMISSION: i64 = 38;
pub const PARTNER_PROMOTIONAL: i64 = 40;
pub const UPSELL_FORM: i64 = 42;
pub const WORDPRESS_MEMBERSHIP: i64 = 43;
pub const OPEN_ORDER: i64 = 44;
pub const CREDIT_CARD: i64 = 45;
pub const TRANSACTION: i64 = 46;
pub const SHIPPED_PACKAGE: i64 = 47;
pub const SHIPPING_FULFILLMENT: i64 = 49;
pub const ORDER: i64 = 52;
pub const FACEBOOK: i64 = 53;
pub const CUSTOM_DOMAIN: i64 = 58;
pub const ROLE: i64 = 61;
pub const TAX: i64 = 63;
pub const SHIPPING_METHOD: i64 = 64;
pub const OFFER: i64 = 65;
pub const TASK_OUTCOME: i64 = 66;
pub const WORDPRESS: i64 = 67;
pub const MESSAGE_TEMPLATE: i64 = 68;
pub const LEAD_ROUTER: i64 = 69;
pub const GATEWAY: i64 = 70;
pub const MARKETING_CAMPAIGN: i64 = 75;
pub const LEAD_SOURCE: i64 = 76;
pub const MEDIUM: i64 = 77;
pub const CONTENT: i64 = 78;
pub const TERM: i64 = 79;
pub const TRACKED_LINK: i64 = 80;
pub const PARTNER_PROGRAM_PRODUCT: i64 = 87;
pub const URL_HISTORY: i64 = 88;
pub const TASK_NOTE: i64 = 89;
pub const TASK_HISTORY: i64 = 90;
pub const SUBSCRIBER_RETENTION_REPORT: i64 = 92;
pub const SUBSCRIPTION_SALES_REPORT: i64 = 93;
pub const SALES_REPORT: i64 = 94;
pub const PRODUCT_SALES_LOG_REPORT: i64 = 95;
pub const CUSTOMER_VALUE_REPORT: i64 = 96;
pub const SHIPPING_COLLECTED_REPORT: i64 = 97;
pub const TAX_REPORT: i64 = 98;
pub const CUSTOM_OBJECT: i64 = 99;
pub const AUTOMATION_LOG: i64 = 100;
pub const CUSTOM_OBJECT_RELATIONSHIP: i64 = 102;
pub const FORM: i64 = 122;
pub const COUPON: i64 = 123;
pub const COUPON_CODE: i64 = 124;
pub const COUPON_PRODUCTS: i64 = 125;
pub const TAG_SUBSCRIBER: i64 = 138;
pub const CAMPAIGN_BUILDER: i64 = 140;
pub const DELETED_ORDER: i64 = 146;

/// First id in the custom object range.
pub const CUSTOM_OBJECT_BASE: i64 = 10000;
