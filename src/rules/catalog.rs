//! Catalogs of the known rule operations.
//!
//! Each operation name maps to a fixed, ordered schema of required
//! parameter names and a restricted flag. Restricted operations are only
//! legal when the owning object type is the contact type. The tables are
//! compiled in as match arms; nothing is looked up dynamically.

/// Trigger operations ("events").
pub mod events {
    // Customer relationship management
    pub const OBJECT_CREATED: &str = "Contact_added_to_my_database";
    pub const FIELD_UPDATED: &str = "field_is_updated";
    pub const OBJECT_ADDED_TO_SEQUENCE: &str = "Contact_added_to_campaign";
    pub const OBJECT_REMOVED_FROM_SEQUENCE: &str = "Contact_leaves_campaign";
    pub const SUBSCRIPTION_TO_SEQUENCE_PAUSED: &str = "Subscription_to_drip_is_paused";
    pub const SUBSCRIPTION_TO_SEQUENCE_RESUMED: &str = "Subscription_to_drip_is_unpaused";
    pub const OBJECT_PAUSED_ON_CAMPAIGN: &str = "pause_campaign";
    pub const OBJECT_RESUMED_ON_CAMPAIGN: &str = "unpause_campaign";
    pub const OBJECT_ADDED_TO_TAG: &str = "Contact_added_to_category";
    pub const OBJECT_REMOVED_FROM_TAG: &str = "Contact_removed_from_category";
    pub const OBJECT_ADDED_TO_FULFILLMENT: &str = "Contact_subscribed_to_fulfillment";
    pub const OBJECT_REMOVED_FROM_FULFILLMENT: &str = "Contact_unsubscribed_from_fulfillment";
    pub const TODAY_MATCHES_OBJECT_DATE: &str = "on_date_field";
    pub const TODAY_RELATIVE_TO_OBJECT_DATE: &str = "relative_date_field";
    pub const OBJECT_ADDED_OR_REMOVED_FROM_CAMPAIGN: &str = "campaign_builder_object_change";
    pub const TASK_COMPLETED: &str = "object_completed_task";
    pub const OBJECT_SUBMITS_FORM: &str = "object_submits_form";
    pub const CALL_IS_LOGGED: &str = "call_is_logged";
    // External events
    pub const OBJECT_OPENS_EMAIL: &str = "Contact_opens_email";
    pub const OBJECT_CLICKS_EMAIL_LINK: &str = "Contact_clicks_emailanchor";
    pub const OBJECT_SENDS_YOU_EMAIL: &str = "Contact_sends_Email";
    pub const SMS_RECEIVED: &str = "sms_message_received";
    // Sales
    pub const OBJECT_PURCHASES_PRODUCT: &str = "Contact_purchases_product";
    pub const OBJECT_RECEIVES_REFUND: &str = "Contact_receives_refund_on_product";
    pub const OBJECT_VISITS_LANDINGPAGE: &str = "Contact_visits_landingpage_splittest";
    pub const OBJECT_VISITS_PURL: &str = "Contact_visits_purl_splittest";
    pub const OPEN_ORDER_CREATED: &str = "Contact_is_subscribed_to_productsub";
    pub const OPEN_ORDER_CHARGED_UPDATED: &str = "Contact_subscription_to_productsub_is_subaction";
    pub const CARD_CHARGED_DECLINED: &str = "Contact_credit_card_is_ccstatus";
    // Sites/pages
    pub const OBJECT_VISITS_URL: &str = "contact_visits_url";
    pub const TRACKED_LINK_CLICKED: &str = "clicks_tracked_link";
    pub const ACCESS_TO_WPMEMBERSHIPLVL_GIVEN: &str = "Contact_given_access_to_wpintmembershiplevel";
    pub const LOSES_ACCESS_TO_WPMEMBERSHIPLVL: &str =
        "Contact_removed_from_access_to_wpintmembershiplevel";

    /// The ordered required-parameter schema for an event, or `None`
    /// when the name is not a known event.
    #[must_use]
    pub fn required_params(rule: &str) -> Option<&'static [&'static str]> {
        Some(match rule {
            OBJECT_CREATED | OBJECT_SENDS_YOU_EMAIL => &[],
            FIELD_UPDATED => &["field_id"],
            OBJECT_ADDED_TO_SEQUENCE
            | OBJECT_REMOVED_FROM_SEQUENCE
            | SUBSCRIPTION_TO_SEQUENCE_PAUSED
            | SUBSCRIPTION_TO_SEQUENCE_RESUMED => &["sequence_id"],
            OBJECT_PAUSED_ON_CAMPAIGN | OBJECT_RESUMED_ON_CAMPAIGN => &["campaign_id"],
            OBJECT_ADDED_TO_TAG | OBJECT_REMOVED_FROM_TAG => &["tag_id"],
            OBJECT_ADDED_TO_FULFILLMENT | OBJECT_REMOVED_FROM_FULFILLMENT => &["fulfillment_id"],
            TODAY_MATCHES_OBJECT_DATE => &["date_field"],
            TODAY_RELATIVE_TO_OBJECT_DATE => &["numberOf", "units", "option", "date_field"],
            OBJECT_ADDED_OR_REMOVED_FROM_CAMPAIGN => &["option", "campaign_id"],
            TASK_COMPLETED => &["task_id"],
            OBJECT_SUBMITS_FORM => &["form_id", "outcome"],
            CALL_IS_LOGGED => &["outcome"],
            OBJECT_OPENS_EMAIL => &["email_id"],
            OBJECT_CLICKS_EMAIL_LINK => &["email_id", "link_num"],
            SMS_RECEIVED => &["number_id"],
            OBJECT_PURCHASES_PRODUCT | OBJECT_RECEIVES_REFUND | OPEN_ORDER_CREATED => {
                &["product_id"]
            }
            OBJECT_VISITS_LANDINGPAGE => &["landingPage_id"],
            OBJECT_VISITS_PURL => &["PURL_id"],
            OPEN_ORDER_CHARGED_UPDATED => &["order_id", "option"],
            CARD_CHARGED_DECLINED => &["option"],
            OBJECT_VISITS_URL => &["url"],
            TRACKED_LINK_CLICKED => &["trackedLink_id"],
            ACCESS_TO_WPMEMBERSHIPLVL_GIVEN | LOSES_ACCESS_TO_WPMEMBERSHIPLVL => {
                &["wpMembership_id"]
            }
            _ => return None,
        })
    }

    /// Whether the event is usable only with the contact object type.
    #[must_use]
    pub fn is_restricted(rule: &str) -> bool {
        matches!(
            rule,
            OBJECT_PURCHASES_PRODUCT
                | OBJECT_RECEIVES_REFUND
                | OBJECT_VISITS_LANDINGPAGE
                | OBJECT_VISITS_PURL
                | OPEN_ORDER_CREATED
                | OPEN_ORDER_CHARGED_UPDATED
                | CARD_CHARGED_DECLINED
                | OBJECT_VISITS_URL
                | TRACKED_LINK_CLICKED
                | ACCESS_TO_WPMEMBERSHIPLVL_GIVEN
                | LOSES_ACCESS_TO_WPMEMBERSHIPLVL
        )
    }
}

/// Condition operations.
pub mod conditions {
    // Customer relationship management
    pub const SUBSCRIBED_TO_CAMPAIGN_BEFORE_AFTER_DATE: &str =
        "campaignbuilder_subscription_date_is_val";
    pub const BEEN_ON_CAMPAIGN_FOR_TIMEFRAME: &str = "Been_on_campaign_for_timeframe";
    pub const OBJECT_PAUSED_RESUMED_ON_CAMPAIGN: &str = "paused_or_active_on_camp";
    pub const BEEN_ON_SEQUENCE_FOR_TIMEFRAME: &str = "been_on_campaignbuilder_for_timeframe";
    pub const SUBSCRIBED_TO_SEQUENCE_BEFORE_AFTER_DATE: &str =
        "Date_of_subscription_to_drip_is_datecondition_datevalue";
    pub const OBJECT_SUBSCRIBED_SEQUENCE: &str = "Is_subscribed_to_drip";
    pub const OBJECT_NOT_SUBSCRIBED_SEQUENCE: &str = "Is_not_subscribed_to_drip";
    pub const SEQUENCE_SUBSCRIPTION_PAUSED: &str = "Subscription_to_dripa_is_paused";
    pub const SEQUENCE_SUBSCRIPTION_RESUMED: &str = "Subscription_to_dripa_is_not_paused";
    pub const FIELD_HAS_VALUE: &str = "field_is_condition_fieldvalue";
    pub const OBJECT_HAS_TAG: &str = "Is_in_category";
    pub const OBJECT_NO_TAG: &str = "Is_not_in_category";
    pub const OBJECT_SUBSCRIBED_TO_FULFILLMENT: &str = "Is_on_fulfillment";
    pub const OBJECT_NOT_SUBSCRIBED_TO_FULFILLMENT: &str = "Is_not_on_fulfillment";
    // Messages
    pub const OPENED_EMAIL_N_TIMES: &str = "Has_opened_email_condition_n_times";
    pub const CLICKED_EMAIL_LINK_N_TIMES: &str = "Has_clicked_emailanchor_condition_n_times";
    pub const SMS_CONTAINS_EMAIL: &str = "sms_contains_email";
    pub const SMS_CONTAINS_NO_EMAIL: &str = "sms_does_not_contain_email";
    pub const SMS_CONTAINS_TEXT: &str = "sms_contains_text";
    pub const SMS_CONTAINS_NO_TEXT: &str = "sms_does_not_contain_text";
    // Sales
    pub const SPENT_N_AMOUNT_ON_PRODUCT: &str = "Has_spent_condition_N_on_product";
    pub const ORDERED_N_AMOUNT_OF_PRODUCT: &str = "Has_purchased_condition_n_product";
    pub const SUBSCRIBED_TO_PRODUCT: &str = "Is_subscribed_to_productsub";
    pub const SUBSCRIBED_TO_PRODUCT_FOR_TIMEFRAME: &str =
        "Has_been_subscribed_to_productsub_for_timeframe";
    // Sites/pages
    pub const VISITED_WP_PAGE_N_TIMES: &str = "Has_visited_website_condition_n_times";
    pub const VISITED_LANDING_PAGE_N_TIMES: &str =
        "Has_visited_landingpage_splittest_condition_n_times";
    pub const HAS_ACCESS_TO_WPMEMBERSHIPLVL: &str = "Contact_has_access_to_wpintmembershiplevel";
    pub const NO_ACCESS_TO_WPMEMBERSHIPLVL: &str =
        "Contact_does_not_have_access_to_wpintmembershiplevel";

    /// The ordered required-parameter schema for a condition, or `None`
    /// when the name is not a known condition.
    #[must_use]
    pub fn required_params(rule: &str) -> Option<&'static [&'static str]> {
        Some(match rule {
            SUBSCRIBED_TO_CAMPAIGN_BEFORE_AFTER_DATE => &["campaign_id", "conditional", "date"],
            BEEN_ON_CAMPAIGN_FOR_TIMEFRAME => &["campaign_id", "number_units"],
            OBJECT_PAUSED_RESUMED_ON_CAMPAIGN => &["option", "campaign_id"],
            BEEN_ON_SEQUENCE_FOR_TIMEFRAME => &["sequence_id", "numberOf", "units"],
            SUBSCRIBED_TO_SEQUENCE_BEFORE_AFTER_DATE => &["sequence_id", "conditional", "date"],
            OBJECT_SUBSCRIBED_SEQUENCE
            | OBJECT_NOT_SUBSCRIBED_SEQUENCE
            | SEQUENCE_SUBSCRIPTION_PAUSED
            | SEQUENCE_SUBSCRIPTION_RESUMED => &["sequence_id"],
            FIELD_HAS_VALUE => &["field_id", "conditional", "value"],
            OBJECT_HAS_TAG | OBJECT_NO_TAG => &["tag_id"],
            OBJECT_SUBSCRIBED_TO_FULFILLMENT | OBJECT_NOT_SUBSCRIBED_TO_FULFILLMENT => {
                &["fulfillment_id"]
            }
            OPENED_EMAIL_N_TIMES => &["email_id", "conditional", "number"],
            CLICKED_EMAIL_LINK_N_TIMES => &["email_id_link_num", "conditional", "number"],
            SMS_CONTAINS_EMAIL | SMS_CONTAINS_NO_EMAIL => &[],
            SMS_CONTAINS_TEXT | SMS_CONTAINS_NO_TEXT => &["text"],
            SPENT_N_AMOUNT_ON_PRODUCT | ORDERED_N_AMOUNT_OF_PRODUCT => {
                &["conditional", "number", "product_id"]
            }
            SUBSCRIBED_TO_PRODUCT => &["product_id"],
            SUBSCRIBED_TO_PRODUCT_FOR_TIMEFRAME => &["product_id", "number_units"],
            VISITED_WP_PAGE_N_TIMES => &["wordpress_id", "conditional", "number"],
            VISITED_LANDING_PAGE_N_TIMES => {
                &["landingPage_id", "object_type_id", "conditional", "number"]
            }
            HAS_ACCESS_TO_WPMEMBERSHIPLVL | NO_ACCESS_TO_WPMEMBERSHIPLVL => &["wpMembership_id"],
            _ => return None,
        })
    }

    /// Whether the condition is usable only with the contact object type.
    #[must_use]
    pub fn is_restricted(rule: &str) -> bool {
        matches!(
            rule,
            SPENT_N_AMOUNT_ON_PRODUCT
                | ORDERED_N_AMOUNT_OF_PRODUCT
                | SUBSCRIBED_TO_PRODUCT
                | SUBSCRIBED_TO_PRODUCT_FOR_TIMEFRAME
                | VISITED_WP_PAGE_N_TIMES
                | VISITED_LANDING_PAGE_N_TIMES
                | HAS_ACCESS_TO_WPMEMBERSHIPLVL
                | NO_ACCESS_TO_WPMEMBERSHIPLVL
        )
    }
}

/// Action operations.
pub mod actions {
    // Customer relationship management
    pub const ADD_OBJECT_TO_TAG: &str = "Add_contact_to_category";
    pub const REMOVE_OBJECT_FROM_TAG: &str = "Remove_contact_from_category";
    pub const ADD_REMOVE_OBJECT_FROM_CAMPAIGN: &str = "campaign_builder_action_change";
    pub const PAUSE_UNPAUSE_OBJECT_ON_CAMPAIGN: &str = "pause_or_unpause_on_camp";
    pub const ADD_OBJECT_TO_SEQUENCE: &str = "Assign_contact_to_drip";
    pub const REMOVE_OBJECT_FROM_SEQUENCE: &str = "Remove_contact_from_drip";
    pub const REMOVE_OBJECT_FROM_ALL_SEQUENCES: &str = "Remove_contact_from_all_sequences";
    pub const PAUSE_SUBSCRIPTION_TO_SEQUENCE: &str = "Pause_subscription_to_dripa";
    pub const UNPAUSE_SUBSCRIPTION_TO_SEQUENCE: &str = "Unpause_subscription_to_dripa";
    pub const CHANGE_FIELD_VALUE: &str = "Change_field_to_fieldvalue";
    pub const ADD_LEAD_ROUTER: &str = "Add_to_leadrouter";
    pub const ADD_OBJECT_TO_FULFILLMENT: &str = "Assign_to_fulfillment";
    pub const REMOVE_OBJECT_FROM_FULFILLMENT: &str = "Remove_from_fulfillment";
    pub const REMOVE_FROM_ALL_FULFILLMENTS: &str = "Remove_from_all_fulfillments";
    // Sales
    pub const RECHARGE_ALL_TRANSACTIONS_IN_COLLECTIONS: &str = "Recharge_all_declined_transactions";
    pub const ADD_PRODUCT_TO_PURCHASE_HISTORY: &str = "Add_product_to_purchase_history";
    pub const CANCEL_OPEN_ORDER: &str = "Cancel_open_orders_with_product";
    // Messages
    pub const NOTIFY_WITH_EMAIL: &str = "Notify_someone_with_emailmbs";
    pub const SEND_EMAIL: &str = "Send_contact_an_emailmbs";
    pub const SEND_POSTCARD: &str = "Send_contact_a_postcard";
    pub const ADD_TASK: &str = "Send_contact_a_task";
    pub const SEND_SMS: &str = "send_contact_an_sms";
    // Sites/pages
    pub const PING_URL: &str = "Ping_APIURL";
    pub const GIVE_WPMEMBERSHIPLVL_ACCESS: &str =
        "Add_access_for_contact_to_wpintmembershiplevel";
    pub const REMOVE_WPMEMBERSHIPLVL_ACCESS: &str =
        "Remove_access_for_contact_to_wpintmembershiplevel";
    // Social
    pub const UPDATE_FB_CUSTOM_AUDIENCE: &str = "facebook_audience_action";
    pub const NOTIFY_WITH_SMS: &str = "Notify_someone_with_sms";

    /// The ordered required-parameter schema for an action, or `None`
    /// when the name is not a known action.
    #[must_use]
    pub fn required_params(rule: &str) -> Option<&'static [&'static str]> {
        Some(match rule {
            ADD_OBJECT_TO_TAG | REMOVE_OBJECT_FROM_TAG => &["tag_id"],
            ADD_REMOVE_OBJECT_FROM_CAMPAIGN | PAUSE_UNPAUSE_OBJECT_ON_CAMPAIGN => {
                &["option", "campaign_id"]
            }
            ADD_OBJECT_TO_SEQUENCE
            | REMOVE_OBJECT_FROM_SEQUENCE
            | PAUSE_SUBSCRIPTION_TO_SEQUENCE
            | UNPAUSE_SUBSCRIPTION_TO_SEQUENCE => &["sequence_id"],
            REMOVE_OBJECT_FROM_ALL_SEQUENCES
            | REMOVE_FROM_ALL_FULFILLMENTS
            | RECHARGE_ALL_TRANSACTIONS_IN_COLLECTIONS => &[],
            CHANGE_FIELD_VALUE => &["field_id", "value", "field_option"],
            ADD_LEAD_ROUTER => &["leadRouter_id"],
            ADD_OBJECT_TO_FULFILLMENT | REMOVE_OBJECT_FROM_FULFILLMENT => &["fulfillment_id"],
            ADD_PRODUCT_TO_PURCHASE_HISTORY | CANCEL_OPEN_ORDER => &["product_id"],
            NOTIFY_WITH_EMAIL => &["user_id", "email_id"],
            SEND_EMAIL => &["email_id"],
            SEND_POSTCARD => &["postcard_id"],
            ADD_TASK => &["task_id"],
            SEND_SMS => &["sms_id", "number_id"],
            PING_URL => &["url", "post_data", "json"],
            GIVE_WPMEMBERSHIPLVL_ACCESS | REMOVE_WPMEMBERSHIPLVL_ACCESS => &["wpMembership_id"],
            UPDATE_FB_CUSTOM_AUDIENCE => &["add_remove", "custom_audience_id"],
            NOTIFY_WITH_SMS => &["user_id", "sms_id", "number_id"],
            _ => return None,
        })
    }

    /// Whether the action is usable only with the contact object type.
    #[must_use]
    pub fn is_restricted(rule: &str) -> bool {
        matches!(
            rule,
            ADD_LEAD_ROUTER
                | RECHARGE_ALL_TRANSACTIONS_IN_COLLECTIONS
                | ADD_PRODUCT_TO_PURCHASE_HISTORY
                | CANCEL_OPEN_ORDER
                | SEND_POSTCARD
                | GIVE_WPMEMBERSHIPLVL_ACCESS
                | REMOVE_WPMEMBERSHIPLVL_ACCESS
        )
    }
}
