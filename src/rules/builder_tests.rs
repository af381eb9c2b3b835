//! Tests for `RuleBuilder`.

use super::builder::{RuleBuilder, RuleRecord};
use super::catalog::{actions, conditions, events};
use super::grammar::ConditionJoiner;
use super::params;
use super::RuleError;
use serde_json::json;

fn contact_rule() -> RuleBuilder {
    RuleBuilder::new("test rule", 0)
}

mod adding_entries {
    use super::*;

    #[test]
    fn known_event_with_matching_params_is_accepted() {
        let mut rule = contact_rule();
        rule.add_event(events::FIELD_UPDATED, &["42"]).unwrap();
        assert_eq!(rule.events(), vec!["field_is_updated(42)"]);
    }

    #[test]
    fn unknown_rule_names_are_rejected() {
        let mut rule = contact_rule();
        let err = rule.add_event("no_such_trigger", &[]).unwrap_err();
        assert!(matches!(err, RuleError::UnknownRule(name) if name == "no_such_trigger"));
    }

    #[test]
    fn parameter_count_must_match_the_schema() {
        let mut rule = contact_rule();
        let err = rule.add_action(actions::SEND_SMS, &["5"]).unwrap_err();
        assert!(matches!(
            err,
            RuleError::ParameterCount {
                expected: 2,
                received: 1,
                ..
            }
        ));
    }

    #[test]
    fn restricted_action_fails_for_non_contact_object_types() {
        let mut rule = RuleBuilder::new("postcards", 14);
        let err = rule
            .add_action(actions::SEND_POSTCARD, &["3"])
            .unwrap_err();
        assert!(
            matches!(err, RuleError::RestrictedRule(name) if name == "Send_contact_a_postcard")
        );
    }

    #[test]
    fn restricted_action_succeeds_for_the_contact_type() {
        let mut rule = contact_rule();
        rule.add_action(actions::SEND_POSTCARD, &["3"]).unwrap();
        assert_eq!(rule.actions(), vec!["Send_contact_a_postcard(3)"]);
    }

    #[test]
    fn invalid_vocabulary_values_are_collected_not_fail_fast() {
        let mut rule = contact_rule();
        // numberOf, units, option, date_field: both units and option bad.
        let err = rule
            .add_event(
                events::TODAY_RELATIVE_TO_OBJECT_DATE,
                &["3", "fortnights", "9", "f1568"],
            )
            .unwrap_err();
        match err {
            RuleError::InvalidParameterValues(names) => {
                assert_eq!(names, vec!["units".to_string(), "option".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn conditional_values_come_from_the_comparison_vocabulary() {
        let mut rule = contact_rule();
        rule.add_condition(
            conditions::FIELD_HAS_VALUE,
            &["f1568", params::EQUAL_TO, "blue"],
            None,
        )
        .unwrap();

        let err = rule
            .add_condition(
                conditions::FIELD_HAS_VALUE,
                &["f1568", "Sort Of Equals", "blue"],
                Some(ConditionJoiner::And),
            )
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidParameterValues(names) if names == ["conditional"]));
    }

    #[test]
    fn outcome_must_be_numeric_in_range() {
        let mut rule = contact_rule();
        let err = rule
            .add_event(events::OBJECT_SUBMITS_FORM, &["22", "7"])
            .unwrap_err();
        assert!(matches!(err, RuleError::InvalidParameterValues(names) if names == ["outcome"]));

        rule.add_event(events::OBJECT_SUBMITS_FORM, &["22", params::SUCCESSFUL])
            .unwrap();
    }
}

mod ping_url {
    use super::*;

    #[test]
    fn requires_at_least_one_parameter() {
        let mut rule = contact_rule();
        let err = rule.add_action(actions::PING_URL, &[]).unwrap_err();
        assert!(matches!(err, RuleError::ParameterCount { received: 0, .. }));
    }

    #[test]
    fn accepts_any_non_empty_arity() {
        let mut rule = contact_rule();
        rule.add_action(actions::PING_URL, &["http://example.com/hook"])
            .unwrap();
        assert_eq!(rule.actions(), vec!["Ping_APIURL(http://example.com/hook)"]);
    }

    #[test]
    fn joins_parameters_with_double_colons() {
        let mut rule = contact_rule();
        rule.add_action(
            actions::PING_URL,
            &["http://example.com/hook", "contact_id=1", "1"],
        )
        .unwrap();
        assert_eq!(
            rule.actions(),
            vec!["Ping_APIURL(http://example.com/hook::contact_id=1::1)"]
        );
    }
}

mod condition_joiners {
    use super::*;

    #[test]
    fn first_condition_carries_no_joiner() {
        let mut rule = contact_rule();
        // A joiner passed with the first condition is ignored.
        rule.add_condition(
            conditions::OBJECT_HAS_TAG,
            &["7"],
            Some(ConditionJoiner::Or),
        )
        .unwrap();
        assert_eq!(rule.conditions(), vec!["Is_in_category(7)"]);
    }

    #[test]
    fn later_conditions_require_a_joiner() {
        let mut rule = contact_rule();
        rule.add_condition(conditions::OBJECT_HAS_TAG, &["7"], None)
            .unwrap();
        let err = rule
            .add_condition(conditions::OBJECT_NO_TAG, &["9"], None)
            .unwrap_err();
        assert!(matches!(err, RuleError::MissingJoiner));
    }

    #[test]
    fn joiners_render_as_prefixes() {
        let mut rule = contact_rule();
        rule.add_condition(conditions::FIELD_HAS_VALUE, &["f1", params::EQUAL_TO, "x"], None)
            .unwrap();
        rule.add_condition(
            conditions::OBJECT_HAS_TAG,
            &["7"],
            Some(ConditionJoiner::Or),
        )
        .unwrap();
        rule.add_condition(
            conditions::OBJECT_SUBSCRIBED_SEQUENCE,
            &["3"],
            Some(ConditionJoiner::And),
        )
        .unwrap();

        assert_eq!(
            rule.conditions(),
            vec![
                "field_is_condition_fieldvalue(f1,Equal To,x)",
                "|Is_in_category(7)",
                ";Is_subscribed_to_drip(3)",
            ]
        );
    }
}

mod request_params {
    use super::*;

    #[test]
    fn requires_events_and_actions() {
        let rule = contact_rule();
        assert!(matches!(
            rule.to_request_params().unwrap_err(),
            RuleError::MissingEventsOrActions
        ));

        let mut only_events = contact_rule();
        only_events.add_event(events::OBJECT_CREATED, &[]).unwrap();
        assert!(matches!(
            only_events.to_request_params().unwrap_err(),
            RuleError::MissingEventsOrActions
        ));
    }

    #[test]
    fn serializes_all_rule_fields() {
        let mut rule = RuleBuilder::new("tag watchers", 0).with_id(88);
        rule.add_event(events::OBJECT_ADDED_TO_TAG, &["7"]).unwrap();
        rule.add_condition(conditions::OBJECT_HAS_TAG, &["9"], None)
            .unwrap();
        rule.add_condition(
            conditions::OBJECT_NO_TAG,
            &["11"],
            Some(ConditionJoiner::Or),
        )
        .unwrap();
        rule.add_action(actions::SEND_EMAIL, &["13"]).unwrap();
        rule.add_action(actions::ADD_OBJECT_TO_SEQUENCE, &["5"]).unwrap();

        let request = rule.to_request_params().unwrap();
        assert_eq!(
            request,
            json!({
                "object_type_id": 0,
                "name": "tag watchers",
                "events": "Contact_added_to_category(7)",
                "conditions": "Is_in_category(9)|Is_not_in_category(11)",
                "actions": "Send_contact_an_emailmbs(13);Assign_contact_to_drip(5)",
                "id": 88,
            })
        );
    }

    #[test]
    fn empty_conditions_serialize_as_an_empty_string() {
        let mut rule = contact_rule();
        rule.add_event(events::OBJECT_CREATED, &[]).unwrap();
        rule.add_action(actions::SEND_EMAIL, &["13"]).unwrap();

        let request = rule.to_request_params().unwrap();
        assert_eq!(request["conditions"], "");
        assert!(request.get("id").is_none());
    }
}

mod removal {
    use super::*;

    #[test]
    fn removes_entries_by_operation_name() {
        let mut rule = contact_rule();
        rule.add_event(events::OBJECT_CREATED, &[]).unwrap();
        rule.add_event(events::FIELD_UPDATED, &["42"]).unwrap();
        rule.remove_event_by_name(events::OBJECT_CREATED);
        assert_eq!(rule.events(), vec!["field_is_updated(42)"]);
    }

    #[test]
    fn clear_empties_each_list_independently() {
        let mut rule = contact_rule();
        rule.add_event(events::OBJECT_CREATED, &[]).unwrap();
        rule.add_action(actions::SEND_EMAIL, &["13"]).unwrap();
        rule.clear_events();
        assert!(rule.events().is_empty());
        assert_eq!(rule.actions().len(), 1);
        rule.clear_actions();
        assert!(rule.actions().is_empty());
    }
}

mod round_trip {
    use super::*;

    fn record(events: &str, conditions: Option<&str>, actions: &str) -> RuleRecord {
        RuleRecord {
            name: "stored rule".to_string(),
            object_type_id: 0,
            id: Some(5),
            events: events.to_string(),
            conditions: conditions.map(ToString::to_string),
            actions: actions.to_string(),
        }
    }

    #[test]
    fn a_parameterless_event_survives_encode_then_decode() {
        let mut original = contact_rule();
        original.add_event(events::OBJECT_CREATED, &[]).unwrap();
        original.add_action(actions::SEND_EMAIL, &["13"]).unwrap();
        let request = original.to_request_params().unwrap();

        let decoded = RuleBuilder::from_response(&request).unwrap();
        assert_eq!(decoded.events(), vec!["Contact_added_to_my_database()"]);
        assert_eq!(decoded.actions(), original.actions());
        assert!(decoded.conditions().is_empty());
    }

    #[test]
    fn decode_recovers_events_and_actions() {
        let stored = record(
            "Contact_added_to_my_database()",
            None,
            "Send_contact_an_emailmbs(13)",
        );
        let rule = RuleBuilder::from_record(&stored).unwrap();

        assert_eq!(rule.events(), vec!["Contact_added_to_my_database()"]);
        assert_eq!(rule.actions(), vec!["Send_contact_an_emailmbs(13)"]);
        assert_eq!(rule.id(), Some(5));
    }

    #[test]
    fn decode_recovers_condition_joiners() {
        let stored = record(
            "field_is_updated(42)",
            Some("field_is_condition_fieldvalue(42,Equal To,x)|Is_in_category(7)"),
            "Send_contact_an_emailmbs(13)",
        );
        let rule = RuleBuilder::from_record(&stored).unwrap();

        assert_eq!(
            rule.conditions(),
            vec![
                "field_is_condition_fieldvalue(42,Equal To,x)",
                "|Is_in_category(7)",
            ]
        );
    }

    #[test]
    fn encode_of_a_decoded_record_reproduces_the_strings() {
        let stored = record(
            "Contact_added_to_category(7);field_is_updated(42)",
            Some("Is_in_category(9);Is_not_in_category(11)|Is_subscribed_to_drip(3)"),
            "Send_contact_an_emailmbs(13)",
        );
        let rule = RuleBuilder::from_record(&stored).unwrap();
        let request = rule.to_request_params().unwrap();

        assert_eq!(request["events"], stored.events);
        assert_eq!(request["conditions"], stored.conditions.clone().unwrap());
        assert_eq!(request["actions"], stored.actions);
    }

    #[test]
    fn decode_validates_restricted_rules_against_the_record_object_type() {
        let mut stored = record(
            "Contact_added_to_my_database()",
            None,
            "Send_contact_a_postcard(3)",
        );
        stored.object_type_id = 14;
        let err = RuleBuilder::from_record(&stored).unwrap_err();
        assert!(matches!(err, RuleError::RestrictedRule(_)));
    }

    #[test]
    fn from_response_accepts_numeric_strings() {
        let data = json!({
            "name": "stored rule",
            "object_type_id": "0",
            "id": "12",
            "events": "Contact_added_to_my_database()",
            "conditions": "",
            "actions": "Send_contact_an_emailmbs(13)",
        });
        let rule = RuleBuilder::from_response(&data).unwrap();
        assert_eq!(rule.id(), Some(12));
        assert_eq!(rule.object_type_id(), 0);
    }
}
