//! Tests for `Criteria`.

use super::{Criteria, CriteriaError, RelationalOperator};
use serde_json::json;

mod conditions {
    use super::*;

    #[test]
    fn single_condition_serializes_field_op_and_value() {
        let criteria = Criteria::new("email", RelationalOperator::Equal, json!("a@b.com")).unwrap();

        assert_eq!(
            criteria.as_json(),
            json!([{
                "field": {"field": "email"},
                "op": "=",
                "value": {"value": "a@b.com"},
            }])
        );
    }

    #[test]
    fn in_operator_with_a_list_serializes_value_entries() {
        let criteria =
            Criteria::new("status", RelationalOperator::In, json!([1, 2])).unwrap();

        assert_eq!(
            criteria.as_json(),
            json!([{
                "field": {"field": "status"},
                "op": "IN",
                "value": {"list": [{"value": 1}, {"value": 2}]},
            }])
        );
    }

    #[test]
    fn list_values_require_the_in_operator() {
        let err = Criteria::new("status", RelationalOperator::Equal, json!([1, 2])).unwrap_err();
        assert!(matches!(err, CriteriaError::ArrayOperator));
    }

    #[test]
    fn null_values_are_allowed() {
        let criteria = Criteria::new("owner", RelationalOperator::Is, json!(null)).unwrap();
        assert_eq!(criteria.as_json()[0]["value"], json!({"value": null}));
    }
}

mod joiners {
    use super::*;

    #[test]
    fn and_condition_interleaves_an_and_token() {
        let mut criteria =
            Criteria::new("firstname", RelationalOperator::Equal, json!("Ada")).unwrap();
        criteria
            .and_condition("lastname", RelationalOperator::Equal, json!("Lovelace"))
            .unwrap();

        let terms = criteria.as_json();
        assert_eq!(terms.as_array().unwrap().len(), 3);
        assert_eq!(terms[1], json!("AND"));
        assert_eq!(terms[2]["field"]["field"], "lastname");
    }

    #[test]
    fn or_condition_interleaves_an_or_token() {
        let mut criteria = Criteria::new("spent", RelationalOperator::GreaterThan, json!(100))
            .unwrap();
        criteria
            .or_condition("grade", RelationalOperator::GreaterOrEqual, json!(9))
            .unwrap();

        assert_eq!(criteria.as_json()[1], json!("OR"));
    }

    #[test]
    fn rejected_condition_leaves_no_dangling_joiner() {
        let mut criteria =
            Criteria::new("firstname", RelationalOperator::Equal, json!("Ada")).unwrap();
        let err = criteria
            .and_condition("status", RelationalOperator::NotEqual, json!([1]))
            .unwrap_err();
        assert!(matches!(err, CriteriaError::ArrayOperator));

        // The sequence is still valid and ends with a condition.
        criteria
            .and_condition("lastname", RelationalOperator::Equal, json!("L"))
            .unwrap();
        let terms = criteria.as_json();
        assert_eq!(terms.as_array().unwrap().len(), 3);
        assert_eq!(terms[1], json!("AND"));
    }
}

mod operators {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_representations_match_the_api() {
        assert_eq!(RelationalOperator::NotEqual.as_str(), "<>");
        assert_eq!(RelationalOperator::NotIn.as_str(), "NOT IN");
        assert_eq!(RelationalOperator::Like.as_str(), "LIKE");
    }

    #[test]
    fn parsing_round_trips_every_operator() {
        for op in [
            RelationalOperator::Equal,
            RelationalOperator::NotEqual,
            RelationalOperator::GreaterThan,
            RelationalOperator::LessThan,
            RelationalOperator::GreaterOrEqual,
            RelationalOperator::LessOrEqual,
            RelationalOperator::In,
            RelationalOperator::NotIn,
            RelationalOperator::Is,
            RelationalOperator::Like,
        ] {
            assert_eq!(RelationalOperator::from_str(op.as_str()).unwrap(), op);
        }
    }

    #[test]
    fn unknown_operator_strings_are_rejected() {
        let err = RelationalOperator::from_str("===").unwrap_err();
        assert!(matches!(err, CriteriaError::UnsupportedOperator(op) if op == "==="));
    }
}

#[test]
fn to_json_string_produces_compact_json() {
    let criteria = Criteria::new("id", RelationalOperator::Equal, json!(1)).unwrap();
    let text = criteria.to_json_string();
    assert!(text.starts_with('['));
    assert!(text.contains("\"op\":\"=\""));
}
