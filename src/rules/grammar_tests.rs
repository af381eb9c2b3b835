//! Tests for the rule grammar tokenizer.

use super::grammar::{ConditionJoiner, format_term, parse_term, split_terms, tokenize_conditions};
use super::RuleError;

mod formatting {
    use super::*;

    #[test]
    fn joins_parameters_with_the_delimiter() {
        let rendered = format_term("Send_contact_an_emailmbs", &["13".to_string()], ",");
        assert_eq!(rendered, "Send_contact_an_emailmbs(13)");
    }

    #[test]
    fn empty_parameters_render_empty_parens() {
        let rendered = format_term("Contact_added_to_my_database", &[], ",");
        assert_eq!(rendered, "Contact_added_to_my_database()");
    }

    #[test]
    fn alternate_delimiters_are_supported() {
        let params = vec!["http://x".to_string(), "a=1".to_string()];
        assert_eq!(format_term("Ping_APIURL", &params, "::"), "Ping_APIURL(http://x::a=1)");
    }
}

mod term_splitting {
    use super::*;

    #[test]
    fn splits_on_semicolons() {
        assert_eq!(split_terms("a(1);b(2)"), vec!["a(1)", "b(2)"]);
    }

    #[test]
    fn pipes_are_treated_as_separators_too() {
        assert_eq!(split_terms("a(1)|b(2);c(3)"), vec!["a(1)", "b(2)", "c(3)"]);
    }

    #[test]
    fn whitespace_around_terms_is_trimmed() {
        assert_eq!(split_terms("a(1) ; b(2)"), vec!["a(1)", "b(2)"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert_eq!(split_terms(";a(1);;"), vec!["a(1)"]);
        assert!(split_terms("").is_empty());
    }
}

mod condition_tokenizing {
    use super::*;

    #[test]
    fn single_term_has_no_joiner() {
        let terms = tokenize_conditions("Is_in_category(7)");
        assert_eq!(terms, vec![(None, "Is_in_category(7)".to_string())]);
    }

    #[test]
    fn attributes_each_joiner_to_the_following_term() {
        let terms = tokenize_conditions("a(1);b(2)|c(3)");
        assert_eq!(
            terms,
            vec![
                (None, "a(1)".to_string()),
                (Some(ConditionJoiner::And), "b(2)".to_string()),
                (Some(ConditionJoiner::Or), "c(3)".to_string()),
            ]
        );
    }

    #[test]
    fn recovers_mixed_joiners_in_order() {
        let terms = tokenize_conditions("a(1)|b(2);c(3)|d(4)");
        let joiners: Vec<_> = terms.iter().map(|(joiner, _)| *joiner).collect();
        assert_eq!(
            joiners,
            vec![
                None,
                Some(ConditionJoiner::Or),
                Some(ConditionJoiner::And),
                Some(ConditionJoiner::Or),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_terms() {
        assert!(tokenize_conditions("").is_empty());
    }
}

mod term_parsing {
    use super::*;

    #[test]
    fn splits_name_and_parameters() {
        let parsed = parse_term("field_is_updated(42)").unwrap();
        assert_eq!(parsed.name, "field_is_updated");
        assert_eq!(parsed.params, vec!["42"]);
    }

    #[test]
    fn multiple_parameters_split_on_commas() {
        let parsed = parse_term("object_submits_form(9,1)").unwrap();
        assert_eq!(parsed.params, vec!["9", "1"]);
    }

    #[test]
    fn empty_parens_mean_no_parameters() {
        let parsed = parse_term("Contact_added_to_my_database()").unwrap();
        assert!(parsed.params.is_empty());
    }

    #[test]
    fn double_colon_parameters_stay_as_one_value() {
        // No escaping exists in the grammar, so a ping term's `::`
        // cannot be split back reliably; it is kept verbatim.
        let parsed = parse_term("Ping_APIURL(http://x::a=1::json)").unwrap();
        assert_eq!(parsed.params, vec!["http://x::a=1::json"]);
    }

    #[test]
    fn missing_parens_are_malformed() {
        let err = parse_term("not-a-term").unwrap_err();
        assert!(matches!(err, RuleError::MalformedTerm(term) if term == "not-a-term"));
    }
}
