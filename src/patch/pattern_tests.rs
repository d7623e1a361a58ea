//! Tests for single-dialect pattern matching.

use super::{Dialect, Field, FieldPattern, MatchResult, Quote};

fn object_literal(field: Field) -> FieldPattern {
    FieldPattern::new(field, Dialect::OBJECT_LITERAL).unwrap()
}

fn constant_call(field: Field) -> FieldPattern {
    FieldPattern::new(field, Dialect::CONSTANT_CALL).unwrap()
}

mod spans {
    use super::*;

    #[test]
    fn splits_prefix_value_and_suffix() {
        let text = "x = { service_control_url : 'http://localhost:33333/api/' };";
        let m = object_literal(Field::ServiceControlUrl)
            .locate(text)
            .found()
            .unwrap();

        assert_eq!(m.prefix(), "service_control_url : '");
        assert_eq!(m.value(), "http://localhost:33333/api/");
        assert_eq!(m.suffix(), "'");
        assert_eq!(m.span().start, 6);
        assert_eq!(&text[m.span()], m.as_str());
        assert_eq!(&text[m.value_span()], m.value());
        assert_eq!(m.source(), text);
        assert_eq!(m.dialect(), "object-literal");
    }

    #[test]
    fn double_quotes_are_recognized() {
        let text = r#"SC.config = { service_control_url:"http://localhost:33333/api/" };"#;
        let m = object_literal(Field::ServiceControlUrl)
            .locate(text)
            .found()
            .unwrap();

        assert_eq!(m.value(), "http://localhost:33333/api/");
        assert_eq!(m.quote(), Quote::Double);
        assert_eq!(m.suffix(), "\"");
    }

    #[test]
    fn empty_value_is_a_match() {
        let text = ".constant('version' , '' )";
        let m = constant_call(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), "");
        assert_eq!(m.prefix(), "constant('version' , '");
        assert_eq!(m.suffix(), "'");
    }

    #[test]
    fn newlines_between_key_and_value() {
        let text = "{\n    version:\n            '1.20.0'\n}";
        let m = object_literal(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), "1.20.0");
    }

    #[test]
    fn irregular_spacing_in_constant_call() {
        let text = ".constant ( 'version' , '1.3.0-beta1')";
        let m = constant_call(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), "1.3.0-beta1");
    }
}

mod anchoring {
    use super::*;

    #[test]
    fn pulse_url_is_never_taken_for_control_url() {
        let text = "{\n    service_pulse_url: 'https://platformupdate.particular.net/servicepulse.txt',\n    service_control_url: 'http://localhost:33333/api/'\n}";
        let m = object_literal(Field::ServiceControlUrl)
            .locate(text)
            .found()
            .unwrap();

        assert_eq!(m.value(), "http://localhost:33333/api/");
    }

    #[test]
    fn pulse_url_alone_is_not_found() {
        let text = "{ service_pulse_url: 'https://platformupdate.particular.net/servicepulse.txt' }";
        assert_eq!(
            object_literal(Field::ServiceControlUrl).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn longer_identifier_is_not_the_key() {
        let text = "{ app_version: '1.0.0' }";
        assert_eq!(
            object_literal(Field::Version).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn constant_call_requires_whole_word() {
        let text = "myconstant('version', '1.0.0')";
        assert_eq!(
            constant_call(Field::Version).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn constant_call_key_must_match_exactly() {
        let text = ".constant('versions', '1.0.0')";
        assert_eq!(
            constant_call(Field::Version).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn trailing_text_is_ignored() {
        let text = "{ version: '1.0.0'  , other: 'value' }";
        let m = object_literal(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), "1.0.0");
        assert_eq!(m.as_str(), "version: '1.0.0'");
    }
}

mod quoting {
    use super::*;

    #[test]
    fn mismatched_quotes_do_not_match() {
        let text = "{ version: '1.0.0\" }";
        assert_eq!(
            object_literal(Field::Version).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn value_may_contain_the_other_quote() {
        let text = r#"{ version: '1."0' }"#;
        let m = object_literal(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), r#"1."0"#);
        assert_eq!(m.quote(), Quote::Single);
    }

    #[test]
    fn value_never_spans_lines() {
        let text = "{\n    version: '1.20.0',\n    service_control_url: '\n};";
        assert_eq!(
            object_literal(Field::ServiceControlUrl).locate(text),
            MatchResult::NotFound
        );
    }

    #[test]
    fn double_quoted_constant_call() {
        let text = r#".constant("version", "2.0.0")"#;
        let m = constant_call(Field::Version).locate(text).found().unwrap();

        assert_eq!(m.value(), "2.0.0");
        assert_eq!(m.quote(), Quote::Double);
    }

    #[test]
    fn quote_as_char() {
        assert_eq!(Quote::Single.as_char(), '\'');
        assert_eq!(Quote::Double.as_char(), '"');
    }
}

mod ambiguity {
    use super::*;

    #[test]
    fn repeated_key_is_ambiguous() {
        let text = "{ version: '1.0.0', version: '2.0.0' }";
        let result = object_literal(Field::Version).locate(text);

        assert_eq!(result, MatchResult::Ambiguous { occurrences: 2 });
        assert!(!result.is_found());
        assert!(result.found().is_none());
    }

    #[test]
    fn single_occurrence_is_found() {
        let result = object_literal(Field::Version).locate("{ version: '1.0.0' }");
        assert!(result.is_found());
    }
}
