//! Tests for the dialect table.

use regex::Regex;

use super::{BUILTIN_TABLE, Dialect, Field, builtin_patterns};

mod descriptors {
    use super::*;

    #[test]
    fn object_literal_uses_colon_and_bare_key() {
        let dialect = Dialect::OBJECT_LITERAL;
        assert_eq!(dialect.name(), "object-literal");

        let regex = Regex::new(&dialect.template("version")).unwrap();
        assert!(regex.is_match("version : '1'"));
        assert!(!regex.is_match("version, '1'"));
        assert!(!regex.is_match("'version': '1'"));
    }

    #[test]
    fn constant_call_uses_comma_and_quoted_key() {
        let dialect = Dialect::CONSTANT_CALL;
        assert_eq!(dialect.name(), "constant-call");

        let regex = Regex::new(&dialect.template("version")).unwrap();
        assert!(regex.is_match("constant( 'version' , '1')"));
        assert!(!regex.is_match("constant('version': '1')"));
    }
}

mod templates {
    use super::*;

    #[test]
    fn every_builtin_template_compiles() {
        for (field, dialect) in BUILTIN_TABLE {
            let source = dialect.template(field.key());
            assert!(
                Regex::new(&source).is_ok(),
                "{} template for {field} failed: {source}",
                dialect.name()
            );
        }
    }

    #[test]
    fn key_is_escaped() {
        let source = Dialect::OBJECT_LITERAL.template("a.b");
        let regex = Regex::new(&source).unwrap();

        assert!(regex.is_match("a.b: 'x'"));
        assert!(!regex.is_match("axb: 'x'"));
    }

    #[test]
    fn bare_key_is_anchored_on_word_boundary() {
        let regex = Regex::new(&Dialect::OBJECT_LITERAL.template("version")).unwrap();

        assert!(regex.is_match("{ version: '1' }"));
        assert!(!regex.is_match("{ app_version: '1' }"));
    }

    #[test]
    fn quoted_key_accepts_either_quote() {
        let regex = Regex::new(&Dialect::CONSTANT_CALL.template("version")).unwrap();

        assert!(regex.is_match(".constant('version', '1')"));
        assert!(regex.is_match(".constant(\"version\", '1')"));
        assert!(!regex.is_match(".constant(version, '1')"));
    }
}

mod table {
    use super::*;

    fn dialects_for(field: Field) -> Vec<&'static str> {
        BUILTIN_TABLE
            .iter()
            .filter(|(f, _)| *f == field)
            .map(|(_, d)| d.name())
            .collect()
    }

    #[test]
    fn url_tries_object_literal_first() {
        assert_eq!(
            dialects_for(Field::ServiceControlUrl),
            vec!["object-literal", "constant-call"]
        );
    }

    #[test]
    fn version_tries_constant_call_first() {
        assert_eq!(
            dialects_for(Field::Version),
            vec!["constant-call", "object-literal"]
        );
    }

    #[test]
    fn builtin_patterns_follow_table() {
        let patterns = builtin_patterns();
        assert_eq!(patterns.len(), BUILTIN_TABLE.len());

        for (pattern, (field, dialect)) in patterns.iter().zip(BUILTIN_TABLE) {
            assert_eq!(pattern.field(), field);
            assert_eq!(pattern.dialect(), dialect);
        }
    }
}
