//! Tests against constants files from every shipped release shape.

use super::{Field, FieldMatcher, validate_uri};

/// Every historical shape of the file holding the service control URL.
const CONFIG_VARIANTS: [&str; 7] = [
    // 1.20 window.defaultConfig
    "window.defaultConfig = {
        default_route: '/dashboard',
        version: '1.20.0',
        service_control_url: 'http://localhost:33333/api/',
        monitoring_urls: ['http://localhost:33633/']
    };
    ",
    // 1.3 constants
    "angular.module('sc')
        .constant('version', '1.3.0')
        .constant('scConfig', {
            service_control_url:'http://localhost:33333/api/',
            service_pulse_url: 'https://platformupdate.particular.net/servicepulse.txt'
        });
    ",
    // added whitespace and custom FQDN
    "angular.module('sc')
        .constant('version', '1.3.0')
        .constant('scConfig', {
            service_control_url :  'http://host.network.com:33333/api/'  ,
            service_pulse_url: 'https://platformupdate.particular.net/servicepulse.txt'
    });
    ",
    // line breaks and flipped order
    "angular.module('sc')
        .constant('version', '1.3.0')
        .constant('scConfig', {
        service_pulse_url:
                'https://platformupdate.particular.net/servicepulse.txt',
                service_control_url :
                'http://localhost:33333/api/'
        });
    ",
    // 1.1 config.js
    "
        'use strict';
        var SC = SC || {};
        SC.config = {
            service_control_url: 'http://localhost:33333/api/'
        };
    ",
    // 1.1 config.js with custom host
    "
        'use strict';
        var SC = SC || {};
        SC.config = {
            service_control_url: 'http://gb-dev:33333/api/'
        };
    ",
    // double quotes
    r#"
        'use strict';
        var SC = SC || {};
        SC.config = {
            service_control_url:"http://localhost:33333/api/\"
        };
    "#,
];

const EXPECTED_URLS: [&str; 7] = [
    "http://localhost:33333/api/",
    "http://localhost:33333/api/",
    "http://host.network.com:33333/api/",
    "http://localhost:33333/api/",
    "http://localhost:33333/api/",
    "http://gb-dev:33333/api/",
    r"http://localhost:33333/api/\",
];

/// Version snippets paired with the value each must yield.
const VERSION_SNIPPETS: [(&str, &str); 4] = [
    (
        "1.3.0",
        "angular.module('sc')
            .constant('version', '1.3.0')
            .constant('scConfig';",
    ),
    (
        "1.3.0-beta1",
        "angular.module('sc')
            .constant ( 'version' , '1.3.0-beta1')
            .constant('scConfig';",
    ),
    (
        "",
        "angular.module('sc')
            .constant('version' , '' )
            .constant('scConfig';",
    ),
    (
        "1.20.0",
        "window.defaultConfig = {
                version: '1.20.0',
                service_control_url: '
            };",
    ),
];

mod service_control_url {
    use super::*;

    #[test]
    fn every_variant_yields_a_valid_uri() {
        let matcher = FieldMatcher::default();

        for (i, config) in CONFIG_VARIANTS.iter().enumerate() {
            let value = matcher
                .extract(config, Field::ServiceControlUrl)
                .unwrap_or_else(|e| panic!("variant {i} failed to match: {e}"));

            assert_eq!(value, EXPECTED_URLS[i], "variant {i}");
            assert!(
                validate_uri(value).is_ok(),
                "variant {i} did not yield a URI: {value}"
            );
        }
    }

    #[test]
    fn every_variant_can_be_repointed() {
        let matcher = FieldMatcher::default();
        let target = "https://sc.prod.example.com:443/api/";

        for (i, config) in CONFIG_VARIANTS.iter().enumerate() {
            let patched = matcher
                .replace(config, Field::ServiceControlUrl, target)
                .unwrap_or_else(|e| panic!("variant {i} failed to patch: {e}"));

            assert_eq!(
                matcher.extract(&patched, Field::ServiceControlUrl).unwrap(),
                target
            );
            assert_eq!(
                patched.replace(target, EXPECTED_URLS[i]),
                *config,
                "variant {i} changed outside the value"
            );
        }
    }

    #[test]
    fn dangling_url_is_not_found() {
        let (_, snippet) = VERSION_SNIPPETS[3];
        let err = FieldMatcher::default()
            .extract(snippet, Field::ServiceControlUrl)
            .unwrap_err();

        assert!(err.is_not_found());
    }
}

mod version {
    use super::*;

    #[test]
    fn every_snippet_yields_its_version() {
        let matcher = FieldMatcher::default();

        for (expected, snippet) in VERSION_SNIPPETS {
            let value = matcher
                .extract(snippet, Field::Version)
                .unwrap_or_else(|e| panic!("snippet for {expected:?} failed: {e}"));

            assert_eq!(value, expected);
        }
    }

    #[test]
    fn constants_variants_agree_on_version() {
        let matcher = FieldMatcher::default();

        for config in &CONFIG_VARIANTS[1..4] {
            assert_eq!(matcher.extract(config, Field::Version).unwrap(), "1.3.0");
        }
    }

    #[test]
    fn legacy_config_has_no_version() {
        let err = FieldMatcher::default()
            .extract(CONFIG_VARIANTS[4], Field::Version)
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
