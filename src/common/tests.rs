#[cfg(test)]
mod common_tests {
    mod log_level_tests {
        use log::LevelFilter;
        use crate::common::common::parse_log_level;

        #[test]
        fn test_parse_known_levels() {
            assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
            assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::Trace);
            assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
            assert_eq!(parse_log_level("info").unwrap(), LevelFilter::Info);
            assert_eq!(parse_log_level("warn").unwrap(), LevelFilter::Warn);
            assert_eq!(parse_log_level("error").unwrap(), LevelFilter::Error);
        }

        #[test]
        fn test_parse_is_case_insensitive() {
            assert_eq!(parse_log_level("WARN").unwrap(), LevelFilter::Warn);
        }

        #[test]
        fn test_parse_unknown_level() {
            let err = parse_log_level("verbose").unwrap_err();
            assert!(err.to_string().contains("verbose"));
        }
    }

    mod wildcard_tests {
        use crate::common::common::wildcard_match;

        #[test]
        fn test_exact_match_is_case_blind() {
            assert!(wildcard_match("www.example.com", "WWW.Example.COM"));
            assert!(!wildcard_match("www.example.com", "mail.example.com"));
        }

        #[test]
        fn test_leading_star() {
            assert!(wildcard_match("*.example.com", "www.example.com"));
            assert!(wildcard_match("*.example.com", "a.b.example.com"));
            assert!(!wildcard_match("*.example.com", "example.org"));
        }

        #[test]
        fn test_question_mark() {
            assert!(wildcard_match("www?.example.com", "www1.example.com"));
            assert!(!wildcard_match("www?.example.com", "www.example.com"));
        }

        #[test]
        fn test_trailing_stars() {
            assert!(wildcard_match("www.*", "www.example.com"));
            assert!(wildcard_match("**", ""));
        }
    }

    mod bind_address_tests {
        use crate::common::common::split_bind_address;

        #[test]
        fn test_split_ipv4() {
            assert_eq!(split_bind_address("10.0.0.1:443"), Some(("10.0.0.1".to_string(), 443)));
        }

        #[test]
        fn test_split_ipv6() {
            assert_eq!(split_bind_address("[::1]:8443"), Some(("::1".to_string(), 8443)));
        }

        #[test]
        fn test_split_invalid() {
            assert_eq!(split_bind_address("10.0.0.1"), None);
            assert_eq!(split_bind_address(":443"), None);
            assert_eq!(split_bind_address("host:http"), None);
        }
    }

    mod custom_error_tests {
        use crate::common::structs::custom_error::CustomError;

        #[test]
        fn test_custom_error_display() {
            let err = CustomError::new("will not create config.toml");
            assert_eq!(err.to_string(), "will not create config.toml");
            assert_eq!(err.message(), "will not create config.toml");
        }
    }
}
