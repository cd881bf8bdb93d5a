// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod common_tests {
    use crate::common::{Error, WebhookConfig};
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Section {
        #[serde(default)]
        endpoint: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct ConfigToml {
        #[serde(default)]
        porkbun: Section,
    }

    #[test]
    fn config_from_str() {
        let config = WebhookConfig::builder()
            .toml_str(
                r#"
            [porkbun]
            endpoint = "http://localhost:9999"
            "#,
            )
            .debug(true)
            .build()
            .expect("config");
        assert!(config.debug());
        let ConfigToml { porkbun } = config.get().expect("porkbun section");
        assert_eq!(porkbun.endpoint.as_deref(), Some("http://localhost:9999"));
    }

    #[test]
    fn config_empty_uses_defaults() {
        let config = WebhookConfig::builder().toml_str("").build().expect("config");
        assert!(!config.debug());
        let ConfigToml { porkbun } = config.get().expect("defaults");
        assert!(porkbun.endpoint.is_none());
    }

    #[test]
    fn config_missing_file() {
        let result = WebhookConfig::builder()
            .toml_file("/nonexistent/porkbun-webhook.toml")
            .build();
        match result {
            Err(Error::String(s)) => assert!(s.contains("cannot read"), "{s}"),
            other => panic!("expected read failure, got {other:?}"),
        }
    }

    #[test]
    fn config_not_set() {
        assert!(WebhookConfig::builder().build().is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            Error::Retrieve("boom".to_string()).to_string(),
            "retrieve records error: boom"
        );
        assert_eq!(
            Error::MalformedId("abc".to_string()).to_string(),
            "found TXT record, but its ID is malformed: abc"
        );
        assert_eq!(
            Error::Config("missing".to_string()).to_string(),
            "config error: missing"
        );
    }
}
