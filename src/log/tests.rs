// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#[cfg(test)]
mod tests {
    use crate::common::Error;
    use crate::log::StringLogger;

    #[test]
    fn logger_tests() {
        println!("Testing logger");
        let log1 = StringLogger::default();
        assert!(log1.is_empty());

        let bar = 123;
        log1.trace(format!("foo {bar}"));
        log1.trace(format!("bar {bar}"));
        log1.trace(String::new());
        assert_eq!(log1.to_string(), "foo 123\nbar 123");
        assert_eq!(log1.len(), 2);
        assert!(!log1.contains_warnings());

        let log2 = log1.clone();
        log2.warn("this is a warning".to_string());
        assert!(log1.contains_warnings(), "clones share their lines");
        assert_eq!(log1.len(), 3);
    }

    #[test]
    fn logger_call() {
        let log = StringLogger::new(true);
        let ok: Result<u32, Error> = log.call("first".to_string(), Ok(1));
        assert_eq!(ok.ok(), Some(1));
        assert!(!log.contains_warnings());

        let err: Result<u32, Error> =
            log.call("second".to_string(), Err(Error::String("nope".to_string())));
        assert!(err.is_err());
        assert!(log.contains_warnings());
        assert_eq!(log.to_string(), "first succeeded\nsecond failed: nope");
    }
}
