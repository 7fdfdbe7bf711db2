use airportdex::errors::{AirportdexError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_database_config_error() {
        let error = AirportdexError::database_config("missing DATABASE_URL");

        assert!(matches!(error, AirportdexError::DatabaseConfig(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Database Configuration Error"));
        assert!(error.to_string().contains("missing DATABASE_URL"));
    }

    #[test]
    fn test_database_connection_error() {
        let error = AirportdexError::database_connection("connection refused");

        assert!(matches!(error, AirportdexError::DatabaseConnection(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Database Connection Error"));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_database_operation_error() {
        let error = AirportdexError::database_operation("query failed");

        assert!(matches!(error, AirportdexError::DatabaseOperation(_)));
        assert_eq!(error.code(), "E003");
        assert!(error.to_string().contains("Database Operation Error"));
        assert!(error.to_string().contains("query failed"));
    }

    #[test]
    fn test_message_accessor() {
        let error = AirportdexError::database_operation("boom");
        assert_eq!(error.message(), "boom");
        assert_eq!(error.error_type(), "Database Operation Error");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_db_err_conversion() {
        let db_err = sea_orm::DbErr::Custom("lost connection".to_string());
        let error: AirportdexError = db_err.into();

        assert!(matches!(error, AirportdexError::DatabaseOperation(_)));
        assert!(error.to_string().contains("Database Operation Error"));
        assert!(error.to_string().contains("lost connection"));
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_error_trait_implementation() {
        let error = AirportdexError::database_connection("unreachable");
        let boxed: Box<dyn Error> = Box::new(error);

        assert!(boxed.to_string().contains("Database Connection Error"));
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_format_simple() {
        let error = AirportdexError::database_config("bad url");
        assert_eq!(
            error.format_simple(),
            "Database Configuration Error: bad url"
        );
    }

    #[test]
    fn test_result_alias() {
        fn fallible(ok: bool) -> Result<u32> {
            if ok {
                Ok(1)
            } else {
                Err(AirportdexError::database_operation("nope"))
            }
        }

        assert_eq!(fallible(true).unwrap(), 1);
        assert!(fallible(false).is_err());
    }
}
