//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod puppy_bowl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Nothing listens on the discard port, so the connection is refused
        let client = reqwest::Client::new();
        let result = client
            .get("http://127.0.0.1:9")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let error = PuppyBowlError::from(reqwest_error);

        match error {
            PuppyBowlError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = PuppyBowlError::from(json_error);

        match error {
            PuppyBowlError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let error = PuppyBowlError::from(io_error);

        match error {
            PuppyBowlError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_readline_error_conversion() {
        let error = PuppyBowlError::from(rustyline::error::ReadlineError::Eof);

        match error {
            PuppyBowlError::Readline(_) => (),
            _ => panic!("Expected Readline error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "fido".parse::<u32>().unwrap_err();
        let error = PuppyBowlError::from(parse_error);

        match error {
            PuppyBowlError::InvalidPlayerId(_) => (),
            _ => panic!("Expected InvalidPlayerId error variant"),
        }
    }

    #[test]
    fn test_api_error_message() {
        let error = PuppyBowlError::Api {
            message: "Player not found".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("reported an error"));
        assert!(error_string.contains("Player not found"));
    }

    #[test]
    fn test_missing_data_error() {
        let error = PuppyBowlError::MissingData {
            field: "players".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Puppy Bowl API response is missing `players`"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let error = PuppyBowlError::InvalidConfig {
            name: "PUPPY_BOWL_COHORT".to_string(),
        };
        assert!(error.to_string().contains("PUPPY_BOWL_COHORT"));
    }

    #[test]
    fn test_form_not_loaded_error() {
        assert_eq!(
            PuppyBowlError::FormNotLoaded.to_string(),
            "New player form has not been loaded"
        );
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn parse_id() -> Result<u32> {
            Ok("not-an-id".parse::<u32>()?)
        }

        match parse_id().unwrap_err() {
            PuppyBowlError::InvalidPlayerId(_) => (),
            _ => panic!("Expected InvalidPlayerId error"),
        }
    }
}
