//! Tests for error formatting and context propagation

#[cfg(test)]
mod tests {
    use pipetile::io::error::{
        ErrorContext, GenerationError, Result, WithContext, file_system_error, invalid_parameter,
    };
    use std::error::Error;

    // Tests parameter errors name the parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("width", &2, &"too small");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'width' = '2': too small"
        );
        assert!(error.source().is_none());
    }

    // Tests exhaustion errors report the best attempt
    // Verified by printing min_size twice
    #[test]
    fn test_attempts_exhausted_display() {
        let error = GenerationError::AttemptsExhausted {
            attempts: 1000,
            min_size: 35,
            best: 30,
        };
        let message = error.to_string();
        assert!(message.contains("1000 attempts"));
        assert!(message.contains("35 tiles"));
        assert!(message.contains("largest was 30"));
    }

    // Tests attempt context lands on placement failures
    // Verified by discarding the context in with_context
    #[test]
    fn test_with_attempt_sets_attempt() {
        let failed: Result<()> = Err(GenerationError::NoCandidates {
            index: 7,
            attempt: 0,
        });

        match failed.with_attempt(4) {
            Err(GenerationError::NoCandidates { index, attempt }) => {
                assert_eq!(index, 7);
                assert_eq!(attempt, 4);
            }
            other => unreachable!("unexpected {other:?}"),
        }
    }

    // Tests context leaves other errors and successes alone
    // Verified by rewriting every error into NoCandidates
    #[test]
    fn test_with_context_passthrough() {
        let ok: Result<u8> = Ok(3);
        assert_eq!(ok.with_attempt(2).ok(), Some(3));

        let parse: Result<()> = Err(GenerationError::ParseMap {
            line: 2,
            reason: "bad".to_string(),
        });
        let context = ErrorContext {
            attempt: Some(9),
            operation: Some("parse"),
        };
        assert!(matches!(
            parse.with_context(context),
            Err(GenerationError::ParseMap { line: 2, .. })
        ));
    }

    // Tests io errors convert and keep their source
    // Verified by dropping the source in Error::source
    #[test]
    fn test_file_system_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = file_system_error("maps/a.txt", "read map", io);
        assert!(error.to_string().contains("read map"));
        assert!(error.to_string().contains("maps/a.txt"));
        assert!(error.source().is_some());

        let converted: GenerationError = std::io::Error::other("boom").into();
        assert!(matches!(
            converted,
            GenerationError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
    }
}
