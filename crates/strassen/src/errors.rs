//! Error handling and exit codes.

use strassen_cli::InputError;
use strassen_core::constants::exit_codes;
use strassen_core::MatrixError;

/// Map an application error to the process exit code.
///
/// Invalid operands, thresholds, and unreadable input are configuration
/// errors; anything else is generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<MatrixError>() {
            return exit_codes::ERROR_CONFIG;
        }
        if let Some(input) = cause.downcast_ref::<InputError>() {
            return match input {
                InputError::Io { .. } => exit_codes::ERROR_GENERIC,
                _ => exit_codes::ERROR_CONFIG,
            };
        }
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_errors_are_config_errors() {
        let err = anyhow::Error::new(MatrixError::InvalidThreshold(0));
        assert_eq!(exit_code(&err), 4);
        let err = anyhow::Error::new(MatrixError::ShapeMismatch { left: 1, right: 2 });
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn context_is_looked_through() {
        let err = anyhow::Error::new(InputError::Parse {
            line: 3,
            text: "x".into(),
        })
        .context("reading input");
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn oversized_dimension_is_config_error() {
        let err = anyhow::Error::new(InputError::DimensionTooLarge { dim: usize::MAX });
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn io_errors_are_generic() {
        let err = anyhow::Error::new(InputError::Io {
            path: "missing".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(exit_code(&err), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
