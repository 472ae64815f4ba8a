//! Error handling and exit codes.

use fibstats_core::exit_codes;
use fibstats_core::StatsError;

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<StatsError>() {
        Some(StatsError::InvalidCount(_) | StatsError::OutOfRange(_)) => exit_codes::ERROR_INPUT,
        None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        let err = anyhow::Error::new(StatsError::InvalidCount("x".into()));
        assert_eq!(exit_code(&err), 2);
        let err = anyhow::Error::new(StatsError::OutOfRange("1e40".into()));
        assert_eq!(exit_code(&err), 2);
        let err = anyhow::anyhow!("broken pipe");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn context_preserves_code() {
        let err = anyhow::Error::new(StatsError::InvalidCount("x".into()))
            .context("reading counts");
        assert_eq!(exit_code(&err), exit_codes::ERROR_INPUT);
    }
}
