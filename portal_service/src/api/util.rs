use portal_env::Environment;

/// Failure detail for the envelope's `error` field. Outside production the
/// debug form of the failure rides along; production callers only ever see
/// the generic message.
pub fn error_detail(environment: Environment, error: &impl std::fmt::Debug) -> Option<String> {
    environment.debug_enabled().then(|| format!("{error:?}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn detail_is_withheld_in_production() {
        let error = anyhow::anyhow!("connection refused");

        assert_eq!(error_detail(Environment::Production, &error), None);
    }

    #[test]
    fn detail_is_included_outside_production() {
        let error = anyhow::anyhow!("connection refused");

        let detail = error_detail(Environment::Develop, &error).unwrap();

        assert!(detail.contains("connection refused"));
    }
}
