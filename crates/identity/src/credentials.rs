use crate::Region;
use crate::error::{Error, Result};

/// Credential values supplied explicitly on the command line, before
/// environment fallback resolution.
#[derive(Clone, Debug, Default)]
pub struct CredentialInputs {
    /// Account username.
    pub username: Option<String>,

    /// Account API key.
    pub api_key: Option<String>,

    /// Account number scoping all resource lookups.
    pub tenant_id: Option<String>,

    /// Region of the target load balancer.
    pub region: Option<Region>,
}

/// Fully resolved account identity. All four fields are guaranteed
/// non-empty after resolution.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Account username.
    pub username: String,

    /// Account API key.
    pub api_key: String,

    /// Account number scoping all resource lookups.
    pub tenant_id: String,

    /// Region of the target load balancer.
    pub region: Region,
}

impl Credentials {
    /// Resolves each field from its explicit input, falling back to the
    /// environment lookup. The lookup is injected so resolution can be
    /// tested without touching the real process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingCredential`] naming the first field for
    /// which neither source yields a value, or [`Error::UnknownRegion`]
    /// when the fallback region code does not parse.
    pub fn resolve<F>(inputs: CredentialInputs, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = resolve_field(inputs.username, "--username", "OS_USERNAME", &env)?;
        let api_key = resolve_field(inputs.api_key, "--apikey", "OS_PASSWORD", &env)?;
        let tenant_id = resolve_field(inputs.tenant_id, "--ddi", "OS_TENANT_ID", &env)?;

        // An explicit region is already validated by argument parsing; only
        // the fallback value still needs to pass the closed-set check.
        let region = match inputs.region {
            Some(region) => region,
            None => resolve_field(None, "--region", "OS_REGION_NAME", &env)?.parse()?,
        };

        Ok(Self {
            username,
            api_key,
            tenant_id,
            region,
        })
    }
}

fn resolve_field<F>(
    explicit: Option<String>,
    flag: &'static str,
    env_var: &'static str,
    env: &F,
) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| env(env_var).filter(|value| !value.is_empty()))
        .ok_or(Error::MissingCredential { flag, env: env_var })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn explicit_values_win_over_environment() {
        let inputs = CredentialInputs {
            username: Some("flag-user".to_string()),
            api_key: Some("flag-key".to_string()),
            tenant_id: Some("123456".to_string()),
            region: Some(Region::Ord),
        };

        let credentials = Credentials::resolve(inputs, |name| match name {
            "OS_USERNAME" => Some("env-user".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(credentials.username, "flag-user");
        assert_eq!(credentials.region, Region::Ord);
    }

    #[test]
    fn falls_back_to_environment() {
        let credentials = Credentials::resolve(CredentialInputs::default(), |name| {
            match name {
                "OS_USERNAME" => Some("env-user".to_string()),
                "OS_PASSWORD" => Some("env-key".to_string()),
                "OS_TENANT_ID" => Some("654321".to_string()),
                "OS_REGION_NAME" => Some("syd".to_string()),
                _ => None,
            }
        })
        .unwrap();

        assert_eq!(credentials.username, "env-user");
        assert_eq!(credentials.api_key, "env-key");
        assert_eq!(credentials.tenant_id, "654321");
        assert_eq!(credentials.region, Region::Syd);
    }

    #[test]
    fn missing_field_names_flag_and_variable() {
        let inputs = CredentialInputs {
            username: Some("user".to_string()),
            ..CredentialInputs::default()
        };

        let error = Credentials::resolve(inputs, no_env).unwrap_err();

        assert!(matches!(
            error,
            Error::MissingCredential {
                flag: "--apikey",
                env: "OS_PASSWORD"
            }
        ));
    }

    #[test]
    fn empty_values_are_treated_as_absent() {
        let inputs = CredentialInputs {
            username: Some(String::new()),
            ..CredentialInputs::default()
        };

        let error = Credentials::resolve(inputs, no_env).unwrap_err();

        assert!(matches!(
            error,
            Error::MissingCredential {
                flag: "--username",
                ..
            }
        ));
    }

    #[test]
    fn invalid_fallback_region_is_rejected() {
        let inputs = CredentialInputs {
            username: Some("user".to_string()),
            api_key: Some("key".to_string()),
            tenant_id: Some("123456".to_string()),
            region: None,
        };

        let error = Credentials::resolve(inputs, |name| match name {
            "OS_REGION_NAME" => Some("atl".to_string()),
            _ => None,
        })
        .unwrap_err();

        assert!(matches!(error, Error::UnknownRegion(code) if code == "atl"));
    }
}
