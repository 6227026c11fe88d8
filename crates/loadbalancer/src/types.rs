use serde::{Deserialize, Serialize};

/// A certificate mapping: the association between one hostname (SNI) and
/// its certificate material.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateMapping {
    /// The domain or hostname the certificate is served for.
    pub host_name: String,

    /// PEM private key contents, verbatim.
    pub private_key: String,

    /// PEM certificate contents, verbatim.
    pub certificate: String,

    /// Optional intermediate chain; omitted from the payload when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediate_certificate: Option<String>,
}

/// Wire envelope for mapping submission.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateMappingEnvelope<'a> {
    /// The mapping being submitted.
    pub certificate_mapping: &'a CertificateMapping,
}

/// The SSL termination state of a load balancer, derived from the status
/// of the termination sub-resource query.
#[derive(Clone, Debug)]
pub struct TerminationState {
    /// Whether termination is configured (the query returned 200).
    pub enabled: bool,

    /// Raw response body, kept for diagnostics.
    pub raw: String,
}

impl TerminationState {
    /// Extracts the service's diagnostic `message` field from the raw
    /// body, if present.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        #[derive(Deserialize)]
        struct Body {
            message: String,
        }

        serde_json::from_str::<Body>(&self.raw)
            .ok()
            .map(|body| body.message)
    }
}

/// The submission response, surfaced verbatim and deliberately not
/// validated against an expected status.
#[derive(Clone, Debug)]
pub struct SubmissionReceipt {
    /// HTTP status of the submission response.
    pub status: u16,

    /// Raw response body.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_camel_case_fields() {
        let mapping = CertificateMapping {
            host_name: "example.com".to_string(),
            private_key: "KEY".to_string(),
            certificate: "CRT".to_string(),
            intermediate_certificate: Some("CHAIN".to_string()),
        };

        let json = serde_json::to_value(CertificateMappingEnvelope {
            certificate_mapping: &mapping,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "certificateMapping": {
                    "hostName": "example.com",
                    "privateKey": "KEY",
                    "certificate": "CRT",
                    "intermediateCertificate": "CHAIN"
                }
            })
        );
    }

    #[test]
    fn absent_chain_is_omitted_from_the_payload() {
        let mapping = CertificateMapping {
            host_name: "example.com".to_string(),
            private_key: "KEY".to_string(),
            certificate: "CRT".to_string(),
            intermediate_certificate: None,
        };

        let json = serde_json::to_value(CertificateMappingEnvelope {
            certificate_mapping: &mapping,
        })
        .unwrap();

        assert!(
            json["certificateMapping"]
                .as_object()
                .unwrap()
                .get("intermediateCertificate")
                .is_none()
        );
    }

    #[test]
    fn message_is_read_from_the_raw_body() {
        let state = TerminationState {
            enabled: false,
            raw: r#"{"message":"No SSL termination configuration found"}"#.to_string(),
        };

        assert_eq!(
            state.message().as_deref(),
            Some("No SSL termination configuration found")
        );
    }

    #[test]
    fn message_is_none_for_non_json_bodies() {
        let state = TerminationState {
            enabled: true,
            raw: "<html>gateway error</html>".to_string(),
        };

        assert!(state.message().is_none());
    }
}
