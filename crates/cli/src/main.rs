//! CLI binary to create or add a certificate mapping for a cloud load
//! balancer.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::path::PathBuf;

use certmap_identity::{CredentialInputs, Credentials, Region};
use certmap_identity_http::HttpIdentityService;
use certmap_loadbalancer_http::HttpLoadBalancerClient;
use certmap_material::MaterialPaths;
use certmap_workflow::{ProvisionRequest, provision};
use clap::Parser;

/// CLI-specific error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Credential resolution error
    #[error(transparent)]
    Credentials(#[from] certmap_identity::Error),

    /// HTTP client construction error
    #[error("http client error: {0}")]
    Client(String),

    /// Certificate material error
    #[error(transparent)]
    Material(#[from] certmap_material::Error),

    /// Mapping listing rendering error
    #[error("failed to render mapping listing: {0}")]
    Render(#[from] serde_json::Error),

    /// Workflow error
    #[error(transparent)]
    Workflow(#[from] certmap_workflow::Error),
}

/// Create or add a certificate mapping for a cloud load balancer.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// The id of the load balancer
    #[arg(value_name = "LB-ID")]
    lbid: String,

    /// The domain or hostname of the certificate
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// The username for the account (or set the OS_USERNAME environment
    /// variable)
    #[arg(long, value_name = "USERNAME")]
    username: Option<String>,

    /// The API key for the account (or set the OS_PASSWORD environment
    /// variable)
    #[arg(long, value_name = "API-KEY")]
    apikey: Option<String>,

    /// The region of the load balancer (or set the OS_REGION_NAME
    /// environment variable)
    #[arg(long, value_name = "REGION")]
    region: Option<Region>,

    /// The account number for the account (or set the OS_TENANT_ID
    /// environment variable)
    #[arg(long, value_name = "TENANT-ID")]
    ddi: Option<String>,

    /// Enable SSL termination and set this as the default certificate
    #[arg(long)]
    ssl: bool,

    /// The file containing the private key
    #[arg(long, value_name = "PRIVATE-KEY-FILE")]
    key: PathBuf,

    /// The file containing the certificate
    #[arg(long, value_name = "CERTIFICATE-FILE")]
    crt: PathBuf,

    /// The file containing the intermediate certificate(s)
    #[arg(long, value_name = "INTERMEDIATE-CERTIFICATE-FILE")]
    cacrt: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let credentials = Credentials::resolve(
        CredentialInputs {
            username: args.username,
            api_key: args.apikey,
            tenant_id: args.ddi,
            region: args.region,
        },
        |name| std::env::var(name).ok(),
    )?;

    // Material is loaded before the first remote call so an unreadable
    // file can never abort a partially-applied run.
    let paths = MaterialPaths {
        private_key: args.key,
        certificate: args.crt,
        intermediate_certificate: args.cacrt,
    };
    let mapping = certmap_material::load(&args.domain, &paths).await?;

    let identity = HttpIdentityService::new().map_err(|e| Error::Client(e.to_string()))?;
    let client = HttpLoadBalancerClient::new(credentials.region, &credentials.tenant_id)
        .map_err(|e| Error::Client(e.to_string()))?;

    let request = ProvisionRequest {
        lb_id: args.lbid,
        enable_termination: args.ssl,
        mapping,
    };

    let outcome = provision(&credentials, request, &identity, &client).await?;

    // The receipt is reported verbatim; the listing is the confirmation
    // artifact, indented with sorted keys for inspection.
    println!("{}", outcome.receipt.body);
    println!("{}", outcome.receipt.status);
    println!("{}", serde_json::to_string_pretty(&outcome.mappings)?);

    Ok(())
}
