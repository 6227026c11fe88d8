use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The closed set of regions the load balancer service is deployed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Region {
    /// Dallas-Fort Worth
    Dfw,

    /// Hong Kong
    Hkg,

    /// Northern Virginia
    Iad,

    /// London
    Lon,

    /// Chicago
    Ord,

    /// Sydney
    Syd,
}

impl Region {
    /// The lowercase region code used in flags and endpoint hostnames.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dfw => "dfw",
            Self::Hkg => "hkg",
            Self::Iad => "iad",
            Self::Lon => "lon",
            Self::Ord => "ord",
            Self::Syd => "syd",
        }
    }

    /// The region-scoped load balancer API endpoint.
    #[must_use]
    pub fn endpoint(self) -> String {
        format!("https://{}.loadbalancers.api.rackspacecloud.com", self.code())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfw" => Ok(Self::Dfw),
            "hkg" => Ok(Self::Hkg),
            "iad" => Ok(Self::Iad),
            "lon" => Ok(Self::Lon),
            "ord" => Ok(Self::Ord),
            "syd" => Ok(Self::Syd),
            _ => Err(Error::UnknownRegion(s.to_string())),
        }
    }
}
