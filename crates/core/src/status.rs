//! Closed enumerations for project status, display tier, and domain.
//!
//! Status and domain are stored as TEXT; their string labels are the wire
//! and database representation. Tier is stored as a nullable SMALLINT.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! define_label_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($what:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The stored / serialized label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok($name::$variant), )+
                    _ => {
                        let valid: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        Err(CoreError::Validation(format!(
                            "Invalid {} '{s}'. Must be one of: {}",
                            $what,
                            valid.join(", ")
                        )))
                    }
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

define_label_enum! {
    /// Mentor-controlled lifecycle label.
    ///
    /// `complete` and `deployed` may carry a great/good/decent/bad quality
    /// qualifier; the qualified completion labels use the `completed-` stem.
    ProjectStatus ("status") {
        Pending = "pending",
        Incomplete = "incomplete",
        Complete = "complete",
        CompletedGreat = "completed-great",
        CompletedGood = "completed-good",
        CompletedDecent = "completed-decent",
        CompletedBad = "completed-bad",
        Deployed = "deployed",
        DeployedGreat = "deployed-great",
        DeployedGood = "deployed-good",
        DeployedDecent = "deployed-decent",
        DeployedBad = "deployed-bad",
    }
}

impl ProjectStatus {
    /// Deployed projects, qualified or not.
    pub fn is_deployed(self) -> bool {
        matches!(
            self,
            Self::Deployed
                | Self::DeployedGreat
                | Self::DeployedGood
                | Self::DeployedDecent
                | Self::DeployedBad
        )
    }

    /// Completed projects. Deployment implies completion.
    pub fn is_completed(self) -> bool {
        self.is_deployed()
            || matches!(
                self,
                Self::Complete
                    | Self::CompletedGreat
                    | Self::CompletedGood
                    | Self::CompletedDecent
                    | Self::CompletedBad
            )
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Pending
    }
}

define_label_enum! {
    /// Submission category.
    ProjectDomain ("domain") {
        WebDevelopment = "Web Development",
        MobileDevelopment = "Mobile Development",
        AiMl = "AI/ML",
        DataScience = "Data Science",
        DevOps = "DevOps",
        Blockchain = "Blockchain",
        GameDevelopment = "Game Development",
        Iot = "IoT",
        Cybersecurity = "Cybersecurity",
        Other = "Other",
    }
}

/// Mentor-assigned display priority. Absent means unranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
#[repr(i16)]
pub enum Tier {
    Featured = 1,
    Highlighted = 2,
    Showcased = 3,
}

impl Tier {
    /// Return the stored tier number.
    pub fn id(self) -> i16 {
        self as i16
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Featured => "Featured",
            Tier::Highlighted => "Highlighted",
            Tier::Showcased => "Showcased",
        }
    }
}

impl From<Tier> for i16 {
    fn from(value: Tier) -> Self {
        value as i16
    }
}

impl TryFrom<i16> for Tier {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Tier::Featured),
            2 => Ok(Tier::Highlighted),
            3 => Ok(Tier::Showcased),
            other => Err(CoreError::Validation(format!(
                "Invalid tier {other}. Must be 1, 2, or 3"
            ))),
        }
    }
}
