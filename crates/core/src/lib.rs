#![forbid(unsafe_code)]

pub mod catalog;
pub mod fields;

pub mod ids {
    use serde::{Deserialize, Serialize};

    macro_rules! row_id {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                pub fn new(value: i64) -> Self {
                    Self(value)
                }

                pub fn get(self) -> i64 {
                    self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        };
    }

    row_id!(UserId);
    row_id!(AgentId);
    row_id!(
        /// Stable catalog id of a supported model (also the `agent_models` row id).
        ModelId
    );
    row_id!(MasterId);
    row_id!(MasterAgentId);
    row_id!(DetailId);
    row_id!(ItemId);
}

pub mod model {
    use crate::ids::UserId;
    use serde::{Deserialize, Serialize};

    /// Discriminator of a master. Fixed when the master is created.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum MasterType {
        List,
        Agent,
    }

    impl MasterType {
        pub fn as_str(self) -> &'static str {
            match self {
                MasterType::List => "list",
                MasterType::Agent => "agent",
            }
        }

        pub fn parse(value: &str) -> Option<Self> {
            match value {
                "list" => Some(MasterType::List),
                "agent" => Some(MasterType::Agent),
                _ => None,
            }
        }
    }

    /// The authenticated principal an operation runs on behalf of.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Caller {
        pub user_id: UserId,
    }

    impl Caller {
        pub fn new(user_id: UserId) -> Self {
            Self { user_id }
        }

        pub fn owns(&self, creator_id: UserId) -> bool {
            self.user_id == creator_id
        }
    }

    /// Ownership policy for reads.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub enum Access {
        /// Only the creator may read the record.
        #[default]
        Creator,
        /// Internal lookups that skip the ownership check.
        Internal,
    }
}
