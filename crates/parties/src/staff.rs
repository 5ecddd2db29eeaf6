use serde::{Deserialize, Serialize};

use depot_core::{ActorId, Entity};

/// Anyone whose id is checked against the authorization registry.
pub trait Actor {
    fn actor_id(&self) -> ActorId;

    fn name(&self) -> &str;
}

/// Warehouse staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: ActorId,
    name: String,
}

impl Employee {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ActorId::new(), name)
    }

    pub fn with_id(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Staff member who carries orders out of the warehouse.
///
/// Shares the employee id space. Which orders a courier currently holds is
/// tracked by the warehouse, not by the courier value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Courier {
    id: ActorId,
    name: String,
}

impl Courier {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(ActorId::new(), name)
    }

    pub fn with_id(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

macro_rules! impl_staff {
    ($t:ty, $label:literal) => {
        impl Actor for $t {
            fn actor_id(&self) -> ActorId {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }

        impl Entity for $t {
            type Id = ActorId;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} {} ({})", $label, self.name, self.id)
            }
        }
    };
}

impl_staff!(Employee, "employee");
impl_staff!(Courier, "courier");
