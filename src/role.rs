use std::fmt;
use std::ops::Not;
use serde::{Serialize, Deserialize};
use Role::*;

// which adversary picks the value at a given level of the tree
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    pub fn opponent(&self) -> Role {
        match self {
            Maximizer => Minimizer,
            Minimizer => Maximizer,
        }
    }
}

impl Not for Role {
    type Output = Role;

    fn not(self) -> Role {
        self.opponent()
    }
}

impl Default for Role {
    fn default() -> Self {
        Maximizer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maximizer => write!(f, "max"),
            Minimizer => write!(f, "min"),
        }
    }
}
