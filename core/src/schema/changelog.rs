use serde::{Deserialize, Serialize};

use super::Schema;

/// Entities added or changed in the current data version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub character: Vec<u32>,
    pub lightcone: Vec<u32>,
    pub relicset: Vec<u32>,
    pub version: String,
}

impl Schema for Changelog {
    const ENTITY: &'static str = "Changelog";
}
