use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Binary, CanonicalAddr};
use cw_storage_plus::{Item, Map};

pub const DIGEST_LENGTH: usize = 32;
pub const SIGNER_ADDRESS_LENGTH: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub server_signer: Binary,
    pub admin: CanonicalAddr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolverRecord {
    pub content_hash: String,
    pub owner: CanonicalAddr,
    pub allow_server: bool,
}

impl ResolverRecord {
    // What an absent digest resolves to, and what a dangling secondary
    // authorizes against: no content, no owner, server disallowed.
    pub fn zero() -> Self {
        ResolverRecord {
            content_hash: String::new(),
            owner: no_owner(),
            allow_server: false,
        }
    }

    pub fn has_owner(&self) -> bool {
        !self.owner.as_slice().is_empty()
    }
}

// Address canonicalization never yields an empty address, so no sender can
// collide with the unclaimed-record sentinel.
pub fn no_owner() -> CanonicalAddr {
    CanonicalAddr::from(vec![])
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

pub const RESOLVERS: Map<Vec<u8>, ResolverRecord> = Map::new("RESOLVERS");

pub const SECONDARIES: Map<Vec<u8>, Vec<u8>> = Map::new("SECONDARIES");
