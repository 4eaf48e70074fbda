use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// 20-byte address of the trusted signing service (see utils::derive_signer_address).
    pub server_signer: Binary,
}

// Signatures are 65-byte recoverable secp256k1 signatures (r || s || v, with
// v either 0/1 or the legacy 27/28) over a keccak256 message hash:
//   create / update_content_hash  -> keccak256(content_hash)
//   delete_resolver               -> keccak256(digest)
//   create_secondary_resolver     -> keccak256(digest || primary_digest)
//   delete_secondary_resolver     -> keccak256(digest)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    CreateResolver {
        digest: Vec<u8>,
        content_hash: String,
        signature: Binary,
        allow_server: bool,
    },
    UpdateContentHash {
        digest: Vec<u8>,
        content_hash: String,
        signature: Option<Binary>,
    },
    /// Owner-only: flip server authorization and reassign (or clear) the owner.
    UpdateResolverOwner {
        digest: Vec<u8>,
        allow_server: bool,
        owner: Option<String>,
    },
    DeleteResolver {
        digest: Vec<u8>,
        signature: Option<Binary>,
    },
    CreateSecondaryResolver {
        digest: Vec<u8>,
        primary_digest: Vec<u8>,
        signature: Option<Binary>,
    },
    DeleteSecondaryResolver {
        digest: Vec<u8>,
        signature: Option<Binary>,
    },
    SetServerSigner {
        server_signer: Binary,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetResolver { digest: Vec<u8> },
    GetContentHash { digest: Vec<u8> },
    GetSecondaryResolver { digest: Vec<u8> },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolverResponse {
    pub content_hash: String,
    pub owner: Option<Addr>,
    pub allow_server: bool,
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ContentHashResponse {
    pub content_hash: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SecondaryResolverResponse {
    pub primary_digest: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub server_signer: Binary,
    pub admin: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
