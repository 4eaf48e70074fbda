use crate::error::ContractError;
use crate::state::{
    no_owner, ResolverRecord, CONFIG, DIGEST_LENGTH, RESOLVERS, SECONDARIES,
    SIGNER_ADDRESS_LENGTH,
};
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use wallettree::resolver::{
    ConfigResponse, ContentHashResponse, ResolverResponse, SecondaryResolverResponse,
};
use wallettree::utils::{
    convert_digest_to_hex_string, derive_signer_address, get_content_hash_message,
    get_deletion_message, get_secondary_message,
};

fn only_admin(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.admin {
        return Err(ContractError::NotAdmin {
            sender: info.sender.to_string(),
            admin: deps.api.addr_humanize(&config.admin)?.to_string(),
        });
    }
    Ok(true)
}

fn recover_signer(deps: &DepsMut, message_hash: &[u8], signature: &[u8]) -> Option<Vec<u8>> {
    if signature.len() != 65 {
        return None;
    }
    // recovery id is 0/1, or 27/28 in the legacy ecrecover encoding
    let v = signature[64];
    let recovery_param = if v >= 27 { v - 27 } else { v };
    if recovery_param > 1 {
        return None;
    }
    let public_key = deps
        .api
        .secp256k1_recover_pubkey(message_hash, &signature[..64], recovery_param)
        .ok()?;
    Some(derive_signer_address(&public_key))
}

fn is_server_signed(
    deps: &DepsMut,
    message_hash: &[u8],
    signature: &Binary,
) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    match recover_signer(deps, message_hash, signature.as_slice()) {
        Some(signer) => Ok(signer == config.server_signer.as_slice()),
        None => Ok(false),
    }
}

pub fn only_authorized(
    deps: &DepsMut,
    info: &MessageInfo,
    digest: &[u8],
    record: &ResolverRecord,
    message_hash: &[u8],
    signature: &Option<Binary>,
) -> Result<bool, ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if record.has_owner() && record.owner == sender {
        return Ok(true);
    }
    if record.allow_server {
        if let Some(signature) = signature {
            if is_server_signed(deps, message_hash, signature)? {
                return Ok(true);
            }
        }
    }
    return Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        digest: convert_digest_to_hex_string(digest),
    });
}

fn only_server_signed(
    deps: &DepsMut,
    info: &MessageInfo,
    digest: &[u8],
    message_hash: &[u8],
    signature: &Binary,
) -> Result<bool, ContractError> {
    if is_server_signed(deps, message_hash, signature)? {
        return Ok(true);
    }
    return Err(ContractError::Unauthorized {
        sender: info.sender.to_string(),
        digest: convert_digest_to_hex_string(digest),
    });
}

pub fn create_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    content_hash: String,
    signature: Binary,
    allow_server: bool,
) -> Result<Response, ContractError> {
    if digest.len() != DIGEST_LENGTH {
        return Err(ContractError::InvalidDigest {});
    }
    if RESOLVERS.may_load(deps.storage, digest.clone())?.is_some()
        || SECONDARIES.may_load(deps.storage, digest.clone())?.is_some()
    {
        return Err(ContractError::AlreadyExists {
            digest: convert_digest_to_hex_string(&digest),
        });
    }
    // No record exists yet, so creation has no owner path; it is gated on
    // the trusted signer regardless of allow_server.
    only_server_signed(
        &deps,
        &info,
        &digest,
        &get_content_hash_message(&content_hash),
        &signature,
    )?;
    RESOLVERS.save(
        deps.storage,
        digest.clone(),
        &ResolverRecord {
            content_hash,
            owner: no_owner(),
            allow_server,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "create_resolver")
        .add_attribute("digest", convert_digest_to_hex_string(&digest))
        .add_attribute("allow_server", allow_server.to_string()))
}

pub fn update_content_hash(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    content_hash: String,
    signature: Option<Binary>,
) -> Result<Response, ContractError> {
    let record_option = RESOLVERS.may_load(deps.storage, digest.clone())?;
    let mut record = match record_option {
        Some(record) => record,
        None => {
            return Err(ContractError::NotFound {
                digest: convert_digest_to_hex_string(&digest),
            })
        }
    };
    only_authorized(
        &deps,
        &info,
        &digest,
        &record,
        &get_content_hash_message(&content_hash),
        &signature,
    )?;
    record.content_hash = content_hash;
    RESOLVERS.save(deps.storage, digest.clone(), &record)?;
    Ok(Response::new()
        .add_attribute("method", "update_content_hash")
        .add_attribute("digest", convert_digest_to_hex_string(&digest)))
}

pub fn update_resolver_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    allow_server: bool,
    owner: Option<String>,
) -> Result<Response, ContractError> {
    let record_option = RESOLVERS.may_load(deps.storage, digest.clone())?;
    let mut record = match record_option {
        Some(record) => record,
        None => {
            return Err(ContractError::NotFound {
                digest: convert_digest_to_hex_string(&digest),
            })
        }
    };
    // Changing the authorization policy never accepts signature proof, and
    // there is no admin override: a record whose owner is unset stays that
    // way until it is deleted and created again.
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if !record.has_owner() || record.owner != sender {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            digest: convert_digest_to_hex_string(&digest),
        });
    }
    record.allow_server = allow_server;
    record.owner = match owner {
        Some(owner) => deps.api.addr_canonicalize(owner.as_str())?,
        None => no_owner(),
    };
    RESOLVERS.save(deps.storage, digest.clone(), &record)?;
    Ok(Response::new()
        .add_attribute("method", "update_resolver_owner")
        .add_attribute("digest", convert_digest_to_hex_string(&digest))
        .add_attribute("allow_server", allow_server.to_string()))
}

pub fn delete_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    signature: Option<Binary>,
) -> Result<Response, ContractError> {
    let record_option = RESOLVERS.may_load(deps.storage, digest.clone())?;
    let record = match record_option {
        Some(record) => record,
        None => {
            return Err(ContractError::NotFound {
                digest: convert_digest_to_hex_string(&digest),
            })
        }
    };
    only_authorized(
        &deps,
        &info,
        &digest,
        &record,
        &get_deletion_message(&digest),
        &signature,
    )?;
    RESOLVERS.remove(deps.storage, digest.clone());
    Ok(Response::new()
        .add_attribute("method", "delete_resolver")
        .add_attribute("digest", convert_digest_to_hex_string(&digest)))
}

pub fn create_secondary_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    primary_digest: Vec<u8>,
    signature: Option<Binary>,
) -> Result<Response, ContractError> {
    if digest.len() != DIGEST_LENGTH || primary_digest.len() != DIGEST_LENGTH {
        return Err(ContractError::InvalidDigest {});
    }
    let primary_option = RESOLVERS.may_load(deps.storage, primary_digest.clone())?;
    let primary = match primary_option {
        Some(record) => record,
        None => {
            return Err(ContractError::PrimaryNotFound {
                digest: convert_digest_to_hex_string(&primary_digest),
            })
        }
    };
    // A digest is either a primary record or a secondary pointer, never both.
    if SECONDARIES.may_load(deps.storage, digest.clone())?.is_some()
        || RESOLVERS.may_load(deps.storage, digest.clone())?.is_some()
    {
        return Err(ContractError::AlreadyExists {
            digest: convert_digest_to_hex_string(&digest),
        });
    }
    only_authorized(
        &deps,
        &info,
        &digest,
        &primary,
        &get_secondary_message(&digest, &primary_digest),
        &signature,
    )?;
    SECONDARIES.save(deps.storage, digest.clone(), &primary_digest)?;
    Ok(Response::new()
        .add_attribute("method", "create_secondary_resolver")
        .add_attribute("digest", convert_digest_to_hex_string(&digest))
        .add_attribute("primary_digest", convert_digest_to_hex_string(&primary_digest)))
}

pub fn delete_secondary_resolver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    digest: Vec<u8>,
    signature: Option<Binary>,
) -> Result<Response, ContractError> {
    let primary_option = SECONDARIES.may_load(deps.storage, digest.clone())?;
    let primary_digest = match primary_option {
        Some(primary_digest) => primary_digest,
        None => {
            return Err(ContractError::NotFound {
                digest: convert_digest_to_hex_string(&digest),
            })
        }
    };
    // A secondary carries no owner or policy of its own; authorization is
    // whatever the primary record would grant. A dangling secondary checks
    // against the zero record, which admits no one until the primary digest
    // is created again.
    let primary = RESOLVERS
        .may_load(deps.storage, primary_digest.clone())?
        .unwrap_or_else(ResolverRecord::zero);
    only_authorized(
        &deps,
        &info,
        &digest,
        &primary,
        &get_deletion_message(&digest),
        &signature,
    )?;
    SECONDARIES.remove(deps.storage, digest.clone());
    Ok(Response::new()
        .add_attribute("method", "delete_secondary_resolver")
        .add_attribute("digest", convert_digest_to_hex_string(&digest)))
}

pub fn set_server_signer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    server_signer: Binary,
) -> Result<Response, ContractError> {
    only_admin(deps.as_ref(), &info)?;
    if server_signer.len() != SIGNER_ADDRESS_LENGTH {
        return Err(ContractError::InvalidSignerKey {});
    }
    let mut config = CONFIG.load(deps.storage)?;
    config.server_signer = server_signer.clone();
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_server_signer")
        .add_attribute("server_signer", hex::encode(server_signer.as_slice())))
}

fn resolve_record(deps: Deps, digest: &[u8]) -> StdResult<Option<ResolverRecord>> {
    let target = match SECONDARIES.may_load(deps.storage, digest.to_vec())? {
        Some(primary_digest) => primary_digest,
        None => digest.to_vec(),
    };
    RESOLVERS.may_load(deps.storage, target)
}

pub fn query_resolver(deps: Deps, _env: Env, digest: Vec<u8>) -> StdResult<ResolverResponse> {
    match resolve_record(deps, &digest)? {
        Some(record) => Ok(ResolverResponse {
            owner: if record.has_owner() {
                Some(deps.api.addr_humanize(&record.owner)?)
            } else {
                None
            },
            content_hash: record.content_hash,
            allow_server: record.allow_server,
            exists: true,
        }),
        None => Ok(ResolverResponse {
            content_hash: String::new(),
            owner: None,
            allow_server: false,
            exists: false,
        }),
    }
}

pub fn query_content_hash(deps: Deps, _env: Env, digest: Vec<u8>) -> StdResult<ContentHashResponse> {
    let record = resolve_record(deps, &digest)?;
    Ok(ContentHashResponse {
        content_hash: record.map_or(String::new(), |record| record.content_hash),
    })
}

pub fn query_secondary_resolver(
    deps: Deps,
    _env: Env,
    digest: Vec<u8>,
) -> StdResult<SecondaryResolverResponse> {
    let primary_digest = SECONDARIES.load(deps.storage, digest)?;
    Ok(SecondaryResolverResponse { primary_digest })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let admin = deps.api.addr_humanize(&config.admin)?;
    Ok(ConfigResponse {
        server_signer: config.server_signer,
        admin,
    })
}
