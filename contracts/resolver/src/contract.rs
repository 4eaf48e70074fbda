use crate::error::ContractError;
use crate::handler::{
    create_resolver, create_secondary_resolver, delete_resolver, delete_secondary_resolver,
    get_config, query_content_hash, query_resolver, query_secondary_resolver, set_server_signer,
    update_content_hash, update_resolver_owner,
};
use crate::state::{Config, CONFIG, SIGNER_ADDRESS_LENGTH};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use wallettree::resolver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

const CONTRACT_NAME: &str = "crates.io:wallettree-resolver";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.server_signer.len() != SIGNER_ADDRESS_LENGTH {
        return Err(ContractError::InvalidSignerKey {});
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            server_signer: msg.server_signer.clone(),
            admin: sender,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("server_signer", hex::encode(msg.server_signer.as_slice())))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateResolver {
            digest,
            content_hash,
            signature,
            allow_server,
        } => create_resolver(deps, env, info, digest, content_hash, signature, allow_server),
        ExecuteMsg::UpdateContentHash {
            digest,
            content_hash,
            signature,
        } => update_content_hash(deps, env, info, digest, content_hash, signature),
        ExecuteMsg::UpdateResolverOwner {
            digest,
            allow_server,
            owner,
        } => update_resolver_owner(deps, env, info, digest, allow_server, owner),
        ExecuteMsg::DeleteResolver { digest, signature } => {
            delete_resolver(deps, env, info, digest, signature)
        }
        ExecuteMsg::CreateSecondaryResolver {
            digest,
            primary_digest,
            signature,
        } => create_secondary_resolver(deps, env, info, digest, primary_digest, signature),
        ExecuteMsg::DeleteSecondaryResolver { digest, signature } => {
            delete_secondary_resolver(deps, env, info, digest, signature)
        }
        ExecuteMsg::SetServerSigner { server_signer } => {
            set_server_signer(deps, env, info, server_signer)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetResolver { digest } => to_json_binary(&query_resolver(deps, env, digest)?),
        QueryMsg::GetContentHash { digest } => {
            to_json_binary(&query_content_hash(deps, env, digest)?)
        }
        QueryMsg::GetSecondaryResolver { digest } => {
            to_json_binary(&query_secondary_resolver(deps, env, digest)?)
        }
        QueryMsg::GetConfig {} => to_json_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
