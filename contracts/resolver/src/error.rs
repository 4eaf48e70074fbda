use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: Sender {sender} may not modify resolver {digest}.")]
    Unauthorized { sender: String, digest: String },

    #[error("NotAdmin: Sender is {sender}, but admin is {admin}.")]
    NotAdmin { sender: String, admin: String },

    #[error("NotFound: No resolver record exists for digest {digest}.")]
    NotFound { digest: String },

    #[error("PrimaryNotFound: No primary resolver record exists for digest {digest}.")]
    PrimaryNotFound { digest: String },

    #[error("AlreadyExists: A resolver already occupies digest {digest}.")]
    AlreadyExists { digest: String },

    #[error("InvalidDigest: Identifier digests must be 32 bytes.")]
    InvalidDigest {},

    #[error("InvalidSignerKey: Server signer must be a 20-byte address.")]
    InvalidSignerKey {},
}
