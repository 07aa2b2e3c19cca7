use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, Vec};

use crate::{config::VALID_SIGNATURE_MAGIC, error::CommitteeError, interfaces::SignatureValidatorClient};

/// Identity of a committee member.
///
/// Committees keep their members sorted by the derived `Ord`, which places
/// every `Ed25519` key before every `Contract` signer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Signer {
    /// Raw ed25519 public key signing the digest directly.
    Ed25519(BytesN<32>),
    /// Contract account vouching for the digest through `is_valid_signature`.
    Contract(Address),
}

/// Ordered signer/signature pairs, XDR-encoded when handed to
/// `is_valid_signature` as a single opaque blob.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignatureSet {
    pub signers: Vec<Signer>,
    pub signatures: Vec<Bytes>,
}

pub fn valid_signature_magic(env: &Env) -> BytesN<4> {
    BytesN::from_array(env, &VALID_SIGNATURE_MAGIC)
}

/// Checks that `signature` authorizes `digest` on behalf of `signer`.
///
/// A bad ed25519 signature traps inside the host, which aborts the whole
/// invocation just like an error return would.
pub fn verify_signature(
    env: &Env,
    signer: &Signer,
    digest: &BytesN<32>,
    signature: &Bytes,
) -> Result<(), CommitteeError> {
    match signer {
        Signer::Ed25519(public_key) => {
            let signature: BytesN<64> = signature
                .clone()
                .try_into()
                .map_err(|_| CommitteeError::InvalidSignature)?;
            env.crypto()
                .ed25519_verify(public_key, &digest.clone().into(), &signature);
            Ok(())
        }
        Signer::Contract(account) => {
            let validator = SignatureValidatorClient::new(env, account);
            match validator.try_is_valid_signature(digest, signature) {
                Ok(Ok(magic)) if magic == valid_signature_magic(env) => Ok(()),
                _ => Err(CommitteeError::InvalidSignature),
            }
        }
    }
}
