//! Threshold signature verification over a fixed, sorted committee.

use soroban_sdk::{xdr::FromXdr, Bytes, BytesN, Env, Vec};

use crate::{
    error::CommitteeError,
    signer::{valid_signature_magic, verify_signature, SignatureSet, Signer},
};

/// Verifies that at least `threshold` members of `members` signed `digest`.
///
/// `signers` must be a strictly increasing subsequence of `members`. The
/// member cursor only ever moves forward, so a duplicated, unsorted or
/// unknown signer runs it off the end of the committee.
pub fn check_signatures(
    env: &Env,
    members: &Vec<Signer>,
    digest: &BytesN<32>,
    signers: &Vec<Signer>,
    signatures: &Vec<Bytes>,
    threshold: u32,
) -> Result<(), CommitteeError> {
    if threshold == 0 {
        return Err(CommitteeError::InvalidThreshold);
    }
    if signatures.len() != signers.len() {
        return Err(CommitteeError::LengthMismatch);
    }
    if signatures.len() < threshold {
        return Err(CommitteeError::InsufficientSignatures);
    }

    let mut cursor: u32 = 0;
    for (signer, signature) in signers.iter().zip(signatures.iter()) {
        verify_signature(env, &signer, digest, &signature)?;
        while cursor < members.len() && members.get_unchecked(cursor) != signer {
            cursor += 1;
        }
        if cursor == members.len() {
            return Err(CommitteeError::SignerNotMember);
        }
        cursor += 1;
    }
    Ok(())
}

/// Smart-contract signature check: `signature` is the XDR of a
/// [`SignatureSet`] and must clear `threshold`.
///
/// A blob that does not decode traps in the host and aborts the invocation.
pub fn is_valid_signature(
    env: &Env,
    members: &Vec<Signer>,
    threshold: u32,
    digest: &BytesN<32>,
    signature: &Bytes,
) -> Result<BytesN<4>, CommitteeError> {
    let set = SignatureSet::from_xdr(env, signature).map_err(|_| CommitteeError::InvalidSignature)?;
    check_signatures(env, members, digest, &set.signers, &set.signatures, threshold)?;
    Ok(valid_signature_magic(env))
}
