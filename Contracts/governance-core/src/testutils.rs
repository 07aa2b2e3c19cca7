//! Deterministic ed25519 committees for tests.

use ed25519_dalek::{Signer as _, SigningKey};
use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env, Vec};
use std::vec::Vec as StdVec;

use crate::signer::{SignatureSet, Signer};

pub struct TestCommittee {
    keys: StdVec<(Signer, SigningKey)>,
}

impl TestCommittee {
    /// Builds `size` members sorted the way committees expect them. `seed`
    /// keeps the keys of different committees in the same test apart.
    pub fn generate(env: &Env, size: u32, seed: u8) -> Self {
        let mut keys: StdVec<(Signer, SigningKey)> = (0..size)
            .map(|i| {
                let mut secret = [seed; 32];
                secret[0] = i as u8;
                let key = SigningKey::from_bytes(&secret);
                let public_key = BytesN::from_array(env, &key.verifying_key().to_bytes());
                (Signer::Ed25519(public_key), key)
            })
            .collect();
        keys.sort_by(|a, b| a.0.cmp(&b.0));
        Self { keys }
    }

    pub fn len(&self) -> usize { self.keys.len() }

    pub fn members(&self, env: &Env) -> Vec<Signer> {
        let mut members = Vec::new(env);
        for (signer, _) in self.keys.iter() {
            members.push_back(signer.clone());
        }
        members
    }

    pub fn signer(&self, index: usize) -> Signer { self.keys[index].0.clone() }

    /// Signatures of the members at `indices`, in exactly that order.
    pub fn sign(&self, env: &Env, digest: &BytesN<32>, indices: &[usize]) -> (Vec<Signer>, Vec<Bytes>) {
        let mut signers = Vec::new(env);
        let mut signatures = Vec::new(env);
        for &index in indices {
            let (signer, key) = &self.keys[index];
            signers.push_back(signer.clone());
            signatures.push_back(sign_digest(env, key, digest));
        }
        (signers, signatures)
    }

    pub fn sign_first(&self, env: &Env, digest: &BytesN<32>, count: usize) -> (Vec<Signer>, Vec<Bytes>) {
        let indices: StdVec<usize> = (0..count).collect();
        self.sign(env, digest, &indices)
    }

    /// Opaque blob accepted by a committee's `is_valid_signature`.
    pub fn signature_set(&self, env: &Env, digest: &BytesN<32>, count: usize) -> Bytes {
        let (signers, signatures) = self.sign_first(env, digest, count);
        SignatureSet { signers, signatures }.to_xdr(env)
    }
}

pub fn sign_digest(env: &Env, key: &SigningKey, digest: &BytesN<32>) -> Bytes {
    let signature = key.sign(&digest.to_array());
    Bytes::from_slice(env, &signature.to_bytes())
}
