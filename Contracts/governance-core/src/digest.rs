use soroban_sdk::{contracttype, xdr::ToXdr, Address, BytesN, Env, IntoVal, Symbol, Val};

/// Binds a signed action to one contract on one network.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Domain {
    pub name: Symbol,
    pub network_id: BytesN<32>,
    pub verifying_contract: Address,
}

/// Digest committee members sign for `action`, scoped to the calling contract.
pub fn hash_typed_data<T>(env: &Env, name: &Symbol, action: T) -> BytesN<32>
where
    T: IntoVal<Env, Val>,
{
    let domain = Domain {
        name: name.clone(),
        network_id: env.ledger().network_id(),
        verifying_contract: env.current_contract_address(),
    };
    let mut payload = domain.to_xdr(env);
    payload.append(&action.to_xdr(env));
    env.crypto().sha256(&payload).to_bytes()
}
