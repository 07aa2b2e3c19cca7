#![cfg(test)]

use governance_core::{testutils::TestCommittee, upgrade_id, Call, CommitteeError, UpgradeProposal};
use guardians_contract::{GuardiansContract, GuardiansContractClient, GUARDIANS_SIZE};
use security_council_contract::{SecurityCouncilContract, SecurityCouncilContractClient, SECURITY_COUNCIL_SIZE};
use soroban_sdk::{contract, contractimpl, contracttype, testutils::Address as _, vec, Address, Bytes, BytesN, Env, Symbol, Vec};

use crate::{EmergencyUpgradeBoard, EmergencyUpgradeBoardClient};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Executed,
}

#[contract]
pub struct MockHandler;

#[contractimpl]
impl MockHandler {
    pub fn execute_emergency_upgrade(env: Env, proposal: UpgradeProposal) {
        env.storage().instance().set(&MockKey::Executed, &proposal);
    }
    pub fn executed(env: Env) -> Option<UpgradeProposal> { env.storage().instance().get(&MockKey::Executed) }
}

struct Setup<'a> {
    env: Env,
    board: EmergencyUpgradeBoardClient<'a>,
    handler: MockHandlerClient<'a>,
    guardians: TestCommittee,
    council: TestCommittee,
    foundation: TestCommittee,
}

fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    let handler = MockHandlerClient::new(&env, &env.register(MockHandler, ()));

    let guardians = TestCommittee::generate(&env, GUARDIANS_SIZE, 1);
    let guardians_contract = GuardiansContractClient::new(&env, &env.register(GuardiansContract, ()));
    guardians_contract.init(&handler.address, &guardians.members(&env));

    let council = TestCommittee::generate(&env, SECURITY_COUNCIL_SIZE, 2);
    let council_contract = SecurityCouncilContractClient::new(&env, &env.register(SecurityCouncilContract, ()));
    council_contract.init(&handler.address, &council.members(&env));

    let foundation = TestCommittee::generate(&env, 1, 3);
    let board = EmergencyUpgradeBoardClient::new(&env, &env.register(EmergencyUpgradeBoard, ()));
    board.init(&handler.address, &guardians_contract.address, &council_contract.address, &foundation.signer(0));

    Setup { env, board, handler, guardians, council, foundation }
}

fn calls(env: &Env) -> Vec<Call> {
    vec![env, Call { target: Address::generate(env), value: 0, function: Symbol::new(env, "upgrade"), args: Vec::new(env) }]
}

fn salt(env: &Env, byte: u8) -> BytesN<32> { BytesN::from_array(env, &[byte; 32]) }

/// Digest the board expects for `calls` and `salt`.
fn digest(s: &Setup, calls: &Vec<Call>, salt: &BytesN<32>) -> BytesN<32> {
    let proposal = UpgradeProposal { calls: calls.clone(), executor: Some(s.board.address.clone()), salt: salt.clone() };
    s.board.action_digest(&upgrade_id(&s.env, &proposal))
}

fn foundation_signature(s: &Setup, digest: &BytesN<32>) -> Bytes {
    let (_, signatures) = s.foundation.sign_first(&s.env, digest, 1);
    signatures.get_unchecked(0)
}

#[test]
fn test_three_principals_execute_upgrade() {
    let s = setup();
    let calls = calls(&s.env);
    let salt = salt(&s.env, 1);
    let digest = digest(&s, &calls, &salt);

    let id = s.board.execute_emergency_upgrade(
        &calls,
        &salt,
        &s.guardians.signature_set(&s.env, &digest, 5),
        &s.council.signature_set(&s.env, &digest, 9),
        &foundation_signature(&s, &digest),
    );

    let executed = s.handler.executed().unwrap();
    assert_eq!(executed.executor, Some(s.board.address.clone()));
    assert_eq!(executed.calls, calls);
    assert_eq!(upgrade_id(&s.env, &executed), id);
}

#[test]
fn test_council_below_its_threshold_is_rejected() {
    let s = setup();
    let calls = calls(&s.env);
    let salt = salt(&s.env, 1);
    let digest = digest(&s, &calls, &salt);

    let res = s.board.try_execute_emergency_upgrade(
        &calls,
        &salt,
        &s.guardians.signature_set(&s.env, &digest, 5),
        &s.council.signature_set(&s.env, &digest, 8),
        &foundation_signature(&s, &digest),
    );
    assert_eq!(res, Err(Ok(CommitteeError::InvalidSignature)));
    assert_eq!(s.handler.executed(), None);
}

#[test]
fn test_malformed_foundation_signature_is_rejected() {
    let s = setup();
    let calls = calls(&s.env);
    let salt = salt(&s.env, 1);
    let digest = digest(&s, &calls, &salt);

    let res = s.board.try_execute_emergency_upgrade(
        &calls,
        &salt,
        &s.guardians.signature_set(&s.env, &digest, 5),
        &s.council.signature_set(&s.env, &digest, 9),
        &Bytes::from_slice(&s.env, &[1u8; 10]),
    );
    assert_eq!(res, Err(Ok(CommitteeError::InvalidSignature)));
}

#[test]
fn test_signatures_are_bound_to_the_salt() {
    let s = setup();
    let calls = calls(&s.env);
    let digest = digest(&s, &calls, &salt(&s.env, 1));

    let res = s.board.try_execute_emergency_upgrade(
        &calls,
        &salt(&s.env, 2),
        &s.guardians.signature_set(&s.env, &digest, 5),
        &s.council.signature_set(&s.env, &digest, 9),
        &foundation_signature(&s, &digest),
    );
    assert!(res.is_err());
    assert_eq!(s.handler.executed(), None);
}

#[test]
fn test_init_is_one_shot() {
    let s = setup();
    let config = s.board.config();
    let res = s.board.try_init(&config.handler, &config.guardians, &config.security_council, &config.foundation);
    assert_eq!(res, Err(Ok(CommitteeError::AlreadyInitialized)));
}

#[test]
fn test_undecodable_committee_blob_is_rejected() {
    let s = setup();
    let calls = calls(&s.env);
    let salt = salt(&s.env, 1);
    let digest = digest(&s, &calls, &salt);

    let res = s.board.try_execute_emergency_upgrade(
        &calls,
        &salt,
        &Bytes::from_slice(&s.env, b"not a signature set"),
        &s.council.signature_set(&s.env, &digest, 9),
        &foundation_signature(&s, &digest),
    );
    assert_eq!(res, Err(Ok(CommitteeError::InvalidSignature)));
    assert_eq!(s.handler.executed(), None);
}
