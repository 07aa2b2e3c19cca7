#![cfg(test)]
//! End-to-end runs against the real committee contracts, without mocked auth.

use emergency_upgrade_board_contract::{EmergencyUpgradeBoard, EmergencyUpgradeBoardClient};
use governance_core::{testutils::TestCommittee, upgrade_id, Call, UpgradeProposal};
use guardians_contract::{GuardiansAction, GuardiansContract, GuardiansContractClient, GUARDIANS_SIZE};
use security_council_contract::{
    CouncilAction, SecurityCouncilContract, SecurityCouncilContractClient, SECURITY_COUNCIL_SIZE,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    vec, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

use crate::{
    test::{set_call, MockChainManager, MockChainManagerClient, MockVerifier, MockVerifierClient, Target, TargetClient, T0, WAITING_START},
    FreezeStatus, HandlerConfig, ProtocolUpgradeHandler, ProtocolUpgradeHandlerClient, UpgradeState, UpgradeTimings,
    UPGRADE_DELAY_PERIOD,
};

const VALID_FOR: u64 = 3_600;

struct System<'a> {
    env: Env,
    handler: ProtocolUpgradeHandlerClient<'a>,
    guardians: GuardiansContractClient<'a>,
    council: SecurityCouncilContractClient<'a>,
    board: EmergencyUpgradeBoardClient<'a>,
    chains: MockChainManagerClient<'a>,
    target: TargetClient<'a>,
    guardian_keys: TestCommittee,
    council_keys: TestCommittee,
    foundation_keys: TestCommittee,
}

fn deploy<'a>() -> System<'a> {
    let env = Env::default();
    env.ledger().set_timestamp(T0);

    let handler = ProtocolUpgradeHandlerClient::new(&env, &env.register(ProtocolUpgradeHandler, ()));
    let guardian_keys = TestCommittee::generate(&env, GUARDIANS_SIZE, 1);
    let council_keys = TestCommittee::generate(&env, SECURITY_COUNCIL_SIZE, 2);
    let foundation_keys = TestCommittee::generate(&env, 1, 3);

    let guardians = GuardiansContractClient::new(&env, &env.register(GuardiansContract, ()));
    guardians.init(&handler.address, &guardian_keys.members(&env));
    let council = SecurityCouncilContractClient::new(&env, &env.register(SecurityCouncilContract, ()));
    council.init(&handler.address, &council_keys.members(&env));
    let board = EmergencyUpgradeBoardClient::new(&env, &env.register(EmergencyUpgradeBoard, ()));
    board.init(&handler.address, &guardians.address, &council.address, &foundation_keys.signer(0));

    let verifier = MockVerifierClient::new(&env, &env.register(MockVerifier, ()));
    verifier.set_result(&true);
    let chains = MockChainManagerClient::new(&env, &env.register(MockChainManager, ()));
    let target = TargetClient::new(&env, &env.register(Target, ()));

    let config = HandlerConfig {
        verifier: verifier.address.clone(),
        origin_governor: BytesN::from_array(&env, &[9u8; 32]),
        chain_manager: chains.address.clone(),
        native_token: Address::generate(&env),
        guardians: guardians.address.clone(),
        security_council: council.address.clone(),
        emergency_upgrade_board: board.address.clone(),
    };
    handler.init(&config, &UpgradeTimings::standard());

    System { env, handler, guardians, council, board, chains, target, guardian_keys, council_keys, foundation_keys }
}

impl System<'_> {
    fn now(&self) -> u64 { self.env.ledger().timestamp() }

    fn set_time(&self, timestamp: u64) { self.env.ledger().set_timestamp(timestamp); }

    fn start(&self, calls: Vec<Call>) -> (UpgradeProposal, BytesN<32>) {
        let proposal = UpgradeProposal { calls, executor: None, salt: BytesN::from_array(&self.env, &[1u8; 32]) };
        let id = self.handler.start_upgrade(&1, &0, &0, &Vec::new(&self.env), &proposal);
        (proposal, id)
    }

    fn guardians_approve(&self, id: &BytesN<32>) {
        let valid_until = self.now() + VALID_FOR;
        let digest = self.guardians.action_digest(&GuardiansAction::ApproveUpgrade(id.clone(), valid_until));
        let (signers, signatures) = self.guardian_keys.sign_first(&self.env, &digest, 5);
        self.guardians.approve_upgrade_guardians(id, &valid_until, &signers, &signatures);
    }

    fn council_approve(&self, id: &BytesN<32>) {
        let valid_until = self.now() + VALID_FOR;
        let digest = self.council.action_digest(&CouncilAction::ApproveUpgrade(id.clone(), valid_until));
        let (signers, signatures) = self.council_keys.sign_first(&self.env, &digest, 6);
        self.council.approve_upgrade_security_council(id, &valid_until, &signers, &signatures);
    }
}

#[test]
fn test_committees_drive_upgrade_to_execution() {
    let sys = deploy();
    let (proposal, id) = sys.start(vec![&sys.env, set_call(&sys.env, &sys.target.address, 7)]);

    sys.set_time(WAITING_START);
    sys.guardians_approve(&id);
    sys.council_approve(&id);
    let status = sys.handler.upgrade_status(&id);
    assert!(status.guardians_approval);
    assert_eq!(status.sc_approval_timestamp, Some(WAITING_START));
    assert_eq!(sys.handler.upgrade_state(&id), UpgradeState::ExecutionPending);

    sys.set_time(WAITING_START + UPGRADE_DELAY_PERIOD);
    sys.handler.execute(&proposal);
    assert_eq!(sys.handler.upgrade_state(&id), UpgradeState::Done);
    assert_eq!(sys.target.get(), 7);
}

#[test]
fn test_guardians_extend_veto_through_committee() {
    let sys = deploy();
    let (_, id) = sys.start(Vec::new(&sys.env));

    let valid_until = sys.now() + VALID_FOR;
    let digest = sys.guardians.action_digest(&GuardiansAction::ExtendLegalVeto(id.clone(), valid_until));
    let (signers, signatures) = sys.guardian_keys.sign_first(&sys.env, &digest, 5);
    sys.guardians.extend_legal_veto(&id, &valid_until, &signers, &signatures);

    assert!(sys.handler.upgrade_status(&id).guardians_extended_legal_veto);
    sys.set_time(WAITING_START);
    assert_eq!(sys.handler.upgrade_state(&id), UpgradeState::LegalVetoPeriod);
}

#[test]
fn test_upgrade_rotates_guardian_members() {
    let sys = deploy();
    let new_keys = TestCommittee::generate(&sys.env, GUARDIANS_SIZE, 4);
    let arg: Val = new_keys.members(&sys.env).into_val(&sys.env);
    let rotate = Call {
        target: sys.guardians.address.clone(),
        value: 0,
        function: Symbol::new(&sys.env, "update_members"),
        args: vec![&sys.env, arg],
    };
    let (proposal, id) = sys.start(vec![&sys.env, rotate]);

    sys.set_time(WAITING_START);
    sys.council_approve(&id);
    sys.set_time(WAITING_START + UPGRADE_DELAY_PERIOD);
    sys.handler.execute(&proposal);

    assert_eq!(sys.guardians.members(), new_keys.members(&sys.env));
}

#[test]
fn test_council_freezes_and_board_recovers() {
    let sys = deploy();

    let valid_until = sys.now() + VALID_FOR;
    let digest = sys.council.action_digest(&CouncilAction::SoftFreeze(0, valid_until));
    let (signers, signatures) = sys.council_keys.sign_first(&sys.env, &digest, 3);
    sys.council.soft_freeze(&valid_until, &signers, &signatures);
    assert_eq!(sys.handler.freeze_status(), FreezeStatus::Soft);
    assert!(sys.chains.is_frozen(&1));

    let calls = vec![&sys.env, set_call(&sys.env, &sys.target.address, 9)];
    let salt = BytesN::from_array(&sys.env, &[5u8; 32]);
    let proposal = UpgradeProposal { calls: calls.clone(), executor: Some(sys.board.address.clone()), salt: salt.clone() };
    let id = upgrade_id(&sys.env, &proposal);
    let digest = sys.board.action_digest(&id);
    let (_, foundation) = sys.foundation_keys.sign_first(&sys.env, &digest, 1);

    sys.board.execute_emergency_upgrade(
        &calls,
        &salt,
        &sys.guardian_keys.signature_set(&sys.env, &digest, 5),
        &sys.council_keys.signature_set(&sys.env, &digest, 9),
        &foundation.get_unchecked(0),
    );

    assert_eq!(sys.handler.upgrade_state(&id), UpgradeState::Done);
    assert_eq!(sys.target.get(), 9);
    assert_eq!(sys.handler.freeze_status(), FreezeStatus::None);
    assert!(!sys.chains.is_frozen(&1));
}
