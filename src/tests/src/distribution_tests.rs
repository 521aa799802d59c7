//! Tests for the relay distribution protocol.

use crate::mocks::{random_wallets, RecordingExecutor, ScriptedPrompter};
use faucet_core::{
    distributor::{AMOUNT_PROMPT, CONFIRM_PROMPT, PRIVATE_KEY_PROMPT},
    AbortReason, Distributor, Outcome, Stage, TransferStep, Wallet,
};
use tokio::runtime::Runtime;

const OPERATOR_KEY: &str = "0x0123456789012345678901234567890123456789012345678901234567890123";

fn run(
    wallets: Vec<Wallet>,
    executor: RecordingExecutor,
    answers: &[&str],
) -> (Outcome, Distributor<RecordingExecutor, ScriptedPrompter>) {
    let rt = Runtime::new().unwrap();
    let mut distributor = Distributor::new(executor, ScriptedPrompter::new(answers));
    let outcome = rt.block_on(distributor.run(&wallets));
    (outcome, distributor)
}

/// Tests the three wallet scenario end to end.
#[test]
fn test_three_wallet_relay() {
    let wallets = random_wallets(3);
    let (outcome, distributor) = run(
        wallets.clone(),
        RecordingExecutor::new(),
        &["0.001", OPERATOR_KEY, "y"],
    );

    assert!(outcome.is_complete());
    assert_eq!(outcome.transactions().len(), 3);
    assert_eq!(distributor.stage(), Stage::Complete);

    let calls = distributor.executor().calls();
    assert_eq!(calls.len(), 3);

    assert_eq!(calls[0].amount, "0.003000");
    assert_eq!(calls[0].recipient, wallets[0].address());
    assert_eq!(calls[0].sender_credential, OPERATOR_KEY);

    assert_eq!(calls[1].amount, "0.002000");
    assert_eq!(calls[1].recipient, wallets[1].address());
    assert_eq!(calls[1].sender_credential, wallets[0].private_key());

    assert_eq!(calls[2].amount, "0.001000");
    assert_eq!(calls[2].recipient, wallets[2].address());
    assert_eq!(calls[2].sender_credential, wallets[1].private_key());

    assert_eq!(
        distributor.prompter().questions(),
        &[AMOUNT_PROMPT, PRIVATE_KEY_PROMPT, CONFIRM_PROMPT]
    );
}

/// Tests the initial and relay amounts for a range of wallet counts.
#[test]
fn test_amount_schedule() {
    for n in 1..=8usize {
        let (outcome, distributor) = run(
            random_wallets(n),
            RecordingExecutor::new(),
            &["0.25", OPERATOR_KEY, "Y"],
        );
        assert!(outcome.is_complete());

        let expected: Vec<String> = std::iter::once(n)
            .chain((0..n - 1).map(|i| n - i - 1))
            .map(|k| format!("{}.{:06}", k / 4, (k % 4) * 250_000))
            .collect();
        assert_eq!(distributor.executor().amounts(), expected, "n = {}", n);
    }
}

/// Tests that amounts finer than six decimals are multiplied before rounding.
#[test]
fn test_sub_micro_amounts() {
    let (outcome, distributor) = run(
        random_wallets(3),
        RecordingExecutor::new(),
        &["0.0000015", OPERATOR_KEY, "y"],
    );
    assert!(outcome.is_complete());
    assert_eq!(
        distributor.executor().amounts(),
        vec!["0.000005", "0.000003", "0.000002"]
    );

    let (outcome, distributor) = run(
        random_wallets(3),
        RecordingExecutor::new(),
        &["0.0000004", OPERATOR_KEY, "y"],
    );
    assert!(outcome.is_complete());
    assert_eq!(
        distributor.executor().amounts(),
        vec!["0.000001", "0.000001", "0.000000"]
    );
}

/// Tests that a single wallet only receives the initial transfer.
#[test]
fn test_single_wallet() {
    let wallets = random_wallets(1);
    let (outcome, distributor) = run(
        wallets.clone(),
        RecordingExecutor::new(),
        &["1", OPERATOR_KEY, "y"],
    );

    assert!(outcome.is_complete());
    let calls = distributor.executor().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].amount, "1.000000");
    assert_eq!(calls[0].recipient, wallets[0].address());
}

/// Tests that an empty wallet list stops before any prompt or transfer.
#[test]
fn test_empty_wallet_list() {
    let (outcome, distributor) = run(
        Vec::new(),
        RecordingExecutor::new(),
        &["0.001", OPERATOR_KEY, "y"],
    );

    assert_eq!(outcome.abort_reason(), Some(&AbortReason::NoWallets));
    assert!(distributor.executor().calls().is_empty());
    assert!(distributor.prompter().questions().is_empty());
    assert_eq!(distributor.stage(), Stage::Aborted);
}

/// Tests that a non-numeric amount stops the run.
#[test]
fn test_invalid_amount() {
    let (outcome, distributor) = run(
        random_wallets(3),
        RecordingExecutor::new(),
        &["abc", OPERATOR_KEY, "y"],
    );

    assert!(matches!(
        outcome.abort_reason(),
        Some(AbortReason::InvalidAmount(_))
    ));
    assert!(distributor.executor().calls().is_empty());
    assert_eq!(distributor.prompter().questions().len(), 1);
}

/// Tests that zero and negative amounts are rejected.
#[test]
fn test_non_positive_amounts() {
    for amount in ["0", "-0.5"] {
        let (outcome, distributor) = run(
            random_wallets(2),
            RecordingExecutor::new(),
            &[amount, OPERATOR_KEY, "y"],
        );
        assert!(matches!(
            outcome.abort_reason(),
            Some(AbortReason::InvalidAmount(_))
        ));
        assert!(distributor.executor().calls().is_empty());
    }
}

/// Tests that a blank private key stops the run.
#[test]
fn test_missing_private_key() {
    let (outcome, distributor) = run(
        random_wallets(2),
        RecordingExecutor::new(),
        &["0.001", "   ", "y"],
    );

    assert_eq!(outcome.abort_reason(), Some(&AbortReason::MissingPrivateKey));
    assert!(distributor.executor().calls().is_empty());
    assert_eq!(distributor.prompter().questions().len(), 2);
}

/// Tests that anything but "y" cancels without transfers.
#[test]
fn test_cancelled_confirmation() {
    for answer in ["n", "", "yes", "no", "Yy"] {
        let (outcome, distributor) = run(
            random_wallets(3),
            RecordingExecutor::new(),
            &["0.001", OPERATOR_KEY, answer],
        );
        assert_eq!(
            outcome.abort_reason(),
            Some(&AbortReason::Cancelled),
            "answer {:?}",
            answer
        );
        assert!(distributor.executor().calls().is_empty());
    }
}

/// Tests that a failed initial transfer stops the relay.
#[test]
fn test_initial_transfer_failure() {
    let (outcome, distributor) = run(
        random_wallets(4),
        RecordingExecutor::failing_at(0),
        &["0.001", OPERATOR_KEY, "y"],
    );

    match outcome.abort_reason() {
        Some(AbortReason::TransferFailed { step, .. }) => assert_eq!(*step, TransferStep::Initial),
        other => panic!("unexpected abort reason: {:?}", other),
    }
    assert!(outcome.transactions().is_empty());
    assert_eq!(distributor.executor().calls().len(), 1);
}

/// Tests that a failed relay hop stops every later hop.
#[test]
fn test_relay_hop_failure() {
    let n = 5;
    for k in 0..n - 1 {
        let (outcome, distributor) = run(
            random_wallets(n),
            RecordingExecutor::failing_at(k + 1),
            &["0.001", OPERATOR_KEY, "y"],
        );

        match outcome.abort_reason() {
            Some(AbortReason::TransferFailed { step, .. }) => {
                assert_eq!(*step, TransferStep::Relay(k))
            }
            other => panic!("unexpected abort reason: {:?}", other),
        }
        // Initial transfer plus hops 0..k went through.
        assert_eq!(outcome.transactions().len(), k + 1);
        // Hop k was attempted, nothing after it.
        assert_eq!(distributor.executor().calls().len(), k + 2);
        assert_eq!(distributor.stage(), Stage::Aborted);
    }
}

/// Tests that a prompt failure is reported instead of panicking.
#[test]
fn test_prompt_failure() {
    let (outcome, distributor) = run(random_wallets(2), RecordingExecutor::new(), &["0.001"]);

    assert!(matches!(
        outcome.abort_reason(),
        Some(AbortReason::Unexpected(_))
    ));
    assert!(distributor.executor().calls().is_empty());
}

/// Tests the stages a completed run goes through.
#[test]
fn test_stage_order_on_success() {
    let (_, distributor) = run(
        random_wallets(2),
        RecordingExecutor::new(),
        &["0.001", OPERATOR_KEY, "y"],
    );

    assert_eq!(
        distributor.history(),
        &[
            Stage::Idle,
            Stage::WalletsLoaded,
            Stage::InputCollected,
            Stage::Confirmed,
            Stage::Distributing,
            Stage::Complete,
        ]
    );
}

/// Tests the last stage reached before each kind of abort.
#[test]
fn test_stage_order_on_abort() {
    let (_, distributor) = run(
        random_wallets(2),
        RecordingExecutor::new(),
        &["abc", OPERATOR_KEY, "y"],
    );
    assert_eq!(
        distributor.history(),
        &[Stage::Idle, Stage::WalletsLoaded, Stage::Aborted]
    );

    let (_, distributor) = run(
        random_wallets(2),
        RecordingExecutor::new(),
        &["0.001", OPERATOR_KEY, "n"],
    );
    assert_eq!(
        distributor.history(),
        &[
            Stage::Idle,
            Stage::WalletsLoaded,
            Stage::InputCollected,
            Stage::Aborted,
        ]
    );

    let (_, distributor) = run(
        random_wallets(2),
        RecordingExecutor::failing_at(1),
        &["0.001", OPERATOR_KEY, "y"],
    );
    assert_eq!(
        distributor.history(),
        &[
            Stage::Idle,
            Stage::WalletsLoaded,
            Stage::InputCollected,
            Stage::Confirmed,
            Stage::Distributing,
            Stage::Aborted,
        ]
    );

    let (_, distributor) = run(Vec::new(), RecordingExecutor::new(), &[]);
    assert_eq!(distributor.history(), &[Stage::Idle, Stage::Aborted]);
}
