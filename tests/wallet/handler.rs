use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use wallet_ledger::{EventHandler, Wallet, WalletConfig};

use crate::wallet::{PanickingEventHandler, RecordingEventHandler};

#[test]
fn event_handler_sees_every_recorded_entry_test() {
    let handler = RecordingEventHandler::default();
    let config = WalletConfig::builder()
        .initial_balance(10)
        .event_handlers(vec![Box::new(handler.clone())])
        .build();

    let mut wallet = Wallet::with_config(config).unwrap();
    wallet.increase_balance(100).unwrap();
    wallet.decrease_balance(20).unwrap();
    let _ = wallet.decrease_balance(1_000);

    let recorded = handler.recorded();
    let balances: Vec<i64> = recorded.iter().map(|e| e.resulting_balance).collect();

    assert_eq!(balances, vec![10, 110, 90]);
    assert_eq!(recorded.last(), Some(wallet.latest_entry()));
}

#[test]
fn event_handlers_run_in_registration_order_test() {
    let first = RecordingEventHandler::new("first");
    let second = first.sharing_log("second");
    let handlers: Vec<Box<dyn EventHandler>> = vec![Box::new(first.clone()), Box::new(Arc::new(second))];
    let config = WalletConfig::builder()
        .initial_balance(1)
        .event_handlers(handlers)
        .build();

    let mut wallet = Wallet::with_config(config).unwrap();
    wallet.increase_balance(1).unwrap();

    let calls: Vec<(&str, i32)> = first
        .calls()
        .iter()
        .map(|(name, entry)| (*name, entry.sequence_number))
        .collect();
    assert_eq!(calls, vec![("first", 1), ("second", 1), ("first", 2), ("second", 2)]);
}

#[test]
fn panicking_event_handler_leaves_history_in_step_with_balance_test() {
    let recorder = RecordingEventHandler::default();
    let handlers: Vec<Box<dyn EventHandler>> = vec![
        Box::new(PanickingEventHandler { on_sequence_number: 2 }),
        Box::new(recorder.clone()),
    ];
    let config = WalletConfig::builder()
        .initial_balance(10)
        .event_handlers(handlers)
        .build();
    let mut wallet = Wallet::with_config(config).unwrap();

    let result = panic::catch_unwind(AssertUnwindSafe(|| wallet.increase_balance(100)));

    assert!(result.is_err());
    assert_eq!(wallet.balance(), 110);
    assert_eq!(wallet.entry_count(), 2);
    assert_eq!(wallet.latest_entry().resulting_balance, wallet.balance());
    assert_eq!(wallet.history()[0].resulting_balance, 110);
    // Handlers registered after the panicking one did not run for that entry.
    assert_eq!(recorder.recorded().len(), 1);

    wallet.decrease_balance(10).unwrap();
    assert_eq!(wallet.latest_entry().resulting_balance, 100);
    assert_eq!(recorder.recorded().last(), Some(wallet.latest_entry()));
}

#[test]
fn event_handler_name_defaults_to_type_name_test() {
    struct Silent;

    impl EventHandler for Silent {
        fn handle(&self, _entry: &wallet_ledger::Entry) {}
    }

    assert!(Silent.name().ends_with("Silent"));
    assert_eq!(RecordingEventHandler::default().name(), "recording");
}
