use std::time::Duration;

use tracing_subscriber::EnvFilter;

use wallet_ledger::{Wallet, WalletError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("\n======================================================== START\n");

    if let Err(error) = run().await {
        eprintln!("===> Demo aborted: {}", error);
        std::process::exit(1);
    }

    println!("\n======================================================== FINISHED\n")
}

async fn run() -> Result<(), WalletError> {
    let mut wallet: Wallet = Wallet::new(10)?;

    wallet.increase_balance(100)?;
    wallet.decrease_balance(20)?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    wallet.decrease_balance(20)?;
    tokio::time::sleep(Duration::from_secs(1)).await;
    wallet.increase_balance(100)?;

    println!("===> Your wallet balance is {}", wallet.balance());

    match serde_json::to_string_pretty(&wallet.history()) {
        Ok(history) => println!("{}", history),
        Err(error) => eprintln!("===> Failed to render history: {}", error),
    }

    Ok(())
}
