//! Walk through the lockout flow against the in-memory backend.
//!
//! Run with: `cargo run --example lockout`

use std::sync::Arc;

use wicket_core::{Error, LoginManager};
use wicket_storage_memory::MemoryAccountRepository;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let repository = Arc::new(MemoryAccountRepository::new());
    repository.create_account("pepe", "1234");
    let mut manager = LoginManager::new(repository.clone());

    for _ in 0..3 {
        manager.login("pepe", "wrong")?;
    }

    let pepe = repository.get("pepe").expect("account was just created");
    println!(
        "after {} failures: locked_at = {:?}",
        manager.failure_count(),
        pepe.locked_at()
    );

    // The correct password is silently denied while the lock holds.
    manager.login("pepe", "1234")?;
    println!("entry recorded while locked: {:?}", pepe.last_entry_at());

    pepe.unlock();
    manager.login("pepe", "1234")?;
    println!("entry recorded after unlock: {:?}", pepe.last_entry_at());

    Ok(())
}
