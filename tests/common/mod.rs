#![allow(dead_code)]

use assert_cmd::cargo_bin;
use payment_router::domain::payment::{Amount, Payment, PaymentMethod};
use payment_router::domain::ports::PaymentRepository;
use payment_router::infrastructure::in_memory::InMemoryPaymentRepository;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::process::Command;

/// The router binary with no `PAYMENT_ROUTER_*` overrides inherited from the shell.
pub fn router() -> Command {
    let mut cmd = Command::new(cargo_bin!("payment-router"));
    cmd.env_remove("PAYMENT_ROUTER_PRIORITY")
        .env_remove("PAYMENT_ROUTER_LOG_LEVEL")
        .env_remove("PAYMENT_ROUTER_LOG_FORMAT");
    cmd
}

pub fn payment(id: u32) -> Payment {
    Payment::new(
        id,
        Amount::new(Decimal::new(1000 + id as i64, 2)).unwrap(),
        "BRL",
        PaymentMethod::Card,
    )
}

pub async fn seeded_repository(ids: impl IntoIterator<Item = u32>) -> InMemoryPaymentRepository {
    let repository = InMemoryPaymentRepository::new();
    for id in ids {
        repository.store(payment(id)).await.unwrap();
    }
    repository
}

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["id", "amount", "currency", "method"])?;

    for i in 1..=rows {
        let id = i.to_string();
        wtr.write_record([id.as_str(), "1.0", "BRL", "pix"])?;
    }

    wtr.flush()?;
    Ok(())
}
