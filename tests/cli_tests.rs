use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("tally")?;
    cmd.env("TALLY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn category_add_then_list() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["category", "add", "Ajándék", "🎁"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created category: 🎁 Ajándék"));

    tally(&dir)?
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("💰 Bevétel")
                .and(predicate::str::contains("🛒 Kiadás"))
                .and(predicate::str::contains("🏦 Megtakarítás"))
                .and(predicate::str::contains("🎁 Ajándék")),
        );
    Ok(())
}

#[test]
fn duplicate_category_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["category", "add", "Utazás", "✈️"])
        .assert()
        .success();

    tally(&dir)?
        .args(["category", "add", "Utazás", "🚗"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    Ok(())
}

#[test]
fn empty_category_name_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["category", "add", "   ", "🎁"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
    Ok(())
}

#[test]
fn transaction_defaults_to_income() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Fizetés", "250000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("💰 Bevétel"));

    tally(&dir)?
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Fizetés: 250000 Ft (💰 Bevétel)")
                .and(predicate::str::contains("Összesen: 250000 Ft")),
        );
    Ok(())
}

#[test]
fn non_numeric_amount_fails() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Kenyér", "abc"])
        .assert()
        .failure();

    tally(&dir)?
        .args(["total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Összesen: 0 Ft"));
    Ok(())
}

#[test]
fn custom_category_counts_as_expense() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["category", "add", "Ajándék", "🎁"])
        .assert()
        .success();
    tally(&dir)?
        .args(["transaction", "add", "Szülinap", "5000", "-c", "Ajándék"])
        .assert()
        .success();

    tally(&dir)?
        .args(["total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Összesen: -5000 Ft"));
    Ok(())
}

#[test]
fn negative_amount_is_accepted() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Korrekció", "-1200"])
        .assert()
        .success();

    tally(&dir)?
        .args(["total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Összesen: -1200 Ft"));
    Ok(())
}

#[test]
fn withdraw_records_negative_savings() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "withdraw", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("💸 Megtakarítás kivonása: -10000 Ft"));

    tally(&dir)?
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(🏦 Megtakarítás)"));
    Ok(())
}

#[test]
fn chart_without_expenses_shows_message() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Fizetés", "1000"])
        .assert()
        .success();

    tally(&dir)?
        .args(["chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nincs elég adat a grafikonhoz"));
    Ok(())
}

#[test]
fn chart_lists_expense_shares() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Bolt", "300", "-c", "kiadás"])
        .assert()
        .success();
    tally(&dir)?
        .args(["transaction", "add", "Piac", "700", "-c", "kiadás"])
        .assert()
        .success();
    tally(&dir)?
        .args(["category", "add", "Mozi", "🎬"])
        .assert()
        .success();
    tally(&dir)?
        .args(["transaction", "add", "Jegy", "1000", "-c", "Mozi"])
        .assert()
        .success();

    tally(&dir)?
        .args(["chart", "--width", "300", "--height", "200"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("🛒 Kiadás")
                .and(predicate::str::contains("🎬 Mozi"))
                .and(predicate::str::contains("50.0%")),
        );
    Ok(())
}

#[test]
fn period_steps_across_year_boundary() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["period", "--month", "2024-12", "--next", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aktuális hónap: Január 2025"));

    tally(&dir)?
        .args(["period", "--month", "2025-01", "--prev", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aktuális hónap: December 2024"));
    Ok(())
}

#[test]
fn export_json_to_stdout() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["transaction", "add", "Fizetés", "1000"])
        .assert()
        .success();

    tally(&dir)?
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"schema_version\"")
                .and(predicate::str::contains("Fizetés")),
        );
    Ok(())
}

#[test]
fn export_csv_to_file() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("ledger.csv");

    tally(&dir)?
        .args(["transaction", "add", "Bolt", "1500", "-c", "kiadás"])
        .assert()
        .success();

    tally(&dir)?
        .args(["export", "-f", "csv", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let contents = std::fs::read_to_string(&output)?;
    assert!(contents.starts_with("Description,Amount,Display Amount,Category"));
    assert!(contents.contains("Bolt,1500,-1500,kiadás"));
    Ok(())
}

#[test]
fn exported_yaml_verifies() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let output = dir.path().join("ledger.yaml");

    tally(&dir)?
        .args(["transaction", "add", "Fizetés", "1000"])
        .assert()
        .success();
    tally(&dir)?
        .args(["export", "-f", "yaml", "-o"])
        .arg(&output)
        .assert()
        .success();

    tally(&dir)?
        .arg("verify")
        .arg(&output)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Export is valid")
                .and(predicate::str::contains("Transactions:      1")),
        );
    Ok(())
}

#[test]
fn period_out_of_range_fails_cleanly() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["period", "--month", "2147483647-12", "--next", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn audit_shows_recorded_operations() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["audit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries yet."));

    tally(&dir)?
        .args(["category", "add", "Ajándék", "🎁"])
        .assert()
        .success();
    tally(&dir)?
        .args(["transaction", "withdraw", "500"])
        .assert()
        .success();

    tally(&dir)?
        .args(["audit"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE Category")
                .and(predicate::str::contains("WITHDRAW Transaction")),
        );
    Ok(())
}

#[test]
fn config_shows_data_directory() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;

    tally(&dir)?
        .args(["config"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("tally Configuration")
                .and(predicate::str::contains("Currency symbol: Ft")),
        );
    Ok(())
}
