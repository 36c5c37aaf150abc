fn main() -> anyhow::Result<()> {
    delivery_ledger::cli::commands::run()
}
