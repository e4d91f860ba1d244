use credit_risk_console::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        if err.needs_report() {
            eprintln!("application error: {err}");
        }
        std::process::exit(1);
    }
}
