/// quick start - annuity plan, APR and effective rate for a small loan
use annuity_apr::{Loan, LoanConfig, SafeTimeProvider, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 13,400 at 5% nominal, no monthly fee
    let mut loan = Loan::builder()
        .amount(13_400.0)
        .interest_rate(0.05)
        .monthly_fee(0.0)
        .loan_type("annuity")
        .build()?;

    // three monthly periods
    for cycle in loan.make_payment_plan(Some(3))? {
        println!(
            "{:>2} day {:>7.2}  in {:>10.2}  pay {:>9.2}  amort {:>9.2}  int {:>7.2}  out {:>10.2}",
            cycle.period,
            cycle.period_day,
            cycle.incoming_balance,
            cycle.payment,
            cycle.amortization,
            cycle.interest_payment,
            cycle.remaining_balance,
        );
    }

    if let Some(summary) = loan.summary() {
        for (name, value) in summary.attributes() {
            println!("{:<18} {}", name, value);
        }
    }

    // the same terms loaded from json
    let config = LoanConfig::from_json(
        r#"{"amount": 10000, "interest_rate": 0.12, "monthly_fee": 5, "months": 12}"#,
    )?;
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut loan = config.into_loan(&time)?;
    loan.make_payment_plan(None)?;

    println!("{}", loan.to_json_pretty());

    Ok(())
}
