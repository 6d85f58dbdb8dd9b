//! Structured statement: per-performance lines plus totals.

use serde::{Deserialize, Serialize};

use theater_core::{BillingError, BillingResult, Cents, PlayId};
use theater_invoicing::{Invoice, Performance};
use theater_plays::{Catalog, Play};
use theater_pricing::{PerformanceCharge, compute_amount, compute_volume_credits, price_performance};

/// One priced performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub play_id: PlayId,
    pub play_name: String,
    pub audience: u32,
    pub amount: Cents,
    pub credits: u64,
}

/// A fully priced invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub customer: String,
    pub lines: Vec<StatementLine>,
    pub total_amount: Cents,
    pub total_credits: u64,
}

impl Statement {
    /// Price every performance of `invoice` in order.
    ///
    /// Fails on the first performance whose play is missing from `catalog`
    /// (`UnknownPlay`) or whose genre has no pricing rule (`UnknownPlayType`).
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(customer = invoice.customer(), performances = invoice.performances().len())
    )]
    pub fn build(invoice: &Invoice, catalog: &Catalog) -> BillingResult<Self> {
        let mut lines = Vec::with_capacity(invoice.performances().len());
        let mut total_amount = Cents::ZERO;
        let mut total_credits: u64 = 0;

        for performance in invoice.performances() {
            let play = catalog.resolve(&performance.play_id)?;
            let PerformanceCharge { amount, credits } = price_performance(performance, play)?;

            tracing::trace!(
                play_id = %performance.play_id,
                audience = performance.audience,
                amount = amount.as_u64(),
                credits,
                "priced performance"
            );

            total_amount = total_amount
                .checked_add(amount)
                .ok_or(BillingError::AmountOverflow)?;
            total_credits = total_credits
                .checked_add(credits)
                .ok_or(BillingError::CreditsOverflow)?;

            lines.push(StatementLine {
                play_id: performance.play_id.clone(),
                play_name: play.name.clone(),
                audience: performance.audience,
                amount,
                credits,
            });
        }

        Ok(Self {
            customer: invoice.customer().to_owned(),
            lines,
            total_amount,
            total_credits,
        })
    }
}

fn play_for<'a>(catalog: &'a Catalog, performance: &Performance) -> BillingResult<&'a Play> {
    catalog.resolve(&performance.play_id)
}

/// Total amount owed for `invoice`.
pub fn total_amount(invoice: &Invoice, catalog: &Catalog) -> BillingResult<Cents> {
    let amounts = invoice
        .performances()
        .iter()
        .map(|performance| {
            let play = play_for(catalog, performance)?;
            compute_amount(performance.audience, &play.genre)
        })
        .collect::<BillingResult<Vec<Cents>>>()?;
    Cents::checked_sum(amounts).ok_or(BillingError::AmountOverflow)
}

/// Total volume credits earned by `invoice`.
///
/// Only fails on a missing play; unrecognized genres earn base credits.
pub fn total_volume_credits(invoice: &Invoice, catalog: &Catalog) -> BillingResult<u64> {
    let mut total: u64 = 0;
    for performance in invoice.performances() {
        let play = play_for(catalog, performance)?;
        total = total
            .checked_add(compute_volume_credits(performance.audience, &play.genre))
            .ok_or(BillingError::CreditsOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"))
            .with_play("arcadia", Play::new("Arcadia", "pastoral"))
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        )
    }

    #[test]
    fn build_prices_each_performance_in_order() {
        let statement = Statement::build(&big_co(), &catalog()).unwrap();

        let amounts: Vec<u64> = statement.lines.iter().map(|l| l.amount.as_u64()).collect();
        assert_eq!(amounts, [65_000, 58_000, 50_000]);
        let credits: Vec<u64> = statement.lines.iter().map(|l| l.credits).collect();
        assert_eq!(credits, [25, 12, 10]);

        assert_eq!(statement.total_amount, Cents::new(173_000));
        assert_eq!(statement.total_credits, 47);
        assert_eq!(statement.lines[1].play_name, "As You Like It");
    }

    #[test]
    fn helpers_agree_with_build() {
        let statement = Statement::build(&big_co(), &catalog()).unwrap();
        assert_eq!(total_amount(&big_co(), &catalog()).unwrap(), statement.total_amount);
        assert_eq!(total_volume_credits(&big_co(), &catalog()).unwrap(), statement.total_credits);
    }

    #[test]
    fn missing_play_fails_build() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 10), Performance::new("macbeth", 10)]);
        let err = Statement::build(&invoice, &catalog()).unwrap_err();
        assert_eq!(err, BillingError::UnknownPlay(PlayId::new("macbeth")));
    }

    #[test]
    fn unrecognized_genre_fails_amount_but_not_credits() {
        let invoice = Invoice::new("BigCo", vec![Performance::new("arcadia", 40)]);

        assert_eq!(
            Statement::build(&invoice, &catalog()).unwrap_err(),
            BillingError::UnknownPlayType("pastoral".to_string())
        );
        assert_eq!(
            total_amount(&invoice, &catalog()).unwrap_err(),
            BillingError::UnknownPlayType("pastoral".to_string())
        );
        assert_eq!(total_volume_credits(&invoice, &catalog()).unwrap(), 10);
    }

    #[test]
    fn empty_invoice_has_zero_totals() {
        let statement = Statement::build(&Invoice::new("Nobody", Vec::new()), &catalog()).unwrap();
        assert!(statement.lines.is_empty());
        assert_eq!(statement.total_amount, Cents::ZERO);
        assert_eq!(statement.total_credits, 0);
        assert_eq!(
            total_amount(&Invoice::new("Nobody", Vec::new()), &catalog()).unwrap(),
            Cents::ZERO
        );
    }

    #[test]
    fn serializes_amounts_as_cents() {
        let statement = Statement::build(&big_co(), &catalog()).unwrap();
        let json = serde_json::to_value(&statement).unwrap();
        assert_eq!(json["total_amount"], 173_000);
        assert_eq!(json["lines"][0]["play_id"], "hamlet");
    }

    fn performance_strategy() -> impl Strategy<Value = Performance> {
        (
            prop::sample::select(vec!["hamlet", "as-like", "othello"]),
            0u32..10_000,
        )
            .prop_map(|(id, audience)| Performance::new(id, audience))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: totals are the exact sums of the per-line values.
        #[test]
        fn totals_equal_sum_of_lines(
            performances in prop::collection::vec(performance_strategy(), 0..20)
        ) {
            let invoice = Invoice::new("PropCo", performances);
            let statement = Statement::build(&invoice, &catalog()).unwrap();

            prop_assert_eq!(statement.lines.len(), invoice.performances().len());
            let amount_sum: u64 = statement.lines.iter().map(|l| l.amount.as_u64()).sum();
            let credit_sum: u64 = statement.lines.iter().map(|l| l.credits).sum();
            prop_assert_eq!(statement.total_amount.as_u64(), amount_sum);
            prop_assert_eq!(statement.total_credits, credit_sum);
        }
    }
}
