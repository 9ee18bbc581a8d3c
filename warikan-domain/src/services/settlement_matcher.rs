use crate::{
    model::{MemberBalances, MemberId, Settlement, Transfer},
    services::settlement_rounding::{SettlementContext, quantize_balances},
};
use std::cmp::Reverse;

/// Greedy nearest-pair settlement.
///
/// Balances are rounded to atomic units; anything inside the dead-zone is
/// treated as settled. The largest debtor is then paired with the largest
/// creditor, and whichever side reaches zero moves on to the next member.
/// At most `debtors + creditors - 1` transfers are produced, which is not
/// always the fewest possible.
pub struct SettlementMatcher;

struct Position<'a> {
    member: MemberId<'a>,
    units: i64,
}

impl SettlementMatcher {
    /// Calculate transfers that bring every balance toward zero
    ///
    /// # Returns
    /// The input balances with the transfers applied, plus the transfer list.
    /// Leftovers on the side that did not run out are kept in `new_balances`
    /// and produce no transfer.
    pub fn calculate<'a>(
        &self,
        balances: &MemberBalances<'a>,
        context: SettlementContext,
    ) -> Settlement<'a> {
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();
        for (member, units) in quantize_balances(balances, context) {
            if context.is_settled(units) {
                continue;
            }
            let position = Position { member, units };
            if units < 0 {
                debtors.push(position);
            } else {
                creditors.push(position);
            }
        }

        // Stable sorts: ties keep member order.
        debtors.sort_by_key(|debtor| debtor.units);
        creditors.sort_by_key(|creditor| Reverse(creditor.units));

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let (mut i, mut j) = (0, 0);
        while i < debtors.len() && j < creditors.len() {
            let debtor = &mut debtors[i];
            let creditor = &mut creditors[j];

            let amount = debtor.units.abs().min(creditor.units);
            if amount > 0 {
                transfers.push(Transfer {
                    from: debtor.member,
                    to: creditor.member,
                    amount: context.from_atomic_units(amount),
                });
            }

            debtor.units += amount;
            creditor.units -= amount;

            if debtor.units.abs() < 1 {
                i += 1;
            }
            if creditor.units < 1 {
                j += 1;
            }
        }

        let mut new_balances = balances.clone();
        for transfer in &transfers {
            if let Some(balance) = new_balances.get_mut(&transfer.from) {
                *balance += transfer.amount;
            }
            if let Some(balance) = new_balances.get_mut(&transfer.to) {
                *balance -= transfer.amount;
            }
        }

        Settlement {
            new_balances,
            transfers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;
    use rstest::{fixture, rstest};

    #[fixture]
    fn matcher() -> SettlementMatcher {
        SettlementMatcher
    }

    fn balances(entries: &[(&'static str, Money)]) -> MemberBalances<'static> {
        entries
            .iter()
            .map(|&(member, balance)| (MemberId(member), balance))
            .collect()
    }

    #[rstest]
    #[case::one_creditor_two_debtors(
        &[("Alice", Money::from_i64(200)), ("Bob", Money::from_i64(-100)), ("Carol", Money::from_i64(-100))],
        vec![("Bob", "Alice", 100), ("Carol", "Alice", 100)]
    )]
    #[case::inside_dead_zone(
        &[("Alice", Money::new(15, 1)), ("Bob", Money::new(-15, 1))],
        vec![]
    )]
    #[case::only_debtors(
        &[("Alice", Money::from_i64(-50)), ("Bob", Money::from_i64(-50))],
        vec![]
    )]
    #[case::all_zero(
        &[("Alice", Money::ZERO), ("Bob", Money::ZERO)],
        vec![]
    )]
    #[case::empty(&[], vec![])]
    #[case::largest_pairs_first(
        &[
            ("Alice", Money::from_i64(-30)),
            ("Bob", Money::from_i64(-70)),
            ("Carol", Money::from_i64(40)),
            ("Dave", Money::from_i64(60)),
        ],
        vec![("Bob", "Dave", 60), ("Bob", "Carol", 10), ("Alice", "Carol", 30)]
    )]
    #[case::ties_keep_member_order(
        &[
            ("Carol", Money::from_i64(-100)),
            ("Alice", Money::from_i64(-100)),
            ("Bob", Money::from_i64(200)),
        ],
        vec![("Carol", "Bob", 100), ("Alice", "Bob", 100)]
    )]
    #[case::exact_match_retires_both(
        &[
            ("Alice", Money::from_i64(-100)),
            ("Bob", Money::from_i64(-50)),
            ("Carol", Money::from_i64(100)),
            ("Dave", Money::from_i64(50)),
        ],
        vec![("Alice", "Carol", 100), ("Bob", "Dave", 50)]
    )]
    #[case::fractional_balances_round_first(
        &[
            ("Alice", Money::new(666_667, 4)),
            ("Bob", Money::new(-333_333, 4)),
            ("Carol", Money::new(-333_334, 4)),
        ],
        vec![("Bob", "Alice", 33), ("Carol", "Alice", 33)]
    )]
    #[case::leftover_is_dropped(
        &[("Alice", Money::from_i64(-120)), ("Bob", Money::from_i64(100))],
        vec![("Alice", "Bob", 100)]
    )]
    fn settlement_matcher_cases(
        matcher: SettlementMatcher,
        #[case] entries: &[(&'static str, Money)],
        #[case] expected_transfers: Vec<(&'static str, &'static str, i64)>,
    ) {
        let result = matcher.calculate(&balances(entries), SettlementContext::jpy_default());

        let expected: Vec<Transfer> = expected_transfers
            .into_iter()
            .map(|(from, to, amount)| Transfer {
                from: MemberId(from),
                to: MemberId(to),
                amount: Money::from_i64(amount),
            })
            .collect();
        assert_eq!(result.transfers, expected);
    }

    #[test]
    fn new_balances_reflect_transfers() {
        let input = balances(&[
            ("Alice", Money::from_i64(200)),
            ("Bob", Money::from_i64(-100)),
            ("Carol", Money::from_i64(-100)),
        ]);

        let result = SettlementMatcher.calculate(&input, SettlementContext::jpy_default());

        assert!(result.new_balances.values().all(|balance| balance.is_zero()));
        assert_eq!(
            result.new_balances.keys().collect::<Vec<_>>(),
            input.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn leftover_stays_on_new_balances() {
        let input = balances(&[("Alice", Money::from_i64(-120)), ("Bob", Money::from_i64(100))]);

        let result = SettlementMatcher.calculate(&input, SettlementContext::jpy_default());

        assert_eq!(
            result.new_balances.get(&MemberId("Alice")),
            Some(&Money::from_i64(-20))
        );
        assert_eq!(result.new_balances.get(&MemberId("Bob")), Some(&Money::ZERO));
    }

    #[test]
    fn wider_dead_zone_skips_small_balances() {
        let input = balances(&[
            ("Alice", Money::from_i64(-5)),
            ("Bob", Money::from_i64(-95)),
            ("Carol", Money::from_i64(100)),
        ]);
        let context = SettlementContext {
            dead_zone: 10,
            ..SettlementContext::jpy_default()
        };

        let result = SettlementMatcher.calculate(&input, context);

        assert_eq!(
            result.transfers,
            vec![Transfer {
                from: MemberId("Bob"),
                to: MemberId("Carol"),
                amount: Money::from_i64(95),
            }]
        );
    }

    #[test]
    fn scaled_context_settles_in_minor_units() {
        let input = balances(&[("Alice", Money::new(1050, 2)), ("Bob", Money::new(-1050, 2))]);
        let context = SettlementContext {
            scale: 2,
            ..SettlementContext::jpy_default()
        };

        let result = SettlementMatcher.calculate(&input, context);

        assert_eq!(
            result.transfers,
            vec![Transfer {
                from: MemberId("Bob"),
                to: MemberId("Alice"),
                amount: Money::new(1050, 2),
            }]
        );
        assert!(result.new_balances.values().all(|balance| balance.is_zero()));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let input = balances(&[
            ("Alice", Money::new(12345, 1)),
            ("Bob", Money::new(-4567, 1)),
            ("Carol", Money::new(-7778, 1)),
        ]);

        let first = SettlementMatcher.calculate(&input, SettlementContext::jpy_default());
        let second = SettlementMatcher.calculate(&input, SettlementContext::jpy_default());

        assert_eq!(first, second);
    }
}
