use crate::model::{Expense, Member, MemberBalances, MemberId, Money};
use fxhash::FxHashMap;

/// Net position of every member relative to a perfectly even split.
#[derive(Debug, Default, PartialEq)]
pub struct BalanceSheet<'a> {
    /// Sum of `actual` over shared expenses.
    pub shared_total: Money,
    /// `shared_total` divided by the member count, unrounded.
    pub per_head_share: Money,
    /// Positive: the member is owed money. Negative: the member owes money.
    pub balances: MemberBalances<'a>,
}

impl BalanceSheet<'_> {
    pub fn total(&self) -> Money {
        self.balances.values().copied().sum()
    }
}

/// Balance calculation service
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Derives member balances from the current expense list.
    ///
    /// Payers are matched by display name. A shared expense whose payer is no
    /// longer a member still counts toward `shared_total` but credits nobody.
    pub fn calculate<'a>(
        &self,
        members: &[Member<'a>],
        expenses: &[Expense<'_>],
    ) -> BalanceSheet<'a> {
        if members.is_empty() {
            return BalanceSheet::default();
        }

        let mut balances: MemberBalances<'a> = members
            .iter()
            .map(|member| (member.id, Money::ZERO))
            .collect();

        // First member wins when names collide.
        let mut payer_lookup: FxHashMap<&'a str, MemberId<'a>> = FxHashMap::default();
        for member in members {
            payer_lookup.entry(member.name).or_insert(member.id);
        }

        let mut shared_total = Money::ZERO;
        for expense in expenses.iter().filter(|expense| expense.is_shared()) {
            shared_total += expense.actual;

            if let Some(name) = expense.payer.member_name()
                && let Some(payer) = payer_lookup.get(name)
                && let Some(balance) = balances.get_mut(payer)
            {
                *balance += expense.actual;
            }
        }

        let per_head_share = shared_total.split_evenly(balances.len());
        for balance in balances.values_mut() {
            *balance -= per_head_share;
        }

        BalanceSheet {
            shared_total,
            per_head_share,
            balances,
        }
    }
}
