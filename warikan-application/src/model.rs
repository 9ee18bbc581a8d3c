use warikan_domain::{
    Expense, ExpenseTotals, INDIVIDUAL_PAYER, Member, MemberId, Money, Payer, SettlementContext,
    SplitType,
};

/// Item label of a freshly added expense row.
pub const NEW_EXPENSE_ITEM: &str = "新規項目";

/// Category of a freshly added expense row.
pub const DEFAULT_CATEGORY: &str = "その他";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
}

impl MemberRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn as_member(&self) -> Member<'_> {
        Member::new(&self.id, &self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    pub id: String,
    pub item: String,
    pub category: String,
    pub budget: Money,
    pub actual: Money,
    pub payer: String,
    pub split_type: SplitType,
}

/// One editable column of an expense row.
#[derive(Clone, Debug, PartialEq)]
pub enum ExpenseField {
    Item(String),
    Category(String),
    Budget(Money),
    Actual(Money),
    Payer(String),
    SplitType(SplitType),
}

impl ExpenseRecord {
    /// A fresh row as the trip form creates it: shared, paid individually.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item: NEW_EXPENSE_ITEM.to_owned(),
            category: DEFAULT_CATEGORY.to_owned(),
            budget: Money::ZERO,
            actual: Money::ZERO,
            payer: INDIVIDUAL_PAYER.to_owned(),
            split_type: SplitType::Split,
        }
    }

    pub fn apply(&mut self, field: ExpenseField) {
        match field {
            ExpenseField::Item(item) => self.item = item,
            ExpenseField::Category(category) => self.category = category,
            ExpenseField::Budget(budget) => self.budget = budget,
            ExpenseField::Actual(actual) => self.actual = actual,
            ExpenseField::Payer(payer) => self.payer = payer,
            ExpenseField::SplitType(split_type) => self.split_type = split_type,
        }
    }

    pub fn as_expense(&self) -> Expense<'_> {
        Expense {
            id: &self.id,
            item: &self.item,
            category: &self.category,
            budget: self.budget,
            actual: self.actual,
            payer: Payer::from_name(&self.payer),
            split_type: self.split_type,
        }
    }
}

/// One consistent view of the trip's members and expenses, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripSnapshot {
    pub(crate) members: Vec<MemberRecord>,
    pub(crate) expenses: Vec<ExpenseRecord>,
}

impl TripSnapshot {
    pub fn new(members: Vec<MemberRecord>, expenses: Vec<ExpenseRecord>) -> Self {
        Self { members, expenses }
    }

    pub fn member_records(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn expense_records(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn members(&self) -> Vec<Member<'_>> {
        self.members.iter().map(MemberRecord::as_member).collect()
    }

    pub fn expenses(&self) -> Vec<Expense<'_>> {
        self.expenses.iter().map(ExpenseRecord::as_expense).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonBalance<'a> {
    pub id: MemberId<'a>,
    pub name: &'a str,
    pub balance: Money,
}

/// A transfer with both ends resolved to display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferLine<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReport<'a> {
    pub totals: ExpenseTotals,
    pub shared_total: Money,
    pub per_head_share: Money,
    pub member_count: usize,
    pub balances: Vec<PersonBalance<'a>>,
    pub transactions: Vec<TransferLine<'a>>,
    pub context: SettlementContext,
}

impl SettlementReport<'_> {
    pub fn is_over_budget(&self) -> bool {
        self.totals.is_over_budget()
    }

    /// Per-head share rounded to whole atomic units for display.
    pub fn per_head_share_units(&self) -> i64 {
        self.context.to_atomic_units(self.per_head_share)
    }

    pub fn needs_settlement(&self) -> bool {
        !self.transactions.is_empty()
    }
}
