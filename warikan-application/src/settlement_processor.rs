use crate::{
    error::SnapshotParseError,
    model::{PersonBalance, SettlementReport, TransferLine, TripSnapshot},
    ports::SnapshotParser,
};
use fxhash::{FxHashMap, FxHashSet};
use warikan_domain::{
    BalanceCalculator, BalanceSheet, ExpenseTotals, MemberId, SettlementContext,
    SettlementMatcher,
};

#[derive(Clone, Copy)]
pub struct SettlementProcessor<'a> {
    parser: &'a dyn SnapshotParser,
    context: SettlementContext,
}

#[derive(Debug)]
pub enum ProcessingOutcome {
    Success(TripSnapshot),
    SyntaxError {
        line: usize,
        column: usize,
        detail: String,
    },
    InvalidDocument {
        line: usize,
        column: usize,
        detail: String,
    },
}

impl<'a> SettlementProcessor<'a> {
    pub fn new(parser: &'a dyn SnapshotParser, context: SettlementContext) -> Self {
        Self { parser, context }
    }

    pub fn parse_snapshot(&self, content: &str) -> ProcessingOutcome {
        match self.parser.parse(content) {
            Ok(snapshot) => ProcessingOutcome::Success(snapshot),
            Err(err) => Self::map_parse_error(err),
        }
    }

    pub fn calculate_balances<'b>(&self, snapshot: &'b TripSnapshot) -> BalanceSheet<'b> {
        BalanceCalculator.calculate(&snapshot.members(), &snapshot.expenses())
    }

    /// Evaluates the snapshot from scratch: totals, balances and transfers.
    pub fn build_report<'b>(&self, snapshot: &'b TripSnapshot) -> SettlementReport<'b> {
        let members = snapshot.members();
        let expenses = snapshot.expenses();

        let mut seen_names = FxHashSet::default();
        for member in &members {
            if !seen_names.insert(member.name) {
                tracing::warn!(
                    name = member.name,
                    "Duplicate member name; only the first member is credited as payer"
                );
            }
        }

        let totals = ExpenseTotals::from_expenses(&expenses);
        let sheet = BalanceCalculator.calculate(&members, &expenses);
        let settlement = SettlementMatcher.calculate(&sheet.balances, self.context);

        let names: FxHashMap<MemberId<'b>, &'b str> = members
            .iter()
            .map(|member| (member.id, member.name))
            .collect();
        let display_name = |id: MemberId<'b>| names.get(&id).copied().unwrap_or(id.as_str());

        let balances: Vec<PersonBalance<'b>> = sheet
            .balances
            .iter()
            .map(|(id, balance)| PersonBalance {
                id: *id,
                name: display_name(*id),
                balance: *balance,
            })
            .collect();

        let transactions: Vec<TransferLine<'b>> = settlement
            .transfers
            .iter()
            .map(|transfer| TransferLine {
                from: display_name(transfer.from),
                to: display_name(transfer.to),
                amount: transfer.amount,
            })
            .collect();

        tracing::debug!(
            members = members.len(),
            expenses = expenses.len(),
            shared_total = %sheet.shared_total,
            transfers = transactions.len(),
            "Built settlement report"
        );

        SettlementReport {
            totals,
            shared_total: sheet.shared_total,
            per_head_share: sheet.per_head_share,
            member_count: members.len(),
            balances,
            transactions,
            context: self.context,
        }
    }

    fn map_parse_error(err: SnapshotParseError) -> ProcessingOutcome {
        match err {
            SnapshotParseError::Syntax {
                line,
                column,
                detail,
            } => ProcessingOutcome::SyntaxError {
                line,
                column,
                detail,
            },
            SnapshotParseError::InvalidDocument {
                line,
                column,
                detail,
            } => ProcessingOutcome::InvalidDocument {
                line,
                column,
                detail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseRecord, MemberRecord};
    use rstest::{fixture, rstest};
    use warikan_domain::{Money, SplitType};

    struct FixedParser(Result<TripSnapshot, SnapshotParseError>);

    impl SnapshotParser for FixedParser {
        fn parse(&self, _content: &str) -> Result<TripSnapshot, SnapshotParseError> {
            self.0.clone()
        }
    }

    fn members(names: &[&str]) -> Vec<MemberRecord> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| MemberRecord::new(format!("m-{idx}"), *name))
            .collect()
    }

    fn expense(
        id: &str,
        budget: i64,
        actual: i64,
        payer: &str,
        split_type: SplitType,
    ) -> ExpenseRecord {
        ExpenseRecord {
            item: id.to_owned(),
            budget: Money::from_i64(budget),
            actual: Money::from_i64(actual),
            payer: payer.to_owned(),
            split_type,
            ..ExpenseRecord::blank(id)
        }
    }

    #[fixture]
    fn parser() -> FixedParser {
        FixedParser(Ok(TripSnapshot::default()))
    }

    #[rstest]
    fn report_for_single_payer(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());
        let snapshot = TripSnapshot::new(
            members(&["Alice", "Bob", "Carol"]),
            vec![
                expense("宿", 320, 300, "Alice", SplitType::Split),
                expense("お土産", 50, 80, "Bob", SplitType::Individual),
            ],
        );

        let report = processor.build_report(&snapshot);

        assert_eq!(report.totals.budget, Money::from_i64(370));
        assert_eq!(report.totals.actual, Money::from_i64(380));
        assert!(report.is_over_budget());
        assert_eq!(report.shared_total, Money::from_i64(300));
        assert_eq!(report.per_head_share, Money::from_i64(100));
        assert_eq!(report.member_count, 3);
        assert_eq!(
            report.transactions,
            vec![
                TransferLine {
                    from: "Bob",
                    to: "Alice",
                    amount: Money::from_i64(100),
                },
                TransferLine {
                    from: "Carol",
                    to: "Alice",
                    amount: Money::from_i64(100),
                },
            ]
        );
        let names: Vec<&str> = report.balances.iter().map(|person| person.name).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[rstest]
    fn report_without_members_is_empty(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());
        let snapshot = TripSnapshot::new(
            Vec::new(),
            vec![expense("夕食", 0, 12000, "Alice", SplitType::Split)],
        );

        let report = processor.build_report(&snapshot);

        assert_eq!(report.shared_total, Money::ZERO);
        assert_eq!(report.per_head_share, Money::ZERO);
        assert_eq!(report.totals.actual, Money::from_i64(12000));
        assert!(report.balances.is_empty());
        assert!(!report.needs_settlement());
    }

    #[rstest]
    fn removed_payer_leaves_residual_debt(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());
        let mut snapshot = TripSnapshot::new(
            members(&["Alice", "Bob", "Dave"]),
            vec![expense("レンタカー", 0, 100, "Dave", SplitType::Split)],
        );
        snapshot.remove_member("m-2");

        let report = processor.build_report(&snapshot);

        assert_eq!(report.shared_total, Money::from_i64(100));
        assert!(
            report
                .balances
                .iter()
                .all(|person| person.balance == Money::from_i64(-50))
        );
        assert!(!report.needs_settlement());
    }

    #[rstest]
    fn per_head_share_is_rounded_for_display(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());
        let snapshot = TripSnapshot::new(
            members(&["Alice", "Bob", "Carol"]),
            vec![expense("ガソリン", 0, 10000, "Alice", SplitType::Split)],
        );

        let report = processor.build_report(&snapshot);

        assert_eq!(report.per_head_share_units(), 3333);
        assert_eq!(
            report.transactions,
            vec![
                TransferLine {
                    from: "Bob",
                    to: "Alice",
                    amount: Money::from_i64(3333),
                },
                TransferLine {
                    from: "Carol",
                    to: "Alice",
                    amount: Money::from_i64(3333),
                },
            ]
        );
    }

    #[test]
    fn parse_errors_map_to_outcomes() {
        let parser = FixedParser(Err(SnapshotParseError::Syntax {
            line: 3,
            column: 7,
            detail: "expected value".to_owned(),
        }));
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());

        match processor.parse_snapshot("{") {
            ProcessingOutcome::SyntaxError { line, column, .. } => {
                assert_eq!((line, column), (3, 7));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[rstest]
    fn parse_success_passes_snapshot_through(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());

        assert!(matches!(
            processor.parse_snapshot("{}"),
            ProcessingOutcome::Success(snapshot) if snapshot == TripSnapshot::default()
        ));
    }

    #[rstest]
    fn calculate_balances_matches_report(parser: FixedParser) {
        let processor = SettlementProcessor::new(&parser, SettlementContext::jpy_default());
        let snapshot = TripSnapshot::new(
            members(&["Alice", "Bob"]),
            vec![expense("温泉", 0, 3, "Alice", SplitType::Split)],
        );

        let sheet = processor.calculate_balances(&snapshot);

        assert_eq!(sheet.per_head_share, Money::new(15, 1));
        assert!(processor.build_report(&snapshot).transactions.is_empty());
    }
}
