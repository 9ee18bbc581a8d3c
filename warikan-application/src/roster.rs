use crate::{
    error::RosterError,
    model::{ExpenseField, ExpenseRecord, MemberRecord, TripSnapshot},
};
use warikan_domain::INDIVIDUAL_PAYER;

impl TripSnapshot {
    /// Adds a member after trimming the name.
    ///
    /// Names are the join key between members and expense payers, so they
    /// must be unique and must not collide with the individual-payer marker.
    pub fn add_member(
        &mut self,
        id: impl Into<String>,
        name: &str,
    ) -> Result<&MemberRecord, RosterError> {
        let id = id.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if name == INDIVIDUAL_PAYER {
            return Err(RosterError::ReservedName(name.to_owned()));
        }
        if self.members.iter().any(|member| member.name == name) {
            return Err(RosterError::DuplicateName(name.to_owned()));
        }
        if self.members.iter().any(|member| member.id == id) {
            return Err(RosterError::DuplicateId(id));
        }

        self.members.push(MemberRecord::new(id, name));
        Ok(&self.members[self.members.len() - 1])
    }

    /// Removes a member. Expenses they paid stay in the snapshot and keep
    /// counting toward the shared total without crediting anyone.
    pub fn remove_member(&mut self, id: &str) -> Option<MemberRecord> {
        let index = self.members.iter().position(|member| member.id == id)?;
        Some(self.members.remove(index))
    }

    /// Appends a blank shared row paid individually.
    pub fn add_expense(&mut self, id: impl Into<String>) -> Result<&ExpenseRecord, RosterError> {
        let id = id.into();
        if self.expenses.iter().any(|expense| expense.id == id) {
            return Err(RosterError::DuplicateExpenseId(id));
        }

        self.expenses.push(ExpenseRecord::blank(id));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Overwrites one field of an expense row. Payers are free text here, so a
    /// name outside the roster simply credits nobody.
    pub fn update_expense(
        &mut self,
        id: &str,
        field: ExpenseField,
    ) -> Result<&ExpenseRecord, RosterError> {
        let expense = self
            .expenses
            .iter_mut()
            .find(|expense| expense.id == id)
            .ok_or_else(|| RosterError::UnknownExpense(id.to_owned()))?;
        expense.apply(field);
        Ok(&*expense)
    }

    pub fn remove_expense(&mut self, id: &str) -> Option<ExpenseRecord> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(index))
    }
}
