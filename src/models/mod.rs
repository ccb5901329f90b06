mod category;
mod expense;
mod fleet;
mod validity;

pub use category::Category;
pub use expense::{EntryError, Expense, NewExpense};
pub use fleet::{is_known_plate, plate_like, ROSTER};
pub use validity::{parse_due, DueKind, Validity};

#[cfg(test)]
mod tests;
