//! Receipt numbering
//!
//! Receipt numbers are a literal prefix followed by the counter value padded
//! with zeros to a minimum width (`RN-0007`). Wider values print in full
//! (`RN-12345`); there is no rollover.
//!
//! The counter itself lives behind [`CounterStore`]. Issuing a number is a
//! read, a format and an advance with no transaction around them, so a store
//! must only ever have one writer.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReceiptError, ReceiptResult};

/// Counter value used when nothing has been issued yet
pub const INITIAL_COUNTER: u64 = 1;

/// A formatted receipt number such as `RN-0007`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptNumber(String);

impl ReceiptNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this number matches user input, ignoring case and padding
    /// whitespace
    pub fn matches(&self, input: &str) -> bool {
        self.0.eq_ignore_ascii_case(input.trim())
    }
}

impl fmt::Display for ReceiptNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How counter values become receipt numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingPolicy {
    prefix: String,
    width: usize,
}

impl Default for NumberingPolicy {
    fn default() -> Self {
        Self::new("RN-", 4)
    }
}

impl NumberingPolicy {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
        }
    }

    /// Format a counter value
    pub fn format(&self, counter: u64) -> ReceiptNumber {
        ReceiptNumber(format!(
            "{}{:0width$}",
            self.prefix,
            counter,
            width = self.width
        ))
    }

    /// The receipt number for `counter` and the counter value that follows it
    pub fn next(&self, counter: u64) -> ReceiptResult<(ReceiptNumber, u64)> {
        let advanced = counter
            .checked_add(1)
            .ok_or_else(|| ReceiptError::Counter("receipt counter is exhausted".into()))?;
        Ok((self.format(counter), advanced))
    }
}

/// Storage for the receipt counter
pub trait CounterStore {
    /// The counter value the next receipt will be issued under
    fn read(&self) -> ReceiptResult<u64>;

    /// Move the counter to `value`
    fn write(&self, value: u64) -> ReceiptResult<()>;

    /// Move the counter one step forward, returning the new value
    fn advance(&self) -> ReceiptResult<u64> {
        let current = self.read()?;
        let next = current
            .checked_add(1)
            .ok_or_else(|| ReceiptError::Counter("receipt counter is exhausted".into()))?;
        self.write(next)?;
        Ok(next)
    }
}

/// Issue the next receipt number from `store` and advance it
pub fn issue_next<S>(store: &S, policy: &NumberingPolicy) -> ReceiptResult<ReceiptNumber>
where
    S: CounterStore + ?Sized,
{
    let number = policy.format(store.read()?);
    store.advance()?;
    Ok(number)
}

/// The number [`issue_next`] would return, without advancing
pub fn peek_next<S>(store: &S, policy: &NumberingPolicy) -> ReceiptResult<ReceiptNumber>
where
    S: CounterStore + ?Sized,
{
    Ok(policy.format(store.read()?))
}

/// Counter held in memory, for embedding and tests
#[derive(Debug)]
pub struct MemoryCounterStore {
    value: Cell<u64>,
}

impl MemoryCounterStore {
    pub fn new(value: u64) -> Self {
        Self {
            value: Cell::new(value),
        }
    }
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self::new(INITIAL_COUNTER)
    }
}

impl CounterStore for MemoryCounterStore {
    fn read(&self) -> ReceiptResult<u64> {
        Ok(self.value.get())
    }

    fn write(&self, value: u64) -> ReceiptResult<()> {
        self.value.set(value);
        Ok(())
    }
}
