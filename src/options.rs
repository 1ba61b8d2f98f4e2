//! Table configuration options.

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solojack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_balance(500)
///     .with_min_bet(10);
/// ```
///
/// Blackjack pays a fixed 3:2, with the payout floored to a whole unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Starting (and reset) balance of the wallet.
    pub starting_balance: usize,
    /// Minimum accepted bet.
    pub min_bet: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: 1000,
            min_bet: 5,
        }
    }
}

impl TableOptions {
    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: usize) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the table minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }
}
