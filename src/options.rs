//! Table configuration options.

extern crate alloc;

use alloc::string::String;

/// Maximum number of scripted bots seated next to the human.
pub const MAX_BOTS: u8 = 2;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_packs(6)
///     .with_bots(2)
///     .with_player_name("Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of 52-card packs shuffled into each round's deck.
    pub packs: u8,
    /// Number of scripted bots (0 to [`MAX_BOTS`]).
    pub bots: u8,
    /// Name used for the human in result messages.
    pub player_name: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            packs: 4,
            bots: 0,
            player_name: String::from("Player"),
        }
    }
}

impl TableOptions {
    /// Sets the number of packs.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_packs(1);
    /// assert_eq!(options.packs, 1);
    /// ```
    #[must_use]
    pub const fn with_packs(mut self, packs: u8) -> Self {
        self.packs = packs;
        self
    }

    /// Sets the number of bots, clamped to [`MAX_BOTS`].
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_bots(5);
    /// assert_eq!(options.bots, 2);
    /// ```
    #[must_use]
    pub const fn with_bots(mut self, bots: u8) -> Self {
        self.bots = if bots > MAX_BOTS { MAX_BOTS } else { bots };
        self
    }

    /// Sets the human player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_name("Ada");
    /// assert_eq!(options.player_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }
}
