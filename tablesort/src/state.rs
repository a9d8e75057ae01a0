//! Sort state and the reducer that advances it.

/// Sort state of a single header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum SortState {
    #[default]
    None,
    Ascending,
    Descending,
}

/// How repeated activations of the same header move through the states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// `None -> Ascending -> Descending -> None`. The third activation
    /// restores the order captured at initialization.
    #[default]
    Cycle,
    /// `Ascending <-> Descending`. No snapshot is kept.
    Toggle,
}

impl SortPolicy {
    pub fn keeps_snapshot(self) -> bool {
        matches!(self, SortPolicy::Cycle)
    }
}

impl SortState {
    /// The state a header moves to when activated from `self`.
    pub fn next(self, policy: SortPolicy) -> SortState {
        match (policy, self) {
            (_, SortState::None) => SortState::Ascending,
            (_, SortState::Ascending) => SortState::Descending,
            (SortPolicy::Cycle, SortState::Descending) => SortState::None,
            (SortPolicy::Toggle, SortState::Descending) => SortState::Ascending,
        }
    }

    /// Indicator glyph shown inside the header.
    pub fn glyph(self) -> &'static str {
        match self {
            SortState::None => "↕",
            SortState::Ascending => "↑",
            SortState::Descending => "↓",
        }
    }

    pub fn is_sorted(self) -> bool {
        !matches!(self, SortState::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_returns_to_none() {
        let mut state = SortState::None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.next(SortPolicy::Cycle);
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                SortState::Ascending,
                SortState::Descending,
                SortState::None,
                SortState::Ascending
            ]
        );
    }

    #[test]
    fn toggle_never_clears() {
        let mut state = SortState::None;
        for _ in 0..10 {
            state = state.next(SortPolicy::Toggle);
            assert!(state.is_sorted());
        }
        assert_eq!(SortState::Descending.next(SortPolicy::Toggle), SortState::Ascending);
    }

    #[test]
    fn glyphs() {
        assert_eq!(SortState::None.glyph(), "↕");
        assert_eq!(SortState::Ascending.glyph(), "↑");
        assert_eq!(SortState::Descending.glyph(), "↓");
    }
}
