use slfa_data::players::{AgeRange, PlayerRecord};
use slfa_data::Roster;
use std::fmt::Display;

/// A filter control value: either the wildcard or one concrete option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: Clone + PartialEq> Choice<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Step through `All -> options[0] -> ... -> options[n-1] -> All`.
    /// A value no longer present in `options` restarts the cycle.
    pub fn cycle(&self, options: &[T]) -> Self {
        let next_index = match self {
            Self::All => 0,
            Self::Only(current) => match options.iter().position(|o| o == current) {
                Some(i) => i + 1,
                None => 0,
            },
        };

        options
            .get(next_index)
            .cloned()
            .map(Self::Only)
            .unwrap_or(Self::All)
    }
}

impl<T: Display> Display for Choice<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Positions offered by the position control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionFilter {
    Goalkeeper,
    Defender,
    Midfielder,
    Attacker,
}

impl PositionFilter {
    pub const ALL: [PositionFilter; 4] = [
        PositionFilter::Goalkeeper,
        PositionFilter::Defender,
        PositionFilter::Midfielder,
        PositionFilter::Attacker,
    ];

    /// Lower-case fragment searched for in a record's position.
    /// `keeper` covers both "Goal Keeper" and "Goalkeeper".
    pub fn needle(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "keeper",
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Attacker => "attacker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goal Keeper",
            Self::Defender => "Defender",
            Self::Midfielder => "Midfielder",
            Self::Attacker => "Attacker",
        }
    }
}

impl Display for PositionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of the four filter controls, taken for a single filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub position: Choice<PositionFilter>,
    pub club: Choice<String>,
    pub age_range: Choice<AgeRange>,
}

impl FilterCriteria {
    pub fn is_wildcard(&self) -> bool {
        self.search.trim().is_empty()
            && self.position.is_all()
            && self.club.is_all()
            && self.age_range.is_all()
    }

    pub fn matches(&self, player: &PlayerRecord) -> bool {
        let search = self.search.trim().to_lowercase();
        let passes_search = player.name.to_lowercase().contains(&search);

        let passes_position = match &self.position {
            Choice::All => true,
            Choice::Only(position) => player.position.to_lowercase().contains(position.needle()),
        };

        let passes_club = match &self.club {
            Choice::All => true,
            Choice::Only(club) => player.club.to_lowercase() == club.to_lowercase(),
        };

        let passes_age = match &self.age_range {
            Choice::All => true,
            Choice::Only(age_range) => player.age_range == *age_range,
        };

        passes_search && passes_position && passes_club && passes_age
    }
}

/// Stable filter over the roster: original order, no re-sorting
pub fn filter<'a>(roster: &'a Roster, criteria: &FilterCriteria) -> Vec<&'a PlayerRecord> {
    roster
        .players()
        .iter()
        .filter(|player| criteria.matches(player))
        .collect()
}
