use std::fmt::{self, Display};

use crate::data_structures::CardVec;

use super::pile::{PileCards, PileKind, Rank};

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Rank]) -> fmt::Result {
    f.write_str("[")?;
    for (i, c) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str("]")
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// One replayed move. `before` and `after` are the destination's contents.
    Move {
        step: usize,
        source: u8,
        dest: u8,
        source_kind: PileKind,
        dest_kind: PileKind,
        cards: CardVec,
        before: CardVec,
        after: PileCards,
        unlocked: bool,
    },
    Collapse {
        pile: u8,
        rank: Rank,
    },
    Unlock {
        pile: u8,
    },
}

impl Event {
    pub fn indent_level(&self) -> u8 {
        match self {
            Event::Move { .. } => 0,
            Event::Collapse { .. } => 1,
            Event::Unlock { .. } => 1,
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Move {
                step,
                source,
                dest,
                source_kind,
                dest_kind,
                cards,
                before,
                after,
                unlocked,
            } => {
                writeln!(f, "Move {step}: Move from {source_kind} {source} to {dest_kind} {dest}")?;
                f.write_str("  ")?;
                write_cards(f, cards)?;
                f.write_str(" -> ")?;
                write_cards(f, before)?;
                f.write_str(" = ")?;
                match after {
                    PileCards::Collapsed(..) => f.write_str("Collapse")?,
                    PileCards::Cards(cards) => write_cards(f, cards)?,
                }
                if *unlocked {
                    f.write_str(" (Unlocked Freecell)")?;
                }
                Ok(())
            }
            Event::Collapse { pile, rank } => write!(f, "Pile {pile} collapsed: X[{rank}]"),
            Event::Unlock { pile } => write!(f, "Holding cell {pile} unlocked"),
        }
    }
}

/// Domain events recorded while replaying a solution. A disabled log drops everything.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    pub enabled: bool,
    pub events: Vec<Event>,
}

impl fmt::Debug for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLog")
            .field("enabled", &self.enabled)
            .field("len", &self.events.len())
            .finish()
    }
}

impl EventLog {
    pub fn new(enabled: bool) -> EventLog {
        EventLog {
            enabled,
            events: vec![],
        }
    }

    #[inline]
    pub fn log(&mut self, event: Event) {
        if self.enabled {
            self.events.push(event)
        }
    }

    /// Lazily builds the event, so a disabled log never constructs it.
    #[inline]
    pub fn log_with<F: FnOnce() -> Event>(&mut self, f: F) {
        if self.enabled {
            self.events.push(f())
        }
    }

    pub fn print(&self) {
        for event in &self.events {
            let prefix = " ".repeat(2 * event.indent_level() as usize);
            println!("{prefix}{event}");
        }
    }

    pub fn filter<T, F: Fn(&Event) -> Option<T>>(&self, f: F) -> Vec<T> {
        self.events.iter().filter_map(f).collect()
    }
}
