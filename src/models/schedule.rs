use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::BoardError;

/// A day of the planning week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Short key used in slot ids and state files ("mon", "tue", ...).
    pub fn key(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }

    /// Full label for display ("Monday", ...).
    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
            Day::Sat => "Saturday",
            Day::Sun => "Sunday",
        }
    }
}

impl FromStr for Day {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(Day::Mon),
            "tue" => Ok(Day::Tue),
            "wed" => Ok(Day::Wed),
            "thu" => Ok(Day::Thu),
            "fri" => Ok(Day::Fri),
            "sat" => Ok(Day::Sat),
            "sun" => Ok(Day::Sun),
            other => Err(BoardError::InvalidInput(format!("unknown day: {}", other))),
        }
    }
}

/// The two meal rows of each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MealRow {
    Lunch,
    Dinner,
}

impl MealRow {
    pub const ALL: [MealRow; 2] = [MealRow::Lunch, MealRow::Dinner];

    pub fn key(self) -> &'static str {
        match self {
            MealRow::Lunch => "lunch",
            MealRow::Dinner => "dinner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealRow::Lunch => "Lunch",
            MealRow::Dinner => "Dinner",
        }
    }
}

impl FromStr for MealRow {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lunch" => Ok(MealRow::Lunch),
            "dinner" => Ok(MealRow::Dinner),
            other => Err(BoardError::InvalidInput(format!(
                "unknown meal row: {}",
                other
            ))),
        }
    }
}

/// One cell of the weekly grid, addressed as "day:row" (e.g. "mon:lunch").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot {
    pub day: Day,
    pub row: MealRow,
}

impl Slot {
    pub fn new(day: Day, row: MealRow) -> Self {
        Self { day, row }
    }

    /// All 14 slots in week order, lunch before dinner within a day.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| MealRow::ALL.into_iter().map(move |row| Slot { day, row }))
    }

    /// Display label, e.g. "Monday Lunch".
    pub fn label(&self) -> String {
        format!("{} {}", self.day.label(), self.row.label())
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.day.key(), self.row.key())
    }
}

impl FromStr for Slot {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, row) = s.split_once(':').ok_or_else(|| {
            BoardError::InvalidInput(format!("invalid slot (expected day:row): {}", s))
        })?;
        Ok(Slot {
            day: day.parse()?,
            row: row.parse()?,
        })
    }
}

// Slots key JSON maps in the state file, so they serialize as plain strings.
impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
