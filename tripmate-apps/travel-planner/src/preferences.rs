//!  Tripmate Travel Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Free-text travel preferences ("luxury beach holiday", "budget, food")
//! reduced to the keywords the planner and the comparator react to.

use once_cell::sync::Lazy;
use regex::RegexSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Budget,
    Luxury,
    Adventure,
    Cultural,
    Heritage,
    Food,
    Culinary,
}

const KEYWORDS: [(Keyword, &str); 7] = [
    (Keyword::Budget, "(?i)budget"),
    (Keyword::Luxury, "(?i)luxury"),
    (Keyword::Adventure, "(?i)adventure"),
    (Keyword::Cultural, "(?i)cultural"),
    (Keyword::Heritage, "(?i)heritage"),
    (Keyword::Food, "(?i)food"),
    (Keyword::Culinary, "(?i)culinary"),
];

static KEYWORD_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new(KEYWORDS.iter().map(|(_, pattern)| pattern)).expect("keyword patterns are valid")
});

/// Hotel class a preference string asks for. Luxury wins over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelTier {
    Luxury,
    Budget,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    raw: Option<String>,
    matched: Vec<Keyword>,
}

impl Preferences {
    /// Blank input counts as no preferences at all.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Self::default();
        };
        let matched = KEYWORD_SET
            .matches(raw)
            .into_iter()
            .map(|i| KEYWORDS[i].0)
            .collect();
        Self {
            raw: Some(raw.to_string()),
            matched,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn is_specified(&self) -> bool {
        self.raw.is_some()
    }

    pub fn mentions(&self, keyword: Keyword) -> bool {
        self.matched.contains(&keyword)
    }

    pub fn hotel_tier(&self) -> Option<HotelTier> {
        if self.mentions(Keyword::Luxury) {
            Some(HotelTier::Luxury)
        } else if self.mentions(Keyword::Budget) {
            Some(HotelTier::Budget)
        } else {
            None
        }
    }

    /// Activity category to focus the search on.
    pub fn activity_focus(&self) -> Option<&'static str> {
        if self.mentions(Keyword::Adventure) {
            Some("Adventure")
        } else if self.mentions(Keyword::Cultural) || self.mentions(Keyword::Heritage) {
            Some("Heritage")
        } else if self.mentions(Keyword::Food) || self.mentions(Keyword::Culinary) {
            Some("Culinary")
        } else {
            None
        }
    }
}
