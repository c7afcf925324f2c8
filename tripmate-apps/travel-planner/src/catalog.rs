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

//! # Catalogs
//!
//! Read-only lookup tables from a lower-case key to an ordered list of offers.
//! Keys keep their insertion order so listings are stable across calls.

use std::fmt;

#[derive(Debug, Clone)]
pub struct Catalog<K, T> {
    entries: Vec<(K, Vec<T>)>,
}

impl<K: PartialEq, T> Catalog<K, T> {
    /// Builds a catalog, dropping empty offer lists. A later duplicate key
    /// replaces the offers of the earlier one.
    pub fn new(entries: impl IntoIterator<Item = (K, Vec<T>)>) -> Self {
        let mut catalog = Catalog {
            entries: Vec::new(),
        };
        for (key, offers) in entries {
            if offers.is_empty() {
                continue;
            }
            match catalog.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = offers,
                None => catalog.entries.push((key, offers)),
            }
        }
        catalog
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&[T]>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, offers)| offers.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

/// Ordered city pair keying the flights catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    pub source: String,
    pub destination: String,
}

impl Route {
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_lowercase(),
            destination: destination.to_lowercase(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            title_case(&self.source),
            title_case(&self.destination)
        )
    }
}

/// Upper-cases the first letter of every word and lower-cases the rest.
/// A word starts after any non-alphabetic character.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Sorted, title-cased, comma-joined list of keys for error messages.
pub fn list_alternatives<'a>(keys: impl Iterator<Item = &'a String>) -> String {
    let mut names: Vec<String> = keys.map(|k| title_case(k)).collect();
    names.sort();
    names.join(", ")
}
