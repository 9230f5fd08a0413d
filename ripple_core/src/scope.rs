//! Reporting scopes per the GHG Protocol
//!
//! A measurement covers any subset of the three scopes. The form starts
//! (and resets) with all of them selected.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{FormError, FormResult};

/// GHG Protocol emission categories
///
/// # Example
/// ```
/// use ripple_core::scope::Scope;
///
/// assert_eq!(Scope::Scope2.description(), "Indirect, purchased energy");
/// assert_eq!(Scope::from_str_flexible("3").unwrap(), Scope::Scope3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    /// Direct, on-site emissions
    #[serde(rename = "Scope 1")]
    Scope1,
    /// Indirect emissions from purchased energy
    #[serde(rename = "Scope 2")]
    Scope2,
    /// Value chain emissions
    #[serde(rename = "Scope 3")]
    Scope3,
}

impl Scope {
    /// All scopes in display order
    pub const ALL: [Scope; 3] = [Scope::Scope1, Scope::Scope2, Scope::Scope3];

    /// Scope number (1, 2 or 3)
    pub fn number(&self) -> u8 {
        match self {
            Scope::Scope1 => 1,
            Scope::Scope2 => 2,
            Scope::Scope3 => 3,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Scope::Scope1 => "Scope 1",
            Scope::Scope2 => "Scope 2",
            Scope::Scope3 => "Scope 3",
        }
    }

    /// Tooltip text shown next to the scope checkbox
    pub fn description(&self) -> &'static str {
        match self {
            Scope::Scope1 => "Direct, on-site emissions",
            Scope::Scope2 => "Indirect, purchased energy",
            Scope::Scope3 => "Value chain emissions",
        }
    }

    /// Parse from common string representations ("1", "scope 1", "Scope1", "s1")
    pub fn from_str_flexible(s: &str) -> FormResult<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match normalized.as_str() {
            "1" | "s1" | "scope1" => Ok(Scope::Scope1),
            "2" | "s2" | "scope2" => Ok(Scope::Scope2),
            "3" | "s3" | "scope3" => Ok(Scope::Scope3),
            _ => Err(FormError::unknown_scope(s)),
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The set of scopes included in a measurement.
///
/// Backed by an ordered set so iteration always follows scope number,
/// whatever order the scopes were toggled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeSet(BTreeSet<Scope>);

impl ScopeSet {
    /// All three scopes (the form's initial selection)
    pub fn all() -> Self {
        ScopeSet(Scope::ALL.into_iter().collect())
    }

    /// No scopes selected
    pub fn empty() -> Self {
        ScopeSet(BTreeSet::new())
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.0.contains(&scope)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Scope> + '_ {
        self.0.iter().copied()
    }

    /// Return the set with `scope` added if absent or removed if present.
    ///
    /// # Example
    /// ```
    /// use ripple_core::scope::{Scope, ScopeSet};
    ///
    /// let set = ScopeSet::all().toggled(Scope::Scope2);
    /// assert!(!set.contains(Scope::Scope2));
    /// assert!(set.toggled(Scope::Scope2).contains(Scope::Scope2));
    /// ```
    pub fn toggled(&self, scope: Scope) -> Self {
        let mut next = self.clone();
        next.toggle(scope);
        next
    }

    /// In-place form of [`ScopeSet::toggled`]. Returns whether the scope is now selected.
    pub fn toggle(&mut self, scope: Scope) -> bool {
        if self.0.remove(&scope) {
            false
        } else {
            self.0.insert(scope);
            true
        }
    }
}

impl Default for ScopeSet {
    fn default() -> Self {
        ScopeSet::all()
    }
}

impl FromIterator<Scope> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        ScopeSet(iter.into_iter().collect())
    }
}

impl std::fmt::Display for ScopeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let names: Vec<&str> = self.iter().map(|s| s.display_name()).collect();
        write!(f, "{}", names.join(", "))
    }
}
