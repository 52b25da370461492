use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Known bank apps that accept a shared QR-code image and start a transfer from it.
pub const DEFAULT_BANK_APP_PACKAGES: [&str; 10] = [
    "cz.rb.app.smartphonebanking",
    "eu.inmite.prj.kb.mobilbank",
    "cz.kb.ndb",
    "cz.csas.georgego",
    "cz.csob.smart",
    "cz.moneta.smartbanka",
    "cz.fio.sb2",
    "cz.airbank.android",
    "cz.creditas.richee",
    "cz.pbktechnology.partners.client",
];

/// Identifier of an installed application (a package name on Android).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A distinct set of app identifiers sharing one role.
///
/// Backed by a `BTreeSet` so that iteration order is stable and two sets
/// built from the same ids compare equal regardless of probe order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReceiverSet(BTreeSet<AppId>);

impl ReceiverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppId> {
        self.0.iter()
    }

    /// Returns the only member when the set has exactly one.
    pub fn single(&self) -> Option<&AppId> {
        match self.0.len() {
            1 => self.0.first(),
            _ => None,
        }
    }

    /// Keeps only the ids present on `allow_list`, leaving `self` untouched.
    pub fn allowed_by(&self, allow_list: &AllowList) -> Self {
        self.0
            .iter()
            .filter(|id| allow_list.contains(id))
            .cloned()
            .collect()
    }
}

impl<T: Into<AppId>> FromIterator<T> for ReceiverSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ReceiverSet {
    type Item = AppId;
    type IntoIter = std::collections::btree_set::IntoIter<AppId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReceiverSet {
    type Item = &'a AppId;
    type IntoIter = std::collections::btree_set::Iter<'a, AppId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordered list of apps trusted to act as image receivers.
///
/// Generic image handlers (galleries, messengers) also accept a shared
/// image, so only apps on this list count as bank apps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList(Vec<AppId>);

impl AllowList {
    pub fn contains(&self, id: &AppId) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppId> {
        self.0.iter()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        DEFAULT_BANK_APP_PACKAGES.into_iter().collect()
    }
}

impl<T: Into<AppId>> FromIterator<T> for AllowList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Receivers found for one payment attempt, tagged by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Receivers {
    /// Apps handling the payment descriptor directly.
    pub descriptor: ReceiverSet,
    /// Allow-listed apps handling a shared image.
    pub image: ReceiverSet,
}
