use rand::Rng;
use rand::distr::{Alphanumeric, Distribution};
use std::fmt;

pub const ROW_ID_LEN: usize = 5;

/// Correlates a summary row with its optional detail row.
///
/// Ids are random and unchecked; two rows may share one.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct RowId(pub String);

impl RowId {
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..ROW_ID_LEN)
            .map(|_| char::from(Alphanumeric.sample(rng)))
            .collect();
        RowId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId(s.to_owned())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId(s)
    }
}
