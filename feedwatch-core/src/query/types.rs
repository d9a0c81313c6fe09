/// Canonical filter for one feed connection.
///
/// `None` means unconstrained: the parameter is never sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub service: Option<String>,
    pub version: Option<String>,
    /// Microseconds since epoch.
    pub from: Option<i64>,
    /// Microseconds since epoch.
    pub to: Option<i64>,
}

impl Query {
    /// Parameters in the order they are written to the URL.
    pub fn params(&self) -> [(&'static str, Option<String>); 4] {
        [
            ("from", self.from.map(|v| v.to_string())),
            ("to", self.to.map(|v| v.to_string())),
            ("service", self.service.clone()),
            ("version", self.version.clone()),
        ]
    }

    pub fn is_unconstrained(&self) -> bool {
        self.params().iter().all(|(_, v)| v.is_none())
    }
}
