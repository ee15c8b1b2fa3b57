//! Sort configuration for the file table.

/// Column a listing can be sorted by.
///
/// `Other` carries any field name without a dedicated comparison; it sorts
/// by generic string collation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Size,
    Modified,
    Other(String),
}

impl SortKey {
    /// Parse a `data-sort-key` value.
    pub fn from_attr(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "size" => Self::Size,
            "modified" => Self::Modified,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Modified => "modified",
            Self::Other(field) => field,
        }
    }
}

/// The single active sort: a key and a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            ascending: true,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, ascending: bool) -> Self {
        Self { key, ascending }
    }

    /// Header-click transition.
    ///
    /// Clicking the active column flips its direction; clicking another
    /// column selects it ascending.
    pub fn toggled(&self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, !self.ascending)
        } else {
            Self::new(key, true)
        }
    }

    /// Value for the `aria-sort` attribute of a column header.
    pub fn aria_sort(&self, key: &SortKey) -> &'static str {
        match (&self.key == key, self.ascending) {
            (false, _) => "none",
            (true, true) => "ascending",
            (true, false) => "descending",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let spec = SortSpec::default();
        let flipped = spec.toggled(SortKey::Name);
        assert_eq!(flipped, SortSpec::new(SortKey::Name, false));
        assert_eq!(flipped.toggled(SortKey::Name), spec);
    }

    #[test]
    fn test_toggle_other_key_starts_ascending() {
        let spec = SortSpec::new(SortKey::Name, false);
        assert_eq!(
            spec.toggled(SortKey::Size),
            SortSpec::new(SortKey::Size, true)
        );
    }

    #[test]
    fn test_key_attr_round_trip() {
        for attr in ["name", "size", "modified", "sha256"] {
            assert_eq!(SortKey::from_attr(attr).as_str(), attr);
        }
        assert_eq!(SortKey::from_attr("sha256"), SortKey::Other("sha256".into()));
    }

    #[test]
    fn test_aria_sort() {
        let spec = SortSpec::new(SortKey::Size, false);
        assert_eq!(spec.aria_sort(&SortKey::Size), "descending");
        assert_eq!(spec.aria_sort(&SortKey::Name), "none");
    }
}
