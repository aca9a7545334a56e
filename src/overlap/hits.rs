//! The annotated genes found for a single island.

use std::collections::BTreeSet;

/// The delimiter between gene names when displaying [`Hits`].
const HITS_DELIMITER: char = ',';

/// How a gene sits relative to the borders of an island.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Marker {
    /// The gene does not cross either border of the island.
    Contained,
    /// The gene crosses exactly one border of the island (`*`).
    OneBorder,
    /// The gene crosses both borders of the island (`**`).
    BothBorders,
}

impl Marker {
    /// Gets the suffix appended to a gene identifier for this marker.
    pub fn suffix(&self) -> &'static str {
        match self {
            Marker::Contained => "",
            Marker::OneBorder => "*",
            Marker::BothBorders => "**",
        }
    }

    /// Annotates a gene identifier with this marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::overlap::Marker;
    ///
    /// assert_eq!(Marker::Contained.annotate("AT1G34630"), "AT1G34630");
    /// assert_eq!(Marker::OneBorder.annotate("AT1G34790"), "AT1G34790*");
    /// assert_eq!(Marker::BothBorders.annotate("AT1G34800"), "AT1G34800**");
    /// ```
    pub fn annotate(&self, id: &str) -> String {
        format!("{}{}", id, self.suffix())
    }
}

/// The set of annotated gene names found for an island.
///
/// Names are unique by their exact annotated text, so `G1` and `G1*` are
/// distinct entries. Iteration yields names in lexicographic (byte) order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Hits(BTreeSet<String>);

impl Hits {
    /// Creates an empty set of hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a gene annotated with `marker`.
    ///
    /// Returns whether the annotated name was newly inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use islandgenes::overlap::Hits;
    /// use islandgenes::overlap::Marker;
    ///
    /// let mut hits = Hits::new();
    /// assert!(hits.insert("G1", Marker::OneBorder));
    /// assert!(!hits.insert("G1", Marker::OneBorder));
    /// assert!(hits.insert("G1", Marker::Contained));
    /// assert_eq!(hits.len(), 2);
    /// ```
    pub fn insert(&mut self, id: &str, marker: Marker) -> bool {
        self.0.insert(marker.annotate(id))
    }

    /// Returns whether `name` is present, compared by its exact text.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Gets the number of annotated names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no hits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the annotated names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl std::fmt::Display for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, name) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", HITS_DELIMITER)?;
            }

            write!(f, "{}", name)?;
        }

        Ok(())
    }
}
