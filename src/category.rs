//! Fixed allocator categories: recognized section names, report order, labels and colors.

use std::fmt;

use serde::Serialize;

/// Fill used for any category missing from the color table.
pub const DEFAULT_COLOR: &str = "#4285f4";

/// An allocator whose code size is tracked.
///
/// `SmallocFfi` only ever appears as a report section; its total is folded into
/// the synthesized `SmallocPlusFfi` composite and is never reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "glibc")]
    Glibc,
    #[serde(rename = "jemalloc")]
    Jemalloc,
    #[serde(rename = "snmalloc")]
    Snmalloc,
    #[serde(rename = "mimalloc")]
    Mimalloc,
    #[serde(rename = "rpmalloc")]
    Rpmalloc,
    #[serde(rename = "smalloc")]
    Smalloc,
    #[serde(rename = "smalloc-ffi")]
    SmallocFfi,
    #[serde(rename = "smalloc + ffi")]
    SmallocPlusFfi,
}

/// Order in which categories are reported and plotted.
pub const CATEGORY_ORDER: [Category; 7] = [
    Category::Glibc,
    Category::Jemalloc,
    Category::Snmalloc,
    Category::Mimalloc,
    Category::Rpmalloc,
    Category::Smalloc,
    Category::SmallocPlusFfi,
];

/// Categories that may open a report section.
const SECTION_HEADERS: [Category; 7] = [
    Category::Smalloc,
    Category::SmallocFfi,
    Category::Rpmalloc,
    Category::Glibc,
    Category::Mimalloc,
    Category::Snmalloc,
    Category::Jemalloc,
];

impl Category {
    /// Match a trimmed report line against the recognized section names.
    ///
    /// The composite is never a section header.
    #[must_use]
    pub fn from_section_header(line: &str) -> Option<Self> {
        SECTION_HEADERS
            .iter()
            .copied()
            .find(|category| category.name() == line)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Glibc => "glibc",
            Self::Jemalloc => "jemalloc",
            Self::Snmalloc => "snmalloc",
            Self::Mimalloc => "mimalloc",
            Self::Rpmalloc => "rpmalloc",
            Self::Smalloc => "smalloc",
            Self::SmallocFfi => "smalloc-ffi",
            Self::SmallocPlusFfi => "smalloc + ffi",
        }
    }

    /// Axis label, one entry per text row.
    #[must_use]
    pub const fn label_lines(self) -> &'static [&'static str] {
        match self {
            Self::SmallocPlusFfi => &["smalloc", "+ ffi"],
            Self::Glibc => &["glibc"],
            Self::Jemalloc => &["jemalloc"],
            Self::Snmalloc => &["snmalloc"],
            Self::Mimalloc => &["mimalloc"],
            Self::Rpmalloc => &["rpmalloc"],
            Self::Smalloc => &["smalloc"],
            Self::SmallocFfi => &["smalloc-ffi"],
        }
    }

    /// Bar fill color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Glibc => "#5c6bc0",          // indigo
            Self::Jemalloc => "#42a5f5",       // blue
            Self::Snmalloc => "#26a69a",       // teal
            Self::Mimalloc => "#ffca28",       // amber
            Self::Rpmalloc => "#ff7043",       // deep orange
            Self::Smalloc => "#66bb6a",        // green
            Self::SmallocPlusFfi => "#a5d6a7", // light green
            Self::SmallocFfi => DEFAULT_COLOR,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
