//! Named categorical palettes.
//!
//! An explicit name → color table. A palette of size `n` is the first `n`
//! colors of its full sequence.

use contrib_core::errors::RenderError;

/// A named, ordered color sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    colors: &'static [&'static str],
}

const PALETTES: &[Palette] = &[
    Palette {
        name: "Colorblind",
        colors: &[
            "#0072B2", "#E69F00", "#F0E442", "#009E73", "#56B4E9", "#D55E00", "#CC79A7", "#000000",
        ],
    },
    Palette {
        name: "Category10",
        colors: &[
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
            "#bcbd22", "#17becf",
        ],
    },
    Palette {
        name: "Dark2",
        colors: &[
            "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
        ],
    },
    Palette {
        name: "Set2",
        colors: &[
            "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
        ],
    },
    Palette {
        name: "Accent",
        colors: &[
            "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
        ],
    },
];

impl Palette {
    /// Case-sensitive lookup by name.
    pub fn lookup(name: &str) -> Result<&'static Palette, RenderError> {
        PALETTES
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RenderError::UnknownPalette {
                name: name.to_string(),
            })
    }

    pub fn max_size(&self) -> usize {
        self.colors.len()
    }

    /// The first `count` colors.
    pub fn colors(&self, count: usize) -> Result<&'static [&'static str], RenderError> {
        if count == 0 || count > self.colors.len() {
            return Err(RenderError::PaletteSize {
                name: self.name.to_string(),
                requested: count,
                max: self.colors.len(),
            });
        }
        let colors: &'static [&'static str] = self.colors;
        Ok(&colors[..count])
    }
}

/// Colors for `count` categories from the palette called `name`.
pub fn palette(name: &str, count: usize) -> Result<Vec<&'static str>, RenderError> {
    Ok(Palette::lookup(name)?.colors(count)?.to_vec())
}

pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_of_full_sequence() {
        assert_eq!(palette("Colorblind", 3).unwrap(), vec!["#0072B2", "#E69F00", "#F0E442"]);
        assert_eq!(palette("Category10", 10).unwrap().len(), 10);
    }

    #[test]
    fn test_unknown_palette() {
        let err = palette("colorblind", 3).unwrap_err();
        assert!(matches!(err, RenderError::UnknownPalette { ref name } if name == "colorblind"));
    }

    #[test]
    fn test_size_out_of_range() {
        assert!(matches!(
            palette("Dark2", 9),
            Err(RenderError::PaletteSize { requested: 9, max: 8, .. })
        ));
        assert!(matches!(palette("Dark2", 0), Err(RenderError::PaletteSize { .. })));
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = palette_names().collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
