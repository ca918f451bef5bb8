//! Nearest-name lookup over the fixed web color table.
//!
//! The table is built once on first use and never changes. Each
//! [`ColorNamer`] owns a cache of resolved names so repeated queries for the
//! same RGB triple skip the nearest-neighbour scan.
//!
//! ## Table order
//!
//! Lookups return the first matching entry in table order. The eight RGB-cube
//! corners come first, followed by every other name alphabetically, so colors
//! that share an RGB value resolve as `cyan` over `aqua` and `magenta` over
//! `fuchsia`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::convert::Rgb;

/// Name returned when the table is empty.
pub const UNKNOWN_NAME: &str = "unknown";

/// Web color names in canonical lookup order.
const WEB_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 210]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("blanchedalmond", [255, 235, 205]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("whitesmoke", [245, 245, 245]),
    ("yellowgreen", [154, 205, 50]),
];

/// A named color table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Canonical lowercase name
    pub name: &'static str,
    /// RGB value of the name
    pub rgb: Rgb,
}

impl NamedColor {
    /// Create a table entry.
    pub const fn new(name: &'static str, rgb: Rgb) -> Self {
        Self { name, rgb }
    }
}

/// Immutable name table with an exact-match index.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    entries: Vec<NamedColor>,
    /// RGB -> position of the first entry with that value
    exact: HashMap<Rgb, usize>,
}

impl NameTable {
    /// Build a table from entries in lookup order.
    pub fn from_entries(entries: impl IntoIterator<Item = NamedColor>) -> Self {
        let entries: Vec<NamedColor> = entries.into_iter().collect();
        let mut exact = HashMap::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            exact.entry(entry.rgb).or_insert(idx);
        }
        Self { entries, exact }
    }

    /// The shared web color table, built on first call.
    ///
    /// Later calls return the same table without rebuilding it.
    pub fn web() -> Arc<NameTable> {
        static WEB: OnceLock<Arc<NameTable>> = OnceLock::new();
        WEB.get_or_init(|| {
            log::debug!("Loading {} web color names", WEB_COLORS.len());
            Arc::new(Self::from_entries(
                WEB_COLORS
                    .iter()
                    .map(|&(name, rgb)| NamedColor::new(name, Rgb::from_array(rgb))),
            ))
        })
        .clone()
    }

    /// Entries in lookup order.
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// RGB value for a name, if present.
    pub fn rgb_of(&self, name: &str) -> Option<Rgb> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.rgb)
    }

    /// First entry whose value is exactly `rgb`.
    pub fn exact(&self, rgb: Rgb) -> Option<&'static str> {
        self.exact.get(&rgb).map(|&idx| self.entries[idx].name)
    }

    /// Entry closest to `rgb` by squared Euclidean distance.
    ///
    /// The first entry at the minimal distance wins; a zero distance ends the
    /// scan early.
    pub fn nearest(&self, rgb: Rgb) -> &'static str {
        let mut best = UNKNOWN_NAME;
        let mut best_dist = u32::MAX;

        for entry in &self.entries {
            let dist = entry.rgb.distance_squared(rgb);
            if dist < best_dist {
                best_dist = dist;
                best = entry.name;
                if dist == 0 {
                    break;
                }
            }
        }

        best
    }
}

/// Resolves RGB values to color names, memoizing every answer.
///
/// Share one namer between every consumer (`Arc<ColorNamer>`); the cache is
/// behind a mutex so the namer is `Send + Sync`.
#[derive(Debug)]
pub struct ColorNamer {
    table: Arc<NameTable>,
    cache: Mutex<HashMap<Rgb, &'static str>>,
    /// Number of nearest-neighbour scans performed
    scans: AtomicUsize,
}

impl ColorNamer {
    /// Namer over the web color table.
    pub fn new() -> Self {
        Self::with_table(NameTable::web())
    }

    /// Namer over a custom table.
    pub fn with_table(table: impl Into<Arc<NameTable>>) -> Self {
        Self {
            table: table.into(),
            cache: Mutex::new(HashMap::new()),
            scans: AtomicUsize::new(0),
        }
    }

    /// The table this namer resolves against.
    pub fn table(&self) -> &NameTable {
        &self.table
    }

    /// Name of `rgb`: the exact match if one exists, otherwise the nearest
    /// entry. Never fails; an empty table yields [`UNKNOWN_NAME`].
    pub fn name_of(&self, rgb: Rgb) -> &'static str {
        let mut cache = self.lock_cache();
        if let Some(&name) = cache.get(&rgb) {
            return name;
        }

        let name = match self.table.exact(rgb) {
            Some(name) => name,
            None => {
                self.scans.fetch_add(1, Ordering::Relaxed);
                self.table.nearest(rgb)
            }
        };

        log::trace!("Resolved {} to '{}'", rgb, name);
        cache.insert(rgb, name);
        name
    }

    /// How many full-table scans this namer has run.
    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::Relaxed)
    }

    /// Number of cached RGB values.
    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<Rgb, &'static str>> {
        // The cache holds plain values, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ColorNamer {
    fn default() -> Self {
        Self::new()
    }
}
