//! Box-drawing schematics for each layout.
//!
//! Templates carry two placeholders: `{S}` for the series designator and `{P}`
//! for the shunt designator. Absent series elements draw as wire, absent shunt
//! elements leave a gap in the shunt leg.

use crate::solver::NetworkSolution;
use crate::topology::Layout;

const SERIES_AT_LOAD: [&str; 7] = [
    "  o────┬── {S} ──┐",
    "       │        │",
    "       │        │",
    "Z0     {P}       ZL",
    "       │        │",
    "       │        │",
    "  o────┴────────┘",
];

const SHUNT_AT_LOAD: [&str; 7] = [
    "  o─── {S} ──┬───┐",
    "            │   │",
    "            │   │",
    "Z0          {P}  ZL",
    "            │   │",
    "            │   │",
    "  o─────────┴───┘",
];

const SERIES_ONLY: [&str; 7] = [
    "  o───── {S} ────┐",
    "                │",
    "                │",
    "Z0              ZL",
    "                │",
    "                │",
    "  o─────────────┘",
];

const SHUNT_ONLY: [&str; 7] = [
    "  o───────┬─────┐",
    "          │     │",
    "          │     │",
    "Z0        {P}    ZL",
    "          │     │",
    "          │     │",
    "  o───────┴─────┘",
];

pub const SEPARATOR: &str = "---------------------";

pub fn template(layout: Layout) -> &'static [&'static str; 7] {
    match layout {
        Layout::SeriesAtLoad => &SERIES_AT_LOAD,
        Layout::ShuntAtLoad => &SHUNT_AT_LOAD,
        Layout::SeriesOnly => &SERIES_ONLY,
        Layout::ShuntOnly => &SHUNT_ONLY,
    }
}

/// Draw `solution` with its element designators (`L1`, `C2`, ...).
pub fn render(solution: &NetworkSolution) -> String {
    let first = solution.element1.designator(1);
    let second = solution.element2.designator(2);
    let (series, shunt) = match solution.layout {
        Layout::SeriesAtLoad => (first, second),
        Layout::ShuntAtLoad => (second, first),
        Layout::SeriesOnly => (first, None),
        Layout::ShuntOnly => (None, first),
    };
    let series = series.as_deref().unwrap_or("──");
    let shunt = shunt.as_deref().unwrap_or("  ");
    template(solution.layout)
        .iter()
        .map(|line| line.replace("{S}", series).replace("{P}", shunt))
        .collect::<Vec<_>>()
        .join("\n")
}
