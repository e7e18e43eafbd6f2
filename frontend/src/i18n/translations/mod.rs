//! Built-in page copy, one module per locale. `en` is the reference and
//! matches the rendered markup.

use super::dictionary::Entries;

mod ar;
mod de;
mod en;
mod es;
mod fr;
mod it;
mod pt;

pub const ALL: &[(&str, Entries)] = &[
    ("en", en::ENTRIES),
    ("es", es::ENTRIES),
    ("pt", pt::ENTRIES),
    ("fr", fr::ENTRIES),
    ("de", de::ENTRIES),
    ("it", it::ENTRIES),
    ("ar", ar::ENTRIES),
];
