use fnv::FnvHasher;
use std::collections::HashMap;
use std::hash::Hasher;

const JITTER: i32 = 20;

pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Display colour for a tag.
///
/// Table entries that are six hex digits get a `#` prefix, anything else in
/// the table is returned verbatim. Unlisted tags get `base` nudged by up to
/// ±20 per channel, seeded from the tag bytes so the same tag always lands
/// on the same colour.
pub fn tag_color(tag: &str, table: &HashMap<String, String>, base: [u8; 3]) -> String {
    if let Some(c) = table.get(tag).filter(|c| !c.is_empty()) {
        if c.len() == 6 && c.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return format!("#{}", c);
        }
        return c.clone();
    }
    to_hex(jittered(tag, base))
}

fn jittered(tag: &str, base: [u8; 3]) -> [u8; 3] {
    let mut hasher = FnvHasher::default();
    hasher.write(tag.as_bytes());
    let mut rng = fastrand::Rng::with_seed(hasher.finish());

    base.map(|channel| {
        let shifted = channel as i32 + rng.i32(-JITTER..=JITTER);
        shifted.clamp(0, 255) as u8
    })
}
