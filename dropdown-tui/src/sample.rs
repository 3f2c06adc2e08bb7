//! Synthetic customer records for the demo.

use dropdown_lib::Item;
use serde_json::json;

const FIRST_NAMES: [&str; 12] = [
    "Ann", "Bob", "Cara", "Dmitri", "Elena", "Farah", "Goran", "Hana", "Ivo", "Jun", "Kofi", "Lena",
];
const LAST_NAMES: [&str; 8] = [
    "Andersen", "Brooks", "Castillo", "Dubois", "Eriksen", "Fischer", "Garcia", "Hughes",
];
const CITIES: [&str; 6] = ["Oslo", "Lisbon", "Kyoto", "Nairobi", "Quito", "Tallinn"];

/// `count` customers with ids starting at 1.
///
/// Each record carries `id`, `customer`, `email` and a nested
/// `address.city`. The output is the same on every call.
pub fn customers(count: usize) -> Vec<Item> {
    (0..count).filter_map(customer).collect()
}

fn customer(i: usize) -> Option<Item> {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let city = CITIES[(i * 7) % CITIES.len()];
    let id = i + 1;

    let value = json!({
        "id": id,
        "customer": format!("{first} {last} #{id}"),
        "email": format!("{}.{}{}@example.com", first.to_lowercase(), last.to_lowercase(), id),
        "address": { "city": city },
    });
    value.as_object().cloned()
}
