//! Common patterns and markers for physician note extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Qualifier phrase, matched verbatim and case-sensitively.
pub const AHI_QUALIFIER: &str = "AHI > 20";

/// Marker that starts the ordering provider, matched case-sensitively.
pub const PROVIDER_MARKER: &str = "Dr.";

/// Lead-in removed from the ordering provider slice.
pub const ORDERED_BY_PREFIX: &str = "Ordered by ";

/// Provider value when the note names nobody.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

lazy_static! {
    // Device keywords
    pub static ref CPAP_KEYWORD: Regex = Regex::new(r"(?i)CPAP").unwrap();

    pub static ref OXYGEN_KEYWORD: Regex = Regex::new(r"(?i)oxygen").unwrap();

    pub static ref WHEELCHAIR_KEYWORD: Regex = Regex::new(r"(?i)wheelchair").unwrap();

    // CPAP mask
    pub static ref FULL_FACE_MASK: Regex = Regex::new(r"(?i)full face").unwrap();

    // Default add-on
    pub static ref HUMIDIFIER_KEYWORD: Regex = Regex::new(r"(?i)humidifier").unwrap();

    // Oxygen flow rate: "2L", "2 L", "2.5 l"
    pub static ref OXYGEN_FLOW: Regex = Regex::new(r"(?i)(\d+(?:\.\d+)?) ?L").unwrap();

    // Oxygen usage context
    pub static ref SLEEP_USAGE: Regex = Regex::new(r"(?i)sleep").unwrap();

    pub static ref EXERTION_USAGE: Regex = Regex::new(r"(?i)exertion").unwrap();
}
