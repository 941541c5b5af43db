//! Provenance annotations used by the Markdown format

use vidprompt_core::ProvenanceEntry;

/// Inline annotation appended to a parameter bullet: ` *(source[: origin][, modified])*`.
pub fn annotation(entry: &ProvenanceEntry) -> String {
    let mut inner = entry.source.to_string();
    if let Some(origin) = entry.origin() {
        inner.push_str(": ");
        inner.push_str(origin);
    }
    if entry.is_modified() {
        inner.push_str(", modified");
    }
    format!(" *({})*", inner)
}

/// Bullet for the field provenance section: `- **field:** source[ (origin)][ - modified by user]`.
pub fn provenance_line(field: &str, entry: &ProvenanceEntry) -> String {
    let mut line = format!("- **{}:** {}", field, entry.source);
    if let Some(origin) = entry.origin() {
        line.push_str(&format!(" ({})", origin));
    }
    if entry.is_modified() {
        line.push_str(" - modified by user");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation() {
        assert_eq!(annotation(&ProvenanceEntry::preset("preset-1")), " *(preset: preset-1)*");
        assert_eq!(annotation(&ProvenanceEntry::user_edit()), " *(user, modified)*");
        assert_eq!(
            annotation(&ProvenanceEntry::intent("chase").with_modified(true)),
            " *(intent: chase, modified)*"
        );
        assert_eq!(annotation(&ProvenanceEntry::generated()), " *(generated)*");
    }

    #[test]
    fn test_empty_origin_is_ignored() {
        assert_eq!(annotation(&ProvenanceEntry::preset("")), " *(preset)*");
    }

    #[test]
    fn test_provenance_line() {
        assert_eq!(
            provenance_line("fps", &ProvenanceEntry::preset("hero").with_modified(true)),
            "- **fps:** preset (hero) - modified by user"
        );
        assert_eq!(
            provenance_line("seed", &ProvenanceEntry::generated()),
            "- **seed:** generated"
        );
    }
}
