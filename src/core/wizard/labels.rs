//! Human-readable names for field keys and enumerated profile values.

/// `"yearsExperience"` becomes `"Years Experience"`.
pub fn format_field_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const TRADE_LABELS: &[(&str, &str)] = &[
    ("electrical", "Electrical"),
    ("plumbing", "Plumbing"),
    ("hvac", "HVAC"),
    ("carpentry", "Carpentry"),
    ("welding", "Welding"),
    ("masonry", "Masonry"),
    ("roofing", "Roofing"),
    ("automotive", "Automotive Technology"),
    ("heavy-equipment", "Heavy Equipment Operation"),
    ("pipefitting", "Pipefitting"),
    ("sheet-metal", "Sheet Metal Work"),
    ("landscaping", "Landscaping & Groundskeeping"),
    ("unsure", "Exploring Options"),
    ("multiple", "Multiple Trades"),
];

const WORK_TYPE_LABELS: &[(&str, &str)] = &[
    ("residential", "Residential"),
    ("commercial", "Commercial"),
    ("industrial", "Industrial"),
];

const AVAILABILITY_LABELS: &[(&str, &str)] = &[
    ("immediate", "Immediately available"),
    ("2-weeks", "In 2 weeks"),
    ("1-month", "In 1 month"),
    ("flexible", "Flexible"),
    ("part-time-only", "Part-time only"),
    ("full-time-only", "Full-time only"),
    ("full-time", "Full-time"),
    ("part-time", "Part-time"),
    ("contract", "Contract"),
];

fn lookup<'a>(table: &[(&str, &'static str)], raw: &'a str) -> &'a str {
    let key = raw.trim().to_ascii_lowercase();
    table
        .iter()
        .find(|(id, _)| *id == key)
        .map_or(raw, |(_, label)| *label)
}

pub fn trade_label(raw: &str) -> &str {
    lookup(TRADE_LABELS, raw)
}

pub fn work_type_label(raw: &str) -> &str {
    lookup(WORK_TYPE_LABELS, raw)
}

pub fn availability_label(raw: &str) -> &str {
    lookup(AVAILABILITY_LABELS, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_split_on_capitals() {
        assert_eq!(format_field_name("yearsExperience"), "Years Experience");
        assert_eq!(format_field_name("fullName"), "Full Name");
        assert_eq!(format_field_name("email"), "Email");
        assert_eq!(format_field_name("preferredWorkType"), "Preferred Work Type");
        assert_eq!(format_field_name(""), "");
    }

    #[test]
    fn known_ids_map_to_labels() {
        assert_eq!(trade_label("hvac"), "HVAC");
        assert_eq!(trade_label(" Heavy-Equipment "), "Heavy Equipment Operation");
        assert_eq!(availability_label("2-weeks"), "In 2 weeks");
        assert_eq!(work_type_label("Commercial"), "Commercial");
    }

    #[test]
    fn unknown_values_fall_back_to_raw() {
        assert_eq!(trade_label("Underwater welding"), "Underwater welding");
        assert_eq!(availability_label("weekends"), "weekends");
    }
}
