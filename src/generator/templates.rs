use crate::error::TemplateError;
use crate::model::{Gender, HostelTemplate};
use std::collections::BTreeMap;
use std::path::Path;

struct BuiltinHostel {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    description: &'static str,
    gender: Gender,
    price: u64,
    prices: &'static [(u32, u64)],
    always_vacant: bool,
}

// Room types follow the order of `prices`.
const BUILTIN_HOSTELS: &[BuiltinHostel] = &[
    BuiltinHostel {
        id: "peace",
        name: "Peace Hall",
        image: "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?q=80&w=2938&auto=format&fit=crop",
        description: "Official Male Undergraduate Hall. Available room configurations: 4, 6, 8, 10, 12 beds.",
        gender: Gender::Male,
        price: 150_000,
        prices: &[(4, 250_000), (6, 150_000), (8, 100_000), (10, 80_000), (12, 60_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "progress",
        name: "Progress Hall",
        image: "https://images.unsplash.com/photo-1595526114035-0d45ed16cfbf?q=80&w=2940&auto=format&fit=crop",
        description: "Standard Male Undergraduate Hall with 4, 6, 8, and 10 bed options.",
        gender: Gender::Male,
        price: 120_000,
        prices: &[(4, 250_000), (6, 150_000), (8, 100_000), (10, 80_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "purity",
        name: "Purity Hall",
        image: "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=2340&auto=format&fit=crop",
        description: "Official Female Undergraduate Hall. Available room configurations: 4 to 12 beds.",
        gender: Gender::Female,
        price: 150_000,
        prices: &[(4, 250_000), (6, 150_000), (8, 100_000), (10, 80_000), (12, 60_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "patience",
        name: "Patience Hall",
        image: "https://images.unsplash.com/photo-1595526051245-4506e0005bd0?q=80&w=2940&auto=format&fit=crop",
        description: "Standard Female Undergraduate Hall offering 2 to 8 bed spaces.",
        gender: Gender::Female,
        price: 130_000,
        prices: &[(2, 300_000), (4, 250_000), (6, 150_000), (8, 100_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "patience-executive",
        name: "Patience Hall (Executive)",
        image: "https://images.unsplash.com/photo-1595526051245-4506e0005bd0?q=80&w=2940&auto=format&fit=crop",
        description: "Premium Wing. Exclusive 2-Bed Executive Suites.",
        gender: Gender::Female,
        price: 350_000,
        prices: &[(2, 350_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "peculiar",
        name: "Peculiar Hall",
        image: "https://images.unsplash.com/photo-1611892440504-42a792e24d32?q=80&w=2340&auto=format&fit=crop",
        description: "Female Undergraduate Hall (Wing B). Configurations: 4, 6, 8 beds.",
        gender: Gender::Female,
        price: 100_000,
        prices: &[(4, 250_000), (6, 150_000), (8, 100_000)],
        always_vacant: false,
    },
    BuiltinHostel {
        id: "guest-house",
        name: "University Guest House",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?q=80&w=2940&auto=format&fit=crop",
        description: "Executive Accommodation for Postgraduate Students and Staff. 2-Bed Suites.",
        gender: Gender::Female,
        price: 1_000_000,
        prices: &[(2, 1_000_000)],
        always_vacant: true,
    },
];

/// The university's hostel templates.
#[must_use]
pub fn builtin_templates() -> Vec<HostelTemplate> {
    BUILTIN_HOSTELS
        .iter()
        .map(|h| HostelTemplate {
            id: h.id.to_string(),
            name: h.name.to_string(),
            image: h.image.to_string(),
            description: h.description.to_string(),
            gender: h.gender,
            price: h.price,
            room_types: h.prices.iter().map(|(capacity, _)| *capacity).collect(),
            price_list: h.prices.iter().copied().collect::<BTreeMap<_, _>>(),
            always_vacant: h.always_vacant,
        })
        .collect()
}

/// Loads hostel templates from a JSON array.
///
/// # Errors
///
/// Returns [`TemplateError::FileRead`] if the file cannot be read.
/// Returns [`TemplateError::Json`] if the content is not a template list.
///
/// # Example
///
/// ```no_run
/// use hostel_inventory::generator::load_templates;
///
/// let templates = load_templates("hostels.json")?;
/// println!("{} hostels", templates.len());
/// # Ok::<(), hostel_inventory::error::TemplateError>(())
/// ```
pub fn load_templates<P: AsRef<Path>>(path: P) -> Result<Vec<HostelTemplate>, TemplateError> {
    let path_ref = path.as_ref();
    let content = std::fs::read_to_string(path_ref).map_err(|source| TemplateError::FileRead {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let templates: Vec<HostelTemplate> =
        serde_json::from_str(&content).map_err(|source| TemplateError::Json {
            path: path_ref.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path_ref.display(), count = templates.len(), "Loaded hostel templates");
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn builtin_room_type_counts() {
        let lengths: Vec<usize> = builtin_templates()
            .iter()
            .map(|t| t.room_types.len())
            .collect();
        assert_eq!(lengths, vec![5, 4, 5, 4, 1, 3, 1]);
    }

    #[test]
    fn only_guest_house_is_always_vacant() {
        let vacant: Vec<String> = builtin_templates()
            .into_iter()
            .filter(|t| t.always_vacant)
            .map(|t| t.id)
            .collect();
        assert_eq!(vacant, vec!["guest-house".to_string()]);
    }

    #[test]
    fn builtin_room_types_keep_declaration_order() {
        let peace = &builtin_templates()[0];
        assert_eq!(peace.room_types, vec![4, 6, 8, 10, 12]);
        assert_eq!(peace.price_list.get(&12), Some(&60_000));
    }

    #[test]
    fn load_templates_reads_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"annex","name":"Annex","gender":"Mixed","price":90000,"roomTypes":[3],"alwaysVacant":true}}]"#
        )
        .unwrap();

        let templates = load_templates(file.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert!(templates[0].always_vacant);
        assert!(templates[0].price_list.is_empty());
    }

    #[test]
    fn load_templates_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a list").unwrap();

        let err = load_templates(file.path()).unwrap_err();
        assert!(matches!(err, TemplateError::Json { .. }));
    }

    #[test]
    fn load_templates_reports_missing_file() {
        let err = load_templates("/nonexistent/hostels.json").unwrap_err();
        assert!(matches!(err, TemplateError::FileRead { .. }));
    }
}
