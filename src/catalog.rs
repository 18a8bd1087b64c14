use std::collections::HashSet;

use crate::error::{CatalogError, DemoError};
use crate::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSite {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub theme: Palette,
    pub nav_items: &'static [&'static str],
}

static DEMO_SITES: [DemoSite; 5] = [
    DemoSite {
        id: "ecommerce",
        name: "LuxeCart",
        category: "E-Commerce",
        description: "Premium shopping experience",
        icon: "ph:shopping-bag-bold",
        theme: Palette {
            bg: "#0a0a0a",
            surface: "#141414",
            elevated: "#1a1a1a",
            text: "#fafafa",
            muted: "#a3a3a3",
            accent: "#d4af37",
            accent_alt: "#f5d76e",
            border: "#262626",
        },
        nav_items: &["Shop", "Collections", "New Arrivals", "Sale", "Cart"],
    },
    DemoSite {
        id: "saas",
        name: "AnalyticsPro",
        category: "SaaS Dashboard",
        description: "Data analytics platform",
        icon: "ph:chart-line-bold",
        theme: Palette {
            bg: "#0f172a",
            surface: "#1e293b",
            elevated: "#334155",
            text: "#f8fafc",
            muted: "#94a3b8",
            accent: "#3b82f6",
            accent_alt: "#60a5fa",
            border: "#475569",
        },
        nav_items: &["Dashboard", "Analytics", "Reports", "Settings", "Team"],
    },
    DemoSite {
        id: "restaurant",
        name: "Savoria",
        category: "Restaurant",
        description: "Fine dining experience",
        icon: "ph:fork-knife-bold",
        theme: Palette {
            bg: "#1c1917",
            surface: "#292524",
            elevated: "#44403c",
            text: "#fafaf9",
            muted: "#a8a29e",
            accent: "#dc2626",
            accent_alt: "#f87171",
            border: "#57534e",
        },
        nav_items: &["Menu", "Reservations", "Catering", "About", "Contact"],
    },
    DemoSite {
        id: "fitness",
        name: "FitForge",
        category: "Fitness App",
        description: "Personal training platform",
        icon: "ph:barbell-bold",
        theme: Palette {
            bg: "#09090b",
            surface: "#18181b",
            elevated: "#27272a",
            text: "#fafafa",
            muted: "#a1a1aa",
            accent: "#22c55e",
            accent_alt: "#4ade80",
            border: "#3f3f46",
        },
        nav_items: &["Workouts", "Programs", "Nutrition", "Progress", "Community"],
    },
    DemoSite {
        id: "agency",
        name: "Paradigm",
        category: "Creative Agency",
        description: "Design studio portfolio",
        icon: "ph:palette-bold",
        theme: Palette {
            bg: "#faf5ff",
            surface: "#f3e8ff",
            elevated: "#e9d5ff",
            text: "#1e1b4b",
            muted: "#6b21a8",
            accent: "#9333ea",
            accent_alt: "#a855f7",
            border: "#d8b4fe",
        },
        nav_items: &["Work", "Services", "Studio", "Journal", "Contact"],
    },
];

pub fn all() -> &'static [DemoSite] {
    &DEMO_SITES
}

pub fn find(id: &str) -> Option<&'static DemoSite> {
    DEMO_SITES.iter().find(|d| d.id == id)
}

pub fn get(id: &str) -> Result<&'static DemoSite, DemoError> {
    find(id).ok_or_else(|| DemoError::UnknownDemo(id.to_string()))
}

/// Checks the closure rules every catalog must satisfy: unique ids, complete
/// palettes and at least one navigation label per site.
pub fn validate(sites: &[DemoSite]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for site in sites {
        if !seen.insert(site.id) {
            return Err(CatalogError::DuplicateId(site.id));
        }
        if let Some(role) = site.theme.missing_role() {
            return Err(CatalogError::IncompletePalette { id: site.id, role });
        }
        if site.nav_items.is_empty() {
            return Err(CatalogError::NoNavItems(site.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed() {
        assert_eq!(all().len(), 5);
        assert_eq!(validate(all()), Ok(()));
        for site in all() {
            assert!(site.theme.roles().iter().all(|(_, c)| !c.is_empty()));
        }
    }

    #[test]
    fn test_catalog_order() {
        let ids = all().iter().map(|d| d.id).collect::<Vec<_>>();
        assert_eq!(ids, ["ecommerce", "saas", "restaurant", "fitness", "agency"]);
    }

    #[test]
    fn test_find_and_get() {
        assert_eq!(find("saas").map(|d| d.name), Some("AnalyticsPro"));
        assert!(find("nonexistent").is_none());
        assert_eq!(
            get("nonexistent"),
            Err(DemoError::UnknownDemo("nonexistent".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let sites = vec![DEMO_SITES[0].clone(), DEMO_SITES[0].clone()];
        assert_eq!(validate(&sites), Err(CatalogError::DuplicateId("ecommerce")));
    }

    #[test]
    fn test_validate_rejects_partial_theme() {
        let mut site = DEMO_SITES[1].clone();
        site.theme.border = "";
        assert_eq!(
            validate(&[site]),
            Err(CatalogError::IncompletePalette {
                id: "saas",
                role: "border"
            })
        );

        let mut site = DEMO_SITES[2].clone();
        site.nav_items = &[];
        assert_eq!(validate(&[site]), Err(CatalogError::NoNavItems("restaurant")));
    }
}
