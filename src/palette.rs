/// Colour roles shared by the site themes and every demo site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub surface: &'static str,
    pub elevated: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub accent_alt: &'static str,
    pub border: &'static str,
}

impl Palette {
    pub const ROLE_COUNT: usize = 8;

    /// Role name and colour, in declaration order.
    pub fn roles(&self) -> [(&'static str, &'static str); Self::ROLE_COUNT] {
        [
            ("bg", self.bg),
            ("surface", self.surface),
            ("elevated", self.elevated),
            ("text", self.text),
            ("muted", self.muted),
            ("accent", self.accent),
            ("accent_alt", self.accent_alt),
            ("border", self.border),
        ]
    }

    pub fn missing_role(&self) -> Option<&'static str> {
        self.roles()
            .into_iter()
            .find(|(_, c)| c.trim().is_empty())
            .map(|(r, _)| r)
    }

    pub fn is_complete(&self) -> bool {
        self.missing_role().is_none()
    }
}

/// Appends a two digit hex alpha to a `#rrggbb` colour, e.g. `#d4af37` + `30`.
pub fn with_alpha(color: &str, alpha: &str) -> String {
    let base = color
        .get(..7)
        .filter(|_| color.len() == 9)
        .unwrap_or(color);
    format!("{base}{alpha}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Palette = Palette {
        bg: "#000000",
        surface: "#111111",
        elevated: "#222222",
        text: "#ffffff",
        muted: "#999999",
        accent: "#ff0000",
        accent_alt: "#ff8888",
        border: "#333333",
    };

    #[test]
    fn test_roles_in_order() {
        let names = SAMPLE.roles().map(|(r, _)| r);
        assert_eq!(names[0], "bg");
        assert_eq!(names[7], "border");
        assert!(SAMPLE.is_complete());
    }

    #[test]
    fn test_missing_role() {
        let p = Palette { muted: " ", ..SAMPLE };
        assert_eq!(p.missing_role(), Some("muted"));
        assert!(!p.is_complete());
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha("#d4af37", "30"), "#d4af3730");
        // already suffixed colours get their alpha replaced
        assert_eq!(with_alpha("#d4af37ee", "20"), "#d4af3720");
    }

    #[test]
    fn test_with_alpha_non_ascii() {
        // nine bytes with a character straddling byte 7
        let odd = "#d4af3\u{e9}x";
        assert_eq!(odd.len(), 9);
        assert_eq!(with_alpha(odd, "20"), "#d4af3\u{e9}x20");
    }
}
