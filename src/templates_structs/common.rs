use askama::Template;

/// A `<select>` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }

    /// Options whose value doubles as the label.
    pub fn from_values(values: &[&str], selected: &str) -> Vec<Self> {
        values
            .iter()
            .map(|v| Self::new(*v, *v, *v == selected))
            .collect()
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub app_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_marks_selection() {
        let opts = SelectOption::from_values(&["A", "B"], "B");
        assert_eq!(opts.len(), 2);
        assert!(!opts[0].selected);
        assert!(opts[1].selected);
        assert_eq!(opts[1].label, "B");
    }
}
