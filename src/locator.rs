//! Turns the keyword criteria callers pass to `find_element`-style calls into either a
//! CDP-native selector (id/class/name/tag, sent straight to `DOM.querySelector`) or a
//! synthesized XPath expression, and classifies raw selector strings as XPath or CSS.

/// A compiled locator, ready to be handed to `DOM.querySelector[All]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    Css(String),
    XPath(String),
}

/// The keyword criteria accepted by `find_element`/`find_elements`. `attributes`
/// carries everything that isn't one of the standard fields, in call order.
#[derive(Debug, Clone, Default)]
pub struct FindCriteria {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub name: Option<String>,
    pub tag_name: Option<String>,
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl FindCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    fn standard_count(&self) -> usize {
        [&self.id, &self.class_name, &self.name, &self.tag_name, &self.text]
            .into_iter()
            .filter(|v| v.is_some())
            .count()
    }

    /// Compiles the criteria into a locator. A single standard field with no other
    /// criteria compiles to a direct CDP-native selector; anything else synthesizes
    /// an XPath expression with predicates in id/class/name/text/attribute order.
    pub fn compile(&self) -> Locator {
        let only_id = self.standard_count() == 1 && self.attributes.is_empty();
        if only_id {
            if let Some(id) = &self.id {
                return Locator::Css(format!("#{}", css_escape(id)));
            }
            if let Some(name) = &self.name {
                return Locator::Css(format!("[name=\"{}\"]", name));
            }
            if let Some(tag) = &self.tag_name {
                return Locator::Css(tag.clone());
            }
            if let Some(class) = &self.class_name {
                return Locator::Css(format!(".{}", css_escape(class)));
            }
        }
        Locator::XPath(self.build_xpath())
    }

    fn build_xpath(&self) -> String {
        let tag = self.tag_name.as_deref().unwrap_or("*");
        let mut predicates = Vec::new();

        if let Some(id) = &self.id {
            predicates.push(format!("@id=\"{id}\""));
        }
        if let Some(class) = &self.class_name {
            predicates.push(format!(
                "contains(concat(\" \", normalize-space(@class), \" \"), \" {class} \")"
            ));
        }
        if let Some(name) = &self.name {
            predicates.push(format!("@name=\"{name}\""));
        }
        if let Some(text) = &self.text {
            predicates.push(format!("contains(text(), \"{text}\")"));
        }
        for (key, value) in &self.attributes {
            predicates.push(format!("@{}=\"{value}\"", key.replace('_', "-")));
        }

        if predicates.is_empty() {
            format!("//{tag}")
        } else {
            format!("//{tag}[{}]", predicates.join(" and "))
        }
    }
}

fn css_escape(value: &str) -> String {
    value.replace(' ', "\\ ")
}

/// Classifies a raw selector string the way the rest of the ecosystem expects:
/// leading `//`, `.//`, `./` or `/` (optionally wrapped in parentheses, e.g.
/// `(//div)[1]`) means XPath, everything else is CSS.
pub fn classify(expression: &str) -> Locator {
    if is_xpath(expression) {
        Locator::XPath(expression.to_string())
    } else {
        Locator::Css(expression.to_string())
    }
}

fn is_xpath(expression: &str) -> bool {
    let trimmed = expression.trim_start_matches('(');
    trimmed.starts_with("//")
        || trimmed.starts_with(".//")
        || trimmed.starts_with("./")
        || trimmed.starts_with('/')
}

/// Normalizes an XPath expression so it can be evaluated relative to an element
/// (rather than the document root): `//` becomes `.//`, a bare `/` becomes `./`,
/// an expression that's already relative passes through unchanged, and an empty
/// expression becomes `.`.
pub fn ensure_relative_xpath(xpath: &str) -> String {
    if xpath.is_empty() {
        return ".".to_string();
    }
    if xpath.starts_with(".//") || xpath.starts_with("./") {
        return xpath.to_string();
    }
    if let Some(rest) = xpath.strip_prefix("//") {
        return format!(".//{rest}");
    }
    if let Some(rest) = xpath.strip_prefix('/') {
        return format!("./{rest}");
    }
    xpath.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_id_compiles_to_css() {
        let mut c = FindCriteria::new();
        c.id = Some("main-btn".into());
        assert_eq!(c.compile(), Locator::Css("#main-btn".into()));
    }

    #[test]
    fn id_and_class_compiles_to_xpath_in_fixed_order() {
        let mut c = FindCriteria::new();
        c.id = Some("main-btn".into());
        c.class_name = Some("primary".into());
        assert_eq!(
            c.compile(),
            Locator::XPath(
                "//*[@id=\"main-btn\" and contains(concat(\" \", normalize-space(@class), \" \"), \" primary \")]".into()
            )
        );
    }

    #[test]
    fn tag_and_attributes_preserve_insertion_order() {
        let mut c = FindCriteria::new();
        c.tag_name = Some("input".into());
        c.id = Some("email-field".into());
        c.name = Some("email".into());
        c.attributes.push(("type".into(), "email".into()));
        assert_eq!(
            c.compile(),
            Locator::XPath("//input[@id=\"email-field\" and @name=\"email\" and @type=\"email\"]".into())
        );
    }

    #[test]
    fn underscore_attribute_keys_become_hyphenated() {
        let mut c = FindCriteria::new();
        c.attributes.push(("data_testid".into(), "submit-btn".into()));
        assert_eq!(
            c.compile(),
            Locator::XPath("//*[@data-testid=\"submit-btn\"]".into())
        );
    }

    #[test]
    fn no_criteria_matches_anything() {
        let c = FindCriteria::new();
        assert_eq!(c.compile(), Locator::XPath("//*".into()));
    }

    #[test]
    fn classify_detects_xpath_forms() {
        assert_eq!(classify("//div"), Locator::XPath("//div".into()));
        assert_eq!(classify(".//span"), Locator::XPath(".//span".into()));
        assert_eq!(classify("./button"), Locator::XPath("./button".into()));
        assert_eq!(classify("/html/body"), Locator::XPath("/html/body".into()));
        assert_eq!(classify("(//div)[1]"), Locator::XPath("(//div)[1]".into()));
    }

    #[test]
    fn classify_defaults_to_css() {
        assert_eq!(
            classify("div.content > p"),
            Locator::Css("div.content > p".into())
        );
        assert_eq!(classify(".button"), Locator::Css(".button".into()));
        assert_eq!(classify(""), Locator::Css("".into()));
    }

    #[test]
    fn ensure_relative_xpath_rewrites_absolute_forms() {
        assert_eq!(ensure_relative_xpath("//div"), ".//div");
        assert_eq!(ensure_relative_xpath("/html/body"), "./html/body");
        assert_eq!(ensure_relative_xpath(".//div"), ".//div");
        assert_eq!(ensure_relative_xpath("./button"), "./button");
        assert_eq!(ensure_relative_xpath(""), ".");
    }
}
