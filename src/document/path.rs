use super::node::Element;

const DESCENDANT_PREFIX: &str = ".//";

/// Path lookups with ElementTree semantics.
///
/// `a/b` walks child steps from the context element. A leading `.//a` first
/// collects every descendant named `a` (the context element itself excluded)
/// in document order, then walks the remaining steps from each of them.
impl Element {
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let (mut current, steps) = match path.strip_prefix(DESCENDANT_PREFIX) {
            Some(rest) => {
                let mut steps = split_steps(rest);
                let first = steps.next().unwrap_or_default();
                let mut found = Vec::new();
                self.collect_descendants(first, &mut found);
                (found, steps)
            }
            None => (vec![self], split_steps(path)),
        };

        for step in steps {
            current = current
                .into_iter()
                .flat_map(|element| element.children.iter().filter(move |c| c.name == step))
                .collect();
        }

        current
    }

    pub fn find(&self, path: &str) -> Option<&Element> {
        self.find_all(path).into_iter().next()
    }

    /// Text of the first match. A matched element without text yields `""`.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).map(Element::text)
    }

    /// Like [`Element::find_text`], falling back to `default` when nothing matches.
    pub fn find_text_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.find_text(path).unwrap_or(default)
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }
}

fn split_steps(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|step| !step.is_empty() && *step != ".")
}
