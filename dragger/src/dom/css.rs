use std::collections::HashMap;

use super::next_handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

/// Inline style declarations of one element.
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    declarations: Vec<(String, String, Priority)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. An empty value removes it, as in CSSOM.
    pub fn set(&mut self, name: &str, value: &str, priority: Priority) {
        if value.is_empty() {
            self.remove(name);
            return;
        }
        match self.declarations.iter_mut().find(|(n, _, _)| n == name) {
            Some(decl) => {
                decl.1 = value.to_string();
                decl.2 = priority;
            }
            None => self
                .declarations
                .push((name.to_string(), value.to_string(), priority)),
        }
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.declarations.iter().position(|(n, _, _)| n == name)?;
        Some(self.declarations.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, v, _)| v.as_str())
    }

    pub fn priority(&self, name: &str) -> Option<Priority> {
        self.declarations
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, _, p)| *p)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(u64);

/// A `<style>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    pub id: StyleId,
    /// Key of the instance that injected it, if any.
    pub owner: Option<String>,
    pub text: String,
}

/// The document's style-element collection, indexed by owner.
#[derive(Debug, Default)]
pub struct StyleSheets {
    elements: Vec<StyleElement>,
    by_owner: HashMap<String, Vec<StyleId>>,
}

impl StyleSheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, owner: Option<&str>, text: String) -> StyleId {
        let id = StyleId(next_handle());
        if let Some(owner) = owner {
            self.by_owner.entry(owner.to_string()).or_default().push(id);
        }
        self.elements.push(StyleElement {
            id,
            owner: owner.map(str::to_string),
            text,
        });
        id
    }

    pub fn remove(&mut self, id: StyleId) -> bool {
        let Some(index) = self.elements.iter().position(|s| s.id == id) else {
            return false;
        };
        let removed = self.elements.remove(index);
        if let Some(owner) = removed.owner {
            if let Some(ids) = self.by_owner.get_mut(&owner) {
                ids.retain(|i| *i != id);
                if ids.is_empty() {
                    self.by_owner.remove(&owner);
                }
            }
        }
        true
    }

    /// Remove every style element injected by `owner`. Returns how many were removed.
    pub fn remove_owned_by(&mut self, owner: &str) -> usize {
        let Some(ids) = self.by_owner.remove(owner) else {
            return 0;
        };
        self.elements.retain(|s| !ids.contains(&s.id));
        ids.len()
    }

    pub fn owned_by(&self, owner: &str) -> Vec<StyleElement> {
        self.elements
            .iter()
            .filter(|s| s.owner.as_deref() == Some(owner))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> &[StyleElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
